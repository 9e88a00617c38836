use pretty_assertions::assert_eq;
use relay_ir::{Modifiers, TypeDesc, TypeName};

use super::*;

fn name(s: &str) -> TypeName {
    TypeName::parse(s).unwrap()
}

fn foo_on(owner: &str) -> MethodDescriptor {
    MethodDescriptor::new(name(owner), "foo", [], TypeDesc::VOID)
}

#[test]
fn identity_ignores_catalog() {
    let target = foo_on("com.example.A");
    let catalog = LookupCatalog::empty(name("com.example.A"));
    let resolved = ResolutionPolicy::ByIdentity
        .resolve(&target, &catalog)
        .unwrap();
    assert_eq!(resolved, &target);
}

#[test]
fn signature_returns_catalog_entry() {
    // catalog {"foo()": M1}; the request names a different declaring type
    let m1 = foo_on("com.example.Base");
    let catalog = LookupCatalog::new(name("com.example.Sub"), [m1.clone()]);
    let request = foo_on("com.example.Sub");

    let resolved = ResolutionPolicy::BySignature
        .resolve(&request, &catalog)
        .unwrap();
    assert_eq!(resolved, &m1);
    assert_ne!(resolved, &request);
}

#[test]
fn signature_miss_on_empty_catalog() {
    let catalog = LookupCatalog::empty(name("com.example.Sub"));
    let m2 = foo_on("com.example.Other");

    let err = ResolutionPolicy::BySignature
        .resolve(&m2, &catalog)
        .unwrap_err();
    assert_eq!(
        err,
        AuxError::MethodNotReachable {
            method: Box::new(m2),
            context: name("com.example.Sub"),
        }
    );
}

#[test]
fn signature_miss_on_different_overload() {
    let catalog = LookupCatalog::new(name("com.example.A"), [foo_on("com.example.A")]);
    let request = MethodDescriptor::new(name("com.example.A"), "foo", [TypeDesc::INT], TypeDesc::VOID);
    assert!(ResolutionPolicy::BySignature
        .resolve(&request, &catalog)
        .is_err());
}

#[test]
fn signature_resolution_may_change_return_type() {
    let concrete = MethodDescriptor::new(
        name("com.example.A"),
        "get",
        [],
        TypeDesc::class(name("java.lang.String")),
    );
    let catalog = LookupCatalog::new(name("com.example.A"), [concrete.clone()]);
    let request = MethodDescriptor::new(
        name("com.example.A"),
        "get",
        [],
        TypeDesc::class(name("java.lang.Object")),
    )
    .with_modifiers(Modifiers::PUBLIC | Modifiers::BRIDGE);

    let resolved = ResolutionPolicy::BySignature
        .resolve(&request, &catalog)
        .unwrap();
    assert_eq!(resolved, &concrete);
}

#[test]
fn error_message_names_method_and_context() {
    let catalog = LookupCatalog::empty(name("com.example.Sub"));
    let err = ResolutionPolicy::BySignature
        .resolve(&foo_on("com.example.A"), &catalog)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "method void com.example.A.foo() is not reachable from com.example.Sub"
    );
}

mod proptest_policies {
    use proptest::prelude::*;
    use relay_ir::{LookupCatalog, MethodDescriptor, TypeDesc, TypeName};

    use super::super::ResolutionPolicy;

    fn param() -> impl Strategy<Value = TypeDesc> {
        prop_oneof![
            Just(TypeDesc::INT),
            Just(TypeDesc::LONG),
            Just(TypeDesc::BOOLEAN),
            Just(TypeDesc::class(TypeName::parse("java.lang.String").unwrap())),
            Just(TypeDesc::array_of(TypeDesc::DOUBLE)),
        ]
    }

    fn method() -> impl Strategy<Value = MethodDescriptor> {
        (
            prop_oneof![Just("com.example.A"), Just("com.example.B"), Just("org.x.C")],
            "[a-z]{1,3}",
            proptest::collection::vec(param(), 0..3),
        )
            .prop_map(|(owner, name, params)| {
                MethodDescriptor::new(TypeName::parse(owner).unwrap(), name, params, TypeDesc::VOID)
            })
    }

    proptest! {
        #[test]
        fn identity_is_identity(
            target in method(),
            entries in proptest::collection::vec(method(), 0..6),
        ) {
            let catalog = LookupCatalog::new(TypeName::parse("com.example.Ctx").unwrap(), entries);
            let resolved = ResolutionPolicy::ByIdentity.resolve(&target, &catalog).unwrap();
            prop_assert_eq!(resolved, &target);
        }

        #[test]
        fn signature_succeeds_iff_key_present(
            target in method(),
            entries in proptest::collection::vec(method(), 0..6),
        ) {
            let catalog = LookupCatalog::new(TypeName::parse("com.example.Ctx").unwrap(), entries);
            let key = target.signature_key();
            match ResolutionPolicy::BySignature.resolve(&target, &catalog) {
                Ok(resolved) => {
                    prop_assert!(catalog.contains(&key));
                    prop_assert_eq!(resolved.signature_key(), key);
                }
                Err(_) => prop_assert!(!catalog.contains(&key)),
            }
        }
    }
}
