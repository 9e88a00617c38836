use pretty_assertions::assert_eq;

use super::*;
use crate::{Modifiers, TypeDesc};

fn name(s: &str) -> TypeName {
    TypeName::parse(s).unwrap()
}

fn method(owner: &str, method_name: &str) -> MethodDescriptor {
    MethodDescriptor::new(name(owner), method_name, [], TypeDesc::VOID)
}

#[test]
fn empty_catalog() {
    let catalog = LookupCatalog::empty(name("com.example.A"));
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert_eq!(catalog.context().as_str(), "com.example.A");
}

#[test]
fn first_candidate_wins() {
    let sub = method("com.example.Sub", "foo");
    let sup = method("com.example.Super", "foo");
    let catalog = LookupCatalog::new(name("com.example.Sub"), [sub.clone(), sup]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&sub.signature_key()), Some(&sub));
}

#[test]
fn non_bridge_replaces_bridge() {
    let bridge = MethodDescriptor::new(
        name("com.example.Sub"),
        "get",
        [],
        TypeDesc::class(name("java.lang.Object")),
    )
    .with_modifiers(Modifiers::PUBLIC | Modifiers::BRIDGE | Modifiers::SYNTHETIC);
    let concrete = MethodDescriptor::new(
        name("com.example.Sub"),
        "get",
        [],
        TypeDesc::class(name("java.lang.String")),
    );

    let catalog = LookupCatalog::new(name("com.example.Sub"), [bridge, concrete.clone()]);
    assert_eq!(catalog.get(&concrete.signature_key()), Some(&concrete));
}

#[test]
fn bridge_never_replaces_concrete() {
    let concrete = method("com.example.Sub", "run");
    let bridge = method("com.example.Sub", "run")
        .with_modifiers(Modifiers::PUBLIC | Modifiers::BRIDGE);
    let catalog = LookupCatalog::new(name("com.example.Sub"), [concrete.clone(), bridge]);
    assert_eq!(catalog.get(&concrete.signature_key()), Some(&concrete));
}

#[test]
fn overloads_are_distinct_entries() {
    let a = method("com.example.A", "foo");
    let b = MethodDescriptor::new(name("com.example.A"), "foo", [TypeDesc::INT], TypeDesc::VOID);
    let catalog = LookupCatalog::new(name("com.example.A"), [a.clone(), b.clone()]);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains(&a.signature_key()));
    assert!(catalog.contains(&b.signature_key()));
    assert_eq!(catalog.iter().count(), 2);
}
