use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parses_nested_binary_name() {
    let name = TypeName::parse("com.example.Aux$1").unwrap();
    assert_eq!(name.as_str(), "com.example.Aux$1");
    assert_eq!(name.package(), "com.example");
    assert_eq!(name.simple_name(), "Aux$1");
    assert_eq!(name.internal_name(), "com/example/Aux$1");
}

#[test]
fn default_package_has_empty_package() {
    let name: TypeName = "Standalone".parse().unwrap();
    assert_eq!(name.package(), "");
    assert_eq!(name.simple_name(), "Standalone");
}

#[test]
fn rejects_internal_form() {
    assert_eq!(
        TypeName::parse("com/example/Foo"),
        Err(TypeNameError::InternalForm)
    );
}

#[test]
fn rejects_empty_input() {
    assert_eq!(TypeName::parse(""), Err(TypeNameError::Empty));
}

#[test]
fn rejects_empty_segments() {
    assert_eq!(
        TypeName::parse("com..Foo"),
        Err(TypeNameError::EmptySegment { position: 4 })
    );
    assert_eq!(
        TypeName::parse(".Foo"),
        Err(TypeNameError::EmptySegment { position: 0 })
    );
    assert!(matches!(
        TypeName::parse("com.Foo."),
        Err(TypeNameError::EmptySegment { .. })
    ));
}

#[test]
fn rejects_segments_starting_with_digit() {
    assert_eq!(
        TypeName::parse("com.example.1Aux"),
        Err(TypeNameError::InvalidSegment {
            segment: "1Aux".to_owned()
        })
    );
}

#[test]
fn rejects_reserved_words() {
    assert_eq!(
        TypeName::parse("com.class.Foo"),
        Err(TypeNameError::ReservedWord {
            segment: "class".to_owned()
        })
    );
}

#[test]
fn rejects_punctuation() {
    assert!(TypeName::parse("com.example.Foo-Bar").is_err());
    assert!(TypeName::parse("com.example.Foo Bar").is_err());
}

#[test]
fn same_package_ignores_simple_name() {
    let a = TypeName::parse("com.example.A").unwrap();
    let b = TypeName::parse("com.example.B$1").unwrap();
    let c = TypeName::parse("com.other.A").unwrap();
    assert!(a.same_package(&b));
    assert!(!a.same_package(&c));
}

#[test]
fn error_messages_name_the_segment() {
    let err = TypeName::parse("org.while.X").unwrap_err();
    assert_eq!(err.to_string(), "`while` is a reserved word");
}

mod proptest_names {
    use super::super::TypeName;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dotted_identifiers_round_trip(
            segments in proptest::collection::vec("[a-z][a-z0-9_]{0,7}[A-Z]", 1..5),
        ) {
            let raw = segments.join(".");
            let name = TypeName::parse(&raw).unwrap();
            prop_assert_eq!(name.as_str(), raw.as_str());
            prop_assert_eq!(name.internal_name(), raw.replace('.', "/"));
        }

        #[test]
        fn slash_is_always_rejected(prefix in "[a-z]{1,5}", suffix in "[A-Z][a-z]{0,5}") {
            let raw = format!("{prefix}/{suffix}");
            prop_assert!(TypeName::parse(&raw).is_err());
        }
    }
}
