use pretty_assertions::assert_eq;

use super::*;

fn name(s: &str) -> TypeName {
    TypeName::parse(s).unwrap()
}

#[test]
fn primitive_descriptors() {
    assert_eq!(TypeDesc::INT.descriptor(), "I");
    assert_eq!(TypeDesc::LONG.descriptor(), "J");
    assert_eq!(TypeDesc::VOID.descriptor(), "V");
    assert_eq!(TypeDesc::BOOLEAN.descriptor(), "Z");
}

#[test]
fn class_and_array_descriptors() {
    let string = TypeDesc::class(name("java.lang.String"));
    assert_eq!(string.descriptor(), "Ljava/lang/String;");
    assert_eq!(
        TypeDesc::array_of(TypeDesc::array_of(TypeDesc::LONG)).descriptor(),
        "[[J"
    );
}

#[test]
fn parameterized_type_erases_to_raw() {
    let list = TypeDesc::Parameterized {
        raw: name("java.util.List"),
        args: vec![TypeDesc::class(name("java.lang.String"))],
    };
    assert_eq!(list.erasure(), TypeDesc::class(name("java.util.List")));
    assert_eq!(list.descriptor(), "Ljava/util/List;");
    assert_eq!(list.to_string(), "java.util.List<java.lang.String>");
}

#[test]
fn type_variable_erases_to_bound() {
    let t = TypeDesc::Variable {
        name: "T".into(),
        bound: name("java.lang.Number"),
    };
    assert_eq!(t.erasure(), TypeDesc::class(name("java.lang.Number")));
    assert_eq!(t.to_string(), "T");
}

#[test]
fn array_of_variable_erases_component() {
    let t = TypeDesc::array_of(TypeDesc::Variable {
        name: "E".into(),
        bound: name("java.lang.Object"),
    });
    assert_eq!(
        t.erasure(),
        TypeDesc::array_of(TypeDesc::class(name("java.lang.Object")))
    );
}

#[test]
fn slot_sizes() {
    assert_eq!(TypeDesc::VOID.slot_size(), 0);
    assert_eq!(TypeDesc::INT.slot_size(), 1);
    assert_eq!(TypeDesc::LONG.slot_size(), 2);
    assert_eq!(TypeDesc::DOUBLE.slot_size(), 2);
    assert_eq!(TypeDesc::array_of(TypeDesc::LONG).slot_size(), 1);
}

#[test]
fn reference_classification() {
    assert!(!TypeDesc::INT.is_reference());
    assert!(TypeDesc::array_of(TypeDesc::INT).is_reference());
    assert!(TypeDesc::VOID.is_void());
}

#[test]
fn internal_form_for_cast_operands() {
    let string = TypeDesc::class(name("java.lang.String"));
    assert_eq!(string.internal_form(), "java/lang/String");
    assert_eq!(
        TypeDesc::array_of(string).internal_form(),
        "[Ljava/lang/String;"
    );
    let list = TypeDesc::Parameterized {
        raw: name("java.util.List"),
        args: vec![],
    };
    assert_eq!(list.internal_form(), "java/util/List");
}
