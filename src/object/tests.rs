use super::object::{Object, ObjectType};

#[test]
fn test_integer_object() {
    let object = Object::from(-42i64);

    assert_eq!(object.object_type(), ObjectType::Integer);
    assert_eq!(object.inspect(), "-42");
    assert_eq!(object.object_type().to_string(), "Integer");
}

#[test]
fn test_boolean_object() {
    assert_eq!(Object::from(true).inspect(), "true");
    assert_eq!(Object::Boolean(false).to_string(), "false");
    assert_eq!(Object::Boolean(false).object_type(), ObjectType::Boolean);
}
