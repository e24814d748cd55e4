use colmap::stmt::{Primitive, Value};
use tests::models::{Address, User};

fn address() -> Address {
    Address {
        street: "Main".to_string(),
        zip: 12345,
        initial: 'M',
    }
}

#[test]
fn nested_record_to_value() {
    assert_eq!(
        address().to_value(),
        Value::Record(vec![
            Value::from("Main"),
            Value::I32(12345),
            Value::Char('M'),
        ])
    );
}

#[test]
fn nested_record_load() {
    let value = address().into_value();
    assert_eq!(Address::load(value).unwrap(), address());
}

#[test]
fn nested_record_load_wrong_kind() {
    let err = Address::load(Value::from("Main")).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to Address");
}

#[test]
fn nested_record_load_missing_fields() {
    // Missing trailing values load as null, which `i32` rejects
    let err = Address::load(Value::Record(vec![Value::from("Main")])).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn transient_fields_are_not_part_of_the_value() {
    let user = User {
        address: Some(address()),
        cache: [("k".to_string(), "v".to_string())].into(),
        ..User::default()
    };

    let Value::Record(fields) = user.to_value() else {
        panic!("expected record value");
    };

    // Every field but `cache`
    assert_eq!(fields.len(), 10);
    assert_eq!(fields[9], address().to_value());

    let loaded = User::load(Value::Record(fields)).unwrap();
    assert!(loaded.cache.is_empty());
    assert_eq!(loaded.address, Some(address()));
}

#[test]
fn accessor_reads_nested_value() {
    use colmap::Record;

    let ty = User::record_type();
    let user = User {
        address: Some(address()),
        ..User::default()
    };

    assert_eq!(
        ty.get(&user, ty.field("address").unwrap()),
        Some(address().to_value())
    );
}
