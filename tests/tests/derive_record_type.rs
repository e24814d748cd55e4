use colmap::schema::{ColumnTag, ForeignTag, IdTag};
use colmap::stmt::{Primitive, Type, Value};
use colmap::Record;
use tests::models::{Address, ScoreCard, User};

fn getter(name: &str) -> Option<String> {
    let ty = User::record_type();
    let field = ty.field(name).unwrap();
    ty.resolve_getter(field).map(|getter| getter.name().to_string())
}

fn setter(name: &str) -> Option<String> {
    let ty = User::record_type();
    let field = ty.field(name).unwrap();
    ty.resolve_setter(field).map(|setter| setter.name().to_string())
}

#[test]
fn record_type_is_built_once() {
    assert!(std::ptr::eq(User::record_type(), User::record_type()));
}

#[test]
fn record_and_table_names() {
    assert_eq!(User::record_type().name(), "User");
    assert_eq!(User::record_type().table_name(), "users");
    assert_eq!(Address::record_type().table_name(), "address");
    assert_eq!(ScoreCard::record_type().table_name(), "score_card");
}

#[test]
fn fields_in_declaration_order() {
    let names: Vec<_> = User::record_type().fields().map(|f| f.name()).collect();

    assert_eq!(
        names,
        [
            "id",
            "name",
            "email",
            "is_admin",
            "active",
            "verified",
            "signed_up",
            "birthday",
            "team",
            "address",
            "cache",
        ]
    );
}

#[test]
fn field_types_come_from_rust_types() {
    let ty = User::record_type();

    let email = ty.field("email").unwrap();
    assert_eq!(email.ty, Type::String);
    assert!(email.nullable);

    let signed_up = ty.field("signed_up").unwrap();
    assert_eq!(signed_up.ty, Type::Timestamp);

    let birthday = ty.field("birthday").unwrap();
    assert_eq!(birthday.ty, Type::Date);

    let address = ty.field("address").unwrap();
    assert_eq!(address.ty, Type::record("Address"));
    assert!(!address.is_simple_type());

    let id = ty.field("id").unwrap();
    assert_eq!(id.ty, Type::I64);
    assert!(!id.nullable);

    let tags = ScoreCard::record_type().field("tags").unwrap();
    assert_eq!(tags.ty, Type::list(Type::String));
}

#[test]
fn tags_come_from_attributes() {
    let ty = User::record_type();

    assert_eq!(ty.field("id").unwrap().tags.id, Some(IdTag::new("")));
    assert_eq!(
        ty.field("name").unwrap().tags.column,
        Some(ColumnTag::new("user_name").with_default("anonymous"))
    );
    assert_eq!(
        ty.field("team").unwrap().tags.foreign,
        Some(ForeignTag::new("team_id", "id"))
    );
    assert!(ty.field("cache").unwrap().is_transient());
    assert!(!ty.field("email").unwrap().is_transient());
}

#[test]
fn column_names() {
    let ty = User::record_type();
    assert_eq!(ty.field("id").unwrap().column_name(), "id");
    assert_eq!(ty.field("name").unwrap().column_name(), "user_name");
    assert_eq!(ty.field("team").unwrap().column_name(), "team_id");
    assert_eq!(ty.field("team").unwrap().foreign_column_name(), "id");
    assert_eq!(ty.field("email").unwrap().column_name(), "email");

    let ty = ScoreCard::record_type();
    assert_eq!(ty.field("id").unwrap().column_name(), "card_id");
    assert_eq!(ty.field("points").unwrap().column_name(), "points");
    assert_eq!(ty.field("points").unwrap().default_value(), Some("0"));
}

#[test]
fn accessors_follow_naming_convention() {
    assert_eq!(getter("name").as_deref(), Some("getName"));
    assert_eq!(setter("name").as_deref(), Some("setName"));

    assert_eq!(getter("active").as_deref(), Some("isActive"));
    assert_eq!(setter("active").as_deref(), Some("setActive"));

    assert_eq!(getter("is_admin").as_deref(), Some("is_admin"));
    assert_eq!(setter("is_admin").as_deref(), Some("set_admin"));

    assert_eq!(getter("verified").as_deref(), Some("getVerified"));
    assert_eq!(setter("verified").as_deref(), Some("setVerified"));

    assert_eq!(getter("signed_up").as_deref(), Some("getSigned_up"));
}

#[test]
fn transient_fields_have_no_accessors() {
    assert_eq!(getter("cache"), None);
    assert_eq!(setter("cache"), None);
}

#[test]
fn accessors_read_and_write_fields() {
    let ty = User::record_type();
    let mut user = User::default();

    let name = ty.field("name").unwrap();
    ty.resolve_setter(name)
        .unwrap()
        .set(&mut user, Value::from("ada"))
        .unwrap();
    assert_eq!(user.name, "ada");
    assert_eq!(ty.get(&user, name), Some(Value::from("ada")));

    let is_admin = ty.field("is_admin").unwrap();
    ty.resolve_setter(is_admin)
        .unwrap()
        .set(&mut user, Value::Bool(true))
        .unwrap();
    assert!(user.is_admin);

    let err = ty
        .resolve_setter(is_admin)
        .unwrap()
        .set(&mut user, Value::I32(1))
        .unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn nested_record_is_a_primitive() {
    assert_eq!(Address::ty(), Type::record("Address"));
    assert!(<Option<Address>>::NULLABLE);
}
