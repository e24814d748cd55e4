#[derive(Default, colmap::Record)]
struct Keyword {
    #[id]
    r#type: String,

    r#ref: Option<i32>,
}

fn main() {
    use colmap::Record;

    let ty = Keyword::record_type();
    let field = ty.field("type").unwrap();

    assert_eq!(ty.resolve_getter(field).unwrap().name(), "getType");
    assert_eq!(ty.resolve_setter(field).unwrap().name(), "setType");
    assert!(ty.field("ref").unwrap().nullable);
}
