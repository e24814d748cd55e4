use std::cell::Cell;

#[derive(Default)]
struct Counter(Cell<u64>);

#[derive(colmap::Record)]
#[table = "widgets"]
struct Widget {
    name: String,

    #[transient]
    hits: Counter,
}

fn main() {
    use colmap::Record;

    let table = Widget::table();
    assert_eq!(table.name, "widgets");
    assert_eq!(table.columns.len(), 1);

    let field = Widget::record_type().field("hits").unwrap();
    assert!(field.is_transient());
}
