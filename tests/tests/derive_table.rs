use colmap::schema::{Column, Table};
use colmap::stmt::Type;
use colmap::Record;
use pretty_assertions::assert_eq;
use tests::models::{Membership, ScoreCard, User};

fn column(name: &str, field: &str, ty: Type, nullable: bool) -> Column {
    Column {
        name: name.to_string(),
        field: field.to_string(),
        ty,
        nullable,
        default: None,
        primary_key: false,
        references: None,
    }
}

#[test]
fn user_table() {
    let table = User::table();

    assert_eq!(
        table,
        Table {
            name: "users".to_string(),
            columns: vec![
                Column {
                    primary_key: true,
                    ..column("id", "id", Type::I64, false)
                },
                Column {
                    default: Some("anonymous".to_string()),
                    ..column("user_name", "name", Type::String, false)
                },
                column("email", "email", Type::String, true),
                column("is_admin", "is_admin", Type::Bool, false),
                column("active", "active", Type::Bool, false),
                column("verified", "verified", Type::Bool, true),
                column("signed_up", "signed_up", Type::Timestamp, true),
                column("birthday", "birthday", Type::Date, true),
                Column {
                    references: Some("id".to_string()),
                    ..column("team_id", "team", Type::I64, true)
                },
            ],
            nested: vec!["address".to_string()],
        }
    );
}

#[test]
fn score_card_table() {
    let table = ScoreCard::table();

    assert_eq!(
        table.primary_key().map(|c| &c.name[..]).collect::<Vec<_>>(),
        ["card_id"]
    );
    assert_eq!(
        table.column("points").unwrap().default.as_deref(),
        Some("0")
    );
    assert_eq!(table.nested, ["tags"]);
}

#[test]
fn foreign_records_are_key_columns() {
    let table = Membership::table();

    assert_eq!(
        table.columns,
        vec![
            Column {
                primary_key: true,
                ..column("id", "id", Type::I64, false)
            },
            Column {
                references: Some("id".to_string()),
                ..column("member_id", "member", Type::I64, true)
            },
            Column {
                references: Some("card_id".to_string()),
                ..column("card", "card", Type::I32, false)
            },
        ]
    );
    assert!(table.nested.is_empty());
}

#[test]
fn table_serializes() {
    let table = Membership::table();

    let json = serde_json::to_string(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();

    assert_eq!(back, table);
}
