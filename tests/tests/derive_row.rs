use chrono::{DateTime, NaiveDate, Utc};
use colmap::stmt::Value;
use colmap::Record;
use pretty_assertions::assert_eq;
use tests::models::{Address, Membership, ScoreCard, User};
use tests::text_row;

fn ada() -> User {
    User {
        id: 1,
        name: "ada".to_string(),
        email: Some("ada@example.com".to_string()),
        is_admin: true,
        active: false,
        verified: None,
        signed_up: DateTime::<Utc>::from_timestamp_millis(1_000),
        birthday: NaiveDate::from_ymd_opt(1970, 1, 2),
        team: Some(9),
        address: Some(Address {
            street: "Main".to_string(),
            zip: 12345,
            initial: 'M',
        }),
        cache: [("k".to_string(), "v".to_string())].into(),
    }
}

#[test]
fn to_row_normalizes_values() {
    let row = ada().to_row();

    assert_eq!(
        row.iter().collect::<Vec<_>>(),
        vec![
            ("id", &Value::I64(1)),
            ("user_name", &Value::from("ada")),
            ("email", &Value::from("ada@example.com")),
            ("is_admin", &Value::I32(1)),
            ("active", &Value::I32(0)),
            ("verified", &Value::Null),
            ("signed_up", &Value::I64(1_000)),
            ("birthday", &Value::I64(86_400_000)),
            ("team_id", &Value::I64(9)),
        ]
    );
}

#[test]
fn row_text_round_trip() {
    let mut user = ada();
    // Nested and transient fields are not stored in the row
    user.address = None;
    user.cache.clear();

    let text = user.to_row().to_text();
    assert_eq!(text.get("is_admin"), Some(Some("1")));
    assert_eq!(text.get("verified"), Some(None));

    assert_eq!(User::from_row(&text).unwrap(), user);
}

#[test]
fn from_row_parses_text() {
    let row = text_row! {
        "id" => Some("42"),
        "user_name" => Some("grace"),
        "email" => None,
        "is_admin" => Some("true"),
        "active" => Some("1"),
        "verified" => Some("0"),
        "signed_up" => Some("86400000"),
        "team_id" => Some("3"),
    };

    let user = User::from_row(&row).unwrap();

    assert_eq!(
        user,
        User {
            id: 42,
            name: "grace".to_string(),
            email: None,
            is_admin: true,
            active: true,
            verified: Some(false),
            signed_up: DateTime::<Utc>::from_timestamp_millis(86_400_000),
            birthday: None,
            team: Some(3),
            ..User::default()
        }
    );
}

#[test]
fn null_for_non_nullable_column_keeps_field() {
    let row = text_row! { "id" => None, "user_name" => Some("x") };

    let mut user = User {
        id: 5,
        ..User::default()
    };
    user.load_row(&row).unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.name, "x");
}

#[test]
fn malformed_column_text() {
    let row = text_row! { "points" => Some("lots") };

    let err = ScoreCard::from_row(&row).unwrap_err();

    assert!(err.is_malformed_input());
    assert_eq!(
        err.to_string(),
        "column `points`: malformed input: cannot parse \"lots\" as I16"
    );
}

#[test]
fn score_card_numeric_columns() {
    let row = text_row! {
        "card_id" => Some("7"),
        "points" => Some("-3"),
        "ratio" => Some("0.25"),
        "level" => Some("2"),
        "weight" => Some("1.5"),
        "tags" => Some("ignored"),
    };

    let card = ScoreCard::from_row(&row).unwrap();

    assert_eq!(
        card,
        ScoreCard {
            id: 7,
            points: -3,
            ratio: 0.25,
            level: 2,
            weight: 1.5,
            tags: vec![],
        }
    );
}

fn membership() -> Membership {
    Membership {
        id: 1,
        member: Some(User {
            id: 42,
            ..User::default()
        }),
        card: ScoreCard {
            id: 7,
            ..ScoreCard::default()
        },
    }
}

#[test]
fn foreign_records_store_their_key() {
    assert_eq!(
        membership().to_row().iter().collect::<Vec<_>>(),
        vec![
            ("id", &Value::I64(1)),
            ("member_id", &Value::I64(42)),
            ("card", &Value::I32(7)),
        ]
    );

    let without_member = Membership {
        member: None,
        ..membership()
    };
    assert_eq!(
        without_member.to_row().get("member_id"),
        Some(&Value::Null)
    );
}

#[test]
fn from_row_leaves_foreign_records_default() {
    let row = text_row! {
        "id" => Some("5"),
        "member_id" => Some("42"),
        "card" => Some("7"),
    };

    assert_eq!(
        Membership::from_row(&row).unwrap(),
        Membership {
            id: 5,
            ..Membership::default()
        }
    );
}
