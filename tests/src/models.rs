use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

#[derive(Debug, Default, PartialEq, colmap::Record)]
#[table = "users"]
pub struct User {
    #[id]
    pub id: i64,

    #[column("user_name", default = "anonymous")]
    pub name: String,

    pub email: Option<String>,

    pub is_admin: bool,

    pub active: bool,

    pub verified: Option<bool>,

    pub signed_up: Option<DateTime<Utc>>,

    pub birthday: Option<NaiveDate>,

    #[foreign(column = "team_id", foreign = "id")]
    pub team: Option<i64>,

    pub address: Option<Address>,

    #[transient]
    pub cache: HashMap<String, String>,
}

#[derive(Debug, Default, PartialEq, colmap::Record)]
pub struct Address {
    pub street: String,

    pub zip: i32,

    pub initial: char,
}

#[derive(Debug, Default, PartialEq, colmap::Record)]
pub struct ScoreCard {
    #[id("card_id")]
    pub id: i32,

    #[column(default = "0")]
    pub points: i16,

    pub ratio: f64,

    pub level: i8,

    pub weight: f32,

    pub tags: Vec<String>,
}

#[derive(Debug, Default, PartialEq, colmap::Record)]
pub struct Membership {
    #[id]
    pub id: i64,

    #[foreign(column = "member_id", foreign = "id")]
    pub member: Option<User>,

    #[foreign(column = "card", foreign = "card_id")]
    pub card: ScoreCard,
}
