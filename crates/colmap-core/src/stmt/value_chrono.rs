use chrono::{DateTime, NaiveDate, Utc};

use crate::stmt::Value;

impl Value {
    /// Builds a `Timestamp` from epoch milliseconds, or `None` when out of
    /// range.
    pub fn timestamp_from_millis(millis: i64) -> Option<Value> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Value::Timestamp)
    }

    /// Builds a `Date` from epoch milliseconds, keeping the UTC calendar day.
    pub fn date_from_millis(millis: i64) -> Option<Value> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|ts| Value::Date(ts.date_naive()))
    }
}

/// Epoch milliseconds of midnight UTC on `date`.
pub(crate) fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$chrono> for Value {
            fn from(value: &$chrono) -> Self {
                Self::$name(*value)
            }
        }
    };
}

impl_chrono_conversions!(DateTime<Utc>, Timestamp);
impl_chrono_conversions!(NaiveDate, Date);
