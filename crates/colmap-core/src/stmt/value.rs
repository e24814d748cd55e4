use super::Type;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// A single character
    Char(char),

    /// String value
    String(String),

    /// Instant in time
    Timestamp(DateTime<Utc>),

    /// Calendar date
    Date(NaiveDate),

    /// Null value
    #[default]
    Null,

    /// Field values of a nested record, in field declaration order
    Record(Vec<Value>),

    /// A list of values of the same type
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the type of this value, or `None` for `Null` and for values
    /// whose type cannot be recovered from the value alone.
    pub fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Char(_) => Type::Char,
            Self::String(_) => Type::String,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Date(_) => Type::Date,
            Self::Null | Self::Record(_) | Self::List(_) => return None,
        })
    }

    /// Name of the value's variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Char(_) => "Char",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
            Self::Date(_) => "Date",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
        }
    }

    /// Interprets the value as a boolean.
    ///
    /// `Null` is `false`. Otherwise the value is stringified: a single
    /// character is `true` only when it is `"1"`, anything longer must be a
    /// boolean literal (case-insensitive) to be `true`.
    pub fn to_boolean(&self) -> bool {
        if self.is_null() {
            return false;
        }

        super::to_boolean_str(&self.to_string())
    }

    /// Widens the value to the form written to a column.
    ///
    /// Booleans become `I32` 1 or 0, timestamps and dates become `I64` epoch
    /// milliseconds. Every other value, including `Null`, is returned as is,
    /// so applying this twice is the same as applying it once.
    pub fn normalize_for_storage(self) -> Value {
        match self {
            Self::Bool(v) => Self::I32(if v { 1 } else { 0 }),
            Self::Timestamp(v) => Self::I64(v.timestamp_millis()),
            Self::Date(v) => Self::I64(super::date_to_millis(v)),
            value => value,
        }
    }

    /// The text a value is stored as: normalized, then stringified.
    ///
    /// `Null` and complex values have no textual form.
    pub fn format_for_storage(&self) -> Option<String> {
        match self {
            Self::Null | Self::Record(_) | Self::List(_) => None,
            value => Some(value.clone().normalize_for_storage().to_string()),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            // Debug keeps the fractional part, so `1.0` never reads as `"1"`
            Self::F32(v) => write!(f, "{v:?}"),
            Self::F64(v) => write!(f, "{v:?}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
            Self::Record(fields) | Self::List(fields) => {
                let (open, close) = if self.is_record() {
                    ("(", ")")
                } else {
                    ("[", "]")
                };

                f.write_str(open)?;
                for (i, value) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(close)
            }
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(value.clone())
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
