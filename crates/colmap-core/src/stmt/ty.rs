use super::Value;
use crate::{Error, Result};

/// A column kind.
///
/// The simple kinds are stored directly in a single column. `Record` and
/// `List` are complex: they need nested or foreign handling by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// A single character
    Char,

    /// String and character sequence
    String,

    /// Instant in time, stored as epoch milliseconds
    Timestamp,

    /// Calendar date, stored as epoch milliseconds at midnight UTC
    Date,

    /// A nested record, identified by its record type name
    Record(String),

    /// A list of a single type
    List(Box<Type>),
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn record(name: impl Into<String>) -> Self {
        Self::Record(name.into())
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` if values of this type are stored directly in a single
    /// column.
    pub fn is_simple(&self) -> bool {
        !matches!(self, Self::Record(_) | Self::List(_))
    }

    /// Converts `text` into a typed value.
    ///
    /// Returns `Ok(None)` when the type is not simple or there is no text.
    /// Malformed text is an error, never a default value.
    pub fn parse_value(&self, text: Option<&str>) -> Result<Option<Value>> {
        match text {
            Some(text) if self.is_simple() => self.parse(text).map(Some),
            _ => Ok(None),
        }
    }

    /// Converts `text` into a value of this simple type.
    pub fn parse(&self, text: &str) -> Result<Value> {
        let malformed = || Error::malformed_input(self.clone(), text);

        Ok(match self {
            Self::String => Value::String(text.to_string()),
            Self::I32 => Value::I32(text.parse().map_err(|_| malformed())?),
            Self::I64 => Value::I64(text.parse().map_err(|_| malformed())?),
            Self::Date => {
                let millis = text.parse().map_err(|_| malformed())?;
                Value::date_from_millis(millis).ok_or_else(malformed)?
            }
            Self::Timestamp => {
                let millis = text.parse().map_err(|_| malformed())?;
                Value::timestamp_from_millis(millis).ok_or_else(malformed)?
            }
            Self::Bool => Value::Bool(super::to_boolean_str(text)),
            Self::F32 => Value::F32(text.trim().parse().map_err(|_| malformed())?),
            Self::F64 => Value::F64(text.trim().parse().map_err(|_| malformed())?),
            Self::I8 => Value::I8(text.parse().map_err(|_| malformed())?),
            Self::I16 => Value::I16(text.parse().map_err(|_| malformed())?),
            Self::Char => Value::Char(text.chars().next().ok_or_else(malformed)?),
            Self::Record(_) | Self::List(_) => {
                return Err(crate::err!("{self:?} is not a simple column type"))
            }
        })
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
