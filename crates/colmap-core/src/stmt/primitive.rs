use super::{Type, Value};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// A Rust type that can be stored in a record field.
///
/// Generated record types use this trait to build accessors and mutators
/// for each field without knowing the concrete field type.
pub trait Primitive: Sized {
    /// Whether `None` is a valid value for the field.
    const NULLABLE: bool = false;

    /// The column kind values of this type map to.
    fn ty() -> Type;

    /// Reads the value without consuming it.
    fn to_value(&self) -> Value;

    fn into_value(self) -> Value {
        self.to_value()
    }

    /// Loads an instance from a value.
    fn load(value: Value) -> Result<Self>;

    /// Type of `column` when a foreign field refers to this type.
    ///
    /// Only records have columns that can be referenced.
    fn reference_ty(column: &str) -> Option<Type> {
        let _ = column;
        None
    }

    /// Value of `column` on the record a foreign field refers to.
    fn reference_key(&self, column: &str) -> Option<Value> {
        let _ = column;
        None
    }
}

macro_rules! impl_primitive {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn reference_ty(column: &str) -> Option<Type> {
        T::reference_ty(column)
    }

    fn reference_key(&self, column: &str) -> Option<Value> {
        match self {
            Some(value) => value.reference_key(column),
            // A missing reference is a null key
            None => T::reference_ty(column).map(|_| Value::Null),
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Primitive::into_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(Error::type_conversion(value, "Vec")),
        }
    }
}
