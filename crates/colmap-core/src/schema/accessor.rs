//! Accessor and mutator operations, and the naming convention used to find
//! them for a field.
//!
//! A field `name` is read by `getName` and written by `setName`. A
//! non-nullable `bool` field `active` is read by `isActive`; when the field
//! name already starts with `is` (`isActive`) the getter is the field name
//! itself and the setter drops the prefix (`setActive`).

use super::Field;
use crate::{stmt::Type, stmt::Value, Result};

/// A declared read operation on a record type.
pub struct Accessor<T> {
    name: String,
    get: fn(&T) -> Value,
}

/// A declared write operation on a record type, taking one parameter.
pub struct Mutator<T> {
    name: String,
    param_ty: Type,
    set: fn(&mut T, Value) -> Result<()>,
}

/// Reads the key of the record a foreign field refers to.
///
/// Foreign fields holding a whole record are stored as the referenced
/// column of that record.
pub struct Reference<T> {
    field: String,
    key_ty: fn(&str) -> Option<Type>,
    key: fn(&T, &str) -> Option<Value>,
}

impl<T> Accessor<T> {
    pub fn new(name: impl Into<String>, get: fn(&T) -> Value) -> Accessor<T> {
        Accessor {
            name: name.into(),
            get,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, record: &T) -> Value {
        (self.get)(record)
    }
}

impl<T> Mutator<T> {
    pub fn new(
        name: impl Into<String>,
        param_ty: Type,
        set: fn(&mut T, Value) -> Result<()>,
    ) -> Mutator<T> {
        Mutator {
            name: name.into(),
            param_ty,
            set,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_ty(&self) -> &Type {
        &self.param_ty
    }

    pub fn set(&self, record: &mut T, value: Value) -> Result<()> {
        (self.set)(record, value)
    }
}

impl<T> Reference<T> {
    pub fn new(
        field: impl Into<String>,
        key_ty: fn(&str) -> Option<Type>,
        key: fn(&T, &str) -> Option<Value>,
    ) -> Reference<T> {
        Reference {
            field: field.into(),
            key_ty,
            key,
        }
    }

    /// Name of the foreign field
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Type of `column` on the referenced record, `None` if it has no such
    /// column.
    pub fn key_ty(&self, column: &str) -> Option<Type> {
        (self.key_ty)(column)
    }

    /// Value of `column` on the record referenced by `record`.
    pub fn key(&self, record: &T, column: &str) -> Option<Value> {
        (self.key)(record, column)
    }
}

impl<T> core::fmt::Debug for Reference<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Reference").field("field", &self.field).finish()
    }
}

impl<T> core::fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Accessor").field("name", &self.name).finish()
    }
}

impl<T> core::fmt::Debug for Mutator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Mutator")
            .field("name", &self.name)
            .field("param_ty", &self.param_ty)
            .finish()
    }
}

/// Upper-cases the first character of `name`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_with_is(name: &str) -> bool {
    name.starts_with("is")
}

/// `get<Name>`
pub fn getter_name(field_name: &str) -> String {
    format!("get{}", capitalize(field_name))
}

/// `is<Name>`, or the field name itself when it already starts with `is`.
pub fn boolean_getter_name(field_name: &str) -> String {
    if starts_with_is(field_name) {
        field_name.to_string()
    } else {
        format!("is{}", capitalize(field_name))
    }
}

/// `set<Name>`
pub fn setter_name(field_name: &str) -> String {
    format!("set{}", capitalize(field_name))
}

/// `set<Name>` with a leading `is` removed from the field name first.
pub fn boolean_setter_name(field_name: &str) -> String {
    match field_name.strip_prefix("is") {
        Some(rest) => format!("set{}", capitalize(rest)),
        None => setter_name(field_name),
    }
}

/// True if the boolean naming convention is tried first for `field`.
///
/// Only plain `bool` fields use it; `Option<bool>` goes straight to
/// `get`/`set`.
pub fn uses_boolean_convention(field: &Field) -> bool {
    field.ty.is_bool() && !field.nullable
}
