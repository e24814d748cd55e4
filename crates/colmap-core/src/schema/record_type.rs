use super::accessor::{self, Accessor, Mutator, Reference};
use super::Field;
use crate::{stmt::Type, stmt::Value, Error, Result};

use indexmap::IndexMap;

/// An introspectable record type: its fields and the operations it declares.
///
/// Derived records build one of these once per type; it can also be built
/// by hand with [`RecordType::builder`].
pub struct RecordType<T> {
    name: String,
    table: Option<String>,
    fields: IndexMap<String, Field>,
    getters: IndexMap<String, Accessor<T>>,
    setters: IndexMap<(String, Type), Mutator<T>>,
    references: IndexMap<String, Reference<T>>,
}

pub struct RecordTypeBuilder<T> {
    name: String,
    table: Option<String>,
    fields: Vec<Field>,
    getters: Vec<Accessor<T>>,
    setters: Vec<Mutator<T>>,
    references: Vec<Reference<T>>,
}

impl<T> RecordType<T> {
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder<T> {
        RecordTypeBuilder {
            name: name.into(),
            table: None,
            fields: vec![],
            getters: vec![],
            setters: vec![],
            references: vec![],
        }
    }

    /// The record type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The table the record is stored in. Defaults to the record name.
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The getter declared under exactly `name`.
    pub fn declared_getter(&self, name: &str) -> Option<&Accessor<T>> {
        self.getters.get(name)
    }

    /// The setter declared under exactly `name` with a `param_ty` parameter.
    pub fn declared_setter(&self, name: &str, param_ty: &Type) -> Option<&Mutator<T>> {
        self.setters.get(&(name.to_string(), param_ty.clone()))
    }

    /// The key reader declared for the foreign field `field`.
    pub fn reference(&self, field: &Field) -> Option<&Reference<T>> {
        self.references.get(&field.name)
    }

    /// The type of the column `field` is stored in.
    ///
    /// Simple fields are stored as themselves. A foreign field holding a
    /// record is stored as the referenced column of that record. Transient
    /// fields and other complex fields have no column.
    pub fn column_ty(&self, field: &Field) -> Option<Type> {
        if field.is_transient() {
            return None;
        }

        if field.is_simple_type() {
            return Some(field.ty.clone());
        }

        if !field.is_foreign() {
            return None;
        }

        let key_ty = self
            .reference(field)
            .and_then(|reference| reference.key_ty(field.foreign_column_name()));

        if key_ty.is_none() {
            tracing::debug!(
                record = %self.name,
                field = %field.name,
                column = %field.foreign_column_name(),
                "referenced column not found"
            );
        }

        key_ty
    }

    /// The simple field stored in `column`.
    pub fn column_field(&self, column: &str) -> Option<&Field> {
        self.fields().find(|field| {
            !field.is_transient() && field.is_simple_type() && field.column_name() == column
        })
    }

    /// Reads the value stored in `column` from `record`.
    pub fn column_value(&self, record: &T, column: &str) -> Option<Value> {
        self.get(record, self.column_field(column)?)
    }

    /// Finds the getter for `field` by naming convention.
    ///
    /// Returns `None` when the record declares no matching getter; callers
    /// fall back to another mapping strategy.
    pub fn resolve_getter(&self, field: &Field) -> Option<&Accessor<T>> {
        let mut getter = None;

        if accessor::uses_boolean_convention(field) {
            getter = self.lookup_getter(field, &accessor::boolean_getter_name(&field.name));
        }

        getter.or_else(|| self.lookup_getter(field, &accessor::getter_name(&field.name)))
    }

    /// Finds the setter for `field` by naming convention.
    ///
    /// The setter must take one parameter of the field's type.
    pub fn resolve_setter(&self, field: &Field) -> Option<&Mutator<T>> {
        let mut setter = None;

        if accessor::uses_boolean_convention(field) {
            setter = self.lookup_setter(field, &accessor::boolean_setter_name(&field.name));
        }

        setter.or_else(|| self.lookup_setter(field, &accessor::setter_name(&field.name)))
    }

    /// Reads `field` from `record` through its resolved getter.
    pub fn get(&self, record: &T, field: &Field) -> Option<Value> {
        self.resolve_getter(field).map(|getter| getter.get(record))
    }

    fn lookup_getter(&self, field: &Field, name: &str) -> Option<&Accessor<T>> {
        let getter = self.declared_getter(name);

        if getter.is_none() {
            tracing::debug!(
                record = %self.name,
                field = %field.name,
                method = %name,
                "getter not declared"
            );
        }

        getter
    }

    fn lookup_setter(&self, field: &Field, name: &str) -> Option<&Mutator<T>> {
        let setter = self.declared_setter(name, &field.ty);

        if setter.is_none() {
            tracing::debug!(
                record = %self.name,
                field = %field.name,
                method = %name,
                param_ty = ?field.ty,
                "setter not declared"
            );
        }

        setter
    }
}

impl<T> core::fmt::Debug for RecordType<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("fields", &self.fields)
            .field("getters", &self.getters.values().collect::<Vec<_>>())
            .field("setters", &self.setters.values().collect::<Vec<_>>())
            .field("references", &self.references.values().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> RecordTypeBuilder<T> {
    /// Stores the record in `table` instead of a table named after the record.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn getter(mut self, name: impl Into<String>, get: fn(&T) -> Value) -> Self {
        self.getters.push(Accessor::new(name, get));
        self
    }

    pub fn setter(
        mut self,
        name: impl Into<String>,
        param_ty: Type,
        set: fn(&mut T, Value) -> Result<()>,
    ) -> Self {
        self.setters.push(Mutator::new(name, param_ty, set));
        self
    }

    /// Stores the foreign field `field` as a column of the record it refers
    /// to.
    pub fn reference(
        mut self,
        field: impl Into<String>,
        key_ty: fn(&str) -> Option<Type>,
        key: fn(&T, &str) -> Option<Value>,
    ) -> Self {
        self.references.push(Reference::new(field, key_ty, key));
        self
    }

    pub fn build(self) -> Result<RecordType<T>> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        let mut getters = IndexMap::with_capacity(self.getters.len());
        let mut setters = IndexMap::with_capacity(self.setters.len());
        let mut references = IndexMap::with_capacity(self.references.len());

        for field in self.fields {
            if field.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "record `{}` has a field with an empty name",
                    self.name
                )));
            }

            if fields.contains_key(&field.name) {
                return Err(Error::invalid_schema(format!(
                    "record `{}` declares field `{}` more than once",
                    self.name, field.name
                )));
            }

            fields.insert(field.name.clone(), field);
        }

        for getter in self.getters {
            if getters.contains_key(getter.name()) {
                return Err(Error::invalid_schema(format!(
                    "record `{}` declares getter `{}` more than once",
                    self.name,
                    getter.name()
                )));
            }

            getters.insert(getter.name().to_string(), getter);
        }

        for setter in self.setters {
            let key = (setter.name().to_string(), setter.param_ty().clone());

            if setters.contains_key(&key) {
                return Err(Error::invalid_schema(format!(
                    "record `{}` declares setter `{}({:?})` more than once",
                    self.name, key.0, key.1
                )));
            }

            setters.insert(key, setter);
        }

        for reference in self.references {
            if !fields.contains_key(reference.field()) {
                return Err(Error::invalid_schema(format!(
                    "record `{}` declares a reference for unknown field `{}`",
                    self.name,
                    reference.field()
                )));
            }

            if references.contains_key(reference.field()) {
                return Err(Error::invalid_schema(format!(
                    "record `{}` declares the reference for `{}` more than once",
                    self.name,
                    reference.field()
                )));
            }

            references.insert(reference.field().to_string(), reference);
        }

        Ok(RecordType {
            name: self.name,
            table: self.table,
            fields,
            getters,
            setters,
            references,
        })
    }
}
