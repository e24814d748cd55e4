use super::{Field, RecordType};
use crate::{err, stmt::Value, Result};

use indexmap::IndexMap;

/// Normalized column values of one record, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

/// Stored text of one record, keyed by column name.
///
/// `None` is a SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRow {
    columns: IndexMap<String, Option<String>>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(name, value)| (&name[..], value))
    }

    /// The text each column is stored as, `None` for nulls.
    pub fn to_text(&self) -> TextRow {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.format_for_storage()))
            .collect()
    }
}

impl TextRow {
    pub fn insert(&mut self, column: impl Into<String>, text: Option<String>) {
        self.columns.insert(column.into(), text);
    }

    /// `Some(None)` for a `NULL` column, `None` for a missing column.
    pub fn get(&self, column: &str) -> Option<Option<&str>> {
        self.columns.get(column).map(Option::as_deref)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for TextRow {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        TextRow {
            columns: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, Option<&'a str>)> for TextRow {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'a str>)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, text)| (name.to_string(), text.map(str::to_string)))
            .collect()
    }
}

impl<T> RecordType<T> {
    /// Reads every stored field of `record` and normalizes it for storage.
    ///
    /// Fields without a getter are left out of the row. A foreign field
    /// holding a record is stored as the key it references.
    pub fn to_row(&self, record: &T) -> Row {
        let columns = self
            .fields()
            .filter_map(|field| {
                let value = self.column_value_of(record, field)?;
                Some((field.column_name().to_string(), value.normalize_for_storage()))
            })
            .collect();

        Row { columns }
    }

    fn column_value_of(&self, record: &T, field: &Field) -> Option<Value> {
        if field.is_transient() {
            None
        } else if field.is_simple_type() {
            self.get(record, field)
        } else if field.is_foreign() {
            self.reference(field)?.key(record, field.foreign_column_name())
        } else {
            None
        }
    }

    /// Parses the stored text of each column and writes it through the
    /// field's setter.
    ///
    /// Columns that are missing from `row`, fields without a setter, and
    /// `NULL` columns of non-nullable fields are skipped. Malformed text is
    /// an error naming the column.
    ///
    /// Foreign fields holding a record are left as they are: the row only
    /// carries the key, and the referenced record lives in another table.
    pub fn load_row(&self, record: &mut T, row: &TextRow) -> Result<()> {
        let stored = self
            .fields()
            .filter(|field| !field.is_transient() && field.is_simple_type());

        for field in stored {
            let column = field.column_name();

            let Some(text) = row.get(column) else {
                continue;
            };

            let Some(setter) = self.resolve_setter(field) else {
                continue;
            };

            let value = match field.ty.parse_value(text) {
                Ok(Some(value)) => value,
                Ok(None) if field.nullable => Value::Null,
                Ok(None) => continue,
                Err(e) => return Err(e.context(err!("column `{column}`"))),
            };

            setter
                .set(record, value)
                .map_err(|e| e.context(err!("field `{}`", field.name)))?;
        }

        Ok(())
    }
}
