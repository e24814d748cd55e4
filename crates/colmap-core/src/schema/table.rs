use super::RecordType;
use crate::stmt::Type;

/// The columns a record type is stored in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub name: String,

    /// One column per stored field, in field declaration order.
    pub columns: Vec<Column>,

    /// Names of complex fields that are not stored in a column of this
    /// table and need nested mapping.
    ///
    /// A foreign field whose referenced column cannot be found is listed
    /// here too.
    pub nested: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Column name
    pub name: String,

    /// Name of the field stored in the column
    pub field: String,

    pub ty: Type,

    pub nullable: bool,

    /// Declared default, as SQL literal text
    pub default: Option<String>,

    pub primary_key: bool,

    /// Column on the foreign side, for foreign fields
    pub references: Option<String>,
}

impl Table {
    /// Lays out the columns of `record_type`.
    ///
    /// Transient fields are skipped. Simple fields get a column each, and a
    /// foreign field holding a record gets a column typed like the column it
    /// references. Other complex fields are listed in [`Table::nested`].
    pub fn from_record_type<T>(record_type: &RecordType<T>) -> Table {
        let mut columns = vec![];
        let mut nested = vec![];

        for field in record_type.fields() {
            if field.is_transient() {
                continue;
            }

            let Some(ty) = record_type.column_ty(field) else {
                nested.push(field.name.clone());
                continue;
            };

            columns.push(Column {
                name: field.column_name().to_string(),
                field: field.name.clone(),
                ty,
                nullable: field.nullable,
                default: field.default_value().map(str::to_string),
                primary_key: field.is_id(),
                references: field
                    .is_foreign()
                    .then(|| field.foreign_column_name().to_string()),
            });
        }

        Table {
            name: record_type.table_name().to_string(),
            columns,
            nested,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }
}
