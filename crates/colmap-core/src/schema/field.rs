mod tags;
pub use tags::{ColumnTag, FieldTags, ForeignTag, IdTag};

use crate::stmt::Type;
use tags::non_blank;

/// A field declared on a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// The field name, as declared on the record
    pub name: String,

    /// The declared type of the field
    pub ty: Type,

    /// True if the field can be null (`None` in Rust).
    pub nullable: bool,

    /// Attached metadata
    pub tags: FieldTags,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            ty,
            nullable: false,
            tags: FieldTags::default(),
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Field {
        self.nullable = nullable;
        self
    }

    pub fn with_column(mut self, column: ColumnTag) -> Field {
        self.tags.column = Some(column);
        self
    }

    pub fn with_id(mut self, id: IdTag) -> Field {
        self.tags.id = Some(id);
        self
    }

    pub fn with_foreign(mut self, foreign: ForeignTag) -> Field {
        self.tags.foreign = Some(foreign);
        self
    }

    pub fn with_transient(mut self) -> Field {
        self.tags.transient = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The column this field maps to.
    ///
    /// An explicit column name wins, then the id name, then the foreign
    /// column. Blank names are skipped. Falls back to the field name.
    pub fn column_name(&self) -> &str {
        let tags = &self.tags;

        tags.column
            .as_ref()
            .and_then(|column| non_blank(&column.name))
            .or_else(|| tags.id.as_ref().and_then(|id| non_blank(&id.name)))
            .or_else(|| {
                tags.foreign
                    .as_ref()
                    .and_then(|foreign| non_blank(&foreign.column))
            })
            .unwrap_or(&self.name)
    }

    /// The column referenced on the foreign side.
    ///
    /// The foreign name is only trusted when the local column name is set;
    /// otherwise this is the field name.
    pub fn foreign_column_name(&self) -> &str {
        match &self.tags.foreign {
            Some(foreign) if non_blank(&foreign.column).is_some() => &foreign.foreign,
            _ => &self.name,
        }
    }

    /// The column default, if one is declared and not blank.
    pub fn default_value(&self) -> Option<&str> {
        self.tags
            .column
            .as_ref()
            .and_then(|column| column.default_value.as_deref())
            .and_then(non_blank)
    }

    pub fn is_transient(&self) -> bool {
        self.tags.transient
    }

    pub fn is_foreign(&self) -> bool {
        self.tags.foreign.is_some()
    }

    pub fn is_id(&self) -> bool {
        self.tags.id.is_some()
    }

    /// True if the field's type is stored directly in one column.
    pub fn is_simple_type(&self) -> bool {
        self.ty.is_simple()
    }
}
