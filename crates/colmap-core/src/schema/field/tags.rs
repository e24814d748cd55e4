/// Declarative metadata attached to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldTags {
    /// `#[column("name", default = "...")]`
    pub column: Option<ColumnTag>,

    /// `#[id]` or `#[id("name")]`
    pub id: Option<IdTag>,

    /// `#[foreign(column = "...", foreign = "...")]`
    pub foreign: Option<ForeignTag>,

    /// `#[transient]`: the field has no column.
    pub transient: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnTag {
    /// Explicit column name. Blank means "use the next rule".
    pub name: String,

    /// Column default, as SQL literal text.
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdTag {
    pub name: String,
}

/// Marks a field as a reference to a row in another table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignTag {
    /// Column holding the reference in this record's table
    pub column: String,

    /// Column referenced in the foreign table
    pub foreign: String,
}

impl ColumnTag {
    pub fn new(name: impl Into<String>) -> ColumnTag {
        ColumnTag {
            name: name.into(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> ColumnTag {
        self.default_value = Some(default_value.into());
        self
    }
}

impl IdTag {
    pub fn new(name: impl Into<String>) -> IdTag {
        IdTag { name: name.into() }
    }
}

impl ForeignTag {
    pub fn new(column: impl Into<String>, foreign: impl Into<String>) -> ForeignTag {
        ForeignTag {
            column: column.into(),
            foreign: foreign.into(),
        }
    }
}

/// `Some(s)` when `s` has content after trimming.
pub(super) fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
