use colmap_core::schema::{RecordType, Row, Table, TextRow};
use colmap_core::Result;

/// A type whose fields map onto table columns.
///
/// Usually implemented with `#[derive(Record)]`, which also implements
/// [`Primitive`](crate::stmt::Primitive) so records can nest.
pub trait Record: Sized + 'static {
    /// The record type: fields, tags and declared accessors.
    fn record_type() -> &'static RecordType<Self>;

    /// Column layout of the record's table
    fn table() -> Table {
        Table::from_record_type(Self::record_type())
    }

    /// Normalized column values of this record
    fn to_row(&self) -> Row {
        Self::record_type().to_row(self)
    }

    /// Overwrites fields from stored column text.
    fn load_row(&mut self, row: &TextRow) -> Result<()> {
        Self::record_type().load_row(self, row)
    }

    /// Builds a record from stored column text, starting from the default
    /// value for every column missing from `row`.
    fn from_row(row: &TextRow) -> Result<Self>
    where
        Self: Default,
    {
        let mut record = Self::default();
        record.load_row(row)?;
        Ok(record)
    }
}
