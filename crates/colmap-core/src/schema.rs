pub mod accessor;
pub use accessor::{Accessor, Mutator, Reference};

mod field;
pub use field::{ColumnTag, Field, FieldTags, ForeignTag, IdTag};

mod record_type;
pub use record_type::{RecordType, RecordTypeBuilder};

mod row;
pub use row::{Row, TextRow};

mod table;
pub use table::{Column, Table};
