mod record;
pub use record::Record;

pub use colmap_core::{schema, stmt, Error, Result};

pub use colmap_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::Record;
    pub use colmap_core::{
        schema::{ColumnTag, Field, ForeignTag, IdTag, RecordType},
        stmt::{Primitive, Type, Value},
        Error, Result,
    };
    pub use std::{default::Default, option::Option, sync::OnceLock};
}
