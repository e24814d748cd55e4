mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Field, RecordType};

pub mod stmt;

/// A Result type alias that uses colmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
