use super::Error;
use crate::stmt::Type;

/// Error when text cannot be parsed into the target column type.
///
/// The mapper never substitutes a default for malformed text; this error is
/// always propagated to the caller.
#[derive(Debug)]
pub(super) struct MalformedInput {
    ty: Type,
    text: Box<str>,
}

impl std::error::Error for MalformedInput {}

impl core::fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "malformed input: cannot parse {:?} as {:?}",
            self.text, self.ty
        )
    }
}

impl Error {
    /// Creates a malformed input error for `text` that is not a valid `ty`.
    pub fn malformed_input(ty: Type, text: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedInput(MalformedInput {
            ty,
            text: text.into().into(),
        }))
    }

    /// Returns `true` if this error is, or was caused by, malformed input.
    pub fn is_malformed_input(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedInput(_)))
    }
}
