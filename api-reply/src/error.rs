//! The coded error raised by domain logic

use std::fmt;

use crate::code::FailCode;

/// A failure carrying the same (code, description) pair a catalog entry
/// does, so the boundary can convert it into a failure reply without
/// re-deriving either field.
///
/// An underlying cause may be chained with [`set_source`](Self::set_source);
/// the cause participates in normal error-chain traversal but is never
/// copied into a reply.
///
/// # Example
///
/// ```rust
/// use api_reply::{CodedError, ReservedCode};
///
/// let err = CodedError::from_code(&ReservedCode::ObjectNotFound);
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.desc(), "Object Not Found");
/// ```
#[derive(Debug)]
pub struct CodedError {
    code: i32,
    desc: String,
    source: Option<anyhow::Error>,
}

impl CodedError {
    /// Create an error from an explicit code/description pair
    pub fn new(code: i32, desc: impl Into<String>) -> Self {
        CodedError {
            code,
            desc: desc.into(),
            source: None,
        }
    }

    /// Create an error from a catalog entry.
    ///
    /// The code and description are copied out at construction time; the
    /// catalog entry is not referenced afterwards.
    pub fn from_code(fail_code: &dyn FailCode) -> Self {
        CodedError::new(fail_code.value(), fail_code.desc())
    }

    // =========================================================================
    // Getters / setters - mirror the reply's fields for easy conversion
    // =========================================================================

    /// Get the numeric code
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Get the description
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Set the numeric code
    pub fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    /// Set the description
    pub fn set_desc(&mut self, desc: impl Into<String>) {
        self.desc = desc.into();
    }

    /// Attach the underlying cause.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if a source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }

    /// Get the underlying cause, if one was attached
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.desc)
    }
}

impl std::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
