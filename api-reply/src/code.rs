//! Failure code catalogs

use std::fmt;

/// The success sentinel: a reply carrying this code reports success
pub const SUCCESS_CODE: i32 = 0;

/// Contract every catalog of failure codes satisfies.
///
/// A catalog is a closed enum whose variants each pair a stable numeric
/// code with a description string. The description doubles as a message
/// template: positional `%s`/`%d` placeholders are filled in by
/// [`wrap_fail_code_with`](crate::wrap_fail_code_with).
///
/// Codes must be unique within one catalog; nothing enforces uniqueness
/// across catalogs.
pub trait FailCode {
    /// The numeric code. Stable across releases - callers key behavior
    /// off it, so never reuse or renumber one.
    fn value(&self) -> i32;

    /// The description template for the failure message
    fn desc(&self) -> &str;
}

/// The two codes the crate itself reserves.
///
/// Every other code lives in a caller-defined catalog and is opaque here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedCode {
    /// Generic system failure, produced by the exception-wrapping path
    SystemException,

    /// Generic not-found, a convenience for a common case
    ObjectNotFound,
}

impl FailCode for ReservedCode {
    fn value(&self) -> i32 {
        match self {
            ReservedCode::SystemException => 500,
            ReservedCode::ObjectNotFound => 404,
        }
    }

    fn desc(&self) -> &str {
        match self {
            ReservedCode::SystemException => "System Exception",
            ReservedCode::ObjectNotFound => "Object Not Found",
        }
    }
}

impl fmt::Display for ReservedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.desc())
    }
}
