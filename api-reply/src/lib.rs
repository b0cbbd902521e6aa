//! # api-reply
//!
//! Uniform reply envelope for service APIs - one shape for every outcome.
//!
//! ## Design Philosophy
//!
//! - **FailCode**: name every failure reason with a stable numeric code
//! - **Reply**: one envelope shape for every outcome, success or failure
//! - **CodedError**: raise a coded failure and convert it to a reply
//!   without re-deriving the code or message
//! - **wrap functions**: normalize any outcome at the API boundary
//!
//! ## Usage
//!
//! ```rust
//! use api_reply::{wrap_failure, wrap_success, Reply};
//!
//! fn find_user(id: &str) -> Reply<String> {
//!     if id == "42" {
//!         wrap_success("Zaphod".to_string())
//!     } else {
//!         wrap_failure(1001, format!("user '{}' not found", id))
//!     }
//! }
//!
//! assert!(find_user("42").is_success());
//! assert_eq!(find_user("7").code(), 1001);
//! ```
//!
//! ## Principles
//!
//! - Domain failures are return values, never panics
//! - `code == 0` is the success sentinel; everything else is a failure
//! - Unexpected errors collapse to code 500 at the boundary; their detail
//!   goes to the diagnostic sink, never to the caller

mod code;
mod error;
mod reply;
mod template;
mod wrap;

pub use code::{FailCode, ReservedCode, SUCCESS_CODE};
pub use error::CodedError;
pub use reply::Reply;
pub use template::TemplateError;
pub use wrap::{
    wrap_coded, wrap_empty, wrap_exception, wrap_exception_with, wrap_fail_code,
    wrap_fail_code_with, wrap_failure, wrap_result, wrap_success, wrap_system_failure,
    DiagnosticSink, LogSink,
};

/// Result type alias for domain operations that fail with a coded error
pub type Result<T> = std::result::Result<T, CodedError>;
