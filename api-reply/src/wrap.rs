//! Wrapping functions that normalize outcomes into replies
//!
//! The caller-facing boundary of a service operation calls exactly one
//! function here: success payloads, catalog failures, coded errors, and
//! caught exceptions all come out as the same [`Reply`] shape. Every
//! function is a pure transformation except the exception path, which
//! records the caught error to a diagnostic sink before discarding it.

use std::error::Error as StdError;

use crate::code::{FailCode, ReservedCode, SUCCESS_CODE};
use crate::error::CodedError;
use crate::reply::Reply;
use crate::template::{self, TemplateError};

/// Where the exception-wrapping path records the errors it swallows.
///
/// Implementations append and never read back; they must tolerate
/// concurrent callers without coordination.
pub trait DiagnosticSink: Send + Sync {
    /// Record one swallowed error
    fn record(&self, error: &(dyn StdError + 'static));
}

/// Default sink: forwards to `tracing` at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, error: &(dyn StdError + 'static)) {
        tracing::error!(error = %error, "operation raised an exception");
    }
}

static DEFAULT_SINK: LogSink = LogSink;

/// Wrap a success payload
pub fn wrap_success<T>(data: T) -> Reply<T> {
    let mut reply = Reply::new();
    reply.set_code(SUCCESS_CODE);
    reply.set_message("");
    reply.set_data(data);
    reply
}

/// Wrap a success with no payload
pub fn wrap_empty<T>() -> Reply<T> {
    let mut reply = Reply::new();
    reply.set_message("");
    reply
}

/// Wrap a raw (code, message) failure pair.
///
/// Nothing validates the code: passing `0` produces a reply that reads as
/// success. The sentinel is the wire contract, so this stays a sharp edge
/// rather than an error.
pub fn wrap_failure<T>(code: i32, message: impl Into<String>) -> Reply<T> {
    Reply::from_parts(code, message)
}

/// Wrap a catalog entry, message taken verbatim from its template
pub fn wrap_fail_code<T>(fail_code: &dyn FailCode) -> Reply<T> {
    wrap_failure(fail_code.value(), fail_code.desc())
}

/// Wrap a catalog entry, filling its message template with `args`.
///
/// An empty `args` leaves the template untouched. A template/argument
/// mismatch propagates as a [`TemplateError`]; it is never downgraded
/// into a failure reply.
pub fn wrap_fail_code_with<T>(
    fail_code: &dyn FailCode,
    args: &[&str],
) -> Result<Reply<T>, TemplateError> {
    let message = template::render(fail_code.desc(), args)?;
    Ok(wrap_failure(fail_code.value(), message))
}

/// Wrap a coded error raised by domain logic.
///
/// Copies the code and description field for field; a chained cause stays
/// behind on the error.
pub fn wrap_coded<T>(error: &CodedError) -> Reply<T> {
    wrap_failure(error.code(), error.desc())
}

/// Normalize a domain outcome: `Ok` wraps as success, `Err` as its coded
/// failure
pub fn wrap_result<T>(outcome: crate::Result<T>) -> Reply<T> {
    match outcome {
        Ok(data) => wrap_success(data),
        Err(error) => wrap_coded(&error),
    }
}

/// Convert a caught exception into the generic system-failure reply.
///
/// The reply always carries code 500 and the fixed message, whatever the
/// exception was. The exception itself goes to the default diagnostic
/// sink and is then discarded; its detail never reaches the caller.
pub fn wrap_exception<T>(error: &(dyn StdError + 'static)) -> Reply<T> {
    wrap_exception_with(&DEFAULT_SINK, error)
}

/// Like [`wrap_exception`], recording through the supplied sink
pub fn wrap_exception_with<T>(
    sink: &dyn DiagnosticSink,
    error: &(dyn StdError + 'static),
) -> Reply<T> {
    sink.record(error);
    wrap_system_failure()
}

/// The system-failure reply, without an exception to record
pub fn wrap_system_failure<T>() -> Reply<T> {
    wrap_fail_code(&ReservedCode::SystemException)
}
