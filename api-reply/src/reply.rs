//! The reply envelope returned by every service operation

use serde::{Deserialize, Serialize};

use crate::code::SUCCESS_CODE;

/// The outcome container a service operation hands back to its caller.
///
/// Serializes to the wire shape every consumer depends on:
///
/// ```json
/// { "code": 0, "message": "", "data": { } }
/// ```
///
/// `code == 0` is the sole success discriminator - no separate flag is
/// stored, and no field is validated against another. A reply is plain
/// data: build it through the [`wrap`](crate::wrap_success) functions at
/// the boundary, or incrementally through the setters, and confine each
/// instance to one logical call context. `clone` yields an independent
/// reply; the payload is copied by `T`'s own `Clone`.
///
/// # Example
///
/// ```rust
/// use api_reply::Reply;
///
/// let reply: Reply<u32> = Reply::from_parts(404, "Object Not Found");
/// assert!(!reply.is_success());
/// assert_eq!(reply.message(), Some("Object Not Found"));
/// assert!(reply.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply<T> {
    code: i32,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl<T> Reply<T> {
    /// Create an empty reply: code 0, no message, no payload
    pub fn new() -> Self {
        Reply {
            code: SUCCESS_CODE,
            message: None,
            data: None,
        }
    }

    /// Create a reply from a raw code/message pair, payload unset
    pub fn from_parts(code: i32, message: impl Into<String>) -> Self {
        Reply {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Whether this reply reports success. Only the code is consulted.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the result code
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Get the message, if one is set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Get the payload, if one is set
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the reply and take the payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    // =========================================================================
    // Setters - unconstrained, nothing cross-checks the fields
    // =========================================================================

    /// Set the result code
    pub fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    /// Set the message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Remove the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Set the payload
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
    }

    /// Remove and return the payload
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }
}

// Manual impl: the derived one would require T: Default
impl<T> Default for Reply<T> {
    fn default() -> Self {
        Reply::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_success() {
        let reply: Reply<()> = Reply::new();
        assert!(reply.is_success());
        assert_eq!(reply.code(), 0);
        assert!(reply.message().is_none());
        assert!(reply.data().is_none());
    }

    #[test]
    fn test_from_parts() {
        let reply: Reply<()> = Reply::from_parts(404, "Object Not Found");
        assert!(!reply.is_success());
        assert_eq!(reply.code(), 404);
        assert_eq!(reply.message(), Some("Object Not Found"));
        assert!(reply.data().is_none());
    }

    #[test]
    fn test_success_depends_only_on_code() {
        let mut reply: Reply<&str> = Reply::new();
        reply.set_message("a populated message");
        reply.set_data("a populated payload");
        assert!(reply.is_success());

        reply.set_code(1);
        assert!(!reply.is_success());

        reply.set_code(0);
        assert!(reply.is_success());
    }

    #[test]
    fn test_setters_roundtrip() {
        let mut reply: Reply<String> = Reply::new();
        reply.set_code(200);
        reply.set_message("Processing");
        reply.set_data("Initial data".to_string());

        assert_eq!(reply.code(), 200);
        assert_eq!(reply.message(), Some("Processing"));
        assert_eq!(reply.data().map(String::as_str), Some("Initial data"));

        reply.clear_message();
        assert!(reply.message().is_none());

        assert_eq!(reply.take_data(), Some("Initial data".to_string()));
        assert!(reply.data().is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: Reply<String> = Reply::from_parts(200, "Success");
        original.set_data("d".to_string());

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_code(500);
        copy.set_message("changed");
        copy.take_data();

        assert_eq!(original.code(), 200);
        assert_eq!(original.message(), Some("Success"));
        assert_eq!(original.data().map(String::as_str), Some("d"));
    }

    #[test]
    fn test_into_data() {
        let mut reply: Reply<Vec<u8>> = Reply::new();
        reply.set_data(vec![1, 2, 3]);
        assert_eq!(reply.into_data(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_serialize_wire_shape() {
        let mut reply: Reply<u32> = Reply::new();
        reply.set_message("");
        reply.set_data(7);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 0, "message": "", "data": 7 })
        );
    }

    #[test]
    fn test_serialize_failure_has_null_data() {
        let reply: Reply<u32> = Reply::from_parts(404, "Object Not Found");
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(json, r#"{"code":404,"message":"Object Not Found","data":null}"#);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let reply: Reply<u32> = serde_json::from_str(r#"{"code":500}"#).unwrap();
        assert_eq!(reply.code(), 500);
        assert!(reply.message().is_none());
        assert!(reply.data().is_none());
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let mut reply: Reply<Vec<String>> = Reply::new();
        reply.set_message("");
        reply.set_data(vec!["a".to_string(), "b".to_string()]);

        let json = serde_json::to_string(&reply).unwrap();
        let back: Reply<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reply);
    }
}
