//! JSON codec using `serde_json`.
//!
//! Decoding is schema-driven: field names and types are fixed by the target
//! type. A missing required field is a decode error, never a default-filled
//! value - a handler must not execute with partial input. Handler input
//! types additionally use `#[serde(deny_unknown_fields)]` so a misspelled
//! field is rejected instead of ignored.
//!
//! # Example
//!
//! ```
//! use reax_dispatch::codec::JsonCodec;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Message {
//!     id: u32,
//!     content: String,
//! }
//!
//! let msg = Message { id: 42, content: "hello".to_string() };
//! let encoded = JsonCodec::encode(&msg).unwrap();
//! let decoded: Message = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, msg);
//! ```

use crate::error::{DispatchError, Result};

/// JSON codec for command payloads, replies, and errors.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Encode`] if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(DispatchError::Encode)
    }

    /// Encode a value to an in-memory JSON value.
    ///
    /// Used to erase handler-specific reply types before the final encode.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Encode`] if the value cannot be serialized.
    #[inline]
    pub fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
        serde_json::to_value(value).map_err(DispatchError::Encode)
    }

    /// Decode a JSON string to a value.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedPayload`] if the text is not valid
    /// JSON or does not match type T's schema.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(DispatchError::MalformedPayload)
    }
}
