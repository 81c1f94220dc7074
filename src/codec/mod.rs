//! Codec module - serialization/deserialization for command payloads.
//!
//! - [`JsonCodec`] - JSON using `serde_json`, the self-describing text
//!   encoding used for host-facing payloads, replies, and errors
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than
//! trait objects. This allows for compile-time codec selection.
//!
//! # Example
//!
//! ```
//! use reax_dispatch::codec::JsonCodec;
//!
//! let encoded = JsonCodec::encode(&"hello").unwrap();
//! let decoded: String = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

mod json;

pub use json::JsonCodec;
