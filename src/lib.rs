//! # reax-dispatch
//!
//! Typed command dispatch for host-to-native bridge modules.
//!
//! A host application sends named, serialized commands to a long-lived native
//! context and receives a typed result or a typed error back on a notification
//! channel. The pieces:
//!
//! - **Codec** (JSON): decodes command payloads, encodes replies and errors
//! - **Context**: mutable state owned by one dispatcher, shared across calls
//! - **Handler**: one typed unit per command, built fresh from each payload
//! - **Router**: a closed command enumeration bound to handlers at compile time
//! - **Dispatcher**: decode → route → invoke → encode → emit
//!
//! ## Example
//!
//! ```ignore
//! use reax_dispatch::{Dispatcher, EventKind};
//!
//! let (mut dispatcher, mut events) = Dispatcher::<SynthCommand>::channel(ctx);
//!
//! dispatcher.dispatch("setFrequency", r#"{"frequency": 440.0}"#);
//!
//! let note = events.try_recv().unwrap();
//! assert_eq!(note.kind, EventKind::Result);
//! ```

pub mod codec;
pub mod context;
pub mod error;
pub mod handler;
pub mod registration;
pub mod router;

mod dispatch;
mod either;

pub use context::{Context, ContextState};
pub use dispatch::{Dispatcher, EventKind, EventSink, Notification, SUPPORTED_EVENTS};
pub use either::Either;
pub use error::{DispatchError, ReaxError};
pub use handler::{Handler, HandlerOutcome, InvokeFn};
pub use router::Router;
