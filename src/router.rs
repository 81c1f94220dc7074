//! Command routing over a closed enumeration.
//!
//! A router is an application-defined enum: one variant per supported
//! command, each bound to exactly one handler type. The binding is fixed at
//! compile time - no runtime registration, no wildcard matching, no
//! fallback handler. Exhaustive matching in `route` makes unroutable
//! commands a compile error rather than a runtime surprise.
//!
//! # Example
//!
//! ```ignore
//! enum SynthCommand {
//!     SetFrequency,
//!     StartSynth,
//!     StopSynth,
//! }
//!
//! impl Router for SynthCommand {
//!     type Context = SynthContext;
//!
//!     const COMMANDS: &'static [&'static str] = &["setFrequency", "startSynth", "stopSynth"];
//!
//!     fn parse(id: &str) -> Option<Self> {
//!         match id {
//!             "setFrequency" => Some(Self::SetFrequency),
//!             "startSynth" => Some(Self::StartSynth),
//!             "stopSynth" => Some(Self::StopSynth),
//!             _ => None,
//!         }
//!     }
//!
//!     fn route(&self) -> InvokeFn<SynthContext> {
//!         match self {
//!             Self::SetFrequency => invoke_handler::<SetFrequency>,
//!             Self::StartSynth => invoke_handler::<StartSynth>,
//!             Self::StopSynth => invoke_handler::<StopSynth>,
//!         }
//!     }
//! }
//! ```

use crate::context::Context;
use crate::handler::InvokeFn;

/// Closed set of command identifiers bound to handlers.
pub trait Router: Sized {
    /// Context shared by every handler in this set.
    type Context: Context;

    /// Every wire identifier in the enumeration.
    ///
    /// Advertised to the host at registration time and used to test
    /// routing totality.
    const COMMANDS: &'static [&'static str];

    /// Parse a wire identifier. Case-sensitive exact match; anything
    /// outside the enumeration is `None` and never reaches a handler.
    fn parse(id: &str) -> Option<Self>;

    /// Resolve this command to its invocation function.
    ///
    /// Total over the enumeration: implementations match exhaustively with
    /// no fallback arm.
    fn route(&self) -> InvokeFn<Self::Context>;
}
