//! Handler trait and typed invocation.
//!
//! A handler is one typed unit per command: stateless, deserialized fresh
//! from each payload, consumed by `invoke`, borrowing the context mutably
//! for exactly one call. Permitted side effects are reads and mutations of
//! the shared context - nothing else - so `Context::status()` can always
//! describe the result.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Deserialize)]
//! #[serde(deny_unknown_fields)]
//! struct SetFrequency {
//!     frequency: f64,
//! }
//!
//! impl Handler for SetFrequency {
//!     type Context = SynthContext;
//!     type Reply = SynthStatus;
//!
//!     fn invoke(self, ctx: &mut SynthContext) -> HandlerOutcome<SynthStatus> {
//!         ctx.oscillator.frequency = self.frequency;
//!         Either::Left(ctx.status())
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec::JsonCodec;
use crate::context::Context;
use crate::either::Either;
use crate::error::{ReaxError, Result};

/// Outcome of one handler invocation: a typed reply or a domain error.
pub type HandlerOutcome<R> = Either<R, ReaxError>;

/// Outcome with the reply type erased to a JSON value.
///
/// Routers deal in this shape so one invoke signature covers handlers with
/// different reply types.
pub type RawOutcome = Either<Value, ReaxError>;

/// Executable invocation bound to one command: decode, invoke, erase.
pub type InvokeFn<C> = fn(&mut C, &str) -> Result<RawOutcome>;

/// One typed command implementation.
///
/// Must be total: for every reachable context state, `invoke` returns one
/// of the two outcome variants. Repeated lifecycle-style commands (start on
/// a started resource, stop on a stopped one) are idempotent no-ops
/// reflected accurately in the status snapshot, not errors.
pub trait Handler: DeserializeOwned {
    /// Context type this handler mutates.
    type Context: Context;
    /// Reply type on success. Must be codec-representable.
    type Reply: Serialize;

    /// Run the command against the shared context.
    fn invoke(self, ctx: &mut Self::Context) -> HandlerOutcome<Self::Reply>;
}

/// Decode `raw` into `H`, invoke it, and erase the reply type.
///
/// A decode failure is a dispatcher-level error: the handler is never
/// constructed and the context is never touched. Generic so that
/// `invoke_handler::<H>` coerces to an [`InvokeFn`] in a router's dispatch
/// table.
pub fn invoke_handler<H: Handler>(ctx: &mut H::Context, raw: &str) -> Result<RawOutcome> {
    let handler: H = JsonCodec::decode(raw)?;
    match handler.invoke(ctx) {
        Either::Left(reply) => Ok(Either::Left(JsonCodec::to_value(&reply)?)),
        Either::Right(err) => Ok(Either::Right(err)),
    }
}
