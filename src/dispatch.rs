//! Dispatcher - the host-facing entry point.
//!
//! One dispatcher exclusively owns one long-lived context. `dispatch`
//! parses the command identifier, resolves it through the router, runs the
//! invocation against the context, encodes the outcome, and emits it on the
//! notification channel tagged with a "result" or "error" event kind. The
//! host multiplexes completed calls by listening on that small fixed set of
//! kinds rather than per-call channels.
//!
//! `&mut self` on `dispatch` makes the one-call-at-a-time assumption a
//! compile-time fact for a single owner; wrap the dispatcher in a mutex or
//! an actor task if calls can race.
//!
//! # Example
//!
//! ```ignore
//! let (mut dispatcher, mut events) = Dispatcher::<SynthCommand>::channel(ctx);
//!
//! dispatcher.start();
//! dispatcher.dispatch("startSynth", "{}");
//!
//! let note = events.try_recv().unwrap();
//! assert_eq!(note.kind, EventKind::Result);
//! ```

use tokio::sync::mpsc;

use crate::codec::JsonCodec;
use crate::context::Context;
use crate::either::Either;
use crate::error::DispatchError;
use crate::handler::RawOutcome;
use crate::router::Router;

/// Outbound event kinds. Fixed set, advertised at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Successful invocation; payload is the encoded reply.
    Result,
    /// Failed invocation; payload is an encoded error descriptor, from
    /// either tier (dispatcher-level or handler-level).
    Error,
}

impl EventKind {
    /// Wire name of this event kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Result => "reaxResult",
            EventKind::Error => "reaxError",
        }
    }
}

/// Every outbound event kind, in wire form.
pub const SUPPORTED_EVENTS: [&str; 2] = [EventKind::Result.as_str(), EventKind::Error.as_str()];

/// One outbound notification: an event kind plus its encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Which of the two fixed event kinds this is.
    pub kind: EventKind,
    /// Encoded reply or error descriptor.
    pub payload: String,
}

/// Fire-and-forget sender side of the notification channel.
///
/// Emission never blocks and never retries; if the host has hung up, the
/// notification is logged and dropped.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl EventSink {
    /// Create a sink and the receiver the host listens on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emit one notification.
    pub fn emit(&self, kind: EventKind, payload: String) {
        if self.tx.send(Notification { kind, payload }).is_err() {
            tracing::debug!("notification receiver dropped, discarding {} event", kind.as_str());
        }
    }
}

/// Host-facing dispatcher bound to one router and one context.
pub struct Dispatcher<R: Router> {
    ctx: R::Context,
    events: EventSink,
}

impl<R: Router> Dispatcher<R> {
    /// Create a dispatcher emitting on an existing sink.
    pub fn new(ctx: R::Context, events: EventSink) -> Self {
        Self { ctx, events }
    }

    /// Create a dispatcher together with its notification receiver.
    pub fn channel(ctx: R::Context) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (events, rx) = EventSink::channel();
        (Self::new(ctx, events), rx)
    }

    /// Read access to the owned context.
    pub fn context(&self) -> &R::Context {
        &self.ctx
    }

    /// Dispatch one command. The outcome goes out on the notification
    /// channel, not a return value.
    ///
    /// Unknown identifiers and undecodable payloads are dispatcher-level
    /// errors: no handler is constructed and the context is untouched.
    pub fn dispatch(&mut self, id: &str, args: &str) {
        let (kind, payload) = match self.run(id, args) {
            Ok(Either::Left(reply)) => match JsonCodec::encode(&reply) {
                Ok(payload) => (EventKind::Result, payload),
                Err(e) => (EventKind::Error, encode_descriptor(&e)),
            },
            Ok(Either::Right(err)) => match JsonCodec::encode(&err) {
                Ok(payload) => (EventKind::Error, payload),
                Err(e) => (EventKind::Error, encode_descriptor(&e)),
            },
            Err(e) => (EventKind::Error, encode_descriptor(&e)),
        };
        self.events.emit(kind, payload);
    }

    fn run(&mut self, id: &str, args: &str) -> crate::error::Result<RawOutcome> {
        let command =
            R::parse(id).ok_or_else(|| DispatchError::UnknownCommand(id.to_string()))?;
        let invoke = command.route();
        invoke(&mut self.ctx, args)
    }

    /// Start the underlying resource. Best-effort: failures are logged,
    /// never surfaced to the host.
    pub fn start(&mut self) {
        if let Err(e) = self.ctx.start() {
            tracing::warn!("failed to start device: {}", e);
        }
    }

    /// Stop the underlying resource. Best-effort, like [`start`](Self::start).
    pub fn stop(&mut self) {
        if let Err(e) = self.ctx.stop() {
            tracing::warn!("failed to stop device: {}", e);
        }
    }
}

/// Encode a dispatcher-level error as a host-facing descriptor.
fn encode_descriptor(err: &DispatchError) -> String {
    // ReaxError is two strings; encoding it cannot realistically fail, but
    // the fallback keeps the error channel total.
    JsonCodec::encode(&err.to_descriptor()).unwrap_or_else(|_| {
        r#"{"code":"encodeFailure","message":"failed to encode error descriptor"}"#.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Context, ContextState};
    use crate::error::ReaxError;
    use crate::handler::{invoke_handler, Handler, HandlerOutcome, InvokeFn};
    use serde::Deserialize;

    struct Relay {
        closed: bool,
        fail_lifecycle: bool,
        lifecycle_calls: u32,
    }

    impl Relay {
        fn new() -> Self {
            Self {
                closed: false,
                fail_lifecycle: false,
                lifecycle_calls: 0,
            }
        }
    }

    impl Context for Relay {
        type Status = bool;

        fn state(&self) -> ContextState {
            if self.closed {
                ContextState::Started
            } else {
                ContextState::Stopped
            }
        }

        fn status(&self) -> bool {
            self.closed
        }

        fn start(&mut self) -> crate::error::Result<()> {
            self.lifecycle_calls += 1;
            if self.fail_lifecycle {
                return Err(DispatchError::Device("relay jammed".to_string()));
            }
            self.closed = true;
            Ok(())
        }

        fn stop(&mut self) -> crate::error::Result<()> {
            self.lifecycle_calls += 1;
            if self.fail_lifecycle {
                return Err(DispatchError::Device("relay jammed".to_string()));
            }
            self.closed = false;
            Ok(())
        }
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Toggle {}

    impl Handler for Toggle {
        type Context = Relay;
        type Reply = bool;

        fn invoke(self, ctx: &mut Relay) -> HandlerOutcome<bool> {
            ctx.closed = !ctx.closed;
            Either::Left(ctx.status())
        }
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Reject {}

    impl Handler for Reject {
        type Context = Relay;
        type Reply = bool;

        fn invoke(self, _ctx: &mut Relay) -> HandlerOutcome<bool> {
            Either::Right(ReaxError::new("alwaysRejects", "this command always fails"))
        }
    }

    enum RelayCommand {
        Toggle,
        Reject,
    }

    impl Router for RelayCommand {
        type Context = Relay;

        const COMMANDS: &'static [&'static str] = &["toggle", "reject"];

        fn parse(id: &str) -> Option<Self> {
            match id {
                "toggle" => Some(Self::Toggle),
                "reject" => Some(Self::Reject),
                _ => None,
            }
        }

        fn route(&self) -> InvokeFn<Relay> {
            match self {
                Self::Toggle => invoke_handler::<Toggle>,
                Self::Reject => invoke_handler::<Reject>,
            }
        }
    }

    fn recv_one(rx: &mut mpsc::UnboundedReceiver<Notification>) -> Notification {
        let note = rx.try_recv().expect("expected exactly one notification");
        assert!(rx.try_recv().is_err(), "expected no further notifications");
        note
    }

    #[test]
    fn test_dispatch_emits_result() {
        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.dispatch("toggle", "{}");

        let note = recv_one(&mut rx);
        assert_eq!(note.kind, EventKind::Result);
        assert_eq!(note.payload, "true");
        assert!(dispatcher.context().closed);
    }

    #[test]
    fn test_unknown_command_emits_one_error_and_skips_handlers() {
        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.dispatch("bogus", "{}");

        let note = recv_one(&mut rx);
        assert_eq!(note.kind, EventKind::Error);

        let descriptor: ReaxError = serde_json::from_str(&note.payload).unwrap();
        assert_eq!(descriptor.code, "unknownCommand");
        assert!(!dispatcher.context().closed, "context must be untouched");
    }

    #[test]
    fn test_malformed_payload_is_dispatcher_tier() {
        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.dispatch("toggle", r#"{"stray": 1}"#);

        let note = recv_one(&mut rx);
        assert_eq!(note.kind, EventKind::Error);

        let descriptor: ReaxError = serde_json::from_str(&note.payload).unwrap();
        assert_eq!(descriptor.code, "malformedPayload");
        assert!(!dispatcher.context().closed);
    }

    #[test]
    fn test_handler_error_is_domain_tier() {
        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.dispatch("reject", "{}");

        let note = recv_one(&mut rx);
        assert_eq!(note.kind, EventKind::Error);

        let err: ReaxError = serde_json::from_str(&note.payload).unwrap();
        assert_eq!(err.code, "alwaysRejects");
    }

    #[test]
    fn test_lifecycle_failures_are_swallowed() {
        let mut relay = Relay::new();
        relay.fail_lifecycle = true;

        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(relay);

        dispatcher.start();
        dispatcher.stop();

        // Logged only: nothing reaches the host.
        assert!(rx.try_recv().is_err());
        assert_eq!(dispatcher.context().lifecycle_calls, 2);
    }

    #[test]
    fn test_lifecycle_delegates_to_context() {
        let (mut dispatcher, _rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.start();
        assert_eq!(dispatcher.context().state(), ContextState::Started);

        dispatcher.stop();
        assert_eq!(dispatcher.context().state(), ContextState::Stopped);
    }

    #[test]
    fn test_emit_after_receiver_dropped_does_not_panic() {
        let (mut dispatcher, rx) = Dispatcher::<RelayCommand>::channel(Relay::new());
        drop(rx);

        dispatcher.dispatch("toggle", "{}");
        assert!(dispatcher.context().closed, "dispatch still ran");
    }

    #[test]
    fn test_supported_events() {
        assert_eq!(SUPPORTED_EVENTS, ["reaxResult", "reaxError"]);
        assert_eq!(EventKind::Result.as_str(), "reaxResult");
        assert_eq!(EventKind::Error.as_str(), "reaxError");
    }

    #[test]
    fn test_state_persists_across_dispatches() {
        let (mut dispatcher, mut rx) = Dispatcher::<RelayCommand>::channel(Relay::new());

        dispatcher.dispatch("toggle", "{}");
        assert_eq!(recv_one(&mut rx).payload, "true");

        dispatcher.dispatch("toggle", "{}");
        assert_eq!(recv_one(&mut rx).payload, "false");
    }
}
