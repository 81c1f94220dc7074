//! Shared mutable context for handler invocations.
//!
//! One context is created when its dispatcher is constructed and lives until
//! the dispatcher is torn down. Handlers mutate it in place; state persists
//! across calls and is never reset between invocations. All externally
//! observable effects of a handler route through context mutation, so
//! [`Context::status`] can always describe current state.

use serde::Serialize;

use crate::error::Result;

/// Running state of the resource a context wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Resource has never been started.
    Uninitialized,
    /// Resource is running.
    Started,
    /// Resource was started and then stopped.
    Stopped,
}

/// Per-dispatcher state shared across all invocations.
///
/// The dispatcher owns the context exclusively; handlers receive a mutable
/// borrow scoped to one call.
pub trait Context {
    /// Snapshot type reported after mutations. Must be codec-representable.
    type Status: Serialize;

    /// Current lifecycle state of the wrapped resource.
    fn state(&self) -> ContextState;

    /// Snapshot of current state.
    ///
    /// Mutating handlers reply with this snapshot rather than a bare
    /// success flag, so the host always sees resulting state.
    fn status(&self) -> Self::Status;

    /// Start the wrapped resource. Must be idempotent.
    ///
    /// Called from the dispatcher's lifecycle path, not the command
    /// protocol. Default is a no-op for contexts without a device.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Stop the wrapped resource. Must be idempotent.
    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}
