//! Registration message advertised to the host.
//!
//! Before any command flows, the host learns what a module supports: its
//! command identifiers and the fixed set of outbound event kinds it emits
//! on. The message is a single JSON document.
//!
//! # Example
//!
//! ```ignore
//! let msg = build_registration_message::<SynthCommand>("Synth");
//! assert!(msg.contains("setFrequency"));
//! assert!(msg.contains("reaxResult"));
//! ```

use serde_json::json;

use crate::dispatch::SUPPORTED_EVENTS;
use crate::router::Router;

/// Protocol version string.
pub const PROTOCOL_VERSION: &str = "1.0.0";

/// Build the registration JSON message for router `R`.
///
/// # Arguments
///
/// * `module` - Host-visible module name (e.g. "Synth")
///
/// # Returns
///
/// JSON string ready to be handed to the host at registration time.
pub fn build_registration_message<R: Router>(module: &str) -> String {
    let msg = json!({
        "module": module,
        "version": PROTOCOL_VERSION,
        "commands": R::COMMANDS,
        "events": SUPPORTED_EVENTS,
    });

    serde_json::to_string(&msg).expect("JSON serialization should not fail")
}
