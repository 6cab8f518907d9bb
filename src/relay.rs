//! Relay port
//!
//! Seam between the HTTP surface and the physical door hardware. The
//! command handlers call [`DoorRelay::apply`] exactly once per
//! successful state write, synchronously, before the response is sent.

use crate::types::DoorState;

/// Hardware collaborator driving the door actuator.
pub trait DoorRelay: Send + Sync {
    /// Drive the physical output to match `state`.
    fn apply(&self, state: DoorState);
}

/// Default relay used when no hardware is wired up: records the
/// transition in the log. A GPIO-backed implementation replaces this
/// behind the same trait on real deployments.
pub struct LogRelay;

impl DoorRelay for LogRelay {
    fn apply(&self, state: DoorState) {
        tracing::info!(%state, "relay driven");
    }
}
