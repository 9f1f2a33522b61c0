//! Sync link health and message routing
//!
//! Detects when the phone has gone quiet and decides what each phone
//! message means for the watch.

pub mod monitor;
pub mod router;

pub use monitor::{LinkMonitor, LinkStatus, HEARTBEAT_TIMEOUT_MS, MAX_MISSED_HEARTBEATS};
pub use router::{route, SyncAction, SyncRouter};
