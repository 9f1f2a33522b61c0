//! Phone link monitor
//!
//! Counts missed heartbeats on the sync channel. A stale link does not
//! expire the weather already shown; it is only reported.

use crate::config::LinkConfig;

/// Default heartbeat window
pub const HEARTBEAT_TIMEOUT_MS: u32 = 3000;
/// Missed windows before the link counts as stale
pub const MAX_MISSED_HEARTBEATS: u8 = 3;

/// Link condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Heard from the phone recently
    Healthy,
    /// Too many heartbeat windows passed in silence
    Stale,
}

/// Heartbeat bookkeeping for the sync link
#[derive(Debug, Clone)]
pub struct LinkMonitor {
    timeout_ms: u32,
    max_missed: u8,
    /// Missed heartbeat count
    missed_heartbeats: u8,
    /// Time since last heartbeat (ms)
    time_since_heartbeat_ms: u32,
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkMonitor {
    /// Create a monitor with the default timing
    pub fn new() -> Self {
        Self::with_config(&LinkConfig::default())
    }

    pub fn with_config(config: &LinkConfig) -> Self {
        Self {
            timeout_ms: config.heartbeat_timeout_ms.max(1),
            max_missed: config.max_missed_heartbeats.max(1),
            missed_heartbeats: 0,
            time_since_heartbeat_ms: 0,
        }
    }

    /// Record traffic from the phone
    pub fn heartbeat_received(&mut self) {
        self.missed_heartbeats = 0;
        self.time_since_heartbeat_ms = 0;
    }

    /// Update time tracking
    ///
    /// # Arguments
    /// - `delta_ms`: Time elapsed since last update
    pub fn update_time(&mut self, delta_ms: u32) {
        self.time_since_heartbeat_ms = self.time_since_heartbeat_ms.saturating_add(delta_ms);

        while self.time_since_heartbeat_ms >= self.timeout_ms {
            self.missed_heartbeats = self.missed_heartbeats.saturating_add(1);
            self.time_since_heartbeat_ms -= self.timeout_ms;
        }
    }

    pub fn status(&self) -> LinkStatus {
        if self.missed_heartbeats >= self.max_missed {
            LinkStatus::Stale
        } else {
            LinkStatus::Healthy
        }
    }

    /// Check if link is healthy
    pub fn is_healthy(&self) -> bool {
        self.status() == LinkStatus::Healthy
    }

    /// Get number of missed heartbeats
    pub fn missed_heartbeats(&self) -> u8 {
        self.missed_heartbeats
    }
}
