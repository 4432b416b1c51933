//! Per-conversation session data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only datum a conversation keeps: the last area entered, in square meters.
///
/// An area of 0 means "unset". Values that are zero or negative are stored as
/// entered but never satisfy [`SessionArea::is_set`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionArea {
    pub area: f64,
    pub updated_at: DateTime<Utc>,
}

impl SessionArea {
    pub fn new() -> Self {
        Self {
            area: 0.0,
            updated_at: Utc::now(),
        }
    }

    /// Whether a quote can be computed from this session
    pub fn is_set(&self) -> bool {
        self.area > 0.0
    }

    pub fn set(&mut self, area: f64) {
        self.area = area;
        self.touch();
    }

    pub fn reset(&mut self) {
        self.area = 0.0;
        self.touch();
    }

    /// Mark the session as used now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether the session has been idle for longer than `ttl_seconds`
    pub fn is_expired(&self, ttl_seconds: u64, now: DateTime<Utc>) -> bool {
        if ttl_seconds == 0 {
            return false;
        }
        let idle = now.signed_duration_since(self.updated_at);
        idle.num_seconds() >= ttl_seconds as i64
    }
}

impl Default for SessionArea {
    fn default() -> Self {
        Self::new()
    }
}
