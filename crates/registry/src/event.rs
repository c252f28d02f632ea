//! Tracking event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a package's tracking history.
///
/// Events are immutable facts: once appended to a history they are never
/// removed or changed. Ordering within a history is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    timestamp: DateTime<Utc>,
    label: String,
    description: String,
}

impl TrackingEvent {
    /// Creates a new event stamped with the current instant.
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            label: label.into(),
            description: description.into(),
        }
    }

    /// Returns the instant the event was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the event label (a status display text or `"Package created"`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for TrackingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.label,
            self.description
        )
    }
}
