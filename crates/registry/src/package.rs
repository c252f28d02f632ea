//! Package entity.

use chrono::{DateTime, Utc};
use common::TrackingNumber;
use serde::{Deserialize, Serialize};

use crate::event::TrackingEvent;
use crate::status::PackageStatus;

/// Request to register a new package.
///
/// Carries the caller-supplied fields; the registry assigns the tracking
/// number. Nothing is validated here: a non-negative weight and sensible
/// names are the client's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPackage {
    /// Name of the sending party.
    pub sender_name: String,

    /// Postal address of the sending party.
    pub sender_address: String,

    /// Name of the receiving party.
    pub recipient_name: String,

    /// Postal address of the receiving party.
    pub recipient_address: String,

    /// Weight in kilograms.
    pub weight: f64,

    /// Free-text description of the contents.
    pub description: String,
}

impl NewPackage {
    /// Creates a new package request.
    pub fn new(
        sender_name: impl Into<String>,
        sender_address: impl Into<String>,
        recipient_name: impl Into<String>,
        recipient_address: impl Into<String>,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_address: sender_address.into(),
            recipient_name: recipient_name.into(),
            recipient_address: recipient_address.into(),
            weight,
            description: description.into(),
        }
    }
}

/// A package tracked by the registry.
///
/// A package is created once and never destroyed during the process
/// lifetime. After construction the only mutation path is
/// [`Package::update_status`], which appends exactly one tracking event
/// and stamps the last-updated instant. The first entry of the history is
/// always the creation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    tracking_number: TrackingNumber,
    sender_name: String,
    sender_address: String,
    recipient_name: String,
    recipient_address: String,
    weight: f64,
    description: String,
    status: PackageStatus,
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
    history: Vec<TrackingEvent>,
}

impl Package {
    /// Creation event label and description recorded for every package.
    const CREATION_LABEL: &'static str = "Package created";
    const CREATION_DESCRIPTION: &'static str = "Initial package creation";

    /// Constructs a package with status [`PackageStatus::Created`] and a
    /// single initial tracking event.
    pub fn new(tracking_number: TrackingNumber, request: NewPackage) -> Self {
        let now = Utc::now();
        Self {
            tracking_number,
            sender_name: request.sender_name,
            sender_address: request.sender_address,
            recipient_name: request.recipient_name,
            recipient_address: request.recipient_address,
            weight: request.weight,
            description: request.description,
            status: PackageStatus::Created,
            created_at: now,
            last_updated: now,
            history: vec![TrackingEvent::new(
                Self::CREATION_LABEL,
                Self::CREATION_DESCRIPTION,
            )],
        }
    }

    /// Sets the current status and appends one tracking event.
    ///
    /// The event label is the new status's display text and the event
    /// description joins location and free text with a dash. No transition
    /// rules are enforced.
    pub fn update_status(
        &mut self,
        new_status: PackageStatus,
        location: &str,
        description: &str,
    ) {
        self.status = new_status;
        self.last_updated = Utc::now();
        self.history.push(TrackingEvent::new(
            new_status.label(),
            format!("{location} - {description}"),
        ));
    }
}

// Read accessors. The history is lent out as an immutable view so callers
// cannot mutate entity-owned state.
impl Package {
    /// Returns the tracking number.
    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    /// Returns the sender name.
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the sender address.
    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    /// Returns the recipient name.
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Returns the recipient address.
    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }

    /// Returns the weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the contents description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    pub fn status(&self) -> PackageStatus {
        self.status
    }

    /// Returns the creation instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the instant of the most recent status change.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns the tracking history, oldest event first.
    pub fn history(&self) -> &[TrackingEvent] {
        &self.history
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Package[{}] from {} to {} - Status: {}",
            self.tracking_number, self.sender_name, self.recipient_name, self.status
        )
    }
}
