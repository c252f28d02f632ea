//! Package status lifecycle.

use serde::{Deserialize, Serialize};

/// The status of a package in its delivery lifecycle.
///
/// The set is closed but the transition graph is deliberately open: any
/// status may be set from any other, including moving a delivered package
/// back to an earlier status. Callers that want stricter semantics must
/// enforce them at their own layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PackageStatus {
    /// Package registered, waiting for pickup.
    #[default]
    Created,

    /// Package picked up from the sender.
    PickedUp,

    /// Package moving between facilities.
    InTransit,

    /// Package at a sorting facility.
    AtSortingFacility,

    /// Package on a delivery vehicle.
    OutForDelivery,

    /// Package delivered to the recipient.
    Delivered,

    /// A delivery attempt failed.
    DeliveryAttempted,

    /// Package held at a local facility.
    HeldAtFacility,

    /// Package sent back to the sender.
    ReturnedToSender,

    /// Package lost in transit.
    Lost,

    /// Package damaged.
    Damaged,
}

impl PackageStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [PackageStatus; 11] = [
        PackageStatus::Created,
        PackageStatus::PickedUp,
        PackageStatus::InTransit,
        PackageStatus::AtSortingFacility,
        PackageStatus::OutForDelivery,
        PackageStatus::Delivered,
        PackageStatus::DeliveryAttempted,
        PackageStatus::HeldAtFacility,
        PackageStatus::ReturnedToSender,
        PackageStatus::Lost,
        PackageStatus::Damaged,
    ];

    /// Returns the display label used in tracking event logs.
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Created => "CREATED",
            PackageStatus::PickedUp => "PICKED UP",
            PackageStatus::InTransit => "IN TRANSIT",
            PackageStatus::AtSortingFacility => "AT SORTING FACILITY",
            PackageStatus::OutForDelivery => "OUT FOR DELIVERY",
            PackageStatus::Delivered => "DELIVERED",
            PackageStatus::DeliveryAttempted => "DELIVERY ATTEMPTED",
            PackageStatus::HeldAtFacility => "HELD AT FACILITY",
            PackageStatus::ReturnedToSender => "RETURNED TO SENDER",
            PackageStatus::Lost => "LOST",
            PackageStatus::Damaged => "DAMAGED",
        }
    }

    /// Returns the human-readable description of the status.
    pub fn description(&self) -> &'static str {
        match self {
            PackageStatus::Created => "Package created and ready for pickup",
            PackageStatus::PickedUp => "Package picked up from sender",
            PackageStatus::InTransit => "Package in transit",
            PackageStatus::AtSortingFacility => "Package at sorting facility",
            PackageStatus::OutForDelivery => "Package out for delivery",
            PackageStatus::Delivered => "Package delivered successfully",
            PackageStatus::DeliveryAttempted => "Delivery attempted but failed",
            PackageStatus::HeldAtFacility => "Package held at local facility",
            PackageStatus::ReturnedToSender => "Package returned to sender",
            PackageStatus::Lost => "Package lost in transit",
            PackageStatus::Damaged => "Package damaged",
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
