//! Shared types for the EHC package tracking system.

mod types;

pub use types::{InvalidTrackingNumber, TrackingNumber};
