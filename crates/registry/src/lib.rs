//! Package registry and status lifecycle for the EHC tracking system.
//!
//! This crate provides the core tracking model:
//! - PackageStatus lifecycle enumeration
//! - TrackingEvent append-only history records
//! - Package entity owning its event log
//! - PackageRegistry service for creation, lookup, search, and updates

pub mod event;
pub mod package;
pub mod registry;
pub mod search;
pub mod status;

pub use event::TrackingEvent;
pub use package::{NewPackage, Package};
pub use registry::PackageRegistry;
pub use search::SearchQuery;
pub use status::PackageStatus;
