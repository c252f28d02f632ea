//! Search queries over the registry.

use serde::{Deserialize, Serialize};

use crate::package::Package;
use crate::status::PackageStatus;

/// A search over the package collection.
///
/// One variant per search kind; [`PackageRegistry::search`] consumes the
/// query with a single match instead of dispatching on a separate
/// kind flag.
///
/// [`PackageRegistry::search`]: crate::registry::PackageRegistry::search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchQuery {
    /// Case-insensitive substring match against the sender name.
    BySender(String),

    /// Case-insensitive substring match against the recipient name.
    ByRecipient(String),

    /// Equality filter on the current status.
    ByStatus(PackageStatus),
}

impl SearchQuery {
    /// Returns true if the package satisfies the query.
    pub fn matches(&self, package: &Package) -> bool {
        match self {
            SearchQuery::BySender(needle) => contains_ignore_case(package.sender_name(), needle),
            SearchQuery::ByRecipient(needle) => {
                contains_ignore_case(package.recipient_name(), needle)
            }
            SearchQuery::ByStatus(status) => package.status() == *status,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
