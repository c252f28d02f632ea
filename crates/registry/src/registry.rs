//! The package registry service.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use common::TrackingNumber;
use tokio::sync::RwLock;

use crate::package::{NewPackage, Package};
use crate::search::SearchQuery;
use crate::status::PackageStatus;

/// In-memory registry owning every tracked package.
///
/// The registry is the only owner of package state; lookups hand out
/// clones, never references into the map. Individual operations are
/// atomic under the map lock, but multi-step sequences (find then update)
/// are not atomic as a unit. All state is memory-resident and lost at
/// process end.
///
/// Cloning the registry is cheap and yields a handle to the same
/// underlying collection.
#[derive(Clone, Default)]
pub struct PackageRegistry {
    packages: Arc<RwLock<HashMap<TrackingNumber, Package>>>,
    running: Arc<AtomicBool>,
}

impl PackageRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new package and returns it.
    ///
    /// Generates a tracking number unique within the registry's lifetime,
    /// re-drawing on collision. Always succeeds; field validation is a
    /// client concern.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, request: NewPackage) -> Package {
        let mut packages = self.packages.write().await;
        let tracking_number = Self::generate_tracking_number(&packages);
        let package = Package::new(tracking_number.clone(), request);
        packages.insert(tracking_number.clone(), package.clone());

        metrics::counter!("packages_created_total").increment(1);
        tracing::info!(%tracking_number, "package created");
        package
    }

    /// Looks up a package by exact tracking number.
    pub async fn find(&self, tracking_number: &TrackingNumber) -> Option<Package> {
        self.packages.read().await.get(tracking_number).cloned()
    }

    /// Returns all packages matching the query, in map iteration order.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: SearchQuery) -> Vec<Package> {
        self.packages
            .read()
            .await
            .values()
            .filter(|pkg| query.matches(pkg))
            .cloned()
            .collect()
    }

    /// Returns packages whose sender name contains the needle,
    /// case-insensitively.
    pub async fn find_by_sender(&self, needle: &str) -> Vec<Package> {
        self.search(SearchQuery::BySender(needle.to_string())).await
    }

    /// Returns packages whose recipient name contains the needle,
    /// case-insensitively.
    pub async fn find_by_recipient(&self, needle: &str) -> Vec<Package> {
        self.search(SearchQuery::ByRecipient(needle.to_string()))
            .await
    }

    /// Returns packages currently in the given status.
    pub async fn find_by_status(&self, status: PackageStatus) -> Vec<Package> {
        self.search(SearchQuery::ByStatus(status)).await
    }

    /// Updates the status of a package, appending one tracking event.
    ///
    /// Returns false if the tracking number is unknown; a missing package
    /// is a reported outcome, not an error.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        tracking_number: &TrackingNumber,
        new_status: PackageStatus,
        location: &str,
        description: &str,
    ) -> bool {
        let mut packages = self.packages.write().await;
        match packages.get_mut(tracking_number) {
            Some(package) => {
                package.update_status(new_status, location, description);
                metrics::counter!("status_updates_total").increment(1);
                tracing::info!(%tracking_number, status = %new_status, "status updated");
                true
            }
            None => {
                tracing::warn!(%tracking_number, "status update for unknown tracking number");
                false
            }
        }
    }

    /// Returns a snapshot copy of every package.
    pub async fn all_packages(&self) -> Vec<Package> {
        self.packages.read().await.values().cloned().collect()
    }

    /// Groups the collection by current status.
    ///
    /// Statuses with no packages are absent from the map; the counts
    /// always sum to [`PackageRegistry::total_count`].
    pub async fn status_summary(&self) -> HashMap<PackageStatus, u64> {
        let packages = self.packages.read().await;
        let mut summary = HashMap::new();
        for package in packages.values() {
            *summary.entry(package.status()).or_insert(0) += 1;
        }
        summary
    }

    /// Returns the number of tracked packages.
    pub async fn total_count(&self) -> usize {
        self.packages.read().await.len()
    }

    /// Marks the registry as running and logs a startup notice.
    pub async fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
        tracing::info!(
            total_packages = self.total_count().await,
            "EHC registry started"
        );
    }

    /// Marks the registry as stopped and logs a shutdown notice.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        tracing::info!("EHC registry stopped");
    }

    /// Returns true between [`PackageRegistry::start`] and
    /// [`PackageRegistry::stop`].
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn generate_tracking_number(packages: &HashMap<TrackingNumber, Package>) -> TrackingNumber {
        let mut rng = rand::rng();
        loop {
            let candidate = TrackingNumber::random(&mut rng);
            if !packages.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
