//! Integration tests for the package registry.
//!
//! These tests exercise the full lifecycle through the public API:
//! creation, lookup, search, status updates, aggregation, and concurrent
//! access to the shared collection.

use common::TrackingNumber;
use registry::{NewPackage, PackageRegistry, PackageStatus, SearchQuery};

fn request(sender: &str, recipient: &str) -> NewPackage {
    NewPackage::new(
        sender,
        "12 Sender Lane",
        recipient,
        "34 Recipient Road",
        1.2,
        "Test parcel",
    )
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn package_travels_through_a_full_delivery() {
        let registry = PackageRegistry::new();
        registry.start().await;

        let pkg = registry.create(request("Anna Schmidt", "Bob Jones")).await;
        let tn = pkg.tracking_number().clone();

        let legs = [
            (PackageStatus::PickedUp, "Origin depot", "Collected from sender"),
            (PackageStatus::InTransit, "Berlin Hub", "Departed facility"),
            (PackageStatus::AtSortingFacility, "Hamburg", "Arrived for sorting"),
            (PackageStatus::OutForDelivery, "Hamburg North", "On vehicle"),
            (PackageStatus::Delivered, "Front door", "Signed by recipient"),
        ];
        for (status, location, note) in legs {
            assert!(registry.update_status(&tn, status, location, note).await);
        }

        let delivered = registry.find(&tn).await.unwrap();
        assert_eq!(delivered.status(), PackageStatus::Delivered);
        // Creation event plus one per update.
        assert_eq!(delivered.history().len(), 6);
        assert_eq!(delivered.history()[0].label(), "Package created");
        assert_eq!(delivered.history()[5].label(), "DELIVERED");

        registry.stop();
        assert!(!registry.is_running());
    }

    #[tokio::test]
    async fn delivered_package_can_revert_to_an_earlier_status() {
        let registry = PackageRegistry::new();
        let pkg = registry.create(request("Anna", "Bob")).await;
        let tn = pkg.tracking_number().clone();

        assert!(
            registry
                .update_status(&tn, PackageStatus::Delivered, "Door", "Signed")
                .await
        );
        assert!(
            registry
                .update_status(&tn, PackageStatus::Created, "Origin", "Relabelled")
                .await
        );

        let found = registry.find(&tn).await.unwrap();
        assert_eq!(found.status(), PackageStatus::Created);
        assert_eq!(found.history().len(), 3);
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn wrappers_agree_with_direct_queries() {
        let registry = PackageRegistry::new();
        registry.create(request("Anna", "Bob")).await;
        registry.create(request("Dianne", "Carol")).await;
        registry.create(request("Bob", "Anna")).await;

        let via_wrapper = registry.find_by_sender("ann").await;
        let via_query = registry
            .search(SearchQuery::BySender("ann".to_string()))
            .await;
        assert_eq!(via_wrapper.len(), via_query.len());
        assert_eq!(via_wrapper.len(), 2);
    }

    #[tokio::test]
    async fn searches_on_an_empty_registry_return_empty() {
        let registry = PackageRegistry::new();
        assert!(registry.find_by_sender("anyone").await.is_empty());
        assert!(registry.find_by_recipient("anyone").await.is_empty());
        assert!(
            registry
                .find_by_status(PackageStatus::Delivered)
                .await
                .is_empty()
        );
        assert!(registry.all_packages().await.is_empty());
        assert!(registry.status_summary().await.is_empty());
        assert_eq!(registry.total_count().await, 0);
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_issue_distinct_tracking_numbers() {
        let registry = PackageRegistry::new();

        let mut handles = Vec::new();
        for i in 0..16 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.create(request(&format!("Sender {i}"), "Bob")).await
            }));
        }

        let mut numbers = std::collections::HashSet::new();
        for handle in handles {
            let pkg = handle.await.unwrap();
            assert!(numbers.insert(pkg.tracking_number().clone()));
        }
        assert_eq!(registry.total_count().await, 16);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_updates_on_one_key_both_land() {
        let registry = PackageRegistry::new();
        let pkg = registry.create(request("Anna", "Bob")).await;
        let tn = pkg.tracking_number().clone();

        let a = {
            let registry = registry.clone();
            let tn = tn.clone();
            tokio::spawn(async move {
                registry
                    .update_status(&tn, PackageStatus::InTransit, "Hub A", "Scan")
                    .await
            })
        };
        let b = {
            let registry = registry.clone();
            let tn = tn.clone();
            tokio::spawn(async move {
                registry
                    .update_status(&tn, PackageStatus::HeldAtFacility, "Hub B", "Scan")
                    .await
            })
        };

        assert!(a.await.unwrap());
        assert!(b.await.unwrap());

        // Both events appended; final status is whichever write landed
        // last and event order is unspecified.
        let found = registry.find(&tn).await.unwrap();
        assert_eq!(found.history().len(), 3);
        assert!(matches!(
            found.status(),
            PackageStatus::InTransit | PackageStatus::HeldAtFacility
        ));
    }
}

mod invariants {
    use super::*;

    #[tokio::test]
    async fn map_keys_equal_package_tracking_numbers() {
        let registry = PackageRegistry::new();
        for i in 0..5 {
            registry.create(request(&format!("Sender {i}"), "Bob")).await;
        }

        for pkg in registry.all_packages().await {
            let found = registry.find(pkg.tracking_number()).await.unwrap();
            assert_eq!(found.tracking_number(), pkg.tracking_number());
        }
    }

    #[tokio::test]
    async fn tracking_numbers_parse_under_the_format_invariant() {
        let registry = PackageRegistry::new();
        let pkg = registry.create(request("Anna", "Bob")).await;

        let reparsed = TrackingNumber::parse(pkg.tracking_number().as_str()).unwrap();
        assert_eq!(&reparsed, pkg.tracking_number());
    }
}
