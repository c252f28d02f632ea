//! Demo entry point for the EHC package tracking system.
//!
//! Wires the explicitly constructed services together: account store,
//! session store, and the in-memory package registry. Seeds a few demo
//! packages, then idles until SIGINT/SIGTERM.

mod config;

use accounts::{AccountStore, SessionStore};
use registry::{NewPackage, PackageRegistry, PackageStatus};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::Config;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}

/// Registers a handful of demo packages and moves some of them along
/// their delivery lifecycle.
async fn seed_demo_packages(registry: &PackageRegistry) {
    let first = registry
        .create(NewPackage::new(
            "Anna Schmidt",
            "Hauptstrasse 1, Berlin",
            "Bob Jones",
            "22 Baker Street, London",
            2.5,
            "Books",
        ))
        .await;
    registry
        .update_status(
            first.tracking_number(),
            PackageStatus::PickedUp,
            "Berlin depot",
            "Collected from sender",
        )
        .await;
    registry
        .update_status(
            first.tracking_number(),
            PackageStatus::InTransit,
            "Berlin Hub",
            "Departed facility",
        )
        .await;

    let second = registry
        .create(NewPackage::new(
            "Carol White",
            "5 Elm Avenue, Leeds",
            "Dave Green",
            "9 Oak Road, York",
            0.8,
            "Documents",
        ))
        .await;
    registry
        .update_status(
            second.tracking_number(),
            PackageStatus::Delivered,
            "Front door",
            "Signed by recipient",
        )
        .await;

    registry
        .create(NewPackage::new(
            "Erin Black",
            "3 Pine Close, Dublin",
            "Frank Gray",
            "7 Ash Lane, Cork",
            12.0,
            "Spare parts",
        ))
        .await;
}

#[tokio::main]
async fn main() {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let config = Config::from_env();

    // 3. Construct the services explicitly; nothing is a lazy global.
    let account_store =
        AccountStore::load(&config.accounts_file).expect("failed to load account store");
    tracing::info!(
        accounts = account_store.total_users(),
        path = %config.accounts_file.display(),
        "account store loaded"
    );

    let session_store = SessionStore::new(&config.session_file);
    match session_store
        .restore()
        .expect("failed to read session file")
    {
        Some(session) => {
            tracing::info!(username = %session.username, email = %session.email, "restored session")
        }
        None => tracing::info!("no active session"),
    }

    // 4. Start the registry and seed demo data
    let registry = PackageRegistry::new();
    registry.start().await;
    seed_demo_packages(&registry).await;

    let summary = registry.status_summary().await;
    for status in PackageStatus::ALL {
        if let Some(count) = summary.get(&status) {
            tracing::info!(status = %status, count, "packages");
        }
    }
    tracing::info!(total = registry.total_count().await, "demo data seeded");

    // 5. Idle until shutdown
    shutdown_signal().await;
    registry.stop();

    tracing::debug!(metrics = %metrics_handle.render(), "final metrics");
}
