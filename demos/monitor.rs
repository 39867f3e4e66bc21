//! Telemetry monitoring example
//!
//! Run with: cargo run --example monitor
//!
//! There is no BLE transport in this crate, so the example stands in for
//! one: a producer task replays recorded meCoffee notification payloads
//! into the store while the main loop polls it once per second, the way a
//! dashboard or home-automation entity would.

use mecoffee_ble::{Metric, TelemetryStore};
use std::sync::Arc;
use std::time::Duration;

/// Notification payloads captured from a machine pulling one shot.
const RECORDED_FRAMES: &[&[u8]] = &[
    b"tmp 1200 9300 9250 0 OK",
    b"pid 30000 1500 200 1 OK",
    b"tmp 1300 9300 9275 0 OK",
    b"ver 1.0 whatever",          // unknown tag, logged and skipped
    b"pid 32000 1500 200 1 OK",
    b"tmp 1400 9300 9310 0 OK",
    b"sht 5000 18500 OK",
    b"tmp 1500 9300 9295 0 OK",
];

#[tokio::main]
async fn main() {
    // Initialize logging (minimal)
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("meCoffee Telemetry Monitor");
    println!("==========================\n");

    let store = Arc::new(TelemetryStore::new());

    // Push-style consumer: print every snapshot as it is broadcast.
    let mut updates = store.subscribe();
    tokio::spawn(async move {
        while let Ok(snapshot) = updates.recv().await {
            println!("  push: {snapshot:?}");
        }
    });

    // Stand-in transport: replay one frame every 700 ms.
    let producer_store = store.clone();
    let producer = tokio::spawn(async move {
        for frame in RECORDED_FRAMES {
            tokio::time::sleep(Duration::from_millis(700)).await;
            producer_store.handle_frame(frame);
        }
    });

    // Poll-style consumer on the reference cadence.
    for _ in 0..8 {
        tokio::time::sleep(TelemetryStore::POLL_INTERVAL).await;
        display_telemetry(&store);
    }

    let _ = producer.await;
    display_telemetry(&store);
    println!("\nDone.");
}

fn display_telemetry(store: &TelemetryStore) {
    print!("poll:");
    for metric in Metric::ALL {
        match store.metric(metric) {
            Some(value) => print!("  {} {value:.2}{}", metric.name(), metric.unit()),
            None => print!("  {} --", metric.name()),
        }
    }
    if store.is_stale() {
        print!("  [stale]");
    }
    println!();
}
