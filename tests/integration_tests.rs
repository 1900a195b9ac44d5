use cucumber::World;

pub mod common;
pub mod steps;

pub use common::world::SiteWorld;

/// # Folio Integration Tests
///
/// Each feature drives a real [`folio::ViewController`] over the demo
/// portfolio document through a headless browser. Features run one after
/// another; every scenario gets a fresh world.
///
/// Run with: cargo test --test integration_tests
#[tokio::main]
async fn main() {
    init_tracing();
    run_features_sequentially().await;
}

fn init_tracing() {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var("FOLIO_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

async fn run_features_sequentially() {
    let features = [
        "features/navigation.feature",
        "features/menu.feature",
        "features/history.feature",
        "features/sections.feature",
        "features/contact_form.feature",
        "features/scroll_effects.feature",
    ];

    for (i, feature) in features.iter().enumerate() {
        tracing::info!("[{}/{}] Starting {}", i + 1, features.len(), feature);
        SiteWorld::cucumber()
            .fail_on_skipped()
            .run_and_exit(feature)
            .await;
        tracing::info!("[{}/{}] Completed {}", i + 1, features.len(), feature);
    }
}
