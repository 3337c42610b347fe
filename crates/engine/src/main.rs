//! Cosmere character export - Main entry point.
//!
//! Loads the saved character and writes its JSON and Fantasy Grounds exports.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cosmere_engine::infrastructure::{clock::SystemClock, export, storage::FileStorageProvider};
use cosmere_engine::{CharacterStore, EngineConfig};

fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmere_engine=info,cosmere_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    let storage = Arc::new(FileStorageProvider::new(&config.storage_path));
    tracing::info!(
        storage = %storage.storage_path().display(),
        key = %config.storage_key,
        "Starting Cosmere character export"
    );

    let store = CharacterStore::open(storage, config.storage_key.as_str());

    for issue in store.record().completion_issues() {
        tracing::warn!(%issue, "Character is incomplete");
    }

    let paths = export::write_exports(store.record(), Arc::new(SystemClock::new()), &config.export_dir)
        .with_context(|| format!("writing exports to {}", config.export_dir.display()))?;

    println!("{}", paths.json.display());
    println!("{}", paths.xml.display());
    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
