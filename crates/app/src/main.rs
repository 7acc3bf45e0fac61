use std::sync::Arc;

use insights::TransactionRecord;
use server::MemoryStore;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "quattrini={level},server={level},insights={level}",
            level = settings.app.level
        ))
        .init();

    let store = Arc::new(MemoryStore::new());
    if let Some(path) = settings.server.data.as_deref() {
        match load_records(path) {
            Ok(records) => {
                tracing::info!("Loaded {} transactions from {path}", records.len());
                store.load(records);
            }
            Err(err) => {
                tracing::error!("failed to load transactions from {path}: {err}");
                return Ok(());
            }
        }
    }

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Ok(());
        }
    };
    if let Err(err) = server::run_with_listener(store, listener).await {
        tracing::error!("server failed: {err}");
    }

    Ok(())
}

fn load_records(
    path: &str,
) -> Result<Vec<TransactionRecord>, Box<dyn std::error::Error + Send + Sync>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
