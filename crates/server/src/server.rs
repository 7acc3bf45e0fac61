use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{TransactionStore, statistics, transactions};

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn TransactionStore>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/insights", get(statistics::get_insights))
        .route("/transactions", post(transactions::record))
        .with_state(state)
}

pub async fn run(store: Arc<dyn TransactionStore>) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(store, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    store: Arc<dyn TransactionStore>,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState { store };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    store: Arc<dyn TransactionStore>,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(store, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
