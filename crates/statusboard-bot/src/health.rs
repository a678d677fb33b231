//! Liveness HTTP endpoint for the hosting platform.
//!
//! `GET /` and `GET /health` answer with a fixed body; `GET /status` reports
//! the connected identity and how many entries are tracked.

use arc_swap::ArcSwapOption;
use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use statusboard_board::BoardStore;
use statusboard_common::ChannelId;
use std::sync::Arc;
use tracing::{error, info};

/// Body returned by the liveness routes.
pub const ALIVE: &str = "Bot is running!";

/// Identity reported before the gateway is ready.
pub const NOT_CONNECTED: &str = "Not connected";

/// Shared state for the liveness endpoint.
#[derive(Clone)]
pub struct HealthState {
    store: Arc<BoardStore>,
    channel_id: ChannelId,
    identity: Arc<ArcSwapOption<String>>,
}

impl HealthState {
    /// Creates state reporting on `store` and `channel_id`, not yet connected.
    pub fn new(store: Arc<BoardStore>, channel_id: ChannelId) -> Self {
        Self {
            store,
            channel_id,
            identity: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Records the identity the bot connected as.
    pub fn set_identity(&self, name: impl Into<String>) {
        self.identity.store(Some(Arc::new(name.into())));
    }

    /// The connected identity, if the gateway is ready.
    pub fn identity(&self) -> Option<Arc<String>> {
        self.identity.load_full()
    }
}

/// Payload of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always `online` while the process answers.
    pub status: &'static str,
    /// Connected identity or [`NOT_CONNECTED`].
    pub bot_name: String,
    /// Number of tracked entries.
    pub games_tracked: usize,
    /// Configured board channel.
    pub channel_id: u64,
}

/// Create the liveness router
pub fn create_health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(alive))
        .route("/status", get(status))
        .with_state(state)
}

async fn alive() -> &'static str {
    ALIVE
}

async fn status(State(state): State<HealthState>) -> Json<StatusResponse> {
    let games_tracked = state.store.load().await.games.len();
    let bot_name = state
        .identity()
        .map_or_else(|| NOT_CONNECTED.to_string(), |name| name.to_string());

    Json(StatusResponse {
        status: "online",
        bot_name,
        games_tracked,
        channel_id: state.channel_id.0,
    })
}

/// Binds `bind_address` and serves the liveness router until the process exits.
pub async fn start_health_server(state: HealthState, bind_address: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Health server listening on {}", bind_address);
    axum::serve(listener, create_health_router(state)).await
}

/// Runs the health server as a background task.
///
/// A bind or serve failure is logged; the bot keeps running without it.
pub fn spawn_health_server(state: HealthState, bind_address: String) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = start_health_server(state, &bind_address).await {
            error!("Health server on {} stopped: {}", bind_address, e);
        }
    })
}
