//! HTTP surface for the desktop UI.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use tokio::{net::TcpListener, task};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::{
    config::Config,
    data::{GameRecord, HealthSample, LaunchOutcome},
    error::ServerError,
    health::HealthReporter,
    launch::Launcher,
    steam::{SteamCatalog, SteamLocator},
};

/// Everything a request handler needs, constructed once at startup
#[derive(Debug)]
pub struct Service {
    config: Config,
    catalog: SteamCatalog,
    health: HealthReporter,
    launcher: Launcher,
}

impl Service {
    /// Builds a service backed by the real registry, file system, metrics and URI handler
    pub fn new(config: Config) -> Self {
        let mut locator = SteamLocator::default();
        if let Some(path_steam_dir) = &config.steam_root {
            locator = locator.with_override(path_steam_dir);
        }

        Service::with_parts(
            config,
            SteamCatalog::new(locator),
            HealthReporter::default(),
            Launcher::default(),
        )
    }

    pub fn with_parts(
        config: Config,
        catalog: SteamCatalog,
        health: HealthReporter,
        launcher: Launcher,
    ) -> Self {
        Service {
            config,
            catalog,
            health,
            launcher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub type AppState = Arc<Service>;

/// Any origin, method and header, with credentials. The server only listens on loopback.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/play/{game_id}", post(post_play))
        .route("/games", get(get_games))
        .layer(cors_layer())
        .with_state(state)
}

#[tracing::instrument(skip_all)]
async fn get_health(State(service): State<AppState>) -> Json<HealthSample> {
    Json(service.health.sample_health())
}

/// Errors are reported in the body with a 200 status
#[tracing::instrument(skip_all)]
async fn post_play(
    State(service): State<AppState>,
    Path(game_id): Path<String>,
) -> Json<LaunchOutcome> {
    Json(service.launcher.launch(&game_id))
}

#[tracing::instrument(skip_all)]
async fn get_games(State(service): State<AppState>) -> Json<Vec<GameRecord>> {
    let games = task::spawn_blocking(move || service.catalog.list_games())
        .await
        .unwrap_or_else(|e| {
            error!("Listing games did not complete: {e}");
            Vec::new()
        });

    Json(games)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Could not listen for Ctrl-C, running until killed: {e}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}

/// Serves requests on the configured loopback address until Ctrl-C is received
pub async fn serve(service: Service) -> Result<(), ServerError> {
    let addr = service.config().listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("Listening on http://{addr}");

    axum::serve(listener, router(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
