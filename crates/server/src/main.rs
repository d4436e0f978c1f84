// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use linemate::GameState;
use linemate_api::{
    ApiError, ApiResult, BulkAddPlayersRequest, CommandRequest, CommandResponse, ExportResponse,
    StateView, apply_command, build_state_view, bulk_add_players, export_state, import_state,
};
use linemate_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Storage key used by earlier releases; kept so existing saves load.
const DEFAULT_STATE_KEY: &str = "hockey_app_state_v1";

/// Linemate Server - roster, lines and scoreboard for one live game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Key the game snapshot is stored under
    #[arg(long, default_value = DEFAULT_STATE_KEY)]
    state_key: String,
}

/// Application state shared across handlers.
///
/// The in-memory game is the authority. Persistence is written after every
/// change and a failed write never rolls the game back.
#[derive(Clone)]
struct AppState {
    /// The live game.
    game: Arc<Mutex<GameState>>,
    /// Key-value store holding the latest snapshot.
    persistence: Arc<Mutex<Persistence>>,
    /// Key the snapshot is stored under.
    state_key: Arc<str>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } | ApiError::MalformedImport { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Writes the snapshot; failures are logged and otherwise ignored.
async fn persist(app_state: &AppState, game: &GameState) {
    let mut persistence = app_state.persistence.lock().await;
    if let Err(err) = persistence.save_state(&app_state.state_key, game) {
        error!(
            error = %err,
            key = %app_state.state_key,
            "Failed to save game, keeping in-memory state"
        );
    }
}

/// Handler for GET `/state` endpoint.
async fn handle_get_state(AxumState(app_state): AxumState<AppState>) -> Json<StateView> {
    let view: StateView = build_state_view(&*app_state.game.lock().await);
    Json(view)
}

/// Handler for POST `/command` endpoint.
///
/// Applies one command to the live game.
async fn handle_command(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    let mut game = app_state.game.lock().await;

    let result: ApiResult<CommandResponse> = apply_command(&game, req)?;
    if result.response.changed {
        *game = result.new_state;
        persist(&app_state, &game).await;
    }

    Ok(Json(result.response))
}

/// Handler for POST `/players/bulk` endpoint.
///
/// Adds players from pasted or uploaded text.
async fn handle_bulk_add_players(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BulkAddPlayersRequest>,
) -> Result<Json<CommandResponse>, HttpError> {
    let mut game = app_state.game.lock().await;

    let result: ApiResult<CommandResponse> = bulk_add_players(&game, req)?;
    if result.response.changed {
        *game = result.new_state;
        persist(&app_state, &game).await;
    }

    Ok(Json(result.response))
}

/// Handler for GET `/export` endpoint.
///
/// Returns the full snapshot as a JSON download.
async fn handle_export(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    let game = app_state.game.lock().await;
    let export: ExportResponse = export_state(&game, OffsetDateTime::now_utc())?;
    drop(game);

    info!(file_name = %export.file_name, "Exported game");

    let disposition: String = format!("attachment; filename=\"{}\"", export.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, String::from("application/json")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}

/// Handler for POST `/import` endpoint.
///
/// Replaces the live game with the uploaded snapshot. A rejected snapshot
/// leaves the live game untouched.
async fn handle_import(
    AxumState(app_state): AxumState<AppState>,
    body: String,
) -> Result<Json<StateView>, HttpError> {
    let result: ApiResult<StateView> = import_state(&body)?;

    let mut game = app_state.game.lock().await;
    *game = result.new_state;
    persist(&app_state, &game).await;

    Ok(Json(result.response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/state", get(handle_get_state))
        .route("/command", post(handle_command))
        .route("/players/bulk", post(handle_bulk_add_players))
        .route("/export", get(handle_export))
        .route("/import", post(handle_import))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Linemate Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let game: GameState = persistence.load_state(&args.state_key)?;

    let app_state: AppState = AppState {
        game: Arc::new(Mutex::new(game)),
        persistence: Arc::new(Mutex::new(persistence)),
        state_key: Arc::from(args.state_key.as_str()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
