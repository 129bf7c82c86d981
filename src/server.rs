//! HTTP routes for creating games and playing moves.
//!
//! - `POST /games[?board_length=N]` creates a game.
//! - `GET /games[?game_id=N]` lists games, or one game as a one-element list.
//! - `POST /moves?game_id=N` with `x`/`y` plays X, then a random O reply.
//! - `GET /moves?game_id=N[&move_id=K]` lists moves, or one move.

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::registry::GameRegistry;
use axum::body::Body;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::http::Request;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tictac_core::{Game, GameError, GameSummary, MoveSummary, Player};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Side played by the HTTP client.
const HUMAN: Player = Player::X;

/// Side played by the random opponent.
const COMPUTER: Player = Player::O;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    registry: GameRegistry,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// State with an empty registry.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, GameRegistry::new())
    }

    /// State over an existing registry.
    pub fn with_registry(config: ServerConfig, registry: GameRegistry) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    /// The game registry.
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }
}

/// Query parameters of `/games`.
#[derive(Debug, Default, Deserialize)]
pub struct GamesParams {
    board_length: Option<String>,
    game_id: Option<String>,
}

/// Query parameters of `/moves`.
///
/// `x` and `y` are accepted here as well as in a form body.
#[derive(Debug, Default, Deserialize)]
pub struct MovesParams {
    game_id: Option<String>,
    move_id: Option<String>,
    x: Option<String>,
    y: Option<String>,
}

/// Form body of `POST /moves`.
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateForm {
    x: Option<String>,
    y: Option<String>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/moves", get(list_moves).post(make_move))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Non-empty, trimmed parameter value.
fn param(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_game_id(raw: &str) -> Result<usize, ApiError> {
    raw.parse().map_err(|_| ApiError::game_not_found())
}

#[instrument(skip(state))]
async fn create_game(
    State(state): State<AppState>,
    Query(params): Query<GamesParams>,
) -> Result<Json<GameSummary>, ApiError> {
    let invalid = || ApiError::BadRequest("Invalid board length specified".to_string());
    let max = *state.config.max_board_length();
    let board_length = match param(&params.board_length) {
        None => *state.config.default_board_length(),
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|length| (1..=max).contains(length))
            .ok_or_else(invalid)?,
    };

    let summary = state.registry.create(board_length).map_err(|_| invalid())?;
    Ok(Json(summary))
}

#[instrument(skip(state))]
async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GamesParams>,
) -> Result<Json<Vec<GameSummary>>, ApiError> {
    let Some(raw) = param(&params.game_id) else {
        return Ok(Json(state.registry.summaries()));
    };
    let id = parse_game_id(raw)?;
    let summary = state
        .registry
        .with_game(id, |game| GameSummary::from(&*game))
        .ok_or_else(ApiError::game_not_found)?;
    Ok(Json(vec![summary]))
}

#[instrument(skip(state, form))]
async fn make_move(
    State(state): State<AppState>,
    Query(params): Query<MovesParams>,
    form: Result<Form<CoordinateForm>, FormRejection>,
) -> Result<Json<GameSummary>, ApiError> {
    let id = param(&params.game_id).ok_or_else(ApiError::missing_game_id)?;
    let id = parse_game_id(id)?;

    let form = form.map(|Form(f)| f).unwrap_or_default();
    let (x, y) = parse_coordinates(
        param(&form.x).or(param(&params.x)),
        param(&form.y).or(param(&params.y)),
    )?;

    let played = |game: &mut Game| -> Result<GameSummary, GameError> {
        let outcome = game.make_move(x, y, HUMAN)?;
        if !outcome.is_terminal() {
            game.make_computer_move(COMPUTER)?;
        }
        Ok(GameSummary::from(&*game))
    };

    let summary = state
        .registry
        .with_game(id, played)
        .ok_or_else(ApiError::game_not_found)?
        .map_err(|e| ApiError::BadRequest(format!("Invalid move specified: {}", e)))?;

    info!(game_id = id, x, y, game_state = %summary.game_state, "Move played");
    Ok(Json(summary))
}

fn parse_coordinates(x: Option<&str>, y: Option<&str>) -> Result<(i64, i64), ApiError> {
    let (Some(x), Some(y)) = (x, y) else {
        return Err(ApiError::BadRequest(
            "Invalid move specified: no coordinates provided".to_string(),
        ));
    };
    match (x.parse(), y.parse()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(ApiError::BadRequest(format!(
            "Invalid move specified: coordinates ({}, {}) are not integers",
            x, y
        ))),
    }
}

#[instrument(skip(state))]
async fn list_moves(
    State(state): State<AppState>,
    Query(params): Query<MovesParams>,
) -> Result<Json<Vec<MoveSummary>>, ApiError> {
    let id = param(&params.game_id).ok_or_else(ApiError::missing_game_id)?;
    let id = parse_game_id(id)?;

    let index = match param(&params.move_id) {
        None => None,
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            ApiError::BadRequest(format!("Invalid move index provided: {}", raw))
        })?),
    };

    let moves = state
        .registry
        .with_game(id, |game| {
            game.get_moves(index)
                .map(|moves| moves.iter().map(MoveSummary::from).collect::<Vec<_>>())
        })
        .ok_or_else(ApiError::game_not_found)?
        .map_err(|e| ApiError::BadRequest(format!("Invalid move index provided: {}", e)))?;
    Ok(Json(moves))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_ignores_blank_values() {
        assert_eq!(param(&None), None);
        assert_eq!(param(&Some("  ".to_string())), None);
        assert_eq!(param(&Some(" 4 ".to_string())), Some("4"));
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates(Some("1"), Some("-2")), Ok((1, -2)));
        assert!(matches!(
            parse_coordinates(Some("1"), None),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            parse_coordinates(Some("a"), Some("1")),
            Err(ApiError::BadRequest(_))
        ));
    }
}
