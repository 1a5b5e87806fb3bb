mod assets;

use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    board::{parse_holdings, TileGrid, TileSpec},
    error::BoardError,
    generator::BoardGenerator,
    layout::BoardLayout,
    scoring::{BoardScores, NodeScorer},
    topology::{NodeId, Topology},
};

pub struct AppState {
    topology: Topology,
}

impl AppState {
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }
}

pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
    pub topology: Topology,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub board_data: Vec<TileSpec>,
    /// Omitted means no player context; an empty list means the player holds nothing.
    #[serde(default)]
    pub player_resources: Option<Vec<String>>,
    #[serde(default)]
    pub ports: Option<BTreeMap<NodeId, String>>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub scores: BoardScores,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub board_data: Vec<TileSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RandomBoardParams {
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub enum ApiError {
    NoBoardData,
    BadRequest(String),
    Invalid(BoardError),
    Internal(String),
}

impl From<BoardError> for ApiError {
    fn from(value: BoardError) -> Self {
        ApiError::Invalid(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoBoardData => {
                (StatusCode::BAD_REQUEST, "No board data provided".to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Invalid(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        if status.is_server_error() {
            error!("score request failed: {message}");
        } else {
            warn!("rejected score request: {message}");
        }
        let body = ErrorResponse {
            error: message,
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/calculate-scores/", post(calculate_scores))
        .route("/api/sample-board", get(sample_board))
        .route("/api/random-board", get(random_board))
        .with_state(state)
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let WebServerConfig {
        host,
        port,
        topology,
    } = config;

    let state = Arc::new(AppState::new(topology));
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("settle-scout API live at http://{addr} (Ctrl+C to stop)");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down settle-scout API");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

pub async fn calculate_scores(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    if request.board_data.is_empty() {
        return Err(ApiError::NoBoardData);
    }

    let grid = TileGrid::from_specs(&request.board_data)?;
    let holdings = request
        .player_resources
        .as_ref()
        .map(parse_holdings)
        .transpose()?;
    let topology = match &request.ports {
        Some(ports) => Topology::with_ports(ports.iter().map(|(&node, label)| (node, label)))?,
        None => state.topology.clone(),
    };

    let scores = tokio::task::spawn_blocking(move || {
        NodeScorer::new(topology).score_board(&grid, holdings.as_ref())
    })
    .await
    .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(Json(ScoreResponse {
        scores,
        success: true,
    }))
}

pub async fn sample_board() -> Json<BoardResponse> {
    Json(BoardResponse {
        seed: None,
        board_data: BoardLayout::sample().tiles,
    })
}

pub async fn random_board(Query(params): Query<RandomBoardParams>) -> Json<BoardResponse> {
    let seed = params.seed.unwrap_or_else(rand::random);
    Json(BoardResponse {
        seed: Some(seed),
        board_data: BoardGenerator::new(seed).generate(),
    })
}
