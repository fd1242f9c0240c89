//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`;
//! the poller writes it and handlers only read.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::engine::{compute_house_bait, ChaosLevel, CollapseLevel};
use crate::types::{
    ChaosError, ChaosTicketRequest, ChaosTicketResponse, Game, GameSummary, League, LiveEvent,
    TeamSide,
};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub games: RwLock<Vec<Game>>,
    pub live_events: RwLock<Vec<LiveEvent>>,
    pub last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(Vec::new()),
            live_events: RwLock::new(Vec::new()),
            last_refresh: RwLock::new(None),
        }
    }

    /// State pre-loaded with games, as if a refresh had just run.
    pub fn with_games(games: Vec<Game>, live_events: Vec<LiveEvent>) -> Self {
        Self {
            games: RwLock::new(games),
            live_events: RwLock::new(live_events),
            last_refresh: RwLock::new(Some(Utc::now())),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub game_count: usize,
    pub avg_chaos_score: f64,
    pub avg_collapse_risk: f64,
    pub chaos_level: ChaosLevel,
    pub collapse_level: CollapseLevel,
    pub last_refresh: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub league: Option<String>,
}

impl IntoResponse for ChaosError {
    fn into_response(self) -> Response {
        let status = match &self {
            ChaosError::GameNotFound(_) => StatusCode::NOT_FOUND,
            ChaosError::MissingProfile { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ChaosError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ChaosError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: None,
    })
}

/// GET /api/health
pub async fn api_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: Some("CHAOS backend is running!"),
    })
}

/// GET /chaos
pub async fn get_chaos(State(state): State<AppState>) -> Json<Vec<GameSummary>> {
    let games = state.games.read().await;
    Json(games.iter().map(GameSummary::from).collect())
}

/// GET /api/games
pub async fn get_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    let games = state.games.read().await;
    Json(games.clone())
}

/// GET /api/games/:id
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<u32>,
) -> Result<Json<Game>, ChaosError> {
    let games = state.games.read().await;
    games
        .iter()
        .find(|g| g.game_id == game_id)
        .cloned()
        .map(Json)
        .ok_or(ChaosError::GameNotFound(game_id))
}

/// GET /api/feed?league=NBA
pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<LiveEvent>>, ChaosError> {
    let league = match query.league.as_deref() {
        None => None,
        Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("all") => None,
        Some(raw) => Some(
            raw.parse::<League>()
                .map_err(|e| ChaosError::InvalidQuery(e.to_string()))?,
        ),
    };

    let events = state.live_events.read().await;
    Ok(Json(
        events
            .iter()
            .filter(|e| league.map_or(true, |l| e.league == l))
            .cloned()
            .collect(),
    ))
}

/// GET /api/overview
pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let games = state.games.read().await;
    let n = games.len();
    let (avg_chaos, avg_collapse) = if n > 0 {
        (
            games.iter().map(|g| g.chaos_score).sum::<f64>() / n as f64,
            games.iter().map(|g| g.collapse_risk).sum::<f64>() / n as f64,
        )
    } else {
        (0.0, 0.0)
    };

    Json(OverviewResponse {
        game_count: n,
        avg_chaos_score: avg_chaos,
        avg_collapse_risk: avg_collapse,
        chaos_level: ChaosLevel::from_score(avg_chaos),
        collapse_level: CollapseLevel::from_risk(avg_collapse),
        last_refresh: *state.last_refresh.read().await,
    })
}

/// POST /chaos-ticket
pub async fn post_chaos_ticket(
    State(state): State<AppState>,
    Json(ticket): Json<ChaosTicketRequest>,
) -> Result<Json<ChaosTicketResponse>, ChaosError> {
    let games = state.games.read().await;
    let game = games
        .iter()
        .find(|g| g.game_id == ticket.game_id)
        .ok_or_else(|| {
            warn!(game_id = ticket.game_id, "Ticket for unknown game");
            ChaosError::GameNotFound(ticket.game_id)
        })?;

    let home = game.home_profile.as_ref().ok_or(ChaosError::MissingProfile {
        game_id: game.game_id,
        side: TeamSide::Home,
    })?;
    let away = game.away_profile.as_ref().ok_or(ChaosError::MissingProfile {
        game_id: game.game_id,
        side: TeamSide::Away,
    })?;

    let response = compute_house_bait(game, home, away, &ticket.wager);

    info!(
        game_id = game.game_id,
        pick_side = %ticket.wager.pick_side,
        pick_type = %ticket.wager.pick_type,
        house_total = ticket.wager.house_total,
        house_spread = ticket.wager.house_spread,
        chaos_score = response.chaos_score,
        flop_risk = response.flop_risk,
        tags = ?response.tags,
        "Ticket scored"
    );

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
