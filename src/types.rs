//! Shared types for the CHAOS service.
//!
//! The engine, feed, and dashboard all depend on these. Wire names are
//! camelCase so the dashboard page and any external caller see the same
//! shapes the ticket endpoint accepts and returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::FlopLevel;

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

/// Performance grade used for recent form and per-quarter grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Elite,
    #[default]
    Mid,
    Trash,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Elite => write!(f, "elite"),
            Grade::Mid => write!(f, "mid"),
            Grade::Trash => write!(f, "trash"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elite" => Ok(Grade::Elite),
            "mid" => Ok(Grade::Mid),
            "trash" => Ok(Grade::Trash),
            other => Err(anyhow::anyhow!("Unknown grade: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Team profile
// ---------------------------------------------------------------------------

/// Per-team archetype and performance descriptor.
///
/// Every field is an independent input from the data source; nothing here is
/// derived from anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub team_id: String,
    pub team_name: String,

    /// One Man Army
    pub is_oma: bool,
    /// Can't hold leads
    pub is_scrubs: bool,
    /// Blowout + over-smash
    pub is_stepperz: bool,
    /// Slowdown + fake comebacks
    pub is_headaches: bool,
    /// Poor shooting floor
    pub is_bricksquad: bool,
    /// Good shooting floor
    pub is_hitterz: bool,
    /// Comeback from +15
    pub is_fortified: bool,

    /// 0–100
    pub home_rating: f64,
    /// 0–100
    pub away_rating: f64,

    pub last3_grade: Grade,
    pub q1_grade: Grade,
    pub q2_grade: Grade,
    pub q3_grade: Grade,
    pub q4_grade: Grade,

    /// Fouls per 100 possessions
    pub foul_rate: f64,
    /// Turnovers per 100 possessions
    pub turnover_rate: f64,
}

impl TeamProfile {
    /// A profile with no archetypes set, mid grades and zero rates.
    pub fn neutral(team_id: &str, team_name: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            home_rating: 50.0,
            away_rating: 50.0,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Snapshot of a contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: u32,

    pub home_team: String,
    pub away_team: String,

    pub home_score: u32,
    pub away_score: u32,

    /// 0–100, as last published by the poller
    pub chaos_score: f64,
    /// 0–100, as last published by the poller
    pub collapse_risk: f64,

    /// Possessions per 48
    pub pace: f64,
    /// -100 to +100
    pub momentum: f64,
    /// 1–4
    pub quarter: u8,
    /// "5:32", "0:45", etc.
    pub time_remaining: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_profile: Option<TeamProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_profile: Option<TeamProfile>,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} - {} {} (Q{} {} | chaos {:.1} | collapse {:.1})",
            self.game_id,
            self.home_team,
            self.home_score,
            self.away_score,
            self.away_team,
            self.quarter,
            self.time_remaining,
            self.chaos_score,
            self.collapse_risk,
        )
    }
}

/// Row of the `/chaos` game list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub chaos_score: f64,
    pub collapse_risk: f64,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.game_id,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            home_score: game.home_score,
            away_score: game.away_score,
            chaos_score: game.chaos_score,
            collapse_risk: game.collapse_risk,
        }
    }
}

// ---------------------------------------------------------------------------
// Wager / ticket
// ---------------------------------------------------------------------------

/// Which side the ticket backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickSide {
    Home,
    Away,
}

impl fmt::Display for PickSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickSide::Home => write!(f, "home"),
            PickSide::Away => write!(f, "away"),
        }
    }
}

/// Bet type on the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickType {
    Spread,
    #[serde(rename = "ml", alias = "moneyline")]
    Moneyline,
    Total,
}

impl fmt::Display for PickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickType::Spread => write!(f, "spread"),
            PickType::Moneyline => write!(f, "ml"),
            PickType::Total => write!(f, "total"),
        }
    }
}

/// The wagered line a ticket is scored against.
///
/// `pick_side` and `pick_type` travel with the ticket for display and logging
/// only; no scoring formula reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerInput {
    pub house_total: f64,
    pub house_spread: f64,
    pub pick_side: PickSide,
    pub pick_type: PickType,
}

/// Body of `POST /chaos-ticket`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaosTicketRequest {
    pub game_id: u32,
    #[serde(flatten)]
    pub wager: WagerInput,
}

/// Four over/under ranges around the house total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalBand {
    pub low: (f64, f64),
    pub mid: (f64, f64),
    pub high: (f64, f64),
    pub insane: (f64, f64),
}

/// Range around the house spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadBand {
    pub min: f64,
    pub max: f64,
}

/// Scored ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaosTicketResponse {
    pub success: bool,

    pub chaos_score: f64,
    pub collapse_risk: f64,
    pub flop_risk: f64,
    pub flop_level: FlopLevel,

    pub total_band: TotalBand,
    pub spread_band: SpreadBand,

    pub tags: Vec<String>,
    pub notes: Vec<String>,
}

// ---------------------------------------------------------------------------
// Live feed
// ---------------------------------------------------------------------------

/// Outlet a live feed entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Espn,
    Nfl,
    Nba,
    Ncaa,
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            League::Espn => write!(f, "ESPN"),
            League::Nfl => write!(f, "NFL"),
            League::Nba => write!(f, "NBA"),
            League::Ncaa => write!(f, "NCAA"),
        }
    }
}

/// Case-insensitive, used by the `?league=` filter.
impl std::str::FromStr for League {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ESPN" => Ok(League::Espn),
            "NFL" => Ok(League::Nfl),
            "NBA" => Ok(League::Nba),
            "NCAA" => Ok(League::Ncaa),
            other => Err(anyhow::anyhow!("Unknown league: {other}")),
        }
    }
}

/// One entry in the mock live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEvent {
    pub id: String,
    pub league: League,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Which side of a game a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Away,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => write!(f, "home"),
            TeamSide::Away => write!(f, "away"),
        }
    }
}

/// Service-level errors. The scoring engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ChaosError {
    #[error("Game not found: {0}")]
    GameNotFound(u32),

    #[error("Game {game_id} has no {side} team profile")]
    MissingProfile { game_id: u32, side: TeamSide },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
