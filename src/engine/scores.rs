//! Chaos score, collapse risk, and flop meter.
//!
//! Each metric is a weighted sum of archetype flags, grades and rates,
//! clamped to [0, 100].

use std::fmt;

use super::clamp_metric;
use crate::types::{Game, Grade, TeamProfile};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const CHAOS_STEPPERZ: f64 = 15.0;
const CHAOS_OMA: f64 = 10.0;
const CHAOS_HEADACHES: f64 = 12.0;
const CHAOS_BRICKSQUAD: f64 = 8.0;
const CHAOS_HITTERZ: f64 = -5.0;

const COLLAPSE_SCRUBS: f64 = 20.0;
const COLLAPSE_HEADACHES: f64 = 15.0;
const COLLAPSE_FORTIFIED: f64 = 10.0;

const FLOP_SLOW_PACE: f64 = 10.0;
const FLOP_PACE_THRESHOLD: f64 = 92.0;
const FLOP_OMA: f64 = 8.0;
const FLOP_HEADACHES: f64 = 12.0;
const FLOP_MOMENTUM_SWING: f64 = 10.0;
const FLOP_MOMENTUM_THRESHOLD: f64 = 40.0;

/// Recent-form contribution of `last3Grade`.
fn last3_weight(grade: Grade) -> f64 {
    match grade {
        Grade::Elite => -5.0,
        Grade::Mid => 0.0,
        Grade::Trash => 10.0,
    }
}

/// Late-game contribution of `q4Grade`. Earlier quarters don't score.
fn q4_weight(grade: Grade) -> f64 {
    match grade {
        Grade::Elite => -3.0,
        Grade::Mid => 0.0,
        Grade::Trash => 5.0,
    }
}

/// `weight` once per team that has the flag.
fn per_team(home: bool, away: bool, weight: f64) -> f64 {
    (home as u8 + away as u8) as f64 * weight
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Aggregate volatility estimate for a matchup.
pub fn compute_chaos_score(home: &TeamProfile, away: &TeamProfile) -> f64 {
    let mut score = 0.0;

    // Volatility archetypes
    score += per_team(home.is_stepperz, away.is_stepperz, CHAOS_STEPPERZ);
    score += per_team(home.is_oma, away.is_oma, CHAOS_OMA);
    score += per_team(home.is_headaches, away.is_headaches, CHAOS_HEADACHES);

    // Shooting volatility
    score += per_team(home.is_bricksquad, away.is_bricksquad, CHAOS_BRICKSQUAD);
    score += per_team(home.is_hitterz, away.is_hitterz, CHAOS_HITTERZ);

    // Form
    score += last3_weight(home.last3_grade) + last3_weight(away.last3_grade);
    score += q4_weight(home.q4_grade) + q4_weight(away.q4_grade);

    score += (home.turnover_rate + away.turnover_rate) / 4.0;
    score += (home.foul_rate + away.foul_rate) / 4.0;

    clamp_metric(score)
}

/// Likelihood that whoever leads squanders the lead.
///
/// Fortified counts for both sides, not only the trailing team.
pub fn compute_collapse_risk(home: &TeamProfile, away: &TeamProfile) -> f64 {
    let mut risk = 0.0;

    risk += per_team(home.is_scrubs, away.is_scrubs, COLLAPSE_SCRUBS);
    risk += per_team(home.is_headaches, away.is_headaches, COLLAPSE_HEADACHES);
    risk += per_team(home.is_fortified, away.is_fortified, COLLAPSE_FORTIFIED);

    risk += (home.turnover_rate + away.turnover_rate) / 5.0;

    clamp_metric(risk)
}

/// Late-game meltdown predictor from pace, fatigue, bench and momentum.
pub fn compute_flop_meter(home: &TeamProfile, away: &TeamProfile, game: &Game) -> f64 {
    let mut risk = 0.0;

    // Slow pace
    if game.pace < FLOP_PACE_THRESHOLD {
        risk += FLOP_SLOW_PACE;
    }

    // Star fatigue
    risk += per_team(home.is_oma, away.is_oma, FLOP_OMA);

    // Bench cold streaks
    risk += per_team(home.is_headaches, away.is_headaches, FLOP_HEADACHES);

    risk += (home.turnover_rate + away.turnover_rate) / 4.0;
    risk += (home.foul_rate + away.foul_rate) / 4.0;

    if game.momentum.abs() > FLOP_MOMENTUM_THRESHOLD {
        risk += FLOP_MOMENTUM_SWING;
    }

    clamp_metric(risk)
}

// ---------------------------------------------------------------------------
// Gauge levels
// ---------------------------------------------------------------------------

/// Band of the chaos meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ChaosLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ChaosLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 25.0 => ChaosLevel::Low,
            s if s < 50.0 => ChaosLevel::Medium,
            s if s < 75.0 => ChaosLevel::High,
            _ => ChaosLevel::Critical,
        }
    }
}

impl fmt::Display for ChaosLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChaosLevel::Low => write!(f, "Low"),
            ChaosLevel::Medium => write!(f, "Medium"),
            ChaosLevel::High => write!(f, "High"),
            ChaosLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Band of the collapse-risk ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum CollapseLevel {
    Safe,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    Critical,
}

impl CollapseLevel {
    pub fn from_risk(risk: f64) -> Self {
        match risk {
            r if r < 20.0 => CollapseLevel::Safe,
            r if r < 40.0 => CollapseLevel::Low,
            r if r < 60.0 => CollapseLevel::Moderate,
            r if r < 80.0 => CollapseLevel::High,
            _ => CollapseLevel::Critical,
        }
    }
}

impl fmt::Display for CollapseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseLevel::Safe => write!(f, "Safe"),
            CollapseLevel::Low => write!(f, "Low Risk"),
            CollapseLevel::Moderate => write!(f, "Moderate Risk"),
            CollapseLevel::High => write!(f, "High Risk"),
            CollapseLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Band of the flop meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlopLevel {
    Safe,
    Caution,
    #[serde(rename = "High Risk")]
    High,
    Critical,
    #[serde(rename = "FLOP ZONE")]
    FlopZone,
}

impl FlopLevel {
    pub fn from_risk(risk: f64) -> Self {
        match risk {
            r if r < 40.0 => FlopLevel::Safe,
            r if r < 60.0 => FlopLevel::Caution,
            r if r < 75.0 => FlopLevel::High,
            r if r < 90.0 => FlopLevel::Critical,
            _ => FlopLevel::FlopZone,
        }
    }
}

impl fmt::Display for FlopLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlopLevel::Safe => write!(f, "Safe"),
            FlopLevel::Caution => write!(f, "Caution"),
            FlopLevel::High => write!(f, "High Risk"),
            FlopLevel::Critical => write!(f, "Critical"),
            FlopLevel::FlopZone => write!(f, "FLOP ZONE"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
