//! Deterministic in-memory feed.
//!
//! Serves a fixed pair of games with full team profiles and four canned
//! live-feed headlines. No network access.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::debug;

use super::GameSource;
use crate::types::{Game, Grade, League, LiveEvent, TeamProfile};

pub struct MockFeed {
    games: Vec<Game>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self { games: seed_games() }
    }

    /// A feed serving the given games instead of the default seed.
    pub fn with_games(games: Vec<Game>) -> Self {
        Self { games }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameSource for MockFeed {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_games(&self) -> Result<Vec<Game>> {
        debug!(count = self.games.len(), "Serving mock games");
        Ok(self.games.clone())
    }

    fn live_events(&self) -> Vec<LiveEvent> {
        let now = Utc::now();
        let headlines = [
            (League::Nfl, "Super Bowl LX - Live Coverage", 0),
            (League::Nba, "Lakers vs Celtics - Q4 Updates", 5),
            (League::Ncaa, "March Madness - Elite Eight Preview", 10),
            (League::Espn, "College Football Playoff Analysis", 15),
        ];

        headlines
            .into_iter()
            .map(|(league, title, minutes_ago)| LiveEvent {
                id: uuid::Uuid::new_v4().to_string(),
                league,
                title: title.to_string(),
                timestamp: now - Duration::minutes(minutes_ago),
                status: "LIVE".to_string(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn seed_games() -> Vec<Game> {
    vec![
        Game {
            game_id: 1,
            home_team: "Team A".into(),
            away_team: "Team B".into(),
            home_score: 72,
            away_score: 68,
            chaos_score: 0.0,
            collapse_risk: 0.0,
            pace: 96.0,
            momentum: 22.0,
            quarter: 3,
            time_remaining: "5:32".into(),
            events: vec![
                "Team A 8-0 run".into(),
                "Team B star to bench with 4 fouls".into(),
            ],
            home_profile: Some(TeamProfile {
                is_stepperz: true,
                is_oma: true,
                last3_grade: Grade::Elite,
                q1_grade: Grade::Elite,
                q2_grade: Grade::Mid,
                q3_grade: Grade::Mid,
                q4_grade: Grade::Trash,
                home_rating: 78.0,
                away_rating: 64.0,
                foul_rate: 18.0,
                turnover_rate: 13.0,
                ..TeamProfile::neutral("team-a", "Team A")
            }),
            away_profile: Some(TeamProfile {
                is_bricksquad: true,
                is_fortified: true,
                last3_grade: Grade::Mid,
                q1_grade: Grade::Trash,
                q2_grade: Grade::Mid,
                q3_grade: Grade::Elite,
                q4_grade: Grade::Mid,
                home_rating: 61.0,
                away_rating: 55.0,
                foul_rate: 21.0,
                turnover_rate: 15.0,
                ..TeamProfile::neutral("team-b", "Team B")
            }),
        },
        Game {
            game_id: 2,
            home_team: "Team C".into(),
            away_team: "Team D".into(),
            home_score: 81,
            away_score: 79,
            chaos_score: 0.0,
            collapse_risk: 0.0,
            pace: 89.0,
            momentum: -47.0,
            quarter: 4,
            time_remaining: "0:45".into(),
            events: vec!["Team D trims lead to 2".into()],
            home_profile: Some(TeamProfile {
                is_scrubs: true,
                is_headaches: true,
                last3_grade: Grade::Trash,
                q1_grade: Grade::Elite,
                q2_grade: Grade::Elite,
                q3_grade: Grade::Mid,
                q4_grade: Grade::Trash,
                home_rating: 70.0,
                away_rating: 48.0,
                foul_rate: 20.0,
                turnover_rate: 16.0,
                ..TeamProfile::neutral("team-c", "Team C")
            }),
            away_profile: Some(TeamProfile {
                is_hitterz: true,
                is_fortified: true,
                last3_grade: Grade::Mid,
                q1_grade: Grade::Mid,
                q2_grade: Grade::Trash,
                q3_grade: Grade::Mid,
                q4_grade: Grade::Elite,
                home_rating: 66.0,
                away_rating: 59.0,
                foul_rate: 17.0,
                turnover_rate: 11.0,
                ..TeamProfile::neutral("team-d", "Team D")
            }),
        },
    ]
}
