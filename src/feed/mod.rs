//! Game feed sources.
//!
//! Defines the `GameSource` trait the poller pulls from, plus the mock feed
//! that stands in for a live sports-data backend.

pub mod mock;
pub mod poller;

use anyhow::Result;
use async_trait::async_trait;

use crate::engine::{compute_chaos_score, compute_collapse_risk};
use crate::types::{Game, LiveEvent};

/// Abstraction over wherever game snapshots come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Current snapshot of every tracked game.
    async fn fetch_games(&self) -> Result<Vec<Game>>;

    /// Headline events for the live feed panel.
    fn live_events(&self) -> Vec<LiveEvent>;
}

/// Fill in a game's published chaos score and collapse risk from its team
/// profiles. Games missing either profile keep whatever they carried.
pub fn score_game(mut game: Game) -> Game {
    if let (Some(home), Some(away)) = (&game.home_profile, &game.away_profile) {
        game.chaos_score = compute_chaos_score(home, away);
        game.collapse_risk = compute_collapse_risk(home, away);
    }
    game
}
