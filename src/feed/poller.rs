//! Periodic refresh of the dashboard's game list.
//!
//! Ticks once immediately, then every interval. Each tick pulls from the
//! source, scores every game, and swaps the result into shared state. The
//! task stops when the shutdown channel flips to `true` or its sender drops.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{score_game, GameSource};
use crate::dashboard::routes::AppState;

/// Run a single fetch → score → publish pass. Returns the number of games
/// published.
pub async fn refresh_once(source: &dyn GameSource, state: &AppState) -> Result<usize> {
    let games: Vec<_> = source
        .fetch_games()
        .await?
        .into_iter()
        .map(score_game)
        .collect();
    let count = games.len();
    let events = source.live_events();

    for game in &games {
        debug!(%game, "Scored game");
    }

    *state.games.write().await = games;
    *state.live_events.write().await = events;
    *state.last_refresh.write().await = Some(chrono::Utc::now());

    debug!(source = source.name(), count, "Games refreshed");
    Ok(count)
}

/// Spawn the refresh loop.
pub fn spawn_poller(
    source: Arc<dyn GameSource>,
    state: AppState,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        info!(
            source = source.name(),
            interval_secs = interval.as_secs(),
            "Poller started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = refresh_once(source.as_ref(), &state).await {
                        warn!(source = source.name(), error = %e, "Refresh failed, keeping previous games");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Poller stopped");
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
