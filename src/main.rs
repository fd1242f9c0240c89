//! CHAOS — sports-game chaos analytics dashboard
//!
//! Entry point. Loads configuration, initialises structured logging,
//! seeds the game board, then runs the refresh poller and the dashboard
//! server until Ctrl+C.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

use chaos::config::AppConfig;
use chaos::dashboard::{self, routes::DashboardState};
use chaos::feed::mock::MockFeed;
use chaos::feed::poller::spawn_poller;
use chaos::feed::GameSource;

const BANNER: &str = r#"
  ____ _   _    _    ___  ____
 / ___| | | |  / \  / _ \/ ___|
| |   | |_| | / _ \| | | \___ \
| |___|  _  |/ ___ \ |_| |___) |
 \____|_| |_/_/   \_\___/|____/

  Chaos Module Dashboard
  v0.1.0
"#;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let (cfg, config_found) = if Path::new(CONFIG_PATH).exists() {
        (AppConfig::load(CONFIG_PATH)?, true)
    } else {
        (AppConfig::default(), false)
    };

    init_logging(&cfg);

    println!("{BANNER}");
    if !config_found {
        warn!(path = CONFIG_PATH, "No config file found, using defaults");
    }

    let addr = cfg.bind_addr()?;
    info!(
        %addr,
        feed = %cfg.feed.source,
        refresh_interval_secs = cfg.feed.refresh_interval_secs,
        "CHAOS starting up"
    );

    let source: Arc<dyn GameSource> = Arc::new(MockFeed::new());
    let state = Arc::new(DashboardState::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller = spawn_poller(
        source,
        state.clone(),
        cfg.refresh_interval(),
        shutdown_rx.clone(),
    );

    // Bind before spawning so a taken port fails startup instead of leaving
    // the poller running without a server.
    let listener = dashboard::bind(addr).await?;
    let mut server = tokio::spawn(dashboard::serve(state, listener, shutdown_rx));

    info!("Dashboard running. Press Ctrl+C to stop.");
    let server_result = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received.");
            None
        }
        result = &mut server => Some(result),
    };

    // Ignored if both tasks already exited.
    let _ = shutdown_tx.send(true);

    if let Err(e) = poller.await {
        error!(error = %e, "Poller task panicked");
    }
    let server_result = match server_result {
        Some(result) => result,
        None => server.await,
    };
    match server_result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            error!(error = %e, "Dashboard server failed");
            return Err(e);
        }
        Err(e) => {
            error!(error = %e, "Dashboard task panicked");
            return Err(e.into());
        }
    }

    info!("CHAOS shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    let json_logging = cfg.logging.json || std::env::var("CHAOS_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
