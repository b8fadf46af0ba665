//! Raven bot arena, headless.
//!
//! ```bash
//! RAVEN_SCENARIO=duel RAVEN_TICKS=1200 RUST_LOG=raven_brain=debug cargo run -p raven-client
//! ```

use anyhow::Result;
use raven_client::{ClientConfig, Session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting Raven client");
    tracing::info!("Scenario: {}", config.scenario);
    tracing::debug!(?config, "client configuration");

    let mut session = Session::load(&config)?;
    let stdout = std::io::stdout();
    let summary = session.run(&mut stdout.lock())?;

    tracing::info!(
        "Simulated {} ticks: {} shots, {} kills, {} pickups",
        summary.ticks,
        summary.shots,
        summary.kills,
        summary.pickups
    );
    Ok(())
}
