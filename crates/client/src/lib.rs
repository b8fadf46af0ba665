//! Headless Raven client.
//!
//! Loads a scenario and brain config, runs the world for a fixed number of
//! ticks and prints goal-tree diagnostics along the way.
//!
//! ```text
//! main
//!   ├─→ ClientConfig::from_env   (RAVEN_* variables, .env)
//!   ├─→ logging::setup_logging   (stderr, optional file)
//!   └─→ Session::load + run      (content → World → tick loop → reports)
//! ```

pub mod config;
pub mod logging;
pub mod session;

pub use config::{ClientConfig, ReportFormat};
pub use session::{RunSummary, Session};
