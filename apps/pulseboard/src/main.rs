//! # Pulseboard - Team Health Scorecard
//!
//! The main binary for the Pulseboard deterministic scorecard engine.
//!
//! This application provides:
//! - CLI interface for scorecard operations
//! - TOML definitions file load/save
//! - A starter scorecard for new deployments
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │            apps/pulseboard (THE BINARY)          │
//! │                                                  │
//! │  ┌─────────────┐         ┌───────────────────┐  │
//! │  │   CLI       │         │  Definitions File │  │
//! │  │  (clap)     │         │  (TOML load/save) │  │
//! │  └──────┬──────┘         └─────────┬─────────┘  │
//! │         │                          │            │
//! │         └────────────┬─────────────┘            │
//! │                      ▼                          │
//! │            ┌──────────────────┐                 │
//! │            │ pulseboard-core  │                 │
//! │            │   (THE LOGIC)    │                 │
//! │            └──────────────────┘                 │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Create a starter scorecard
//! pulseboard init
//!
//! # Scorecard operations
//! pulseboard status
//! pulseboard metrics --section ai --type quantitative
//! pulseboard check a3
//! pulseboard advance 2
//! ```

use clap::Parser;
use pulseboard::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — PULSEBOARD_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PULSEBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pulseboard=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Pulseboard startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗ ██╗   ██╗██╗     ███████╗███████╗
  ██╔══██╗██║   ██║██║     ██╔════╝██╔════╝
  ██████╔╝██║   ██║██║     ███████╗█████╗
  ██╔═══╝ ██║   ██║██║     ╚════██║██╔══╝
  ██║     ╚██████╔╝███████╗███████║███████╗
  ╚═╝      ╚═════╝ ╚══════╝╚══════╝╚══════╝

  Team Health Scorecard v{}

  Goals • Signals • Metrics
"#,
        env!("CARGO_PKG_VERSION")
    );
}
