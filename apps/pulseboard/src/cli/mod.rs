//! # Pulseboard CLI Module
//!
//! This module implements the CLI interface for Pulseboard.
//!
//! ## Available Commands
//!
//! - `status` - Show scorecard health summary (the default)
//! - `metrics` - Show the GSM metric table, optionally filtered
//! - `checklist` - Show integration checklist progress
//! - `check` - Toggle a checklist item
//! - `rollout` - Show the rollout timeline
//! - `advance` - Toggle a rollout step
//! - `init` - Write the starter scorecard definitions file

mod commands;

use clap::{Parser, Subcommand};
use pulseboard_core::PulseboardError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Pulseboard - Team Health Scorecard
///
/// A deterministic GSM (Goals, Signals, Metrics) scorecard engine.
/// Status is derived from measurements at query time, never stored.
#[derive(Parser, Debug)]
#[command(name = "pulseboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the scorecard definitions file
    #[arg(short = 'F', long, global = true, default_value = "pulseboard.toml")]
    pub file: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show scorecard health summary
    Status,

    /// Show the GSM metric table
    Metrics {
        /// Section filter (all, ai, delivery, tech)
        #[arg(short, long, default_value = "all")]
        section: String,

        /// Metric type filter (all, quantitative, qualitative)
        #[arg(short = 't', long = "type", default_value = "all")]
        metric_type: String,
    },

    /// Show integration checklist progress
    Checklist {
        /// Restrict output to one group id
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Toggle a checklist item and persist the change
    Check {
        /// Item id to toggle (e.g. "a3")
        id: String,
    },

    /// Show the rollout timeline
    Rollout,

    /// Toggle a rollout step and persist the change
    Advance {
        /// Step position, 1-based as printed by `rollout`
        index: usize,
    },

    /// Write the starter scorecard definitions file
    Init {
        /// Overwrite an existing definitions file
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), PulseboardError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Metrics {
            section,
            metric_type,
        }) => cmd_metrics(&cli.file, json_mode, &section, &metric_type),
        Some(Commands::Checklist { group }) => {
            cmd_checklist(&cli.file, json_mode, group.as_deref())
        }
        Some(Commands::Check { id }) => cmd_check(&cli.file, json_mode, &id),
        Some(Commands::Rollout) => cmd_rollout(&cli.file, json_mode),
        Some(Commands::Advance { index }) => cmd_advance(&cli.file, json_mode, index),
        Some(Commands::Init { force }) => cmd_init(&cli.file, force),
        Some(Commands::Status) | None => cmd_status(&cli.file, json_mode),
    }
}
