//! # Pulseboard Application Library
//!
//! The application-side pieces of the Pulseboard binary: the CLI surface,
//! the scorecard definitions file schema, and the starter scorecard.
//!
//! Everything here is a collaborator of the engine in
//! [`pulseboard_core`]: this crate owns file I/O and presentation, the
//! core owns evaluation and tracker state.

pub mod cli;
pub mod defs;
pub mod starter;
