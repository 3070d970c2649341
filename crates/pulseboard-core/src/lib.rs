//! # pulseboard-core
//!
//! The deterministic scorecard engine for Pulseboard - THE LOGIC.
//!
//! This crate implements the metric-evaluation and progress-tracking core
//! of a team-health scorecard structured by the Goal -> Signal -> Metric
//! hierarchy:
//! - derive a traffic-light status band from a reading versus its target
//! - compose filtered views over the metric catalog
//! - track checklist and rollout completion with idempotent toggles
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where scorecard state exists (stateful)
//! - Is render-agnostic: it returns data, never layout
//! - Does no I/O: all inputs arrive already materialized in memory
//! - Has NO async, NO network dependencies, NO floating-point arithmetic

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod checklist;
pub mod rollout;
pub mod session;
pub mod status;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Direction, GroupId, ItemId, MetricId, MetricType, PulseboardError, Quantity, Section,
    StatusBand, Trend,
};

// =============================================================================
// RE-EXPORTS: Evaluation & Views
// =============================================================================

pub use catalog::{Measurement, Metric, MetricCatalog, MetricDef};
pub use status::{BandCounts, StatusReading, evaluate};
pub use view::{SectionFilter, TypeFilter, apply};

// =============================================================================
// RE-EXPORTS: Trackers & Session
// =============================================================================

pub use checklist::{ChecklistGroup, ChecklistItem, ChecklistTracker, Completion};
pub use rollout::{RolloutStep, RolloutTracker};
pub use session::{HealthSummary, Session};
