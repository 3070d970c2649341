//! # Session Module
//!
//! One owned engine instance per interactive session: the catalog snapshot
//! plus both trackers, passed by reference into the command layer. There
//! are no ambient statics; a fresh session starts from its own
//! construction inputs.
//!
//! Every mutating operation runs to completion synchronously, so the whole
//! structure is consistent and queryable before the next UI event is
//! processed. When a live ingestion collaborator delivers fresh metrics,
//! [`Session::replace_catalog`] swaps the whole catalog as one value:
//! readers observe either the old complete catalog or the new one, never a
//! partial update.

use crate::catalog::MetricCatalog;
use crate::checklist::{ChecklistTracker, Completion};
use crate::rollout::RolloutTracker;
use crate::status::BandCounts;
use crate::types::{ItemId, PulseboardError};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH SUMMARY
// =============================================================================

/// The at-a-glance banner figures: band tally across the catalog plus the
/// two completion ratios. Recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Status-band tally across all metrics.
    pub bands: BandCounts,
    /// Integration checklist completion across all groups.
    pub integration: Completion,
    /// Rollout timeline completion.
    pub rollout: Completion,
}

// =============================================================================
// SESSION
// =============================================================================

/// Owned engine state for one scorecard session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: MetricCatalog,
    checklist: ChecklistTracker,
    rollout: RolloutTracker,
}

impl Session {
    /// Assemble a session from already-validated parts.
    #[must_use]
    pub fn new(
        catalog: MetricCatalog,
        checklist: ChecklistTracker,
        rollout: RolloutTracker,
    ) -> Self {
        Self {
            catalog,
            checklist,
            rollout,
        }
    }

    /// The current metric catalog.
    #[must_use]
    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    /// The checklist tracker.
    #[must_use]
    pub fn checklist(&self) -> &ChecklistTracker {
        &self.checklist
    }

    /// The rollout tracker.
    #[must_use]
    pub fn rollout(&self) -> &RolloutTracker {
        &self.rollout
    }

    /// Replace the whole catalog atomically.
    ///
    /// The ingestion collaborator hands over a complete, already-validated
    /// catalog; trackers are untouched. This is the only publish point a
    /// live-data deployment needs.
    pub fn replace_catalog(&mut self, catalog: MetricCatalog) {
        self.catalog = catalog;
    }

    /// Toggle one checklist item. Rejected commands leave state untouched.
    pub fn toggle_item(&mut self, id: &ItemId) -> Result<(), PulseboardError> {
        self.checklist.toggle(id)
    }

    /// Toggle one rollout step by zero-based index.
    pub fn toggle_step(&mut self, index: usize) -> Result<(), PulseboardError> {
        self.rollout.toggle(index)
    }

    /// The banner aggregation over the whole session.
    #[must_use]
    pub fn health_summary(&self) -> HealthSummary {
        HealthSummary {
            bands: BandCounts::tally(self.catalog.all().into_iter().map(|m| m.reading)),
            integration: self.checklist.overall_completion(),
            rollout: self.rollout.completion(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
