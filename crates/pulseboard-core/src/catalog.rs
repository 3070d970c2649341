//! # Metric Catalog
//!
//! The immutable-per-session collection of metric records and the source of
//! truth for every display view.
//!
//! Status bands are never stored alongside a measured metric: they are
//! recomputed from the measurement on every query so the band can never
//! drift out of sync with the reading. Display-only metrics (those with no
//! numeric measurement) carry a preset band instead, which passes through
//! unchanged.

use crate::status::{StatusReading, evaluate};
use crate::types::{
    Direction, MetricId, MetricType, PulseboardError, Quantity, Section, StatusBand, Trend,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// METRIC DEFINITION
// =============================================================================

/// The numeric side of a metric: current reading, threshold, and which way
/// is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Current observed reading.
    pub value: Quantity,
    /// Threshold the reading is judged against. Must be positive.
    pub target: Quantity,
    /// Whether a higher or lower reading is better.
    pub direction: Direction,
}

/// One tracked indicator, classified by the Goal -> Signal -> Metric
/// hierarchy.
///
/// `value` and `target` are the display texts the operator sees
/// ("930K / 700K", "<=700K/wk"); `measurement` is the evaluable numeric
/// pair behind them. A metric with no measurement must supply a preset
/// `status` band instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDef {
    /// Unique, session-stable identifier.
    pub id: MetricId,
    /// Coarse grouping, e.g. "Quality".
    pub goal: String,
    /// The hypothesis being tested.
    pub signal: String,
    /// Name of the measurement itself.
    pub metric: String,
    /// Display text for the current reading.
    pub value: String,
    /// Display text for the threshold.
    pub target: String,
    /// Evaluable numeric reading, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Measurement>,
    /// Preset band for display-only metrics. Ignored when a measurement
    /// is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusBand>,
    /// Signed percent change versus the prior period.
    #[serde(default)]
    pub trend: Trend,
    /// Quantitative or qualitative.
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    /// Dashboard section this metric belongs to.
    pub section: Section,
}

// =============================================================================
// EVALUATED METRIC
// =============================================================================

/// A metric as a view consumer receives it: the definition plus the status
/// reading derived at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// The underlying catalog record.
    #[serde(flatten)]
    pub def: MetricDef,
    /// Derived (or passed-through) status for this metric.
    pub reading: StatusReading,
}

// =============================================================================
// METRIC CATALOG
// =============================================================================

/// Ordered, id-unique collection of metric definitions.
///
/// Populated once at initialization and replaced wholesale when a live
/// ingestion collaborator delivers a fresh catalog; individual records are
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCatalog {
    records: Vec<MetricDef>,
}

impl MetricCatalog {
    /// Build a catalog from metric definitions, preserving insertion order.
    ///
    /// Fails with `DuplicateId` on an id collision and with `MissingStatus`
    /// when a definition has neither a measurement nor a preset band.
    /// Construction failures abort the whole catalog; nothing is dropped
    /// silently.
    pub fn initialize(records: Vec<MetricDef>) -> Result<Self, PulseboardError> {
        let mut seen: BTreeSet<&MetricId> = BTreeSet::new();
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(PulseboardError::DuplicateId(record.id.as_str().to_string()));
            }
            if record.measurement.is_none() && record.status.is_none() {
                return Err(PulseboardError::MissingStatus(
                    record.id.as_str().to_string(),
                ));
            }
        }
        Ok(Self { records })
    }

    /// Number of metrics in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the catalog holds no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All metrics in insertion order, each with its status derived now.
    #[must_use]
    pub fn all(&self) -> Vec<Metric> {
        self.records.iter().map(Self::evaluate_record).collect()
    }

    /// Metrics belonging to one section, in catalog order.
    #[must_use]
    pub fn by_section(&self, section: Section) -> Vec<Metric> {
        self.records
            .iter()
            .filter(|r| r.section == section)
            .map(Self::evaluate_record)
            .collect()
    }

    /// Metrics of one type, in catalog order.
    #[must_use]
    pub fn by_type(&self, metric_type: MetricType) -> Vec<Metric> {
        self.records
            .iter()
            .filter(|r| r.metric_type == metric_type)
            .map(Self::evaluate_record)
            .collect()
    }

    /// Distinct sections present, in first-appearance order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let mut out = Vec::new();
        for record in &self.records {
            if !out.contains(&record.section) {
                out.push(record.section);
            }
        }
        out
    }

    /// Look up one metric by id, evaluated.
    #[must_use]
    pub fn get(&self, id: &MetricId) -> Option<Metric> {
        self.records
            .iter()
            .find(|r| &r.id == id)
            .map(Self::evaluate_record)
    }

    fn evaluate_record(record: &MetricDef) -> Metric {
        let reading = match (&record.measurement, record.status) {
            // The evaluator owns the band whenever a measurement exists.
            (Some(m), _) => match evaluate(m.value, m.target, m.direction) {
                Ok(band) => StatusReading::Band(band),
                Err(_) => StatusReading::Unavailable,
            },
            (None, Some(preset)) => StatusReading::Band(preset),
            // Rejected at initialize(); unreachable for a constructed catalog.
            (None, None) => StatusReading::Unavailable,
        };
        Metric {
            def: record.clone(),
            reading,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
