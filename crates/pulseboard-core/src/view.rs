//! # View Filtering
//!
//! Composes predicate filters over the metric catalog to produce the active
//! display view. Filters hold no state of their own; the current selection
//! is owned by the caller (the rendering collaborator).

use crate::catalog::{Metric, MetricCatalog};
use crate::types::{MetricType, PulseboardError, Section};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// FILTERS
// =============================================================================

/// Section selection: `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionFilter {
    /// Match every section.
    #[default]
    All,
    /// Match exactly one section.
    Only(Section),
}

impl SectionFilter {
    /// Check whether a section passes this filter.
    #[must_use]
    pub fn matches(&self, section: Section) -> bool {
        match self {
            SectionFilter::All => true,
            SectionFilter::Only(wanted) => *wanted == section,
        }
    }
}

impl fmt::Display for SectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionFilter::All => f.write_str("All"),
            SectionFilter::Only(section) => write!(f, "{section}"),
        }
    }
}

impl FromStr for SectionFilter {
    type Err = PulseboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SectionFilter::All)
        } else {
            s.parse().map(SectionFilter::Only)
        }
    }
}

/// Metric-type selection: `All` is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Match both metric types.
    #[default]
    All,
    /// Match exactly one metric type.
    Only(MetricType),
}

impl TypeFilter {
    /// Check whether a metric type passes this filter.
    #[must_use]
    pub fn matches(&self, metric_type: MetricType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == metric_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(metric_type) => write!(f, "{metric_type}"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = PulseboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

// =============================================================================
// APPLY
// =============================================================================

/// Produce the active view: catalog order restricted to the metrics
/// matching BOTH filters. An empty result is a valid view, not an error.
/// The catalog is never mutated.
#[must_use]
pub fn apply(catalog: &MetricCatalog, section: SectionFilter, ty: TypeFilter) -> Vec<Metric> {
    catalog
        .all()
        .into_iter()
        .filter(|m| section.matches(m.def.section) && ty.matches(m.def.metric_type))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
