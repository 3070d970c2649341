//! # Core Type Definitions
//!
//! This module contains all shared types for the Pulseboard scorecard engine:
//! - Identifiers (`MetricId`, `ItemId`, `GroupId`)
//! - Fixed-point numeric readings (`Quantity`)
//! - Classification enums (`Direction`, `StatusBand`, `MetricType`, `Section`)
//! - Trend signals (`Trend`)
//! - Error types (`PulseboardError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they key `BTreeMap`/`BTreeSet` collections
//! - Parse and format decimal readings without ever constructing a float

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier for a metric in the catalog.
/// Stable across sessions; the capture collaborator targets these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricId(pub String);

impl MetricId {
    /// Create a new metric identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a checklist item.
/// Globally unique across ALL checklist groups, not just within one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a checklist group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl GroupId {
    /// Create a new group identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// QUANTITY (Fixed-Point Reading)
// =============================================================================

/// A numeric metric reading in fixed-point thousandths.
///
/// `Quantity::parse("3.2")` stores 3200. All status evaluation is done by
/// exact integer cross-multiplication, so the thousandths resolution never
/// introduces rounding into a band decision.
///
/// Serializes as a decimal string ("3.2", "930", "-12.5") so definition
/// files stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(i64);

impl Quantity {
    /// Create a quantity from raw thousandths.
    #[must_use]
    pub const fn from_milli(milli: i64) -> Self {
        Self(milli)
    }

    /// Get the raw thousandths value.
    #[must_use]
    pub const fn milli(self) -> i64 {
        self.0
    }

    /// Check whether this quantity is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse a decimal string into a fixed-point quantity.
    ///
    /// Accepts an optional sign, an integer part, and up to three fraction
    /// digits ("18", "-12.5", "0.125", ".5"). Anything else, including
    /// values that overflow `i64` thousandths, is a `Parse` error.
    pub fn parse(input: &str) -> Result<Self, PulseboardError> {
        let trimmed = input.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(PulseboardError::Parse(format!(
                "not a decimal number: '{input}'"
            )));
        }
        if frac_part.len() > 3 {
            return Err(PulseboardError::Parse(format!(
                "more than three fraction digits: '{input}'"
            )));
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PulseboardError::Parse(format!(
                "not a decimal number: '{input}'"
            )));
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| PulseboardError::Parse(format!("value out of range: '{input}'")))?
        };

        let frac: i64 = if frac_part.is_empty() {
            0
        } else {
            // "5" means 500 thousandths, "05" means 50, "005" means 5.
            let scale = match frac_part.len() {
                1 => 100,
                2 => 10,
                _ => 1,
            };
            let digits: i64 = frac_part
                .parse()
                .map_err(|_| PulseboardError::Parse(format!("value out of range: '{input}'")))?;
            digits.saturating_mul(scale)
        };

        let milli = whole
            .checked_mul(1000)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(|| PulseboardError::Parse(format!("value out of range: '{input}'")))?;

        Ok(Self(if negative { -milli } else { milli }))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 1000;
        let frac = abs % 1000;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let mut digits = format!("{frac:03}");
            while digits.ends_with('0') {
                digits.pop();
            }
            write!(f, "{sign}{whole}.{digits}")
        }
    }
}

impl FromStr for Quantity {
    type Err = PulseboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// DIRECTION & STATUS BAND
// =============================================================================

/// Comparison direction for a metric target.
///
/// Delivery rate improves by increasing; defect rate and token spend improve
/// by decreasing. The status breakpoints are asymmetric between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// A larger reading is better (e.g. delivery rate).
    HigherIsBetter,
    /// A smaller reading is better (e.g. defect rate, token spend).
    LowerIsBetter,
}

/// The three-valued traffic-light classification of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBand {
    /// Reading meets or is close to target.
    OnTrack,
    /// Reading is drifting; worth attention.
    Watch,
    /// Reading has missed target materially.
    AtRisk,
}

impl StatusBand {
    /// Human-readable badge label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::OnTrack => "On Track",
            StatusBand::Watch => "Watch",
            StatusBand::AtRisk => "At Risk",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// TREND
// =============================================================================

/// Signed percent change versus the prior observation period.
///
/// Zero means flat. Note that a rising trend is not necessarily good; that
/// depends on the metric's [`Direction`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Trend(pub i64);

impl Trend {
    /// Create a new trend from a signed percent.
    #[must_use]
    pub const fn new(percent: i64) -> Self {
        Self(percent)
    }

    /// Get the signed percent value.
    #[must_use]
    pub const fn percent(self) -> i64 {
        self.0
    }

    /// Check whether the reading moved up versus the prior period.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        self.0 > 0
    }

    /// Check whether the reading moved down versus the prior period.
    #[must_use]
    pub const fn is_falling(self) -> bool {
        self.0 < 0
    }

    /// Check whether the reading did not move.
    #[must_use]
    pub const fn is_flat(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "▲ {}%", self.0)
        } else if self.0 < 0 {
            write!(f, "▼ {}%", self.0.unsigned_abs())
        } else {
            f.write_str("flat")
        }
    }
}

// =============================================================================
// METRIC TYPE & SECTION
// =============================================================================

/// Whether a metric is measured or surveyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricType {
    /// Objective, instrumented measurement.
    Quantitative,
    /// Survey-based developer-experience signal.
    Qualitative,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricType::Quantitative => "Quantitative",
            MetricType::Qualitative => "Qualitative",
        })
    }
}

impl FromStr for MetricType {
    type Err = PulseboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quantitative" | "quant" => Ok(MetricType::Quantitative),
            "qualitative" | "qual" => Ok(MetricType::Qualitative),
            _ => Err(PulseboardError::Parse(format!(
                "unknown metric type: '{s}' (use quantitative or qualitative)"
            ))),
        }
    }
}

/// Dashboard section a metric belongs to. This is a closed set:
/// new sections are an engine change, not a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// AI adoption, defect lift, and token budgets.
    AiTokenUse,
    /// Priority delivery, cycle time, and flow.
    Delivery,
    /// Dependency currency and tech-debt posture.
    TechHealth,
}

impl Section {
    /// Human-readable section name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Section::AiTokenUse => "AI & Token Use",
            Section::Delivery => "Delivery",
            Section::TechHealth => "Tech Health",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = PulseboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ai" | "ai-token-use" | "ai & token use" => Ok(Section::AiTokenUse),
            "delivery" => Ok(Section::Delivery),
            "tech" | "tech-health" | "tech health" => Ok(Section::TechHealth),
            _ => Err(PulseboardError::Parse(format!(
                "unknown section: '{s}' (use ai-token-use, delivery, or tech-health)"
            ))),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Pulseboard engine.
///
/// - No silent failures
/// - Use `Result<T, PulseboardError>` for fallible operations
/// - Construction errors are fatal for that instance; command errors leave
///   state untouched and the caller may retry
#[derive(Debug, Error)]
pub enum PulseboardError {
    /// Catalog or checklist construction found a repeated identifier.
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    /// Status evaluation attempted with a zero or negative target.
    #[error("Target is zero or not evaluable")]
    InvalidTarget,

    /// A toggle or query referenced a nonexistent item or group.
    #[error("Unknown identifier: {0}")]
    UnknownId(String),

    /// A rollout toggle referenced a nonexistent step position.
    #[error("Step index {0} out of range")]
    IndexOutOfRange(usize),

    /// A checklist group was defined with no items.
    #[error("Checklist group has no items: {0}")]
    EmptyGroup(String),

    /// A metric definition has neither a measurement nor a preset band.
    #[error("Metric '{0}' has neither a measurement nor a preset status")]
    MissingStatus(String),

    /// A value, filter, or definitions field could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred (app layer only; the engine does no I/O).
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
