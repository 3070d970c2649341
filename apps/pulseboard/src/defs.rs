//! # Scorecard Definitions File
//!
//! The TOML document the CLI reads and writes. It carries the full
//! scorecard definition (metrics, checklist groups, rollout steps) plus
//! the operator's progress: the `checked` item-id list and the
//! `completed` flag on each rollout step.
//!
//! The engine never touches this file. [`ScorecardFile::into_session`]
//! builds a [`Session`] from it, and [`ScorecardFile::sync`] copies
//! tracker state back into the document before a save.

use pulseboard_core::{
    ChecklistGroup, ChecklistTracker, ItemId, MetricCatalog, MetricDef, PulseboardError,
    RolloutStep, RolloutTracker, Session,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// DOCUMENT SCHEMA
// =============================================================================

/// The on-disk scorecard document.
///
/// Singular field names so the TOML reads as `[[metric]]`, `[[group]]`,
/// `[[step]]` arrays of tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardFile {
    /// GSM metric definitions, in display order.
    #[serde(default)]
    pub metric: Vec<MetricDef>,

    /// Integration checklist groups, in display order.
    #[serde(default)]
    pub group: Vec<ChecklistGroup>,

    /// Rollout timeline steps, in display order.
    #[serde(default)]
    pub step: Vec<RolloutStep>,

    /// Ids of checklist items currently ticked off.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checked: Vec<ItemId>,
}

impl ScorecardFile {
    /// Build a live engine session from this document.
    ///
    /// Checked item ids are replayed through the tracker's `toggle`, so a
    /// stale id in `checked` surfaces as `UnknownId` rather than being
    /// silently dropped.
    pub fn into_session(self) -> Result<Session, PulseboardError> {
        let catalog = MetricCatalog::initialize(self.metric)?;
        let checklist = ChecklistTracker::initialize(self.group)?;
        let rollout = RolloutTracker::initialize(self.step);

        let mut session = Session::new(catalog, checklist, rollout);
        for id in &self.checked {
            session.toggle_item(id)?;
        }
        Ok(session)
    }

    /// Copy live tracker state back into the document.
    ///
    /// `checked` is rebuilt from the checklist tracker and step flags are
    /// rebuilt from the rollout tracker. Definitions are left as they are.
    pub fn sync(&mut self, session: &Session) {
        self.checked = session.checklist().completed_ids();
        self.step = session.rollout().steps().to_vec();
    }

    /// Read and parse a definitions file.
    pub fn load(path: &Path) -> Result<Self, PulseboardError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PulseboardError::Io(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&text)
            .map_err(|e| PulseboardError::Parse(format!("'{}': {}", path.display(), e)))
    }

    /// Serialize and write the document.
    pub fn save(&self, path: &Path) -> Result<(), PulseboardError> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| PulseboardError::Serialization(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| {
            PulseboardError::Io(format!("Cannot write '{}': {}", path.display(), e))
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    // Root-level keys must precede every array-of-tables header, which is
    // also the layout `save` emits.
    const MINIMAL: &str = r#"
checked = ["d2"]

[[metric]]
id = "cycle_time"
goal = "Flow"
signal = "PRs move quickly from open to merge"
metric = "Median PR cycle time (hours)"
value = "18h"
target = "<=24h"
measurement = { value = "18", target = "24", direction = "lower-is-better" }
trend = -9
type = "quantitative"
section = "delivery"

[[group]]
id = "delivery"
title = "Delivery"

[[group.items]]
id = "d1"
group_label = "Jira"
text = "Authenticate with the Jira API"

[[group.items]]
id = "d2"
group_label = "Jira"
text = "Query planned and closed P1s per sprint"

[[step]]
label = "Week 1"
title = "Deploy with sample data"
description = "Run the dashboard in a standup."
completed = true
"#;

    #[test]
    fn minimal_document_builds_a_session() {
        let file: ScorecardFile = toml::from_str(MINIMAL).unwrap();
        assert_eq!(file.checked, vec![ItemId::new("d2")]);
        let session = file.into_session().unwrap();

        assert_eq!(session.catalog().len(), 1);
        assert!(session.checklist().is_complete(&ItemId::new("d2")).unwrap());
        assert!(!session.checklist().is_complete(&ItemId::new("d1")).unwrap());
        assert!(session.rollout().steps()[0].completed);
    }

    #[test]
    fn stale_checked_id_is_rejected() {
        let mut file: ScorecardFile = toml::from_str(MINIMAL).unwrap();
        file.checked.push(ItemId::new("d99"));

        assert!(matches!(
            file.into_session(),
            Err(PulseboardError::UnknownId(id)) if id == "d99"
        ));
    }

    #[test]
    fn sync_reflects_live_tracker_state() {
        let file: ScorecardFile = toml::from_str(MINIMAL).unwrap();
        let mut session = file.clone().into_session().unwrap();

        session.toggle_item(&ItemId::new("d1")).unwrap();
        session.toggle_item(&ItemId::new("d2")).unwrap();
        session.toggle_step(0).unwrap();

        let mut synced = file;
        synced.sync(&session);

        assert_eq!(synced.checked, vec![ItemId::new("d1")]);
        assert!(!synced.step[0].completed);
    }

    #[test]
    fn saved_checked_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs.toml");

        let mut file: ScorecardFile = toml::from_str(MINIMAL).unwrap();
        file.checked = vec![ItemId::new("d1"), ItemId::new("d2")];
        file.save(&path).unwrap();

        let reloaded = ScorecardFile::load(&path).unwrap();
        assert_eq!(reloaded.checked, vec![ItemId::new("d1"), ItemId::new("d2")]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ScorecardFile::load(Path::new("/nonexistent/pulseboard.toml"));
        assert!(matches!(result, Err(PulseboardError::Io(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[metric]\nid = ").unwrap();

        let result = ScorecardFile::load(&path);
        assert!(matches!(result, Err(PulseboardError::Parse(_))));
    }
}
