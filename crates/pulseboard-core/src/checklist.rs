//! # Checklist Tracking
//!
//! Owns the completion state of the integration checklist: named groups of
//! actionable steps, each independently toggleable, with derived per-group
//! and overall completion ratios.
//!
//! The grouping itself (group membership, sub-labels, item order) is
//! immutable catalog data fixed at initialization; only the per-item
//! booleans ever change, and only through [`ChecklistTracker::toggle`].
//! Completion figures are recomputed from the live state map on every
//! query, so the counts can never diverge from the booleans.

use crate::types::{GroupId, ItemId, PulseboardError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// DEFINITIONS
// =============================================================================

/// One actionable integration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Globally unique item identifier.
    pub id: ItemId,
    /// Sub-grouping label within the parent group ("Anthropic Console").
    pub group_label: String,
    /// What the operator has to do.
    pub text: String,
    /// Optional reference payload (a curl command, a JQL query). Carried
    /// for display; never interpreted by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A named collection of checklist items ("AI & Token Use").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistGroup {
    /// Unique group identifier.
    pub id: GroupId,
    /// Display title.
    pub title: String,
    /// Ordered items. Must be non-empty.
    pub items: Vec<ChecklistItem>,
}

// =============================================================================
// COMPLETION
// =============================================================================

/// Derived completion ratio for a group or for the whole checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Completion {
    /// Items currently marked complete.
    pub completed: usize,
    /// Items tracked.
    pub total: usize,
    /// `round(100 * completed / total)`, round-half-up. 0 for an empty
    /// tracker (per-group empties are rejected at initialization).
    pub percent: u8,
}

impl Completion {
    /// Compute a ratio with round-half-up integer percent.
    #[must_use]
    pub fn of(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // Integer round-half-up: floor((200c + t) / 2t).
            let c = completed as u64;
            let t = total as u64;
            ((200 * c + t) / (2 * t)) as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Check whether every tracked item is complete.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

// =============================================================================
// CHECKLIST TRACKER
// =============================================================================

/// Owns the id -> completed mapping across all checklist groups.
#[derive(Debug, Clone)]
pub struct ChecklistTracker {
    /// Immutable group definitions, in display order.
    groups: Vec<ChecklistGroup>,
    /// Live completion state, keyed by globally unique item id.
    state: BTreeMap<ItemId, bool>,
    /// Per-group sub-label ordering, built once at initialization:
    /// (label, item ids under that label) in first-appearance order.
    sublabels: BTreeMap<GroupId, Vec<(String, Vec<ItemId>)>>,
}

impl ChecklistTracker {
    /// Build a tracker from group definitions, seeding every item to
    /// incomplete.
    ///
    /// Fails with `EmptyGroup` for a group with no items and with
    /// `DuplicateId` when an item id repeats anywhere across the whole
    /// checklist. Either failure aborts construction; no partial tracker
    /// is produced.
    pub fn initialize(groups: Vec<ChecklistGroup>) -> Result<Self, PulseboardError> {
        let mut state: BTreeMap<ItemId, bool> = BTreeMap::new();
        let mut sublabels: BTreeMap<GroupId, Vec<(String, Vec<ItemId>)>> = BTreeMap::new();

        for group in &groups {
            if group.items.is_empty() {
                return Err(PulseboardError::EmptyGroup(group.id.as_str().to_string()));
            }

            let mut labels: Vec<(String, Vec<ItemId>)> = Vec::new();
            for item in &group.items {
                if state.insert(item.id.clone(), false).is_some() {
                    return Err(PulseboardError::DuplicateId(item.id.as_str().to_string()));
                }
                match labels.iter_mut().find(|(label, _)| *label == item.group_label) {
                    Some((_, ids)) => ids.push(item.id.clone()),
                    None => labels.push((item.group_label.clone(), vec![item.id.clone()])),
                }
            }
            sublabels.insert(group.id.clone(), labels);
        }

        Ok(Self {
            groups,
            state,
            sublabels,
        })
    }

    /// Flip one item's completion state.
    ///
    /// A second toggle restores the original state exactly; this is a flip,
    /// not a set-to-true. Fails with `UnknownId` for a nonexistent item,
    /// leaving all state untouched.
    pub fn toggle(&mut self, id: &ItemId) -> Result<(), PulseboardError> {
        match self.state.get_mut(id) {
            Some(flag) => {
                *flag = !*flag;
                Ok(())
            }
            None => Err(PulseboardError::UnknownId(id.as_str().to_string())),
        }
    }

    /// Whether one item is currently complete.
    pub fn is_complete(&self, id: &ItemId) -> Result<bool, PulseboardError> {
        self.state
            .get(id)
            .copied()
            .ok_or_else(|| PulseboardError::UnknownId(id.as_str().to_string()))
    }

    /// Completion ratio for one group, recomputed from live state.
    pub fn group_completion(&self, group: &GroupId) -> Result<Completion, PulseboardError> {
        let group = self
            .groups
            .iter()
            .find(|g| &g.id == group)
            .ok_or_else(|| PulseboardError::UnknownId(group.as_str().to_string()))?;

        let completed = group
            .items
            .iter()
            .filter(|item| self.state.get(&item.id) == Some(&true))
            .count();
        Ok(Completion::of(completed, group.items.len()))
    }

    /// Completion ratio across every group, recomputed from live state.
    #[must_use]
    pub fn overall_completion(&self) -> Completion {
        let completed = self.state.values().filter(|done| **done).count();
        Completion::of(completed, self.state.len())
    }

    /// All item ids currently marked complete, in id order.
    #[must_use]
    pub fn completed_ids(&self) -> Vec<ItemId> {
        self.state
            .iter()
            .filter(|(_, done)| **done)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// The immutable group definitions, in display order.
    #[must_use]
    pub fn groups(&self) -> &[ChecklistGroup] {
        &self.groups
    }

    /// Sub-label grouping for one group, in first-appearance order.
    pub fn sublabels(&self, group: &GroupId) -> Result<&[(String, Vec<ItemId>)], PulseboardError> {
        self.sublabels
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| PulseboardError::UnknownId(group.as_str().to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str) -> ChecklistItem {
        ChecklistItem {
            id: ItemId::new(id),
            group_label: label.to_string(),
            text: format!("step {id}"),
            example: None,
        }
    }

    fn group(id: &str, items: Vec<ChecklistItem>) -> ChecklistGroup {
        ChecklistGroup {
            id: GroupId::new(id),
            title: id.to_uppercase(),
            items,
        }
    }

    fn twelve_item_tracker() -> ChecklistTracker {
        let items = (1..=12).map(|i| item(&format!("a{i}"), "Console")).collect();
        ChecklistTracker::initialize(vec![group("ai", items)]).expect("tracker")
    }

    #[test]
    fn initialize_seeds_everything_incomplete() {
        let tracker = twelve_item_tracker();
        assert_eq!(tracker.overall_completion(), Completion::of(0, 12));
        assert!(!tracker.is_complete(&ItemId::new("a1")).expect("lookup"));
    }

    #[test]
    fn initialize_rejects_empty_group() {
        let result = ChecklistTracker::initialize(vec![group("empty", vec![])]);
        assert!(matches!(result, Err(PulseboardError::EmptyGroup(id)) if id == "empty"));
    }

    #[test]
    fn initialize_rejects_duplicate_ids_across_groups() {
        let result = ChecklistTracker::initialize(vec![
            group("ai", vec![item("a1", "Console"), item("a2", "Console")]),
            group("delivery", vec![item("a1", "Jira")]),
        ]);
        assert!(matches!(result, Err(PulseboardError::DuplicateId(id)) if id == "a1"));
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut tracker = twelve_item_tracker();
        let id = ItemId::new("a5");
        let before = tracker.overall_completion();

        tracker.toggle(&id).expect("toggle");
        assert!(tracker.is_complete(&id).expect("lookup"));

        tracker.toggle(&id).expect("toggle");
        assert!(!tracker.is_complete(&id).expect("lookup"));
        assert_eq!(tracker.overall_completion(), before);
    }

    #[test]
    fn toggle_unknown_id_leaves_state_untouched() {
        let mut tracker = twelve_item_tracker();
        tracker.toggle(&ItemId::new("a1")).expect("toggle");
        let before = tracker.overall_completion();

        let result = tracker.toggle(&ItemId::new("zz"));
        assert!(matches!(result, Err(PulseboardError::UnknownId(id)) if id == "zz"));
        assert_eq!(tracker.overall_completion(), before);
    }

    #[test]
    fn group_completion_scenario() {
        // 12 items, toggle a1/a3/a7: {3, 12, 25}. Untoggle a3: {2, 12, 17}.
        let mut tracker = twelve_item_tracker();
        let gid = GroupId::new("ai");

        for id in ["a1", "a3", "a7"] {
            tracker.toggle(&ItemId::new(id)).expect("toggle");
        }
        assert_eq!(
            tracker.group_completion(&gid).expect("completion"),
            Completion {
                completed: 3,
                total: 12,
                percent: 25
            }
        );

        tracker.toggle(&ItemId::new("a3")).expect("toggle");
        assert_eq!(
            tracker.group_completion(&gid).expect("completion"),
            Completion {
                completed: 2,
                total: 12,
                percent: 17
            }
        );
    }

    #[test]
    fn percent_rounds_half_up() {
        // 2 of 7 is 28.57 -> 29.
        assert_eq!(Completion::of(2, 7).percent, 29);
        // 1 of 8 is 12.5 -> 13 (half rounds up).
        assert_eq!(Completion::of(1, 8).percent, 13);
        // 1 of 3 is 33.33 -> 33.
        assert_eq!(Completion::of(1, 3).percent, 33);
        assert_eq!(Completion::of(0, 5).percent, 0);
        assert_eq!(Completion::of(5, 5).percent, 100);
        assert!(Completion::of(5, 5).is_full());
    }

    #[test]
    fn overall_aggregates_across_groups() {
        let mut tracker = ChecklistTracker::initialize(vec![
            group("ai", vec![item("a1", "Console"), item("a2", "Console")]),
            group("delivery", vec![item("d1", "Jira"), item("d2", "Jira")]),
        ])
        .expect("tracker");

        tracker.toggle(&ItemId::new("a1")).expect("toggle");
        tracker.toggle(&ItemId::new("d1")).expect("toggle");
        tracker.toggle(&ItemId::new("d2")).expect("toggle");

        assert_eq!(tracker.overall_completion(), Completion::of(3, 4));
        assert_eq!(tracker.overall_completion().percent, 75);
    }

    #[test]
    fn sublabels_preserve_first_appearance_order() {
        let tracker = ChecklistTracker::initialize(vec![group(
            "ai",
            vec![
                item("a1", "Console"),
                item("a2", "GitHub"),
                item("a3", "Console"),
                item("a4", "Workspaces"),
            ],
        )])
        .expect("tracker");

        let labels = tracker.sublabels(&GroupId::new("ai")).expect("sublabels");
        let names: Vec<&str> = labels.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(names, vec!["Console", "GitHub", "Workspaces"]);
        assert_eq!(labels[0].1, vec![ItemId::new("a1"), ItemId::new("a3")]);
    }

    #[test]
    fn unknown_group_is_rejected() {
        let tracker = twelve_item_tracker();
        assert!(tracker.group_completion(&GroupId::new("nope")).is_err());
        assert!(tracker.sublabels(&GroupId::new("nope")).is_err());
    }
}
