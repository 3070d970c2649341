//! # Rollout Tracking
//!
//! The adoption timeline: an ordered sequence of milestone steps, each
//! independently toggleable. Order matters for display only; nothing stops
//! an operator marking step 5 done while step 1 is still open, because
//! real rollouts are not linear.

use crate::checklist::Completion;
use crate::types::PulseboardError;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROLLOUT STEP
// =============================================================================

/// One milestone in the rollout timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutStep {
    /// Time-period name ("Week 1", "Month 2").
    pub label: String,
    /// Short milestone title.
    pub title: String,
    /// What the milestone involves.
    pub description: String,
    /// Whether the milestone is done.
    #[serde(default)]
    pub completed: bool,
}

// =============================================================================
// ROLLOUT TRACKER
// =============================================================================

/// Owns the ordered milestone sequence and its completion flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolloutTracker {
    steps: Vec<RolloutStep>,
}

impl RolloutTracker {
    /// Build a tracker, preserving the given order as canonical and keeping
    /// the completion flags as supplied (the reference timeline ships with
    /// its first step already done).
    #[must_use]
    pub fn initialize(steps: Vec<RolloutStep>) -> Self {
        Self { steps }
    }

    /// Flip the completion flag of the step at `index` (zero-based).
    ///
    /// Fails with `IndexOutOfRange` for an invalid position, leaving all
    /// steps untouched. No ordering between steps is enforced.
    pub fn toggle(&mut self, index: usize) -> Result<(), PulseboardError> {
        match self.steps.get_mut(index) {
            Some(step) => {
                step.completed = !step.completed;
                Ok(())
            }
            None => Err(PulseboardError::IndexOutOfRange(index)),
        }
    }

    /// Read-only snapshot of the timeline for display.
    #[must_use]
    pub fn steps(&self) -> &[RolloutStep] {
        &self.steps
    }

    /// Number of steps in the timeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the timeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Completion ratio across the timeline, recomputed on every call.
    #[must_use]
    pub fn completion(&self) -> Completion {
        let completed = self.steps.iter().filter(|s| s.completed).count();
        Completion::of(completed, self.steps.len())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn step(label: &str, completed: bool) -> RolloutStep {
        RolloutStep {
            label: label.to_string(),
            title: format!("{label} milestone"),
            description: "do the thing".to_string(),
            completed,
        }
    }

    fn six_step_tracker() -> RolloutTracker {
        RolloutTracker::initialize(vec![
            step("Week 1", true),
            step("Week 2", false),
            step("Week 3", false),
            step("Week 4", false),
            step("Month 2", false),
            step("Month 3", false),
        ])
    }

    #[test]
    fn initialize_preserves_order_and_flags() {
        let tracker = six_step_tracker();
        let labels: Vec<&str> = tracker.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Week 1", "Week 2", "Week 3", "Week 4", "Month 2", "Month 3"]
        );
        assert!(tracker.steps()[0].completed);
        assert!(!tracker.steps()[1].completed);
    }

    #[test]
    fn steps_complete_out_of_order() {
        let mut tracker = six_step_tracker();
        tracker.toggle(4).expect("toggle");
        assert!(tracker.steps()[4].completed);
        assert!(!tracker.steps()[1].completed);
        assert_eq!(tracker.completion(), Completion::of(2, 6));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut tracker = six_step_tracker();
        let before = tracker.steps().to_vec();
        tracker.toggle(2).expect("toggle");
        tracker.toggle(2).expect("toggle");
        assert_eq!(tracker.steps(), before.as_slice());
    }

    #[test]
    fn out_of_range_toggle_is_rejected() {
        let mut tracker = six_step_tracker();
        let before = tracker.completion();
        let result = tracker.toggle(6);
        assert!(matches!(result, Err(PulseboardError::IndexOutOfRange(6))));
        assert_eq!(tracker.completion(), before);
    }

    #[test]
    fn completion_rounds_half_up() {
        // 1 of 6 is 16.67 -> 17.
        assert_eq!(six_step_tracker().completion().percent, 17);
    }

    #[test]
    fn empty_timeline_reports_zero() {
        let tracker = RolloutTracker::initialize(vec![]);
        assert!(tracker.is_empty());
        assert_eq!(tracker.len(), 0);
        assert_eq!(tracker.completion(), Completion::of(0, 0));
    }
}
