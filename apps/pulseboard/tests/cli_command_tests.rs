//! Integration tests for the CLI command layer: every command runs against
//! a real definitions file in a temp dir, in both text and JSON output
//! modes, covering the identifier rendering in each report.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use pulseboard::cli::{
    cmd_advance, cmd_check, cmd_checklist, cmd_init, cmd_metrics, cmd_rollout, cmd_status,
};
use pulseboard::defs::ScorecardFile;
use pulseboard_core::{ItemId, PulseboardError};
use std::path::PathBuf;

fn initialized_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("pulseboard.toml");
    cmd_init(&path, false).expect("init");
    path
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = initialized_file(&dir);

    let result = cmd_init(&path, false);
    assert!(matches!(result, Err(PulseboardError::Io(_))));

    cmd_init(&path, true).expect("forced init");
}

// =============================================================================
// READ-ONLY REPORTS
// =============================================================================

#[test]
fn reports_render_in_both_output_modes() {
    let dir = tempfile::tempdir().unwrap();
    let path = initialized_file(&dir);

    for json_mode in [false, true] {
        cmd_status(&path, json_mode).expect("status");
        cmd_metrics(&path, json_mode, "all", "all").expect("metrics");
        cmd_metrics(&path, json_mode, "ai", "quantitative").expect("filtered metrics");
        cmd_checklist(&path, json_mode, None).expect("checklist");
        cmd_checklist(&path, json_mode, Some("ai")).expect("one group");
        cmd_rollout(&path, json_mode).expect("rollout");
    }
}

#[test]
fn bad_filter_and_unknown_group_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = initialized_file(&dir);

    assert!(matches!(
        cmd_metrics(&path, false, "velocity", "all"),
        Err(PulseboardError::Parse(_))
    ));
    assert!(matches!(
        cmd_checklist(&path, false, Some("nope")),
        Err(PulseboardError::UnknownId(id)) if id == "nope"
    ));
}

// =============================================================================
// MUTATING COMMANDS
// =============================================================================

#[test]
fn check_persists_and_rejections_leave_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = initialized_file(&dir);

    cmd_check(&path, false, "a3").expect("check");
    let file = ScorecardFile::load(&path).unwrap();
    assert_eq!(file.checked, vec![ItemId::new("a3")]);

    let result = cmd_check(&path, false, "zz");
    assert!(matches!(result, Err(PulseboardError::UnknownId(id)) if id == "zz"));
    let file = ScorecardFile::load(&path).unwrap();
    assert_eq!(file.checked, vec![ItemId::new("a3")]);

    // Toggle off again.
    cmd_check(&path, false, "a3").expect("uncheck");
    assert!(ScorecardFile::load(&path).unwrap().checked.is_empty());
}

#[test]
fn advance_is_one_based_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = initialized_file(&dir);

    cmd_advance(&path, false, 2).expect("advance");
    let file = ScorecardFile::load(&path).unwrap();
    assert!(file.step[0].completed); // starter ships Week 1 done
    assert!(file.step[1].completed);

    assert!(matches!(
        cmd_advance(&path, false, 0),
        Err(PulseboardError::IndexOutOfRange(0))
    ));
    assert!(matches!(
        cmd_advance(&path, false, 99),
        Err(PulseboardError::IndexOutOfRange(98))
    ));
    let file = ScorecardFile::load(&path).unwrap();
    assert!(!file.step[2].completed);
}
