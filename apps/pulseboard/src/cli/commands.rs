//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Every mutating command follows the same pattern: load the definitions
//! file, replay it into a session, apply one engine operation, sync the
//! document, save. An engine rejection leaves the file untouched.

use crate::defs::ScorecardFile;
use crate::starter::STARTER_SCORECARD;
use pulseboard_core::{
    GroupId, ItemId, Metric, PulseboardError, SectionFilter, Session, TypeFilter, apply,
};
use std::path::Path;
use std::str::FromStr;

// =============================================================================
// LOAD / SAVE HELPERS
// =============================================================================

/// Load the definitions file and replay it into a live session.
fn load(path: &Path) -> Result<(ScorecardFile, Session), PulseboardError> {
    let file = ScorecardFile::load(path)?;
    let session = file.clone().into_session()?;
    Ok((file, session))
}

/// Sync tracker state into the document and write it back.
fn save(mut file: ScorecardFile, session: &Session, path: &Path) -> Result<(), PulseboardError> {
    file.sync(session);
    file.save(path)
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show the scorecard health summary.
pub fn cmd_status(path: &Path, json_mode: bool) -> Result<(), PulseboardError> {
    let (_, session) = load(path)?;
    let summary = session.health_summary();
    let metrics = session.catalog().all();
    let at_risk: Vec<&Metric> = metrics
        .iter()
        .filter(|m| m.reading.band() == Some(pulseboard_core::StatusBand::AtRisk))
        .collect();

    if json_mode {
        let output = serde_json::json!({
            "file": path.to_string_lossy(),
            "metrics": summary.bands.total(),
            "on_track": summary.bands.on_track,
            "watch": summary.bands.watch,
            "at_risk": summary.bands.at_risk,
            "unavailable": summary.bands.unavailable,
            "integration_percent": summary.integration.percent,
            "rollout_percent": summary.rollout.percent,
            "at_risk_ids": at_risk.iter().map(|m| m.def.id.as_str()).collect::<Vec<_>>()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Pulseboard Health Summary");
    println!("=========================");
    println!("File: {}", path.display());
    println!();
    println!("Metrics:     {}", summary.bands.total());
    println!("  On Track:    {}", summary.bands.on_track);
    println!("  Watch:       {}", summary.bands.watch);
    println!("  At Risk:     {}", summary.bands.at_risk);
    println!("  Unavailable: {}", summary.bands.unavailable);
    println!();
    println!(
        "Integration: {}/{} ({}%)",
        summary.integration.completed, summary.integration.total, summary.integration.percent
    );
    println!(
        "Rollout:     {}/{} ({}%)",
        summary.rollout.completed, summary.rollout.total, summary.rollout.percent
    );

    if !at_risk.is_empty() {
        println!();
        println!("At risk:");
        for m in &at_risk {
            println!("  {} - {} ({})", m.def.id.as_str(), m.def.metric, m.def.value);
        }
    }

    Ok(())
}

// =============================================================================
// METRICS COMMAND
// =============================================================================

/// Show the GSM metric table, optionally filtered by section and type.
pub fn cmd_metrics(
    path: &Path,
    json_mode: bool,
    section: &str,
    metric_type: &str,
) -> Result<(), PulseboardError> {
    let (_, session) = load(path)?;
    let section_filter = SectionFilter::from_str(section)?;
    let type_filter = TypeFilter::from_str(metric_type)?;
    let view = apply(session.catalog(), section_filter, type_filter);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).unwrap_or_default()
        );
        return Ok(());
    }

    println!("GSM Metrics ({section_filter}, {type_filter})");
    println!("===========");
    if view.is_empty() {
        println!("No metrics match the filter.");
        return Ok(());
    }
    for m in &view {
        println!();
        println!("[{}] {} / {}", m.reading.label(), m.def.goal, m.def.id.as_str());
        println!("  Signal:  {}", m.def.signal);
        println!("  Metric:  {}", m.def.metric);
        println!(
            "  Reading: {} (target {}), trend {}",
            m.def.value, m.def.target, m.def.trend
        );
    }

    Ok(())
}

// =============================================================================
// CHECKLIST COMMANDS
// =============================================================================

/// Show checklist progress for all groups or one group.
pub fn cmd_checklist(
    path: &Path,
    json_mode: bool,
    group: Option<&str>,
) -> Result<(), PulseboardError> {
    let (_, session) = load(path)?;
    let checklist = session.checklist();

    let selected: Vec<&pulseboard_core::ChecklistGroup> = match group {
        Some(id) => {
            let gid = GroupId::new(id);
            let found = checklist
                .groups()
                .iter()
                .find(|g| g.id == gid)
                .ok_or_else(|| PulseboardError::UnknownId(id.to_string()))?;
            vec![found]
        }
        None => checklist.groups().iter().collect(),
    };

    if json_mode {
        let groups: Vec<serde_json::Value> = selected
            .iter()
            .map(|g| {
                let completion = checklist
                    .group_completion(&g.id)
                    .unwrap_or_else(|_| pulseboard_core::Completion::of(0, 0));
                serde_json::json!({
                    "id": g.id.as_str(),
                    "title": g.title,
                    "completed": completion.completed,
                    "total": completion.total,
                    "percent": completion.percent,
                    "checked": g.items.iter()
                        .filter(|i| checklist.is_complete(&i.id).unwrap_or(false))
                        .map(|i| i.id.as_str())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let overall = checklist.overall_completion();
        let output = serde_json::json!({
            "groups": groups,
            "overall": {
                "completed": overall.completed,
                "total": overall.total,
                "percent": overall.percent
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Integration Checklist");
    println!("=====================");
    for g in &selected {
        let completion = checklist.group_completion(&g.id)?;
        println!();
        println!(
            "{} [{}/{} - {}%]",
            g.title, completion.completed, completion.total, completion.percent
        );
        for (label, ids) in checklist.sublabels(&g.id)? {
            println!("  {label}:");
            for id in ids {
                let mark = if checklist.is_complete(id)? { "x" } else { " " };
                let item = g
                    .items
                    .iter()
                    .find(|i| &i.id == id)
                    .ok_or_else(|| PulseboardError::UnknownId(id.as_str().to_string()))?;
                println!("    [{mark}] {} {}", id.as_str(), item.text);
            }
        }
    }
    let overall = checklist.overall_completion();
    println!();
    println!(
        "Overall: {}/{} ({}%)",
        overall.completed, overall.total, overall.percent
    );

    Ok(())
}

/// Toggle one checklist item and persist the change.
pub fn cmd_check(path: &Path, json_mode: bool, id: &str) -> Result<(), PulseboardError> {
    let (file, mut session) = load(path)?;
    let item_id = ItemId::new(id);
    session.toggle_item(&item_id)?;
    save(file, &session, path)?;

    let now_complete = session.checklist().is_complete(&item_id)?;
    let overall = session.checklist().overall_completion();

    if json_mode {
        let output = serde_json::json!({
            "id": id,
            "complete": now_complete,
            "overall_completed": overall.completed,
            "overall_total": overall.total,
            "overall_percent": overall.percent
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    let verb = if now_complete { "Checked" } else { "Unchecked" };
    println!("{verb} {id}");
    println!(
        "Overall: {}/{} ({}%)",
        overall.completed, overall.total, overall.percent
    );
    Ok(())
}

// =============================================================================
// ROLLOUT COMMANDS
// =============================================================================

/// Show the rollout timeline.
pub fn cmd_rollout(path: &Path, json_mode: bool) -> Result<(), PulseboardError> {
    let (_, session) = load(path)?;
    let rollout = session.rollout();

    if json_mode {
        let output = serde_json::json!({
            "steps": rollout.steps(),
            "percent": rollout.completion().percent
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Rollout Timeline");
    println!("================");
    for (i, step) in rollout.steps().iter().enumerate() {
        let mark = if step.completed { "x" } else { " " };
        println!();
        println!("[{mark}] {}. {} - {}", i + 1, step.label, step.title);
        println!("       {}", step.description);
    }
    let completion = rollout.completion();
    println!();
    println!(
        "Progress: {}/{} ({}%)",
        completion.completed, completion.total, completion.percent
    );

    Ok(())
}

/// Toggle one rollout step (1-based as printed) and persist the change.
pub fn cmd_advance(path: &Path, json_mode: bool, index: usize) -> Result<(), PulseboardError> {
    if index == 0 {
        return Err(PulseboardError::IndexOutOfRange(index));
    }
    let (file, mut session) = load(path)?;
    session.toggle_step(index - 1)?;
    save(file, &session, path)?;

    let step = &session.rollout().steps()[index - 1];
    let completion = session.rollout().completion();

    if json_mode {
        let output = serde_json::json!({
            "index": index,
            "label": step.label,
            "completed": step.completed,
            "percent": completion.percent
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    let verb = if step.completed { "Completed" } else { "Reopened" };
    println!("{verb} {}: {}", step.label, step.title);
    println!(
        "Progress: {}/{} ({}%)",
        completion.completed, completion.total, completion.percent
    );
    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Write the starter definitions file.
pub fn cmd_init(path: &Path, force: bool) -> Result<(), PulseboardError> {
    if path.exists() && !force {
        return Err(PulseboardError::Io(
            "Definitions file already exists. Use --force to overwrite.".to_string(),
        ));
    }

    std::fs::write(path, STARTER_SCORECARD).map_err(|e| {
        PulseboardError::Io(format!("Cannot write '{}': {}", path.display(), e))
    })?;
    println!("Initialized starter scorecard at {}", path.display());

    Ok(())
}
