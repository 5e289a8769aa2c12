//! Full build run
//!
//! Fetches every bracket snapshot in turn, writing each gear table as soon
//! as its snapshot arrives, then compiles the cross-bracket tables. All
//! requests are sequential. A failed snapshot or catalog fetch aborts the
//! run; artifacts already written stay on disk.

use std::path::{Path, PathBuf};

use gst_common::{Bracket, BuildConfig, Error, Result};
use tracing::{error, info};

use crate::compile::bracket_names::render_bracket_names;
use crate::compile::enchant_usage::{compile_enchant_usage, render_enchant_usage};
use crate::compile::gear_usage::{compile_gear_usage, render_gear_usage};
use crate::compile::loadouts::{compile_loadouts, render_loadouts};
use crate::compile::slot_gear::{compile_slot_gear, render_slot_gear};
use crate::compile::BracketSnapshot;
use crate::enchant_names::EnchantNameResolver;
use crate::lua::write_artifact;
use crate::sources::{GearSource, ProfileSource};
use crate::talent_cache::TalentCodeCache;

pub const BRACKET_NAMES_FILE: &str = "BracketNames.lua";
pub const LOADOUTS_FILE: &str = "Loadouts.lua";
pub const ENCHANTS_FILE: &str = "Enchants.lua";
pub const SLOT_GEAR_FILE: &str = "SlotGear.lua";

/// Outcome of a completed build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Written artifacts in write order
    pub artifacts: Vec<PathBuf>,
    pub loadout_rows: usize,
    pub enchant_rows: usize,
    pub slot_gear_rows: usize,
}

fn check_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "Output folder {} does not exist",
            dir.display()
        )))
    }
}

/// Run a full build over every bracket of [`Bracket::all`]
pub async fn run_build<G, P>(config: &BuildConfig, gear: &G, profiles: &P) -> Result<BuildReport>
where
    G: GearSource + ?Sized,
    P: ProfileSource + ?Sized,
{
    run_brackets(config, &Bracket::all(), gear, profiles).await
}

/// Run a build over the given brackets, in order
pub async fn run_brackets<G, P>(
    config: &BuildConfig,
    brackets: &[Bracket],
    gear: &G,
    profiles: &P,
) -> Result<BuildReport>
where
    G: GearSource + ?Sized,
    P: ProfileSource + ?Sized,
{
    let out = config.output_dir.as_path();
    check_output_dir(out)?;

    let mut report = BuildReport::default();
    let mut snapshots = Vec::with_capacity(brackets.len());

    for bracket in brackets {
        let records = gear.fetch_snapshot(bracket).await.map_err(|e| {
            error!(bracket = %bracket, error = %e, "Snapshot fetch failed");
            Error::from(e)
        })?;

        let lines = compile_gear_usage(&records);
        let contents = render_gear_usage(&bracket.usage_db_name(), &lines);
        report
            .artifacts
            .push(write_artifact(out, &bracket.gearing_file(), &contents)?);

        snapshots.push(BracketSnapshot {
            bracket: bracket.clone(),
            records,
        });
    }

    report.artifacts.push(write_artifact(
        out,
        BRACKET_NAMES_FILE,
        &render_bracket_names(brackets),
    )?);

    let mut cache = TalentCodeCache::new();
    let loadouts = compile_loadouts(&snapshots, profiles, &mut cache).await;
    cache.log_report();
    report.loadout_rows = loadouts.len();
    report
        .artifacts
        .push(write_artifact(out, LOADOUTS_FILE, &render_loadouts(&loadouts))?);

    let catalog = gear.fetch_enchant_catalog().await.map_err(|e| {
        error!(error = %e, "Enchant catalog fetch failed");
        Error::from(e)
    })?;
    let resolver = EnchantNameResolver::from_catalog(&catalog);
    let enchants = compile_enchant_usage(&snapshots, &resolver, config.enchant_policy);
    report.enchant_rows = enchants.len();
    report
        .artifacts
        .push(write_artifact(out, ENCHANTS_FILE, &render_enchant_usage(&enchants))?);

    let slot_gear = compile_slot_gear(&snapshots);
    report.slot_gear_rows = slot_gear.len();
    report
        .artifacts
        .push(write_artifact(out, SLOT_GEAR_FILE, &render_slot_gear(&slot_gear))?);

    info!(
        artifacts = report.artifacts.len(),
        loadouts = report.loadout_rows,
        enchants = report.enchant_rows,
        slot_gear = report.slot_gear_rows,
        "Build complete"
    );
    Ok(report)
}
