//! Crown command: mark the champion on an existing season snapshot.

use serde_json::Value;
use std::{collections::BTreeMap, path::Path};
use tracing::info;

use crate::{
    core::storage::{load_json, save_json},
    history::{find_champion, locate_year, read_snapshot, sort_by_death_week},
    Result, Season,
};

/// Re-crown the champion of a saved season and rewrite the snapshot in place.
///
/// Only the champion's `death_week` changes on disk. Records that fail
/// validation are left out of the crowning but kept in the file as written.
pub fn handle_crown(data_dir: &Path, season: Season, verbose: bool) -> Result<Option<String>> {
    let (platform, path) = locate_year(data_dir, season)?;
    let snapshot = read_snapshot(&path, season)?;

    if verbose {
        for (user, record) in sort_by_death_week(&snapshot) {
            println!("{}: death_week is {:?}", user, record.death_week());
        }
    }

    let Some(champion) = find_champion(&snapshot) else {
        println!("⚠ No team scored in {} {}, nobody crowned", platform, season);
        return Ok(None);
    };

    let mut raw: BTreeMap<String, Value> = load_json(&path)?;
    if let Some(Value::Object(entry)) = raw.get_mut(&champion) {
        entry.insert("death_week".to_string(), Value::Null);
    }
    save_json(&raw, &path)?;

    info!(%season, champion = %champion, "crowned champion");
    println!("Champion ({} {}): {}", platform, season, champion);
    Ok(Some(champion))
}
