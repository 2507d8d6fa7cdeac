//! Analyze command implementation

use std::path::PathBuf;
use tracing::info;

use crate::{
    core::storage::{FINAL_TABLE_FILE, NAME_ASSOCIATION_FILE},
    config::path_or_default,
    history::{build_final_table, calculate_avg_death_week, save_final_table, NameAssociation},
    Result, SeasonRange,
};

use super::report::LeagueReport;

/// Parameters for the analyze command
#[derive(Debug)]
pub struct AnalyzeParams {
    pub data_dir: PathBuf,
    pub seasons: SeasonRange,
    /// Defaults to `espn_to_sleeper_name_asso.json` in the data directory.
    pub names_path: Option<PathBuf>,
    /// Defaults to `final_deaths.json` in the data directory.
    pub output: Option<PathBuf>,
    pub as_json: bool,
}

/// Build the multi-season table, print every report and write the table out.
///
/// Nothing is written unless every season loaded.
pub fn handle_analyze(params: AnalyzeParams) -> Result<LeagueReport> {
    let names_path = path_or_default(params.names_path, &params.data_dir, NAME_ASSOCIATION_FILE);
    let output = path_or_default(params.output, &params.data_dir, FINAL_TABLE_FILE);

    let names = NameAssociation::load(&names_path)?;
    let mut table = build_final_table(&params.data_dir, params.seasons, &names)?;
    calculate_avg_death_week(&mut table);
    info!(users = table.len(), seasons = %params.seasons, "built final table");

    let report = LeagueReport::build(&table, params.seasons);
    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
    } else {
        print!("{}", report); // tarpaulin::skip
    }

    save_final_table(&table, &output)?;
    Ok(report)
}
