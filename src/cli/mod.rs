//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    time::{DEFAULT_FIRST_SEASON, DEFAULT_LAST_SEASON},
    LeagueId, Season, SeasonRange,
};

use crate::{config::DEFAULT_SKIPPED_USER, Result};

/// Inclusive season range shared between commands
#[derive(Debug, Args)]
pub struct SeasonArgs {
    /// First season to include.
    #[clap(long, default_value_t = Season::new(DEFAULT_FIRST_SEASON))]
    pub first_season: Season,

    /// Last season to include.
    #[clap(long, default_value_t = Season::new(DEFAULT_LAST_SEASON))]
    pub last_season: Season,
}

impl SeasonArgs {
    pub fn range(&self) -> Result<SeasonRange> {
        SeasonRange::new(self.first_season, self.last_season)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge saved seasons into one table and print the league history reports.
    Analyze {
        /// Data directory (or set `FFL_DATA_DIR`). Defaults to the working directory.
        #[clap(long, short)]
        data_dir: Option<PathBuf>,

        #[clap(flatten)]
        seasons: SeasonArgs,

        /// ESPN name -> Sleeper name file. Defaults to `espn_to_sleeper_name_asso.json`.
        #[clap(long)]
        names: Option<PathBuf>,

        /// Where to write the merged table. Defaults to `final_deaths.json`.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch ESPN seasons and save a snapshot per season.
    FetchEspn {
        /// League ID (or set `ESPN_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        seasons: SeasonArgs,

        /// Data directory (or set `FFL_DATA_DIR`).
        #[clap(long, short)]
        data_dir: Option<PathBuf>,

        /// Print written paths when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Fetch Sleeper seasons and save rosters, weekly matchups and a snapshot.
    FetchSleeper {
        /// JSON object of season -> Sleeper league id (or set `YEAR_MAP`).
        #[clap(long)]
        year_map: Option<String>,

        /// Data directory (or set `FFL_DATA_DIR`).
        #[clap(long, short)]
        data_dir: Option<PathBuf>,

        /// Accounts to leave out of the roster association (repeatable).
        #[clap(long = "skip-user", default_value = DEFAULT_SKIPPED_USER)]
        skip_users: Vec<String>,

        /// Print written paths when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Re-crown the champion of an already saved season.
    Crown {
        /// Season year (e.g. 2021).
        #[clap(long, short)]
        season: Season,

        /// Data directory (or set `FFL_DATA_DIR`).
        #[clap(long, short)]
        data_dir: Option<PathBuf>,

        /// Print every team's death week before crowning.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-history", about = "Fantasy football league history")]
pub struct FflHistory {
    #[clap(subcommand)]
    pub command: Commands,
}
