//! Fantasy Football League History Library
//!
//! Collects per-season snapshots from ESPN and Sleeper leagues, merges them
//! under one canonical username per player, and derives league history
//! reports from the merged table.
//!
//! ## Features
//!
//! - **Season Fetching**: Pull ESPN and Sleeper seasons into flat JSON snapshots
//! - **Name Reconciliation**: Map ESPN display names onto Sleeper usernames
//! - **Death Week Leaderboard**: Rank players by average elimination week
//! - **Score Extremes**: Highest and lowest single-week scores per season
//! - **Weekly Margins**: Narrowest losses, bye weeks and David vs Goliath gaps
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ffl_history::{history::*, SeasonRange};
//!
//! # fn example() -> ffl_history::Result<()> {
//! let data_dir = Path::new("data");
//! let names = NameAssociation::load(&data_dir.join("espn_to_sleeper_name_asso.json"))?;
//! let mut table = build_final_table(data_dir, SeasonRange::default(), &names)?;
//! calculate_avg_death_week(&mut table);
//!
//! for (user, avg) in sorted_by_best_death_week(&table) {
//!     println!("{}: {:.2}", user, avg);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Values can live in `website.env` or `.env`:
//! ```bash
//! export ESPN_LEAGUE_ID=123456
//! export YEAR_MAP='{"2022": "784512345678901234"}'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod history;
pub mod models;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, SeasonRange, SleeperLeagueId, Week, MAX_WEEKS};
pub use error::{HistoryError, Result};
