//! Environment-driven configuration.
//!
//! Values come from CLI flags first, then environment variables. The
//! environment may be seeded from `website.env` and `.env` in the working
//! directory.

use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, SleeperLeagueId},
    HistoryError, Result,
};

pub const ESPN_LEAGUE_ID_ENV_VAR: &str = "ESPN_LEAGUE_ID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
pub const YEAR_MAP_ENV_VAR: &str = "YEAR_MAP";
pub const DATA_DIR_ENV_VAR: &str = "FFL_DATA_DIR";

/// Dotenv files tried, in order. Earlier files win.
pub const ENV_FILES: [&str; 2] = ["website.env", ".env"];

/// Sleeper bot account that owns a roster but is not a league member.
pub const DEFAULT_SKIPPED_USER: &str = "GLExecutioner";

/// Season -> Sleeper league id.
pub type YearMap = BTreeMap<Season, SleeperLeagueId>;

/// Load any dotenv files present in the working directory.
pub fn load_env_files() {
    for file in ENV_FILES {
        match dotenvy::from_filename(file) {
            Ok(path) => debug!(path = %path.display(), "loaded environment file"),
            Err(e) => debug!(file, error = %e, "environment file not loaded"),
        }
    }
}

/// Resolve ESPN league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(ESPN_LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| HistoryError::MissingLeagueId {
            env_var: ESPN_LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Cookies for private ESPN leagues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspnCookies {
    pub swid: String,
    pub espn_s2: String,
}

impl EspnCookies {
    /// Read `ESPN_SWID` and `ESPN_S2`; `None` unless both are set (public leagues).
    pub fn from_env() -> Option<Self> {
        let swid = std::env::var(ESPN_SWID_ENV_VAR).ok()?;
        let espn_s2 = std::env::var(ESPN_S2_ENV_VAR).ok()?;
        Some(Self { swid, espn_s2 })
    }

    pub fn header_value(&self) -> String {
        format!("SWID={}; espn_s2={}", self.swid, self.espn_s2)
    }
}

/// Parse a year map such as `{"2022": "784512369874512345", "2023": "918273645546372819"}`.
///
/// League ids may be given as strings or bare numbers.
pub fn parse_year_map(raw: &str) -> Result<YearMap> {
    let entries: BTreeMap<String, Value> =
        serde_json::from_str(raw).map_err(|e| HistoryError::InvalidYearMap {
            message: e.to_string(),
        })?;

    entries
        .into_iter()
        .map(|(year, id)| {
            let season: Season = year.parse().map_err(|_| HistoryError::InvalidYearMap {
                message: format!("'{}' is not a season", year),
            })?;
            let id = match id {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(HistoryError::InvalidYearMap {
                        message: format!("league id for {} must be a string, got {}", year, other),
                    })
                }
            };
            Ok((season, SleeperLeagueId::new(id)))
        })
        .collect()
}

/// Resolve the Sleeper year map from option or the `YEAR_MAP` environment variable
pub fn resolve_year_map(year_map: Option<String>) -> Result<YearMap> {
    let raw = year_map
        .or_else(|| std::env::var(YEAR_MAP_ENV_VAR).ok())
        .ok_or_else(|| HistoryError::InvalidYearMap {
            message: format!("not provided and {} environment variable not set", YEAR_MAP_ENV_VAR),
        })?;
    parse_year_map(&raw)
}

/// Data directory from option, then `FFL_DATA_DIR`, then the working directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| std::env::var(DATA_DIR_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `path` if given, else `file_name` inside the data directory.
pub fn path_or_default(path: Option<PathBuf>, data_dir: &Path, file_name: &str) -> PathBuf {
    path.unwrap_or_else(|| data_dir.join(file_name))
}
