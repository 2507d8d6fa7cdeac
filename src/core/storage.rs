//! Flat JSON snapshot storage.
//!
//! Every file the tool reads or writes lives under a data directory laid out as
//!
//! ```text
//! <data_dir>/
//!   espn_to_sleeper_name_asso.json
//!   final_deaths.json
//!   2019/espn_user_info.json
//!   2022/sleeper_user_info.json
//!   2022/week_1.json ...
//! ```

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Result, Season};


pub const ESPN_USER_INFO_FILE: &str = "espn_user_info.json";
pub const SLEEPER_USER_INFO_FILE: &str = "sleeper_user_info.json";
pub const ESPN_MEMBERS_FILE: &str = "members.json";
pub const NAME_ASSOCIATION_FILE: &str = "espn_to_sleeper_name_asso.json";
pub const FINAL_TABLE_FILE: &str = "final_deaths.json";

/// Fantasy platform a year snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Espn,
    Sleeper,
}

impl Platform {
    /// Lookup order used by the year loader.
    pub const ALL: [Platform; 2] = [Platform::Espn, Platform::Sleeper];

    pub fn user_info_file(&self) -> &'static str {
        match self {
            Platform::Espn => ESPN_USER_INFO_FILE,
            Platform::Sleeper => SLEEPER_USER_INFO_FILE,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Espn => f.write_str("ESPN"),
            Platform::Sleeper => f.write_str("Sleeper"),
        }
    }
}

/// Path: {data_dir}/{season}
pub fn season_dir(data_dir: &Path, season: Season) -> PathBuf {
    data_dir.join(season.to_string())
}

/// Path: {data_dir}/{season}/{espn|sleeper}_user_info.json
pub fn user_info_path(data_dir: &Path, season: Season, platform: Platform) -> PathBuf {
    season_dir(data_dir, season).join(platform.user_info_file())
}

/// Path: {data_dir}/{season}/week_{week}.json
pub fn sleeper_week_path(data_dir: &Path, season: Season, week: u16) -> PathBuf {
    season_dir(data_dir, season).join(format!("week_{}.json", week))
}

/// Path: {data_dir}/{season}/roster_user_association_{season}.json
pub fn roster_association_path(data_dir: &Path, season: Season) -> PathBuf {
    season_dir(data_dir, season).join(format!("roster_user_association_{}.json", season))
}

/// Week number encoded in a `week_<n>.json` file name.
pub fn parse_week_file_name(name: &str) -> Option<u16> {
    name.strip_prefix("week_")?.strip_suffix(".json")?.parse().ok()
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Load and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize a value as pretty JSON and write it out.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_string(path, &json)?;
    tracing::debug!(path = %path.display(), "wrote json snapshot");
    Ok(())
}
