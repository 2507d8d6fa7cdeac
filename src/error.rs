//! Error types for the fantasy league history tool

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::types::Season;


pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("No espn_user_info.json or sleeper_user_info.json for season {season} in {}", dir.display())]
    MissingYearData { season: Season, dir: PathBuf },

    #[error("Malformed record for {user} in season {season}: {reason}")]
    MalformedRecord {
        user: String,
        season: Season,
        reason: String,
    },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Invalid year map: {message}")]
    InvalidYearMap { message: String },

    #[error("Invalid season range: {first} is after {last}")]
    InvalidSeasonRange { first: Season, last: Season },
}
