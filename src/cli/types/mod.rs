//! Type-safe wrappers for league, season and week values.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, SleeperLeagueId};
pub use time::{Season, SeasonRange, Week, MAX_WEEKS};
