//! Season and week types.

use crate::error::{HistoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season tracked by default.
pub const DEFAULT_FIRST_SEASON: u16 = 2019;
/// Last season tracked by default.
pub const DEFAULT_LAST_SEASON: u16 = 2023;
/// Longest regular season plus playoffs we bucket scores for.
pub const MAX_WEEKS: u16 = 18;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_LAST_SEASON)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for 1-indexed week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    /// Week for a 0-based position in a scores list. Saturates at `u16::MAX`.
    pub fn from_index(index: usize) -> Self {
        Self(u16::try_from(index.saturating_add(1)).unwrap_or(u16::MAX))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of seasons the reports walk over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    first: Season,
    last: Season,
}

impl SeasonRange {
    /// Build a range, rejecting `first > last`.
    pub fn new(first: Season, last: Season) -> Result<Self> {
        if first > last {
            return Err(HistoryError::InvalidSeasonRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> Season {
        self.first
    }

    pub fn last(&self) -> Season {
        self.last
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.first.as_u16()..=self.last.as_u16()).map(Season::new)
    }

    pub fn contains(&self, season: Season) -> bool {
        self.first <= season && season <= self.last
    }
}

impl Default for SeasonRange {
    fn default() -> Self {
        Self {
            first: Season::new(DEFAULT_FIRST_SEASON),
            last: Season::new(DEFAULT_LAST_SEASON),
        }
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_str() {
        assert_eq!("2021".parse::<Season>().unwrap(), Season::new(2021));
        assert_eq!(" 2022 ".parse::<Season>().unwrap(), Season::new(2022));
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_from_index_is_one_based() {
        assert_eq!(Week::from_index(0), Week::new(1));
        assert_eq!(Week::from_index(17), Week::new(18));
        assert_eq!(Week::from_index(65_534), Week::new(u16::MAX));
        assert_eq!(Week::from_index(70_000), Week::new(u16::MAX));
    }

    #[test]
    fn test_season_range_iterates_inclusive() {
        let range = SeasonRange::new(Season::new(2019), Season::new(2021)).unwrap();
        let seasons: Vec<u16> = range.iter().map(|s| s.as_u16()).collect();
        assert_eq!(seasons, vec![2019, 2020, 2021]);
        assert!(range.contains(Season::new(2020)));
        assert!(!range.contains(Season::new(2022)));
    }

    #[test]
    fn test_season_range_single_season() {
        let range = SeasonRange::new(Season::new(2020), Season::new(2020)).unwrap();
        assert_eq!(range.iter().count(), 1);
    }

    #[test]
    fn test_season_range_rejects_reversed() {
        let result = SeasonRange::new(Season::new(2023), Season::new(2019));
        assert!(matches!(
            result,
            Err(HistoryError::InvalidSeasonRange { .. })
        ));
    }

    #[test]
    fn test_season_range_default() {
        let range = SeasonRange::default();
        assert_eq!(range.first(), Season::new(2019));
        assert_eq!(range.last(), Season::new(2023));
        assert_eq!(range.to_string(), "2019-2023");
    }
}
