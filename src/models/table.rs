//! Multi-season table keyed by canonical username.

use serde::{
    de::Error as _,
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;
use std::collections::BTreeMap;

use super::record::PlayerYearRecord;
use crate::Season;

/// JSON key the average is stored under next to the season keys.
pub const AVERAGE_DEATH_WEEK_KEY: &str = "average_death_week";

/// Every tracked season for one user.
///
/// Serialized as `{"2019": {...}, "2020": {...}, "average_death_week": 4.5}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    pub years: BTreeMap<Season, PlayerYearRecord>,
    /// Only meaningful after [`crate::history::calculate_avg_death_week`] ran.
    pub average_death_week: Option<f64>,
}

impl UserRecord {
    pub fn year(&self, season: Season) -> Option<&PlayerYearRecord> {
        self.years.get(&season)
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.years.len() + usize::from(self.average_death_week.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (season, record) in &self.years {
            map.serialize_entry(&season.to_string(), record)?;
        }
        if let Some(avg) = self.average_death_week {
            map.serialize_entry(AVERAGE_DEATH_WEEK_KEY, &avg)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, Value> = Deserialize::deserialize(deserializer)?;
        let mut record = UserRecord::default();

        for (key, value) in raw {
            if key == AVERAGE_DEATH_WEEK_KEY {
                record.average_death_week = Some(f64::deserialize(value).map_err(D::Error::custom)?);
                continue;
            }
            let season: Season = key.parse().map_err(D::Error::custom)?;
            let year = PlayerYearRecord::deserialize(value).map_err(D::Error::custom)?;
            record.years.insert(season, year);
        }

        Ok(record)
    }
}

/// All users across all seasons, ordered by username.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalPlayerTable {
    users: BTreeMap<String, UserRecord>,
}

impl FinalPlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a season for `user`, returning any record it replaced.
    pub fn insert_year(
        &mut self,
        user: &str,
        season: Season,
        record: PlayerYearRecord,
    ) -> Option<PlayerYearRecord> {
        self.users
            .entry(user.to_string())
            .or_default()
            .years
            .insert(season, record)
    }

    pub fn get(&self, user: &str) -> Option<&UserRecord> {
        self.users.get(user)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &UserRecord)> {
        self.users.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut UserRecord)> {
        self.users.iter_mut()
    }

    /// Every user's record for `season`, in username order.
    pub fn season_records(&self, season: Season) -> impl Iterator<Item = (&str, &PlayerYearRecord)> {
        self.users
            .iter()
            .filter_map(move |(user, rec)| rec.year(season).map(|y| (user.as_str(), y)))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
