//! Data model for per-season scores and the aggregated multi-season table.

pub mod record;
pub mod table;


pub use record::{validate_snapshot, PlayerYearRecord, RawYearRecord, RawYearSnapshot, YearSnapshot};
pub use table::{FinalPlayerTable, UserRecord, AVERAGE_DEATH_WEEK_KEY};
