//! Sleeper season extraction.
//!
//! - `http`: rosters, users and weekly matchups endpoints
//! - `types`: payload shapes plus the saved roster association
//! - `compute`: weekly scores and death week from saved week files

pub mod compute;
pub mod http;
pub mod types;

pub use compute::{associate_rosters, load_week_matchups, sleeper_death_week, user_info};
pub use http::{SleeperClient, SLEEPER_BASE_URL};
