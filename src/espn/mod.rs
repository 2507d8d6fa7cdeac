//! ESPN Fantasy Football season extraction.
//!
//! - `http`: league endpoint client
//! - `types`: the slice of the league payload we deserialize
//! - `compute`: weekly scores, death week and owner naming

pub mod compute;
pub mod http;
pub mod types;

pub use compute::{espn_death_week, user_info};
pub use http::{EspnClient, FFL_BASE_URL};
