//! Command implementations for the league history CLI

pub mod analyze;
pub mod crown;
pub mod fetch_espn;
pub mod fetch_sleeper;
pub mod report;
