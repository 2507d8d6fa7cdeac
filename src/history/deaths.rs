//! Average death week and the survival leaderboard.

use crate::models::{FinalPlayerTable, UserRecord};

/// Mean effective death week across a user's seasons; `0.0` with no seasons.
pub fn average_death_week(user: &UserRecord) -> f64 {
    if user.years.is_empty() {
        return 0.0;
    }
    let total: u32 = user
        .years
        .values()
        .map(|year| year.effective_death_week())
        .sum();
    total as f64 / user.years.len() as f64
}

/// Fill in `average_death_week` for every user in the table.
pub fn calculate_avg_death_week(table: &mut FinalPlayerTable) {
    for (_, user) in table.iter_mut() {
        user.average_death_week = Some(average_death_week(user));
    }
}

/// Users ordered by average death week, latest first.
///
/// The sort is stable, so equal averages keep the table's (username) order.
/// Users whose average was never computed rank as `0.0`.
pub fn sorted_by_best_death_week(table: &FinalPlayerTable) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = table
        .iter()
        .map(|(user, rec)| (user.clone(), rec.average_death_week.unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
