//! Champion crowning for a single season snapshot.

use tracing::info;

use crate::models::{PlayerYearRecord, YearSnapshot};

/// Users ordered by death week, earliest elimination first and survivors last.
///
/// Stable, so users sharing a death week keep snapshot (username) order.
pub fn sort_by_death_week(snapshot: &YearSnapshot) -> Vec<(&str, &PlayerYearRecord)> {
    let mut users: Vec<(&str, &PlayerYearRecord)> = snapshot
        .iter()
        .map(|(user, rec)| (user.as_str(), rec))
        .collect();
    users.sort_by_key(|(_, rec)| (rec.death_week().is_none(), rec.death_week()));
    users
}

/// The champion is whichever of the two last-standing teams scored more in
/// the final week. An exact tie goes to the second-to-last team.
///
/// Teams that never scored are not candidates.
pub fn find_champion(snapshot: &YearSnapshot) -> Option<String> {
    let candidates: Vec<(&str, &PlayerYearRecord)> = sort_by_death_week(snapshot)
        .into_iter()
        .filter(|(_, rec)| rec.has_played())
        .collect();

    match candidates.as_slice() {
        [] => None,
        [(only, _)] => Some(only.to_string()),
        [.., (second, second_rec), (last, last_rec)] => {
            if last_rec.final_score() > second_rec.final_score() {
                Some(last.to_string())
            } else {
                Some(second.to_string())
            }
        }
    }
}

/// Clear the champion's death week so it reads as having survived the season.
pub fn crown_champion(snapshot: &mut YearSnapshot) -> Option<String> {
    let champion = find_champion(snapshot)?;
    if let Some(record) = snapshot.get_mut(&champion) {
        record.clear_death_week();
    }
    info!(champion = %champion, "crowned champion");
    Some(champion)
}
