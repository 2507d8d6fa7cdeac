//! Console and JSON rendering of the season reports.

use serde::Serialize;
use std::{collections::BTreeMap, fmt};

use crate::{
    history::{
        bye_week, david_goliath, highest_in_year, lowest_in_year, narrowest_loss,
        sorted_by_best_death_week, top_5_narrowest_losses, ScoreRecord, WeekMargin,
    },
    models::FinalPlayerTable,
    Season, SeasonRange,
};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub user: String,
    pub average_death_week: f64,
}

/// Every report for a table, in print order.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub leaderboard: Vec<LeaderboardRow>,
    pub highest_scores: BTreeMap<Season, ScoreRecord>,
    pub lowest_scores: BTreeMap<Season, ScoreRecord>,
    pub narrowest_losses: BTreeMap<Season, WeekMargin>,
    pub top_5_narrowest_losses: BTreeMap<Season, Vec<WeekMargin>>,
    pub bye_weeks: BTreeMap<Season, WeekMargin>,
    pub david_goliath: BTreeMap<Season, WeekMargin>,
}

impl LeagueReport {
    /// Run every report. Expects averages to have been calculated.
    pub fn build(table: &FinalPlayerTable, seasons: SeasonRange) -> Self {
        Self {
            leaderboard: sorted_by_best_death_week(table)
                .into_iter()
                .map(|(user, average_death_week)| LeaderboardRow {
                    user,
                    average_death_week,
                })
                .collect(),
            highest_scores: highest_in_year(table, seasons),
            lowest_scores: lowest_in_year(table, seasons),
            narrowest_losses: narrowest_loss(table, seasons),
            top_5_narrowest_losses: top_5_narrowest_losses(table, seasons),
            bye_weeks: bye_week(table, seasons),
            david_goliath: david_goliath(table, seasons),
        }
    }
}

fn write_scores(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    scores: &BTreeMap<Season, ScoreRecord>,
) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for (season, record) in scores {
        writeln!(f, "Year: {}", season)?;
        writeln!(f, "  Player: {}", record.player)?;
        writeln!(f, "  Score: {}", record.score)?;
        writeln!(f, "  Week: {}", record.week)?;
        writeln!(f)?;
    }
    Ok(())
}

fn write_margins(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    upper_label: &str,
    margins: &BTreeMap<Season, WeekMargin>,
) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    writeln!(f)?;
    for (season, m) in margins {
        writeln!(f, "Year: {}", season)?;
        writeln!(f, "  Week: {}", m.week)?;
        writeln!(f, "  Losing Player: {} ({})", m.lower.user, m.lower.score)?;
        writeln!(f, "  {}: {} ({})", upper_label, m.upper.user, m.upper.score)?;
        writeln!(f, "  Difference: {:.2}", m.difference)?;
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for LeagueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Death Week:")?;
        for row in &self.leaderboard {
            writeln!(
                f,
                "{}: Average Death Week = {:.2}",
                row.user, row.average_death_week
            )?;
        }
        writeln!(f)?;

        write_scores(f, "Highest Scores by Year", &self.highest_scores)?;
        write_scores(f, "Lowest Scores by Year", &self.lowest_scores)?;
        write_margins(
            f,
            "Narrowest Loss by Year",
            "Second Lowest Player",
            &self.narrowest_losses,
        )?;

        for (season, losses) in &self.top_5_narrowest_losses {
            writeln!(f, "Top 5 Narrowest Losses for {}:", season)?;
            writeln!(f)?;
            for (i, loss) in losses.iter().enumerate() {
                writeln!(f, "  {}. Week {}:", i + 1, loss.week)?;
                writeln!(f, "     Players: {} vs {}", loss.lower.user, loss.upper.user)?;
                writeln!(f, "     Score Difference: {:.2}", loss.difference)?;
            }
            writeln!(f, "{}", "-".repeat(40))?;
        }
        writeln!(f)?;

        write_margins(
            f,
            "Bye Week Loss by Year",
            "Second Lowest Player",
            &self.bye_weeks,
        )?;
        write_margins(
            f,
            "Largest Gap (Highest and Lowest) by Year",
            "Highest Player",
            &self.david_goliath,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{history::calculate_avg_death_week, models::PlayerYearRecord};

    fn sample_table() -> FinalPlayerTable {
        let mut table = FinalPlayerTable::new();
        let rows: [(&str, &[f64], Option<u32>); 3] = [
            ("alpha", &[100.0, 90.0, 120.0], None),
            ("bravo", &[95.0, 91.0, 0.0], Some(2)),
            ("charlie", &[60.0, 150.0, 0.0], Some(2)),
        ];
        for (user, scores, death) in rows {
            table.insert_year(
                user,
                Season::new(2021),
                PlayerYearRecord::try_new(scores.to_vec(), death).unwrap(),
            );
        }
        calculate_avg_death_week(&mut table);
        table
    }

    fn season_2021() -> SeasonRange {
        SeasonRange::new(Season::new(2021), Season::new(2021)).unwrap()
    }

    #[test]
    fn test_build_runs_every_report() {
        let report = LeagueReport::build(&sample_table(), season_2021());

        assert_eq!(report.leaderboard[0].user, "alpha");
        assert_eq!(report.leaderboard[0].average_death_week, 3.0);
        assert_eq!(report.highest_scores[&Season::new(2021)].player, "charlie");
        assert_eq!(report.lowest_scores[&Season::new(2021)].score, 60.0);
        assert_eq!(report.narrowest_losses[&Season::new(2021)].difference, 1.0);
        assert_eq!(report.top_5_narrowest_losses[&Season::new(2021)].len(), 2);
        assert_eq!(report.bye_weeks[&Season::new(2021)].week.as_u16(), 1);
        assert_eq!(report.david_goliath[&Season::new(2021)].difference, 60.0);
    }

    #[test]
    fn test_text_output() {
        let text = LeagueReport::build(&sample_table(), season_2021()).to_string();

        assert!(text.contains("alpha: Average Death Week = 3.00"));
        assert!(text.contains("Highest Scores by Year:"));
        assert!(text.contains("  Player: charlie"));
        assert!(text.contains("Top 5 Narrowest Losses for 2021:"));
        assert!(text.contains("     Players: alpha vs bravo"));
        assert!(text.contains("Largest Gap (Highest and Lowest) by Year:"));
    }

    #[test]
    fn test_json_output() {
        let report = LeagueReport::build(&sample_table(), season_2021());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["leaderboard"][0]["user"], "alpha");
        assert_eq!(value["highest_scores"]["2021"]["week"], 2);
        assert_eq!(value["narrowest_losses"]["2021"]["lower"]["user"], "alpha");
    }
}
