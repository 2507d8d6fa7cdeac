//! Unit tests for Sleeper score extraction

use super::*;
use crate::core::storage::{sleeper_week_path, write_string};
use serde_json::json;
use tempfile::TempDir;

fn user(id: &str, display_name: Option<&str>) -> SleeperUser {
    SleeperUser {
        user_id: id.to_string(),
        username: None,
        display_name: display_name.map(str::to_string),
    }
}

fn matchup(roster_id: u32, points: f64) -> Matchup {
    Matchup {
        roster_id,
        matchup_id: Some(1),
        points: Some(points),
    }
}

#[cfg(test)]
mod association_tests {
    use super::*;

    #[test]
    fn test_associate_rosters_skips_bot_and_nameless() {
        let owners = vec![
            (1, user("111", Some("gridiron_greg"))),
            (2, user("222", Some("GLExecutioner"))),
            (3, user("333", None)),
            (4, user("444", Some("punter_pat"))),
        ];

        let association = associate_rosters(owners, &["GLExecutioner".to_string()]);

        assert_eq!(association.len(), 2);
        assert_eq!(association[&1].username, "gridiron_greg");
        assert_eq!(association[&4].username, "punter_pat");
        assert!(!association.contains_key(&2));
    }

    #[test]
    fn test_association_json_uses_string_keys() {
        let association = associate_rosters(vec![(7, user("1", Some("greg")))], &[]);
        let value = serde_json::to_value(&association).unwrap();
        assert_eq!(value, json!({"7": {"username": "greg"}}));

        let back: RosterAssociation = serde_json::from_value(value).unwrap();
        assert_eq!(back, association);
    }
}

#[cfg(test)]
mod scores_tests {
    use super::*;

    #[test]
    fn test_death_week_last_positive_week() {
        assert_eq!(sleeper_death_week(&[100.0, 90.0, 0.0, 0.0]), Some(2));
        assert_eq!(sleeper_death_week(&[100.0, 0.0, 80.0]), Some(3));
        assert_eq!(sleeper_death_week(&[0.0, 0.0]), None);
        assert_eq!(sleeper_death_week(&[]), None);
    }

    #[test]
    fn test_user_info_builds_weekly_scores() {
        let association = associate_rosters(
            vec![(1, user("1", Some("alpha"))), (2, user("2", Some("bravo")))],
            &[],
        );
        let weeks = vec![
            (1, vec![matchup(1, 100.0), matchup(2, 90.0), matchup(9, 50.0)]),
            (2, vec![matchup(1, 110.0), matchup(2, 0.0)]),
            (3, vec![matchup(1, 120.0), matchup(2, 0.0)]),
        ];

        let snapshot = user_info(&association, &weeks, Season::new(2022));

        assert_eq!(snapshot["alpha"].scores(), &[100.0, 110.0, 120.0]);
        assert_eq!(snapshot["alpha"].death_week(), Some(3));
        assert_eq!(snapshot["bravo"].scores(), &[90.0, 0.0, 0.0]);
        assert_eq!(snapshot["bravo"].death_week(), Some(1));
    }

    #[test]
    fn test_user_info_keeps_users_without_matchups() {
        let association = associate_rosters(vec![(1, user("1", Some("alpha")))], &[]);

        let snapshot = user_info(&association, &[], Season::new(2022));

        assert!(snapshot["alpha"].scores().is_empty());
        assert_eq!(snapshot["alpha"].death_week(), None);
    }

    #[test]
    fn test_missing_points_count_as_zero() {
        let association = associate_rosters(vec![(1, user("1", Some("alpha")))], &[]);
        let weeks = vec![(
            1,
            vec![Matchup {
                roster_id: 1,
                matchup_id: None,
                points: None,
            }],
        )];

        let snapshot = user_info(&association, &weeks, Season::new(2022));
        assert_eq!(snapshot["alpha"].scores(), &[0.0]);
    }
}

#[cfg(test)]
mod week_file_tests {
    use super::*;

    #[test]
    fn test_load_week_matchups_numeric_order() {
        let temp_dir = TempDir::new().unwrap();
        let season = Season::new(2022);
        for week in [10u16, 2, 1] {
            let body = json!([{"roster_id": 1, "points": week as f64}]);
            write_string(&sleeper_week_path(temp_dir.path(), season, week), &body.to_string())
                .unwrap();
        }
        write_string(
            &temp_dir.path().join("2022").join("roster_user_association_2022.json"),
            "{}",
        )
        .unwrap();

        let weeks = load_week_matchups(temp_dir.path(), season).unwrap();
        let order: Vec<u16> = weeks.iter().map(|(w, _)| *w).collect();
        assert_eq!(order, vec![1, 2, 10]);
        assert_eq!(weeks[2].1[0].points, Some(10.0));
    }

    #[test]
    fn test_load_week_matchups_null_week() {
        let temp_dir = TempDir::new().unwrap();
        let season = Season::new(2022);
        write_string(&sleeper_week_path(temp_dir.path(), season, 1), "null").unwrap();

        let weeks = load_week_matchups(temp_dir.path(), season).unwrap();
        assert_eq!(weeks.len(), 1);
        assert!(weeks[0].1.is_empty());
    }

    #[test]
    fn test_load_week_matchups_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_week_matchups(temp_dir.path(), Season::new(2022));
        assert!(matches!(result, Err(HistoryError::Io(_))));
    }
}
