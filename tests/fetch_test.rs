//! Fetch commands against mocked ESPN and Sleeper servers

use ffl_history::{
    commands::{fetch_espn::fetch_espn_season, fetch_sleeper::fetch_sleeper_season},
    espn::EspnClient,
    history::load_year,
    sleeper::SleeperClient,
    LeagueId, Season, SleeperLeagueId,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_espn_season_saves_crowned_snapshot() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    mount_json(
        &server,
        "/ffl/seasons/2021/segments/0/leagues/12345",
        json!({
            "seasonId": 2021,
            "members": [
                {"id": "{M1}", "firstName": "Greg", "lastName": "Gridiron"},
                {"id": "{M2}", "firstName": "Pat", "lastName": "Punter"}
            ],
            "teams": [
                {"id": 1, "name": "Blitz", "owners": ["{M1}"]},
                {"id": 2, "name": "Sacks", "owners": ["{M2}"]}
            ],
            "schedule": [
                {"matchupPeriodId": 1, "home": {"teamId": 1, "totalPoints": 100.0}, "away": {"teamId": 2, "totalPoints": 95.0}},
                {"matchupPeriodId": 2, "home": {"teamId": 1, "totalPoints": 90.0}, "away": {"teamId": 2, "totalPoints": 91.0}},
                {"matchupPeriodId": 3, "home": {"teamId": 1, "totalPoints": 120.0}, "away": {"teamId": 2, "totalPoints": 0.0}}
            ]
        }),
    )
    .await;

    let client = EspnClient::new(format!("{}/ffl", server.uri()), None).unwrap();
    let snapshot = fetch_espn_season(&client, LeagueId::new(12345), Season::new(2021), tmp.path())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["Greg Gridiron"].death_week(), None);
    assert_eq!(snapshot["Pat Punter"].death_week(), Some(2));
    assert!(tmp.path().join("2021/members.json").is_file());

    let reloaded = load_year(tmp.path(), Season::new(2021)).unwrap();
    assert_eq!(reloaded, snapshot);
}

#[tokio::test]
async fn test_fetch_espn_season_failure_is_no_data() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = EspnClient::new(format!("{}/ffl", server.uri()), None).unwrap();
    let snapshot = fetch_espn_season(&client, LeagueId::new(12345), Season::new(2021), tmp.path())
        .await
        .unwrap();

    assert!(snapshot.is_none());
    assert!(!tmp.path().join("2021").exists());
}

#[tokio::test]
async fn test_fetch_sleeper_season_builds_snapshot_from_week_files() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let league = SleeperLeagueId::new("784512345678901234");

    mount_json(
        &server,
        "/league/784512345678901234/rosters",
        json!([
            {"roster_id": 1, "owner_id": "u1"},
            {"roster_id": 2, "owner_id": "u2"},
            {"roster_id": 3, "owner_id": "bot"},
            {"roster_id": 4, "owner_id": null}
        ]),
    )
    .await;
    mount_json(&server, "/user/u1", json!({"user_id": "u1", "display_name": "gg"})).await;
    mount_json(&server, "/user/u2", json!({"user_id": "u2", "username": "pp"})).await;
    mount_json(
        &server,
        "/user/bot",
        json!({"user_id": "bot", "display_name": "GLExecutioner"}),
    )
    .await;
    mount_json(
        &server,
        "/league/784512345678901234/matchups/1",
        json!([
            {"roster_id": 1, "matchup_id": 1, "points": 100.0},
            {"roster_id": 2, "matchup_id": 1, "points": 90.0},
            {"roster_id": 3, "matchup_id": 2, "points": 50.0}
        ]),
    )
    .await;
    mount_json(
        &server,
        "/league/784512345678901234/matchups/2",
        json!([
            {"roster_id": 1, "matchup_id": 1, "points": 110.0},
            {"roster_id": 2, "matchup_id": 1, "points": 0.0}
        ]),
    )
    .await;

    // Left over from an earlier run; week 3 fails this time.
    let season_dir = tmp.path().join("2022");
    fs::create_dir_all(&season_dir).unwrap();
    fs::write(
        season_dir.join("week_3.json"),
        json!([{"roster_id": 1, "points": 500.0}, {"roster_id": 2, "points": 400.0}]).to_string(),
    )
    .unwrap();

    let client = SleeperClient::new(server.uri()).unwrap();
    let skip = vec!["GLExecutioner".to_string()];
    let snapshot = fetch_sleeper_season(&client, &league, Season::new(2022), &skip, tmp.path())
        .await
        .unwrap();

    let users: Vec<&str> = snapshot.keys().map(String::as_str).collect();
    assert_eq!(users, vec!["gg", "pp"]);
    assert_eq!(snapshot["gg"].scores(), &[100.0, 110.0]);
    assert_eq!(snapshot["gg"].death_week(), None);
    assert_eq!(snapshot["pp"].death_week(), Some(1));

    assert!(season_dir.join("week_1.json").is_file());
    assert!(season_dir.join("week_2.json").is_file());
    assert_eq!(
        fs::read_to_string(season_dir.join("week_3.json")).unwrap(),
        "null"
    );

    let association: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(season_dir.join("roster_user_association_2022.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(association, json!({"1": {"username": "gg"}, "2": {"username": "pp"}}));

    let reloaded = load_year(tmp.path(), Season::new(2022)).unwrap();
    assert_eq!(reloaded, snapshot);
}
