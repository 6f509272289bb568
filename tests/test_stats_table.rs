use shotchart::{
    errors::AppError,
    models::{CareerRecord, ShotEvent, ShotOutcome},
    stats::StatsResponse,
};

const SHOT_CHART_JSON: &str = r#"{
  "resource": "shotchartdetail",
  "resultSets": [
    {
      "name": "Shot_Chart_Detail",
      "headers": ["GRID_TYPE", "GAME_ID", "PLAYER_ID", "EVENT_TYPE", "SHOT_ZONE_BASIC", "SHOT_DISTANCE", "LOC_X", "LOC_Y", "SHOT_MADE_FLAG"],
      "rowSet": [
        ["Shot Chart Detail", "0021500003", 201939, "Made Shot", "Above the Break 3", 26, -133, 226, 1],
        ["Shot Chart Detail", "0021500003", 201939, "Missed Shot", "Restricted Area", 1, 8, 11, 0]
      ]
    },
    {
      "name": "LeagueAverages",
      "headers": ["GRID_TYPE", "SHOT_ZONE_BASIC", "FGA", "FGM", "FG_PCT"],
      "rowSet": [["League Averages", "Restricted Area", 100, 60, 0.6]]
    }
  ]
}"#;

#[test]
fn test_decode_shot_rows() {
    let response: StatsResponse = serde_json::from_str(SHOT_CHART_JSON).unwrap();
    let set = response.into_set(0).unwrap();

    assert_eq!(set.name, "Shot_Chart_Detail");

    let shots: Vec<ShotEvent> = set.rows().unwrap();
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[0].loc_x, -133.0);
    assert_eq!(shots[0].loc_y, 226.0);
    assert_eq!(shots[0].outcome(), Some(ShotOutcome::Made));
    assert_eq!(shots[0].shot_zone_basic.as_deref(), Some("Above the Break 3"));
    assert_eq!(shots[1].outcome(), Some(ShotOutcome::Missed));
    assert_eq!(shots[1].shot_distance, Some(1.0));
}

#[test]
fn test_league_averages_table() {
    let response: StatsResponse = serde_json::from_str(SHOT_CHART_JSON).unwrap();
    let averages = response.into_set(1).unwrap();

    assert_eq!(averages.name, "LeagueAverages");
    assert_eq!(averages.row_set.len(), 1);
}

#[test]
fn test_missing_result_set() {
    let response: StatsResponse = serde_json::from_str(SHOT_CHART_JSON).unwrap();
    let err = response.into_set(5).unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[test]
fn test_decode_career_rows_with_singular_key() {
    let json = r#"{
      "resultSet": [{
        "name": "SeasonTotalsRegularSeason",
        "headers": ["PLAYER_ID", "SEASON_ID", "LEAGUE_ID", "TEAM_ID", "TEAM_ABBREVIATION", "GP"],
        "rowSet": [
          [201939, "2009-10", "00", 1610612744, "GSW", 80],
          [201939, "2010-11", "00", 1610612744, "GSW", 74]
        ]
      }]
    }"#;

    let response: StatsResponse = serde_json::from_str(json).unwrap();
    let rows: Vec<CareerRecord> = response.into_set(0).unwrap().rows().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].season_id, "2010-11");
    assert_eq!(rows[1].team_id, 1610612744);
    assert_eq!(rows[1].team_abbreviation.as_deref(), Some("GSW"));
}

#[test]
fn test_ragged_row_is_rejected() {
    let json = r#"{"resultSets": [{"name": "T", "headers": ["SEASON_ID", "TEAM_ID"], "rowSet": [["2015-16"]]}]}"#;

    let response: StatsResponse = serde_json::from_str(json).unwrap();
    let err = response.into_set(0).unwrap().rows::<CareerRecord>().unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[test]
fn test_wrong_column_type_is_deserialization_error() {
    let json = r#"{"resultSets": [{"name": "T", "headers": ["SEASON_ID", "TEAM_ID"], "rowSet": [["2015-16", "GSW"]]}]}"#;

    let response: StatsResponse = serde_json::from_str(json).unwrap();
    let err = response.into_set(0).unwrap().rows::<CareerRecord>().unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
}
