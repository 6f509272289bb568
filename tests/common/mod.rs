#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde_json::json;
use shotchart::{
    errors::AppError,
    models::{CareerRecord, Player, Roster, ShotEvent},
    stats::{ResultSet, ShotChartDetail, ShotChartQuery, StatsProvider},
};

pub const CURRY_ID: i64 = 201939;
pub const HARDEN_ID: i64 = 201935;
pub const WARRIORS_ID: i64 = 1610612744;
pub const ROCKETS_ID: i64 = 1610612745;
pub const NETS_ID: i64 = 1610612751;

pub fn players() -> Vec<Player> {
    vec![
        Player {
            id: CURRY_ID,
            full_name: "Stephen Curry".to_string(),
        },
        Player {
            id: HARDEN_ID,
            full_name: "James Harden".to_string(),
        },
        Player {
            id: 2544,
            full_name: "LeBron James".to_string(),
        },
    ]
}

pub fn roster() -> Roster {
    Roster::new(players())
}

pub fn career(season_id: &str, team_id: i64) -> CareerRecord {
    CareerRecord {
        season_id: season_id.to_string(),
        team_id,
        team_abbreviation: None,
    }
}

pub fn sample_shots() -> Vec<ShotEvent> {
    vec![
        ShotEvent::new(-22.0, 240.0, "Made Shot").with_zone("Above the Break 3", 24.0),
        ShotEvent::new(0.0, 5.0, "Made Shot").with_zone("Restricted Area", 0.0),
        ShotEvent::new(150.0, 180.0, "Missed Shot").with_zone("Above the Break 3", 23.0),
        ShotEvent::new(-230.0, 10.0, "Missed Shot").with_zone("Left Corner 3", 23.0),
        ShotEvent::new(5.0, 600.0, "Missed Shot").with_zone("Backcourt", 60.0),
        ShotEvent::new(12.0, 30.0, "Blocked Shot").with_zone("Restricted Area", 3.0),
    ]
}

pub fn league_averages() -> ResultSet {
    ResultSet {
        name: "LeagueAverages".to_string(),
        headers: ["GRID_TYPE", "SHOT_ZONE_BASIC", "SHOT_ZONE_AREA", "FGA", "FGM", "FG_PCT"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        row_set: vec![
            vec![
                json!("League Averages"),
                json!("Restricted Area"),
                json!("Center(C)"),
                json!(100),
                json!(60),
                json!(0.6),
            ],
            vec![
                json!("League Averages"),
                json!("Above the Break 3"),
                json!("Left Side Center(LC)"),
                json!(100),
                json!(35),
                json!(0.35),
            ],
            vec![
                json!("League Averages"),
                json!("Above the Break 3"),
                json!("Right Side Center(RC)"),
                json!(100),
                json!(37),
                json!(0.37),
            ],
        ],
    }
}

/// In-memory provider that records every shot-chart query it receives.
pub struct FakeProvider {
    pub players: Vec<Player>,
    pub careers: HashMap<i64, Vec<CareerRecord>>,
    pub shots: Vec<ShotEvent>,
    pub fail_shots: bool,
    pub queries: Mutex<Vec<ShotChartQuery>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        let mut careers = HashMap::new();
        careers.insert(
            CURRY_ID,
            vec![career("2014-15", WARRIORS_ID), career("2015-16", WARRIORS_ID)],
        );
        careers.insert(
            HARDEN_ID,
            vec![
                career("2020-21", ROCKETS_ID),
                career("2020-21", NETS_ID),
                career("2020-21", 0),
            ],
        );

        Self {
            players: players(),
            careers,
            shots: sample_shots(),
            fail_shots: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_queries(&self) -> Vec<ShotChartQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn all_players(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.players.clone())
    }

    async fn career_records(&self, player_id: i64) -> Result<Vec<CareerRecord>, AppError> {
        Ok(self.careers.get(&player_id).cloned().unwrap_or_default())
    }

    async fn shot_chart_detail(
        &self,
        query: &ShotChartQuery,
    ) -> Result<ShotChartDetail, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail_shots {
            return Err(AppError::MalformedResponse("rowSet missing".to_string()));
        }
        Ok(ShotChartDetail {
            shots: self.shots.clone(),
            league_averages: league_averages(),
        })
    }
}
