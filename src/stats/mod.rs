pub mod client;
pub mod fetch;
pub mod table;
pub mod zones;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{CareerRecord, Player, ShotEvent},
};

pub use client::NbaStatsClient;
pub use fetch::fetch_shots;
pub use table::{ResultSet, StatsResponse};
pub use zones::{ZoneSummary, average_distance, league_zone_percentages, zone_breakdown};

pub const SEASON_TYPE_REGULAR: &str = "Regular Season";
pub const CONTEXT_MEASURE_FGA: &str = "FGA";

/// Parameters for one shot-chart detail request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotChartQuery {
    pub team_id: i64,
    pub player_id: i64,
    pub season: String,
    pub season_type: &'static str,
    pub context_measure: &'static str,
}

impl ShotChartQuery {
    pub fn regular_season_fga(team_id: i64, player_id: i64, season: impl Into<String>) -> Self {
        Self {
            team_id,
            player_id,
            season: season.into(),
            season_type: SEASON_TYPE_REGULAR,
            context_measure: CONTEXT_MEASURE_FGA,
        }
    }
}

/// Both tables returned by the shot-chart detail endpoint.
#[derive(Debug, Clone, Default)]
pub struct ShotChartDetail {
    pub shots: Vec<ShotEvent>,
    pub league_averages: ResultSet,
}

/// The external statistics service.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn all_players(&self) -> Result<Vec<Player>, AppError>;

    async fn career_records(&self, player_id: i64) -> Result<Vec<CareerRecord>, AppError>;

    async fn shot_chart_detail(
        &self,
        query: &ShotChartQuery,
    ) -> Result<ShotChartDetail, AppError>;
}
