use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::AppError,
    models::{CareerRecord, Player, ShotEvent},
    stats::{ShotChartDetail, ShotChartQuery, StatsProvider, StatsResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

// Season passed to the roster endpoint; with IsOnlyCurrentSeason=0 it lists every player.
const ROSTER_SEASON: &str = "2023-24";

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "PERSON_ID")]
    person_id: i64,
    #[serde(rename = "DISPLAY_FIRST_LAST")]
    display_first_last: String,
}

/// HTTP client for stats.nba.com.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NbaStatsClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().default_headers(default_headers());
        if let Some(secs) = config.provider_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.stats_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<StatsResponse, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("GET {} {:?}", url, params);

        let res = self.http.get(&url).query(params).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", endpoint, e);
            AppError::ProviderError(e)
        })?;

        if !res.status().is_success() {
            tracing::error!("{} returned status {}", endpoint, res.status());
            return Err(AppError::ProviderStatus(res.status()));
        }

        let body = res.json::<StatsResponse>().await?;
        Ok(body)
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn all_players(&self) -> Result<Vec<Player>, AppError> {
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", ROSTER_SEASON.to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let rows: Vec<RosterRow> = self
            .get("commonallplayers", &params)
            .await?
            .into_set(0)?
            .rows()?;

        Ok(rows
            .into_iter()
            .map(|row| Player {
                id: row.person_id,
                full_name: row.display_first_last,
            })
            .collect())
    }

    async fn career_records(&self, player_id: i64) -> Result<Vec<CareerRecord>, AppError> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", "00".to_string()),
        ];
        self.get("playercareerstats", &params).await?.into_set(0)?.rows()
    }

    async fn shot_chart_detail(
        &self,
        query: &ShotChartQuery,
    ) -> Result<ShotChartDetail, AppError> {
        let mut params = vec![
            ("TeamID", query.team_id.to_string()),
            ("PlayerID", query.player_id.to_string()),
            ("Season", query.season.clone()),
            ("SeasonType", query.season_type.to_string()),
            ("ContextMeasure", query.context_measure.to_string()),
            ("LeagueID", "00".to_string()),
        ];
        // The endpoint rejects requests that omit any of its filters.
        for key in ["LastNGames", "Month", "OpponentTeamID", "Period"] {
            params.push((key, "0".to_string()));
        }
        for key in [
            "DateFrom",
            "DateTo",
            "GameID",
            "GameSegment",
            "Location",
            "Outcome",
            "PlayerPosition",
            "RookieYear",
            "SeasonSegment",
            "VsConference",
            "VsDivision",
        ] {
            params.push((key, String::new()));
        }

        let mut response = self.get("shotchartdetail", &params).await?;
        let league_averages = if response.result_sets.len() > 1 {
            response.result_sets.remove(1)
        } else {
            Default::default()
        };
        let shots: Vec<ShotEvent> = response.into_set(0)?.rows()?;

        Ok(ShotChartDetail {
            shots,
            league_averages,
        })
    }
}
