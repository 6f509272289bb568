use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::{
    errors::AppError,
    models::{ShotEvent, ShotOutcome},
    stats::ResultSet,
};

#[derive(Debug, Deserialize)]
struct LeagueAverageRow {
    #[serde(rename = "SHOT_ZONE_BASIC")]
    shot_zone_basic: String,
    #[serde(rename = "FGA")]
    fga: f64,
    #[serde(rename = "FGM")]
    fgm: f64,
}

/// A player's attempts from one basic shot zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub zone: String,
    pub made: usize,
    pub attempts: usize,
    /// League field-goal percentage in the same zone, when the provider sent it.
    pub league_pct: Option<f64>,
}

impl ZoneSummary {
    pub fn percentage(&self) -> f64 {
        self.made as f64 * 100.0 / self.attempts as f64
    }
}

/// League field-goal percentage per basic zone, summed over the finer zone splits.
pub fn league_zone_percentages(
    league_averages: &ResultSet,
) -> Result<HashMap<String, f64>, AppError> {
    let mut totals: HashMap<String, (f64, f64)> = HashMap::new();
    for row in league_averages.rows::<LeagueAverageRow>()? {
        let entry = totals.entry(row.shot_zone_basic).or_default();
        entry.0 += row.fgm;
        entry.1 += row.fga;
    }

    Ok(totals
        .into_iter()
        .filter(|(_, (_, fga))| *fga > 0.0)
        .map(|(zone, (fgm, fga))| (zone, fgm * 100.0 / fga))
        .collect())
}

/// Made and attempted shots per zone, most attempted first. Shots without a zone or a
/// made/missed label are left out.
pub fn zone_breakdown(shots: &[ShotEvent], league: &HashMap<String, f64>) -> Vec<ZoneSummary> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for shot in shots {
        let (Some(zone), Some(outcome)) = (shot.shot_zone_basic.as_deref(), shot.outcome()) else {
            continue;
        };
        let entry = counts.entry(zone).or_default();
        if outcome == ShotOutcome::Made {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    let mut zones: Vec<ZoneSummary> = counts
        .into_iter()
        .map(|(zone, (made, attempts))| ZoneSummary {
            zone: zone.to_string(),
            made,
            attempts,
            league_pct: league.get(zone).copied(),
        })
        .collect();
    zones.sort_by(|a, b| b.attempts.cmp(&a.attempts));
    zones
}

/// Mean distance in feet over made and missed shots that report one.
pub fn average_distance(shots: &[ShotEvent]) -> Option<f64> {
    let distances: Vec<f64> = shots
        .iter()
        .filter(|shot| shot.outcome().is_some())
        .filter_map(|shot| shot.shot_distance)
        .collect();

    if distances.is_empty() {
        return None;
    }
    Some(distances.iter().sum::<f64>() / distances.len() as f64)
}
