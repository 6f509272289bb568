use serde::{Deserialize, Serialize};

pub const MADE_SHOT: &str = "Made Shot";
pub const MISSED_SHOT: &str = "Missed Shot";

/// One field-goal attempt from the shot-chart detail table.
///
/// Coordinates are in tenths of a foot, centred on the hoop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    #[serde(rename = "LOC_X")]
    pub loc_x: f64,
    #[serde(rename = "LOC_Y")]
    pub loc_y: f64,
    #[serde(rename = "EVENT_TYPE")]
    pub event_type: String,
    #[serde(rename = "SHOT_DISTANCE", default)]
    pub shot_distance: Option<f64>,
    #[serde(rename = "SHOT_ZONE_BASIC", default)]
    pub shot_zone_basic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Made,
    Missed,
}

impl ShotEvent {
    pub fn new(loc_x: f64, loc_y: f64, event_type: impl Into<String>) -> Self {
        Self {
            loc_x,
            loc_y,
            event_type: event_type.into(),
            shot_distance: None,
            shot_zone_basic: None,
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>, distance: f64) -> Self {
        self.shot_zone_basic = Some(zone.into());
        self.shot_distance = Some(distance);
        self
    }

    /// Exact match on the event label; anything else has no outcome.
    pub fn outcome(&self) -> Option<ShotOutcome> {
        match self.event_type.as_str() {
            MADE_SHOT => Some(ShotOutcome::Made),
            MISSED_SHOT => Some(ShotOutcome::Missed),
            _ => None,
        }
    }
}

/// Per-season row of a player's career totals. Only the team is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    #[serde(rename = "SEASON_ID")]
    pub season_id: String,
    #[serde(rename = "TEAM_ID")]
    pub team_id: i64,
    #[serde(rename = "TEAM_ABBREVIATION", default)]
    pub team_abbreviation: Option<String>,
}
