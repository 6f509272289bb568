use crate::models::{Roster, SeasonId};

pub fn validate_season(season_id: &str) -> bool {
    SeasonId::parse(season_id).is_some()
}

pub fn player_exists(name: &str, roster: &Roster) -> bool {
    roster.contains(name)
}

/// Result of checking a form submission. Variants are listed in the order they are
/// checked; the first that applies wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    MissingFields,
    InvalidPlayerAndSeason,
    InvalidSeason,
    InvalidPlayer,
    Valid(SeasonId),
}

impl Validation {
    pub fn check(player_name: &str, season_id: &str, roster: &Roster) -> Self {
        if player_name.is_empty() || season_id.is_empty() {
            return Validation::MissingFields;
        }

        let season = SeasonId::parse(season_id);
        let exists = player_exists(player_name, roster);

        match (season, exists) {
            (None, false) => Validation::InvalidPlayerAndSeason,
            (None, true) => Validation::InvalidSeason,
            (Some(_), false) => Validation::InvalidPlayer,
            (Some(season), true) => Validation::Valid(season),
        }
    }

    /// Message shown to the user, or `None` when the input is usable.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Validation::MissingFields => Some("Please enter both player name and season ID."),
            Validation::InvalidPlayerAndSeason => Some(
                "Invalid player name and season. Please enter a valid NBA player name and a valid season in the format \"YYYY-YY\" within the range \"1996-97\" to \"2023-24\".",
            ),
            Validation::InvalidSeason => Some(
                "Invalid season. Please enter a valid season in the format \"YYYY-YY\" within the range \"1996-97\" to \"2023-24\".",
            ),
            Validation::InvalidPlayer => {
                Some("Invalid player name. Please enter a valid NBA player name.")
            }
            Validation::Valid(_) => None,
        }
    }
}
