use std::fmt;

pub const FIRST_SEASON_START: u32 = 1996;
pub const LAST_SEASON_START: u32 = 2023;

/// A season label that passed validation, e.g. `2015-16`.
///
/// The end component is compared numerically against `start % 100 + 1`, so the
/// label is kept exactly as entered and sent to the provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonId {
    label: String,
}

impl SeasonId {
    pub fn parse(season_id: &str) -> Option<Self> {
        let (start, end) = season_id.split_once('-')?;
        if end.contains('-') || !is_digits(start) || !is_digits(end) {
            return None;
        }

        let start_year: u32 = start.parse().ok()?;
        let end_year: u32 = end.parse().ok()?;

        if !(FIRST_SEASON_START..=LAST_SEASON_START).contains(&start_year)
            || end_year != start_year % 100 + 1
        {
            return None;
        }

        Some(Self {
            label: season_id.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
