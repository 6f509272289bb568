use crate::{
    errors::AppError,
    models::{CareerRecord, Roster, SeasonId},
    stats::{ShotChartDetail, ShotChartQuery, StatsProvider},
};

/// Team id the provider uses for a player's combined row in a season split across teams.
pub const ALL_TEAMS_ID: i64 = 0;

/// Resolves the player and their team for `season`, then pulls every regular-season
/// field-goal attempt.
pub async fn fetch_shots(
    provider: &dyn StatsProvider,
    roster: &Roster,
    player_name: &str,
    season: &SeasonId,
) -> Result<ShotChartDetail, AppError> {
    let player = roster
        .find(player_name)
        .ok_or_else(|| AppError::NotFound(format!("Player '{player_name}' is not in the roster")))?;

    let career = provider.career_records(player.id).await?;
    let team_id = team_for_season(&career, season.as_str()).ok_or_else(|| {
        tracing::warn!("{} has no {} career row", player.full_name, season);
        AppError::SeasonNotPlayed {
            player: player.full_name.clone(),
            season: season.to_string(),
        }
    })?;

    let team = career
        .iter()
        .find(|row| row.season_id == season.as_str() && row.team_id == team_id)
        .and_then(|row| row.team_abbreviation.as_deref())
        .unwrap_or("all teams");

    let query = ShotChartQuery::regular_season_fga(team_id, player.id, season.as_str());
    let detail = provider.shot_chart_detail(&query).await?;

    tracing::info!(
        "Fetched {} shots for {} ({}) with {} ({}) in {}",
        detail.shots.len(),
        player.full_name,
        player.id,
        team,
        team_id,
        season
    );

    Ok(detail)
}

/// Team the player suited up for in `season_id`.
///
/// A traded player has one row per team plus a combined row; the combined row is used
/// so every attempt that season is included.
pub fn team_for_season(career: &[CareerRecord], season_id: &str) -> Option<i64> {
    let mut rows = career.iter().filter(|row| row.season_id == season_id);
    let first = rows.next()?;
    if rows.next().is_none() {
        return Some(first.team_id);
    }
    Some(ALL_TEAMS_ID)
}
