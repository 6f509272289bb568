use axum::{Form, extract::State, response::Html};
use serde::Deserialize;

use crate::{
    chart::{ShotChart, ShotPartition, export_png_base64},
    errors::AppError,
    http::templates::{ResultPage, render_index, render_result},
    models::SeasonId,
    state::AppState,
    stats::{average_distance, fetch_shots, league_zone_percentages, zone_breakdown},
    validation::Validation,
};

#[derive(Debug, Deserialize)]
pub struct ShotChartForm {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub season_id: String,
}

pub async fn index_handler() -> Html<String> {
    Html(render_index(None))
}

/// Validates the form, then fetches and draws the chart. Any failure re-renders the
/// form with a message.
pub async fn result_handler(
    State(state): State<AppState>,
    Form(form): Form<ShotChartForm>,
) -> Html<String> {
    let season = match Validation::check(&form.player_name, &form.season_id, &state.roster) {
        Validation::Valid(season) => season,
        invalid => {
            tracing::info!(
                "Rejected input {:?} / {:?}: {:?}",
                form.player_name,
                form.season_id,
                invalid
            );
            return Html(render_index(invalid.message()));
        }
    };

    let title = format!("{} {} Shot Chart", form.player_name, form.season_id);

    match build_chart(&state, &form.player_name, &season, &title).await {
        Ok(page) => Html(render_result(&page)),
        Err(err) => {
            tracing::error!("Failed to build \"{}\": {}", title, err);
            Html(render_index(Some(&err.user_message())))
        }
    }
}

async fn build_chart(
    state: &AppState,
    player_name: &str,
    season: &SeasonId,
    title: &str,
) -> Result<ResultPage, AppError> {
    let detail = fetch_shots(state.provider.as_ref(), &state.roster, player_name, season).await?;

    let league = league_zone_percentages(&detail.league_averages).unwrap_or_else(|e| {
        tracing::warn!("Ignoring league averages: {}", e);
        Default::default()
    });
    let zones = zone_breakdown(&detail.shots, &league);

    let chart = ShotChart::compose(&detail.shots, title, state.chart_options.clone());
    let summary = summarize(&chart.partition, average_distance(&detail.shots));

    let image_data = tokio::task::spawn_blocking(move || export_png_base64(&chart))
        .await
        .map_err(|e| {
            tracing::error!("Render task failed: {}", e);
            AppError::InternalError
        })??;

    Ok(ResultPage {
        title: title.to_string(),
        image_data,
        summary,
        zones,
    })
}

pub fn summarize(partition: &ShotPartition, average_distance: Option<f64>) -> String {
    let Some(pct) = partition.percentage() else {
        return "No field goal attempts recorded".to_string();
    };

    let line = format!(
        "{} of {} field goals made ({:.1}%)",
        partition.made.len(),
        partition.attempts(),
        pct
    );
    match average_distance {
        Some(feet) => format!("{line}, average shot distance {feet:.1} ft"),
        None => line,
    }
}
