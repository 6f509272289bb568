use std::sync::Arc;

use crate::{chart::ChartOptions, models::Roster, stats::StatsProvider};

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
    pub provider: Arc<dyn StatsProvider>,
    pub chart_options: ChartOptions,
}

impl AppState {
    pub fn new(
        roster: Roster,
        provider: Arc<dyn StatsProvider>,
        chart_options: ChartOptions,
    ) -> Self {
        Self {
            roster: Arc::new(roster),
            provider,
            chart_options,
        }
    }
}
