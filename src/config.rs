use std::path::PathBuf;

use crate::{
    chart::{ChartOptions, parse_color},
    errors::AppError,
    stats::client::DEFAULT_BASE_URL,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub stats_base_url: String,
    /// `None` leaves provider requests without a timeout.
    pub provider_timeout_secs: Option<u64>,
    pub font_path: Option<PathBuf>,
    pub chart: ChartOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            stats_base_url: DEFAULT_BASE_URL.to_string(),
            provider_timeout_secs: None,
            font_path: None,
            chart: ChartOptions::default(),
        }
    }
}

impl Config {
    /// Reads settings from the environment (and `.env`, if loaded).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let stats_base_url = lookup("NBA_STATS_BASE_URL").unwrap_or(defaults.stats_base_url);

        let provider_timeout_secs = match lookup("NBA_STATS_TIMEOUT_SECS") {
            Some(s) => Some(s.parse::<u64>().map_err(|e| {
                AppError::EnvError(format!("NBA_STATS_TIMEOUT_SECS must be whole seconds: {e}"))
            })?),
            None => None,
        };

        let font_path = lookup("CHART_FONT_PATH").map(PathBuf::from);

        let mut chart = defaults.chart;
        if let Some(dpi) = lookup("CHART_DPI") {
            chart.dpi = match dpi.parse::<u32>() {
                Ok(dpi) if (10..=600).contains(&dpi) => dpi,
                _ => {
                    return Err(AppError::EnvError(format!(
                        "CHART_DPI must be between 10 and 600, got {dpi}"
                    )));
                }
            };
        }
        if let Some(color) = lookup("CHART_LINE_COLOR") {
            chart.line_color = parse_color(&color)
                .ok_or_else(|| AppError::EnvError(format!("Unknown CHART_LINE_COLOR {color}")))?;
        }
        if let Some(width) = lookup("CHART_LINE_WIDTH") {
            chart.court_line_width = width
                .parse::<f64>()
                .ok()
                .filter(|w| *w > 0.0)
                .ok_or_else(|| AppError::EnvError(format!("Invalid CHART_LINE_WIDTH {width}")))?;
        }
        if let Some(value) = lookup("CHART_DESPINE") {
            chart.despine = parse_flag("CHART_DESPINE", &value)?;
        }
        if let Some(value) = lookup("CHART_FLIP_COURT") {
            chart.flip_court = parse_flag("CHART_FLIP_COURT", &value)?;
        }

        Ok(Self {
            port,
            stats_base_url,
            provider_timeout_secs,
            font_path,
            chart,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::EnvError(format!(
            "{key} must be true or false, got {value}"
        ))),
    }
}
