use std::collections::HashMap;

use shotchart::{config::Config, errors::AppError};

fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.stats_base_url, "https://stats.nba.com/stats");
    assert_eq!(config.provider_timeout_secs, None);
    assert!(config.font_path.is_none());
    assert_eq!(config.chart.dpi, 100);
    assert!(!config.chart.despine);
    assert!(!config.chart.flip_court);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("PORT", "3001"),
        ("NBA_STATS_BASE_URL", "http://localhost:9000/stats"),
        ("NBA_STATS_TIMEOUT_SECS", "30"),
        ("CHART_DPI", "72"),
        ("CHART_LINE_COLOR", "#000000"),
        ("CHART_LINE_WIDTH", "1.5"),
        ("CHART_DESPINE", "true"),
        ("CHART_FLIP_COURT", "1"),
        ("CHART_FONT_PATH", "/usr/share/fonts/DejaVuSans.ttf"),
    ])
    .unwrap();

    assert_eq!(config.port, 3001);
    assert_eq!(config.stats_base_url, "http://localhost:9000/stats");
    assert_eq!(config.provider_timeout_secs, Some(30));
    assert_eq!(config.chart.dpi, 72);
    assert_eq!(config.chart.canvas_size(), (864, 792));
    assert_eq!(config.chart.court_line_width, 1.5);
    assert!(config.chart.despine);
    assert!(config.chart.flip_court);
    assert!(config.font_path.is_some());
}

#[test]
fn test_unparseable_port_falls_back() {
    let config = config_from(&[("PORT", "http")]).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        config_from(&[("CHART_DPI", "0")]),
        Err(AppError::EnvError(_))
    ));
    assert!(matches!(
        config_from(&[("CHART_LINE_COLOR", "plaid")]),
        Err(AppError::EnvError(_))
    ));
    assert!(matches!(
        config_from(&[("NBA_STATS_TIMEOUT_SECS", "soon")]),
        Err(AppError::EnvError(_))
    ));
    assert!(matches!(
        config_from(&[("CHART_LINE_WIDTH", "-1")]),
        Err(AppError::EnvError(_))
    ));
    assert!(matches!(
        config_from(&[("CHART_DESPINE", "ture")]),
        Err(AppError::EnvError(_))
    ));
    assert!(matches!(
        config_from(&[("CHART_FLIP_COURT", "maybe")]),
        Err(AppError::EnvError(_))
    ));
}

#[test]
fn test_flags_accept_false_spellings() {
    let config = config_from(&[("CHART_DESPINE", "off"), ("CHART_FLIP_COURT", "False")]).unwrap();

    assert!(!config.chart.despine);
    assert!(!config.chart.flip_court);
}
