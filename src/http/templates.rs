use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::stats::ZoneSummary;

const STYLE: &str = r#"<style>
      body { font-family: sans-serif; margin: 2rem auto; max-width: 960px; }
      form { display: flex; gap: 0.5rem; align-items: center; }
      .error { color: #b00020; }
      img { max-width: 100%; }
      table { border-collapse: collapse; margin: 1rem 0; }
      th, td { padding: 0.25rem 0.75rem; text-align: right; }
      th:first-child, td:first-child { text-align: left; }
    </style>"#;

#[derive(Debug, Clone)]
pub struct ResultPage {
    pub title: String,
    /// Base64 PNG.
    pub image_data: String,
    pub summary: String,
    pub zones: Vec<ZoneSummary>,
}

pub fn render_index(error: Option<&str>) -> String {
    let error_block = error
        .map(|msg| format!("\n    <p class=\"error\">{}</p>", encode_text(msg)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>NBA Shot Chart</title>
    {STYLE}
  </head>
  <body>
    <h1>NBA Shot Chart</h1>{error_block}
    <form action="/result" method="post">
      <label for="player_name">Player name</label>
      <input type="text" id="player_name" name="player_name" placeholder="Stephen Curry">
      <label for="season_id">Season</label>
      <input type="text" id="season_id" name="season_id" placeholder="2015-16">
      <button type="submit">Draw chart</button>
    </form>
  </body>
</html>
"#
    )
}

pub fn render_result(page: &ResultPage) -> String {
    let title = encode_text(&page.title);
    let alt = encode_double_quoted_attribute(&page.title);
    let summary = encode_text(&page.summary);
    let image_data = &page.image_data;
    let zone_table = render_zone_table(&page.zones);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    {STYLE}
  </head>
  <body>
    <h1>{title}</h1>
    <p>{summary}</p>{zone_table}
    <img src="data:image/png;base64,{image_data}" alt="{alt}">
    <p><a href="/">Draw another chart</a></p>
  </body>
</html>
"#
    )
}

fn render_zone_table(zones: &[ZoneSummary]) -> String {
    if zones.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for zone in zones {
        let league = zone
            .league_pct
            .map(|pct| format!("{pct:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(
            rows,
            "\n        <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td><td>{}</td></tr>",
            encode_text(&zone.zone),
            zone.made,
            zone.attempts,
            zone.percentage(),
            league
        );
    }

    format!(
        r#"
    <table>
      <thead>
        <tr><th>Zone</th><th>FGM</th><th>FGA</th><th>FG%</th><th>League FG%</th></tr>
      </thead>
      <tbody>{rows}
      </tbody>
    </table>"#
    )
}
