//! Static HTML page embedding the three charts.

use super::RenderedCharts;
use crate::dashboard::Dashboard;

const STYLE: &str = "body{font-family:sans-serif;margin:24px;color:#222}\
.charts{display:flex;flex-wrap:wrap;gap:16px}\
.chart{border:1px solid #ddd;border-radius:4px;padding:8px}\
footer{margin-top:16px;font-size:12px;color:#666}";

/// Escapes text for use in HTML content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn index_html(dashboard: &Dashboard, charts: &RenderedCharts) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Music Trends Dashboard</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<h1>Music Trends Dashboard</h1>\n");
    html.push_str(
        "<p>How popular music has evolved through three lenses: artist success, \
         lyrical content, and genre dominance.</p>\n",
    );

    html.push_str("<div class=\"charts\">\n");
    for (id, svg) in [
        ("scatter", &charts.scatter),
        ("explicit", &charts.explicit),
        ("stream", &charts.stream),
    ] {
        html.push_str(&format!("<div class=\"chart\" id=\"{id}-container\">\n{svg}</div>\n"));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<footer>{} tracks from {} ({} rows read), generated {}</footer>\n",
        dashboard.track_count,
        escape(&dashboard.source),
        dashboard.total_rows,
        dashboard.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</body>\n</html>\n");
    html
}
