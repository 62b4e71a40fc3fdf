//! SVG rendering of a computed [`Dashboard`].
//!
//! Charts are drawn with plotters' SVG backend. Renderers read only the
//! plain aggregate outputs; none of them touch the parsed tracks.

pub mod charts;
pub mod curve;
pub mod page;
pub mod stack;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;

pub use charts::{explicit_svg, scatter_svg, stream_svg};
pub use page::index_html;

/// The three chart documents for a dashboard.
pub struct RenderedCharts {
    pub scatter: String,
    pub explicit: String,
    pub stream: String,
}

pub fn render_charts(dashboard: &Dashboard, config: &DashboardConfig) -> Result<RenderedCharts> {
    Ok(RenderedCharts {
        scatter: scatter_svg(&dashboard.scatter, config.charts.scatter)
            .context("drawing scatter chart")?,
        explicit: explicit_svg(&dashboard.explicit_by_year, config.charts.explicit)
            .context("drawing explicit chart")?,
        stream: stream_svg(
            &dashboard.genre_stream,
            config.charts.stream,
            &config.year_range,
        )
        .context("drawing stream chart")?,
    })
}

/// Writes `scatter.svg`, `explicit.svg`, `stream.svg` and `index.html` into
/// `out_dir`, creating it if needed. Returns the written paths.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display()))]
pub fn write_site(
    dashboard: &Dashboard,
    config: &DashboardConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let charts = render_charts(dashboard, config)?;
    let html = index_html(dashboard, &charts);

    let files = [
        ("scatter.svg", charts.scatter.as_str()),
        ("explicit.svg", charts.explicit.as_str()),
        ("stream.svg", charts.stream.as_str()),
        ("index.html", html.as_str()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = out_dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }

    info!(files = written.len(), "Charts rendered");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_write_site_creates_files() {
        let dir = env::temp_dir().join("track_trends_test_site");
        let _ = std::fs::remove_dir_all(&dir);

        let config = DashboardConfig::default();
        let dashboard = Dashboard::compute("test", 0, &[], &config);
        let written = write_site(&dashboard, &config, &dir).unwrap();

        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
