//! The bundle of derived datasets handed to writers and renderers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregators::{
    GenreYearMatrix, ScatterPoint, YearlyExplicitStat, explicit_by_year, genre_stream,
    scatter_points,
};
use crate::config::DashboardConfig;
use crate::parser::Track;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    /// Rows parsed from the source, before filtering.
    pub total_rows: usize,
    /// Tracks in the filtered dataset.
    pub track_count: usize,
    pub explicit_count: usize,
    pub non_explicit_count: usize,
    pub scatter: Vec<ScatterPoint>,
    pub explicit_by_year: Vec<YearlyExplicitStat>,
    pub genre_stream: GenreYearMatrix,
}

impl Dashboard {
    /// Runs all three aggregators over an already filtered dataset.
    pub fn compute(
        source: &str,
        total_rows: usize,
        tracks: &[Track],
        config: &DashboardConfig,
    ) -> Self {
        let explicit_count = tracks.iter().filter(|t| t.explicit).count();

        Dashboard {
            generated_at: Utc::now(),
            source: source.to_string(),
            total_rows,
            track_count: tracks.len(),
            explicit_count,
            non_explicit_count: tracks.len() - explicit_count,
            scatter: scatter_points(tracks),
            explicit_by_year: explicit_by_year(tracks),
            genre_stream: genre_stream(tracks, config.top_genres),
        }
    }
}
