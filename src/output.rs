//! Output formatting and persistence for computed dashboards.
//!
//! Supports log summaries, JSON serialization, and CSV tables.

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info};

use crate::aggregators::GenreYearMatrix;
use crate::dashboard::Dashboard;

/// Logs the full dashboard using Rust's debug pretty-print format.
pub fn print_pretty(dashboard: &Dashboard) {
    debug!("{:#?}", dashboard);
}

/// Logs headline numbers for a dashboard.
pub fn print_summary(dashboard: &Dashboard) {
    let first_year = dashboard.explicit_by_year.first().map(|s| s.year);
    let last_year = dashboard.explicit_by_year.last().map(|s| s.year);

    info!(
        total_rows = dashboard.total_rows,
        tracks = dashboard.track_count,
        explicit = dashboard.explicit_count,
        non_explicit = dashboard.non_explicit_count,
        first_year,
        last_year,
        "Dataset summary"
    );

    if let Some(peak) = dashboard
        .explicit_by_year
        .iter()
        .max_by(|a, b| a.pct_explicit.total_cmp(&b.pct_explicit))
    {
        info!(
            year = peak.year,
            pct_explicit = %format!("{:.1}%", peak.pct_explicit * 100.0),
            "Peak explicit share"
        );
    }

    info!(genres = ?dashboard.genre_stream.genres, "Top genres");
}

/// Writes `value` as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    debug!(path = %path.display(), "JSON written");
    Ok(())
}

/// Writes `rows` to a new CSV file with a header derived from the field names.
pub fn write_records<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "CSV written");
    Ok(())
}

/// Writes a genre matrix as CSV: a `year` column followed by one column per
/// selected genre.
pub fn write_matrix(path: impl AsRef<Path>, matrix: &GenreYearMatrix) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec!["year".to_string()];
    header.extend(matrix.genres.iter().cloned());
    writer.write_record(&header)?;

    for (year, row) in matrix.years.iter().zip(&matrix.counts) {
        let mut record = vec![year.to_string()];
        record.extend(row.iter().map(|c| c.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = matrix.years.len(), "Matrix written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::{ScatterPoint, YearlyExplicitStat};
    use crate::config::DashboardConfig;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn empty_dashboard() -> Dashboard {
        Dashboard::compute("test", 0, &[], &DashboardConfig::default())
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&empty_dashboard());
    }

    #[test]
    fn test_print_summary_does_not_panic() {
        print_summary(&empty_dashboard());
    }

    #[test]
    fn test_write_json_round_trips_fields() {
        let path = temp_path("track_trends_test_dashboard.json");
        let _ = fs::remove_file(&path);

        write_json(&path, &empty_dashboard()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["source"], "test");
        assert!(value["scatter"].as_array().unwrap().is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_records_header_and_rows() {
        let path = temp_path("track_trends_test_explicit.csv");
        let _ = fs::remove_file(&path);

        let rows = vec![
            YearlyExplicitStat {
                year: 1999,
                explicit_count: 1,
                non_explicit_count: 3,
                pct_explicit: 0.25,
            },
            YearlyExplicitStat {
                year: 2000,
                explicit_count: 0,
                non_explicit_count: 0,
                pct_explicit: 0.0,
            },
        ];
        write_records(&path, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "year,explicit_count,non_explicit_count,pct_explicit"
        );
        assert_eq!(lines[1], "1999,1,3,0.25");
        assert_eq!(lines.len(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_records_scatter() {
        let path = temp_path("track_trends_test_scatter.csv");
        let _ = fs::remove_file(&path);

        let points = vec![ScatterPoint {
            followers: 1500.0,
            popularity: 61.0,
        }];
        write_records(&path, &points).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("followers,popularity\n"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_matrix_layout() {
        let path = temp_path("track_trends_test_matrix.csv");
        let _ = fs::remove_file(&path);

        let matrix = GenreYearMatrix {
            genres: vec!["pop".into(), "hip hop".into()],
            years: vec![1990, 1991],
            counts: vec![vec![2, 0], vec![1, 4]],
        };
        write_matrix(&path, &matrix).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "year,pop,hip hop\n1990,2,0\n1991,1,4\n");

        fs::remove_file(&path).unwrap();
    }
}
