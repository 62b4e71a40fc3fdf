//! Load-and-compute entry point: source bytes to [`Dashboard`].

use std::io::Read;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tracing::info;

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::fetch::{DatasetClient, fetch_bytes, is_remote};
use crate::filter::filter_tracks;
use crate::parser::read_tracks;

/// Reads the dataset from a local path or fetches it over HTTP.
///
/// Sources ending in `.gz` are decompressed.
///
/// # Errors
///
/// Fails if the file cannot be read, the download fails, or the gzip stream
/// is corrupt.
#[tracing::instrument]
pub async fn load_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if is_remote(source) {
        let client = DatasetClient::new()?;
        fetch_bytes(&client, source).await?.to_vec()
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("reading dataset {source}"))?
    };

    if source.ends_with(".gz") {
        return gunzip(&bytes).with_context(|| format!("decompressing {source}"));
    }
    Ok(bytes)
}

fn gunzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut out)?;
    Ok(out)
}

/// Parses, filters, and aggregates raw table bytes.
pub fn build_dashboard(source: &str, bytes: &[u8], config: &DashboardConfig) -> Result<Dashboard> {
    let table = read_tracks(bytes)?;
    let total_rows = table.tracks.len();
    let tracks = filter_tracks(table.tracks, &config.year_range);

    Ok(Dashboard::compute(source, total_rows, &tracks, config))
}

/// Loads `source` and computes every derived dataset.
pub async fn load_dashboard(source: &str, config: &DashboardConfig) -> Result<Dashboard> {
    let bytes = load_source(source).await?;
    let dashboard = build_dashboard(source, &bytes, config)?;

    info!(
        source,
        tracks = dashboard.track_count,
        years = dashboard.explicit_by_year.len(),
        genres = dashboard.genre_stream.genres.len(),
        "Dashboard computed"
    );
    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::env;
    use std::io::Write;

    const CSV: &str = "artist_followers,artist_popularity,explicit,artist_genres,album_release_date\n\
                       100,40,true,pop,2005-03-01\n\
                       0,40,true,pop,2005-03-01\n\
                       100,40,false,rock,\n";

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_build_dashboard_filters_rows() {
        let dashboard = build_dashboard("mem", CSV.as_bytes(), &DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.total_rows, 3);
        assert_eq!(dashboard.track_count, 1);
    }

    #[tokio::test]
    async fn test_load_source_missing_file_is_error() {
        let result = load_source("/nonexistent/track_trends/missing.csv").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_dashboard_from_file() {
        let path = temp_path("track_trends_test_load.csv");
        std::fs::write(&path, CSV).unwrap();

        let dashboard = load_dashboard(&path, &DashboardConfig::default()).await.unwrap();
        assert_eq!(dashboard.track_count, 1);
        assert_eq!(dashboard.source, path);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_source_gzip() {
        let path = temp_path("track_trends_test_load.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let bytes = load_source(&path).await.unwrap();
        assert_eq!(bytes, CSV.as_bytes());

        std::fs::remove_file(&path).unwrap();
    }
}
