use track_trends::aggregators::GenreYearMatrix;
use track_trends::output::{write_json, write_matrix, write_records};
use track_trends::parser::read_tracks;
use track_trends::render::write_site;
use track_trends::{DashboardConfig, build_dashboard, load_dashboard};

const SAMPLE: &[u8] = include_bytes!("fixtures/sample_tracks.csv");

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_full_pipeline() {
    let dashboard =
        build_dashboard("sample", SAMPLE, &DashboardConfig::default()).expect("Failed to build");

    assert_eq!(dashboard.total_rows, 12);
    assert_eq!(dashboard.track_count, 7);
    assert_eq!(dashboard.explicit_count, 3);
    assert_eq!(dashboard.non_explicit_count, 4);

    assert_eq!(dashboard.scatter.len(), 7);
    assert_eq!(dashboard.scatter[0].followers, 1000.0);
    assert_eq!(dashboard.scatter[0].popularity, 50.0);
}

#[test]
fn test_ragged_rows_reach_every_aggregate() {
    let csv = "artist_followers,artist_popularity,explicit,artist_genres,album_release_date,track_name\n\
               100,40,true,pop,2005-03-01\n\
               200,60,false,rock,2005-06-01,Song,extra\n";
    let dashboard = build_dashboard("ragged", csv.as_bytes(), &DashboardConfig::default()).unwrap();

    assert_eq!(dashboard.total_rows, 2);
    assert_eq!(dashboard.track_count, 2);
    assert_eq!(dashboard.scatter.len(), 2);

    let stat = &dashboard.explicit_by_year[0];
    assert_eq!(dashboard.explicit_by_year.len(), 1);
    assert_eq!((stat.year, stat.explicit_count, stat.non_explicit_count), (2005, 1, 1));

    assert_eq!(dashboard.genre_stream.genres, vec!["pop", "rock"]);
    assert_eq!(dashboard.genre_stream.counts, vec![vec![1, 1]]);
}

#[test]
fn test_unrecognized_explicit_is_counted_and_false() {
    let table = read_tracks(SAMPLE).unwrap();
    assert_eq!(table.unrecognized_explicit, 1);

    let delta = &table.tracks[3];
    assert_eq!(delta.year, Some(1999));
    assert!(!delta.explicit);
}

#[test]
fn test_explicit_by_year_is_sparse_and_sorted() {
    let dashboard = build_dashboard("sample", SAMPLE, &DashboardConfig::default()).unwrap();
    let rows: Vec<_> = dashboard
        .explicit_by_year
        .iter()
        .map(|s| (s.year, s.explicit_count, s.non_explicit_count, s.pct_explicit))
        .collect();

    assert_eq!(
        rows,
        vec![
            (1975, 1, 1, 0.5),
            (1999, 0, 1, 0.0),
            (2001, 1, 1, 0.5),
            (2020, 1, 1, 0.5),
        ]
    );
}

#[test]
fn test_genre_stream_matrix() {
    let dashboard = build_dashboard("sample", SAMPLE, &DashboardConfig::default()).unwrap();

    assert_eq!(
        dashboard.genre_stream,
        GenreYearMatrix {
            genres: vec![
                "pop".into(),
                "dance pop".into(),
                "rock".into(),
                "hip hop".into(),
                "rap".into(),
                "Pop".into(),
            ],
            // 1975 only has placeholder or empty genres
            years: vec![1999, 2001, 2020],
            counts: vec![
                vec![0, 0, 1, 0, 0, 0],
                vec![2, 1, 0, 0, 0, 0],
                vec![0, 0, 0, 1, 1, 1],
            ],
        }
    );
}

#[test]
fn test_narrower_year_range_from_config() {
    let config = DashboardConfig::from_json(r#"{ "year_range": { "min": 2000, "max": 2010 } }"#)
        .unwrap();
    let dashboard = build_dashboard("sample", SAMPLE, &config).unwrap();

    assert_eq!(dashboard.track_count, 2);
    assert_eq!(dashboard.genre_stream.years, vec![2001]);
}

#[tokio::test]
async fn test_load_and_write_everything() {
    let dir = temp_dir("track_trends_it_outputs");
    let source = dir.join("tracks.csv");
    std::fs::write(&source, SAMPLE).unwrap();

    let config = DashboardConfig::default();
    let dashboard = load_dashboard(source.to_str().unwrap(), &config)
        .await
        .unwrap();
    assert_eq!(dashboard.track_count, 7);

    write_json(dir.join("dashboard.json"), &dashboard).unwrap();
    write_records(dir.join("explicit_by_year.csv"), &dashboard.explicit_by_year).unwrap();
    write_matrix(dir.join("genre_stream.csv"), &dashboard.genre_stream).unwrap();

    let matrix_csv = std::fs::read_to_string(dir.join("genre_stream.csv")).unwrap();
    assert!(matrix_csv.starts_with("year,pop,dance pop,rock,hip hop,rap,Pop\n"));

    let site = dir.join("site");
    let written = write_site(&dashboard, &config, &site).unwrap();
    assert_eq!(written.len(), 4);

    let stream = std::fs::read_to_string(site.join("stream.svg")).unwrap();
    assert!(stream.contains("hip hop"));
    assert_eq!(stream.matches("<polygon").count(), 6);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_missing_source_propagates_error() {
    let result = load_dashboard("does/not/exist.csv", &DashboardConfig::default()).await;
    assert!(result.is_err());
}
