//! CSV parser turning raw track rows into typed [`Track`] records.
//!
//! Field-level problems never fail a row: every column degrades to a default
//! (see the individual `parse_*` helpers). Only a table the CSV layer cannot
//! read at all produces an error.

use anyhow::Result;
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, warn};

const TRUTHY: &[&str] = &["true", "True", "TRUE", "1"];
const FALSY: &[&str] = &["false", "False", "FALSE", "0", ""];

/// One row of the source table, exactly as text.
///
/// Absent columns, and cells missing from a row shorter than the header, are
/// empty strings.
#[derive(Debug, Default, Clone)]
pub struct RawRecord {
    pub artist_followers: String,
    pub artist_popularity: String,
    pub explicit: String,
    pub artist_genres: String,
    pub album_release_date: String,
}

/// Positions of the used columns in the header row.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnIndex {
    artist_followers: Option<usize>,
    artist_popularity: Option<usize>,
    explicit: Option<usize>,
    artist_genres: Option<usize>,
    album_release_date: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        ColumnIndex {
            artist_followers: find("artist_followers"),
            artist_popularity: find("artist_popularity"),
            explicit: find("explicit"),
            artist_genres: find("artist_genres"),
            album_release_date: find("album_release_date"),
        }
    }

    fn record(&self, row: &StringRecord) -> RawRecord {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };
        RawRecord {
            artist_followers: cell(self.artist_followers),
            artist_popularity: cell(self.artist_popularity),
            explicit: cell(self.explicit),
            artist_genres: cell(self.artist_genres),
            album_release_date: cell(self.album_release_date),
        }
    }
}

/// A parsed track.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Track {
    pub artist_followers: f64,
    pub artist_popularity: f64,
    pub explicit: bool,
    pub genres: Vec<String>,
    pub year: Option<i32>,
}

/// Result of reading a whole table.
#[derive(Debug, Default)]
pub struct ParsedTable {
    pub tracks: Vec<Track>,
    /// Rows the CSV reader rejected (e.g. invalid UTF-8); they are dropped.
    pub skipped_rows: usize,
    /// Rows whose `explicit` value was neither a truthy nor a falsy token.
    pub unrecognized_explicit: usize,
}

impl Track {
    pub fn from_raw(raw: &RawRecord) -> Self {
        Track {
            artist_followers: parse_number(&raw.artist_followers),
            artist_popularity: parse_number(&raw.artist_popularity),
            explicit: parse_explicit(&raw.explicit),
            genres: split_genres(&raw.artist_genres),
            year: extract_year(&raw.album_release_date),
        }
    }
}

/// Parses a decimal number, yielding `0.0` for empty, non-numeric, or
/// non-finite text.
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Maps the `explicit` column to a boolean.
///
/// Only the exact tokens `true`/`True`/`TRUE`/`1` are truthy. Everything
/// else is `false`, including values that are not recognized falsy tokens:
/// `"maybe"` becomes `false` without any error.
pub fn parse_explicit(raw: &str) -> bool {
    TRUTHY.contains(&raw)
}

/// Whether `raw` is one of the known truthy or falsy tokens.
pub fn is_recognized_explicit(raw: &str) -> bool {
    TRUTHY.contains(&raw) || FALSY.contains(&raw)
}

/// Splits a comma-separated genre list, trimming every token.
///
/// Empty tokens between commas are kept; consumers decide what to ignore.
pub fn split_genres(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|g| g.trim().to_string()).collect()
}

/// Reads the year from the first four characters of a release date such as
/// `2019-05-31` or `1987`.
pub fn extract_year(raw: &str) -> Option<i32> {
    if raw.is_empty() {
        return None;
    }
    let prefix: String = raw.chars().take(4).collect();
    prefix.trim().parse().ok()
}

/// Parses a CSV table (with a header row) into tracks.
///
/// # Errors
///
/// Returns an error if the header row cannot be read.
pub fn read_tracks(bytes: &[u8]) -> Result<ParsedTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(bytes);
    let columns = ColumnIndex::from_headers(rdr.headers()?);

    let mut table = ParsedTable::default();

    for (line, result) in rdr.records().enumerate() {
        let raw = match result {
            Ok(row) => columns.record(&row),
            Err(e) => {
                warn!(row = line + 1, error = %e, "Skipping undecodable row");
                table.skipped_rows += 1;
                continue;
            }
        };

        if !is_recognized_explicit(&raw.explicit) {
            table.unrecognized_explicit += 1;
        }
        table.tracks.push(Track::from_raw(&raw));
    }

    if table.unrecognized_explicit > 0 {
        warn!(
            rows = table.unrecognized_explicit,
            "Unrecognized explicit values defaulted to false"
        );
    }
    debug!(
        tracks = table.tracks.len(),
        skipped = table.skipped_rows,
        "Table parsed"
    );

    Ok(table)
}
