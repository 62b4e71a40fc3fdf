//! Output types of the aggregation pipeline.

use serde::Serialize;

/// One scatter-plot dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub followers: f64,
    pub popularity: f64,
}

/// Explicit/non-explicit split for one release year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyExplicitStat {
    pub year: i32,
    pub explicit_count: usize,
    pub non_explicit_count: usize,
    /// `explicit_count / (explicit_count + non_explicit_count)`, or 0 for an empty year.
    pub pct_explicit: f64,
}

impl YearlyExplicitStat {
    pub fn total(&self) -> usize {
        self.explicit_count + self.non_explicit_count
    }
}

/// Per-year track counts for the most frequent genres.
///
/// `counts[i][j]` is the number of `(years[i], genres[j])` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreYearMatrix {
    /// Selected genres, most frequent first.
    pub genres: Vec<String>,
    /// Every year with at least one eligible genre pair, ascending.
    pub years: Vec<i32>,
    pub counts: Vec<Vec<usize>>,
}

impl GenreYearMatrix {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Column `genre` as a series over `years`.
    pub fn series(&self, genre: usize) -> Vec<usize> {
        self.counts.iter().map(|row| row[genre]).collect()
    }
}
