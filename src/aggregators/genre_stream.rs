use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::aggregators::types::GenreYearMatrix;
use crate::parser::Track;

pub const DEFAULT_TOP_GENRES: usize = 7;

/// Whether a genre tag takes part in the streamgraph. Empty tags and the
/// `N/A` placeholder (any case) do not.
pub fn is_eligible_genre(genre: &str) -> bool {
    !genre.is_empty() && !genre.eq_ignore_ascii_case("n/a")
}

/// Every eligible `(year, genre)` pair, in track order then genre order.
pub fn flatten_pairs(tracks: &[Track]) -> Vec<(i32, &str)> {
    tracks
        .iter()
        .filter_map(|t| t.year.map(|y| (y, t)))
        .flat_map(|(year, t)| {
            t.genres
                .iter()
                .map(String::as_str)
                .filter(|g| is_eligible_genre(g))
                .map(move |g| (year, g))
        })
        .collect()
}

/// The `n` most frequent genres among `pairs`.
///
/// Genres are compared case-sensitively. Ties keep the order in which each
/// genre first appears in `pairs`.
pub fn top_genres<'a>(pairs: &[(i32, &'a str)], n: usize) -> Vec<&'a str> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut frequency: Vec<(&str, usize)> = Vec::new();

    for &(_, genre) in pairs {
        match position.get(genre) {
            Some(&i) => frequency[i].1 += 1,
            None => {
                position.insert(genre, frequency.len());
                frequency.push((genre, 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    frequency.sort_by(|a, b| b.1.cmp(&a.1));
    frequency.truncate(n);
    frequency.into_iter().map(|(g, _)| g).collect()
}

/// Builds the year × genre count matrix for the `top_n` most frequent genres.
///
/// Rows cover every year that has at least one eligible pair (of any genre),
/// zero-filled where a selected genre is missing that year.
pub fn genre_stream(tracks: &[Track], top_n: usize) -> GenreYearMatrix {
    let pairs = flatten_pairs(tracks);
    let genres = top_genres(&pairs, top_n);
    let years: Vec<i32> = pairs
        .iter()
        .map(|&(y, _)| y)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let column: HashMap<&str, usize> = genres.iter().enumerate().map(|(i, g)| (*g, i)).collect();
    let mut counts = vec![vec![0usize; genres.len()]; years.len()];

    for &(year, genre) in &pairs {
        let Some(&col) = column.get(genre) else { continue };
        if let Ok(row) = years.binary_search(&year) {
            counts[row][col] += 1;
        }
    }

    debug!(
        pairs = pairs.len(),
        years = years.len(),
        genres = genres.len(),
        "Genre stream matrix built"
    );

    GenreYearMatrix {
        genres: genres.into_iter().map(str::to_string).collect(),
        years,
        counts,
    }
}
