use std::collections::BTreeMap;

use crate::aggregators::types::YearlyExplicitStat;
use crate::aggregators::utility::share;
use crate::parser::Track;

/// Groups tracks by release year and counts explicit vs. non-explicit.
///
/// The result is sorted by year. Years without tracks are absent, so
/// consecutive entries are not necessarily consecutive years. Tracks with no
/// year are ignored.
pub fn explicit_by_year(tracks: &[Track]) -> Vec<YearlyExplicitStat> {
    let mut by_year: BTreeMap<i32, (usize, usize)> = BTreeMap::new();

    for track in tracks {
        let Some(year) = track.year else { continue };
        let entry = by_year.entry(year).or_default();
        if track.explicit {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    by_year
        .into_iter()
        .map(|(year, (explicit_count, non_explicit_count))| YearlyExplicitStat {
            year,
            explicit_count,
            non_explicit_count,
            pct_explicit: share(explicit_count, explicit_count + non_explicit_count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(year: i32, explicit: bool) -> Track {
        Track {
            artist_followers: 1.0,
            explicit,
            year: Some(year),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_empty() {
        assert!(explicit_by_year(&[]).is_empty());
    }

    #[test]
    fn test_explicit_single_year() {
        let stats = explicit_by_year(&[
            track(2000, true),
            track(2000, false),
            track(2000, true),
        ]);

        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.year, 2000);
        assert_eq!(s.explicit_count, 2);
        assert_eq!(s.non_explicit_count, 1);
        assert_eq!(s.pct_explicit, 2.0 / 3.0);
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn test_explicit_sorted_and_sparse() {
        let stats = explicit_by_year(&[
            track(2010, false),
            track(1960, true),
            track(2010, false),
        ]);

        let years: Vec<_> = stats.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1960, 2010]);
        assert_eq!(stats[0].pct_explicit, 1.0);
        assert_eq!(stats[1].pct_explicit, 0.0);
        assert_eq!(stats[1].non_explicit_count, 2);
    }

    #[test]
    fn test_explicit_ignores_missing_year() {
        let undated = Track {
            explicit: true,
            ..Default::default()
        };
        let stats = explicit_by_year(&[undated, track(1999, false)]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].explicit_count, 0);
    }
}
