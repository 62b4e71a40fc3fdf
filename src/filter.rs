use tracing::info;

use crate::config::YearRange;
use crate::parser::Track;

/// Whether `track` belongs in the working dataset: a year inside `range` and
/// at least one follower.
pub fn is_retained(track: &Track, range: &YearRange) -> bool {
    matches!(track.year, Some(y) if range.contains(y)) && track.artist_followers > 0.0
}

/// Keeps the tracks that satisfy [`is_retained`], preserving order.
pub fn filter_tracks(tracks: Vec<Track>, range: &YearRange) -> Vec<Track> {
    let input = tracks.len();
    let kept: Vec<Track> = tracks
        .into_iter()
        .filter(|t| is_retained(t, range))
        .collect();

    let explicit = kept.iter().filter(|t| t.explicit).count();
    info!(
        input,
        total = kept.len(),
        explicit,
        non_explicit = kept.len() - explicit,
        "Dataset filtered"
    );

    kept
}
