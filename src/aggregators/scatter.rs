use crate::aggregators::types::ScatterPoint;
use crate::parser::Track;

/// Projects every track to `(followers, popularity)` in input order.
pub fn scatter_points(tracks: &[Track]) -> Vec<ScatterPoint> {
    tracks
        .iter()
        .map(|t| ScatterPoint {
            followers: t.artist_followers,
            popularity: t.artist_popularity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_empty() {
        assert!(scatter_points(&[]).is_empty());
    }

    #[test]
    fn test_scatter_keeps_order_and_duplicates() {
        let t = |f: f64, p: f64| Track {
            artist_followers: f,
            artist_popularity: p,
            ..Default::default()
        };
        let points = scatter_points(&[t(10.0, 1.0), t(5.0, 2.0), t(10.0, 1.0)]);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], ScatterPoint { followers: 10.0, popularity: 1.0 });
        assert_eq!(points[1], ScatterPoint { followers: 5.0, popularity: 2.0 });
        assert_eq!(points[0], points[2]);
    }
}
