//! Stacked layouts for bar charts and streamgraphs.
//!
//! Input is series-major: `values[i][j]` is the value of series `i` at point
//! `j`, and every series must have the same length. Output has the same
//! shape, holding the `(lower, upper)` edges of each stacked segment.

pub type Band = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Offset {
    /// Stack upward from a zero baseline.
    #[default]
    None,
    /// Shift the baseline at every point to minimize the weighted change in
    /// slope of all layers (streamgraph layout).
    Wiggle,
}

pub fn stack(values: &[Vec<f64>], offset: Offset) -> Vec<Vec<Band>> {
    let mut bands: Vec<Vec<Band>> = values
        .iter()
        .map(|series| series.iter().map(|&v| (0.0, v)).collect())
        .collect();

    match offset {
        Offset::None => offset_none(&mut bands),
        Offset::Wiggle => offset_wiggle(&mut bands),
    }
    bands
}

/// Places each series on top of the previous one. Expects the first series
/// to already sit on its baseline.
fn offset_none(bands: &mut [Vec<Band>]) {
    for i in 1..bands.len() {
        let (below, rest) = bands.split_at_mut(i);
        let prev = &below[i - 1];
        for (j, band) in rest[0].iter_mut().enumerate() {
            let base = if prev[j].1.is_nan() { prev[j].0 } else { prev[j].1 };
            band.0 = base;
            band.1 += base;
        }
    }
}

fn offset_wiggle(bands: &mut [Vec<Band>]) {
    let n = bands.len();
    let m = match bands.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return,
    };

    let mut y = 0.0;
    for j in 1..m {
        let mut weight = 0.0;
        let mut weighted_slope = 0.0;
        for i in 0..n {
            let cur = value(bands, i, j);
            let prev = value(bands, i, j - 1);
            let mut slope = (cur - prev) / 2.0;
            for k in 0..i {
                slope += value(bands, k, j) - value(bands, k, j - 1);
            }
            weight += cur;
            weighted_slope += slope * cur;
        }

        bands[0][j - 1].0 = y;
        bands[0][j - 1].1 += y;
        if weight != 0.0 {
            y -= weighted_slope / weight;
        }
    }
    bands[0][m - 1].0 = y;
    bands[0][m - 1].1 += y;

    offset_none(bands);
}

/// Raw value of series `i` at point `j` before any offset is applied.
fn value(bands: &[Vec<Band>], i: usize, j: usize) -> f64 {
    let v = bands[i][j].1;
    if v.is_nan() { 0.0 } else { v }
}

/// Smallest lower edge and largest upper edge across all bands.
pub fn extent(bands: &[Vec<Band>]) -> Option<(f64, f64)> {
    bands.iter().flatten().fold(None, |acc, &(lo, hi)| match acc {
        None => Some((lo, hi)),
        Some((min, max)) => Some((min.min(lo), max.max(hi))),
    })
}
