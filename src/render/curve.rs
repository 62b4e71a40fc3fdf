//! Smoothing of polylines into uniform cubic B-spline ("basis") curves,
//! returned as sampled points in the same coordinate space as the input.

pub type Point = (f64, f64);

fn weighted(a: Point, b: Point, c: Point, wa: f64, wb: f64, wc: f64, div: f64) -> Point {
    (
        (wa * a.0 + wb * b.0 + wc * c.0) / div,
        (wa * a.1 + wb * b.1 + wc * c.1) / div,
    )
}

/// Appends one cubic Bézier span starting at the last emitted point. The span
/// is driven by the two previous control points `p0`, `p1` and the next one.
fn span(out: &mut Vec<Point>, p0: Point, p1: Point, next: Point, steps: usize) {
    let Some(&start) = out.last() else { return };
    let c1 = weighted(p0, p1, p1, 2.0, 1.0, 0.0, 3.0);
    let c2 = weighted(p0, p1, p1, 1.0, 2.0, 0.0, 3.0);
    let end = weighted(p0, p1, next, 1.0, 4.0, 1.0, 6.0);

    for k in 1..=steps {
        let t = k as f64 / steps as f64;
        let u = 1.0 - t;
        let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        out.push((
            b0 * start.0 + b1 * c1.0 + b2 * c2.0 + b3 * end.0,
            b0 * start.1 + b1 * c1.1 + b2 * c2.1 + b3 * end.1,
        ));
    }
}

/// Samples the basis curve for `points`, `steps` points per curved span.
///
/// The curve starts exactly at the first point and ends at the last. Fewer
/// than three points are returned unchanged (a straight line).
pub fn basis(points: &[Point], steps: usize) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let steps = steps.max(1);
    let (first, second) = (points[0], points[1]);

    let mut out = Vec::with_capacity(points.len() * steps + 3);
    out.push(first);
    out.push(weighted(first, second, second, 5.0, 1.0, 0.0, 6.0));

    let (mut p0, mut p1) = (first, second);
    for &next in &points[2..] {
        span(&mut out, p0, p1, next, steps);
        (p0, p1) = (p1, next);
    }
    span(&mut out, p0, p1, p1, steps);
    out.push(p1);
    out
}

/// Outline of the area between two curves sampled at the same x positions:
/// `top` left to right, then `bottom` traced back right to left.
pub fn basis_area(top: &[Point], bottom: &[Point], steps: usize) -> Vec<Point> {
    let reversed: Vec<Point> = bottom.iter().rev().copied().collect();
    let mut outline = basis(top, steps);
    outline.extend(basis(&reversed, steps));
    outline
}
