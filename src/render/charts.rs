//! The three dashboard charts, each drawn with plotters into a standalone
//! SVG document.

use anyhow::Result;
use plotters::prelude::*;
use std::ops::Range;

use crate::aggregators::{GenreYearMatrix, ScatterPoint, YearlyExplicitStat};
use crate::config::{ChartSize, YearRange};

use super::curve::basis_area;
use super::stack::{Offset, extent, stack};

/// Tableau 10 categorical palette.
pub const TABLEAU10: [RGBColor; 10] = [
    RGBColor(0x4e, 0x79, 0xa7),
    RGBColor(0xf2, 0x8e, 0x2c),
    RGBColor(0xe1, 0x57, 0x59),
    RGBColor(0x76, 0xb7, 0xb2),
    RGBColor(0x59, 0xa1, 0x4f),
    RGBColor(0xed, 0xc9, 0x49),
    RGBColor(0xaf, 0x7a, 0xa1),
    RGBColor(0xff, 0x9d, 0xa7),
    RGBColor(0x9c, 0x75, 0x5f),
    RGBColor(0xba, 0xb0, 0xab),
];

const DOT_FILL: RGBColor = RGBColor(0x1d, 0xb9, 0x54);
const NON_EXPLICIT_FILL: RGBColor = TABLEAU10[0];
const EXPLICIT_FILL: RGBColor = TABLEAU10[2];

const FONT: &str = "sans-serif";
/// Fraction of a year's slot covered by its bar.
const BAR_WIDTH: f64 = 0.9;
/// Sampled points per curved span of a stream layer.
const CURVE_STEPS: usize = 8;

/// Formats a value with an SI suffix and no insignificant zeros:
/// `1500` → `1.5k`, `2000000` → `2M`.
pub fn si_label(v: f64) -> String {
    const PREFIXES: &[(f64, &str)] = &[(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

    let (scaled, suffix) = PREFIXES
        .iter()
        .find(|(div, _)| v.abs() >= *div)
        .map_or((v, ""), |&(div, suffix)| (v / div, suffix));
    let digits = format!("{scaled:.2}");
    let digits = digits.trim_end_matches('0').trim_end_matches('.');
    format!("{digits}{suffix}")
}

fn pixels(size: ChartSize) -> (u32, u32) {
    (size.width.max(1.0) as u32, size.height.max(1.0) as u32)
}

/// `lo..hi`, widened by one when empty so plotters always gets a usable axis.
fn axis_range(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo { lo..hi } else { lo..lo + 1.0 }
}

/// Artist popularity against followers on a log axis.
pub fn scatter_svg(points: &[ScatterPoint], size: ChartSize) -> Result<String> {
    let max_followers = points.iter().map(|p| p.followers).fold(0.0, f64::max);
    let x_max = if max_followers > 1.0 { max_followers } else { 10.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, pixels(size)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled("Artist Popularity vs Audience Reach", (FONT, 20))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Higher follower counts typically align with greater popularity",
                (FONT, 13),
            )
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((1.0..x_max).log_scale(), 0.0..100.0)?;

        chart
            .configure_mesh()
            .x_desc("Artist Followers (log scale)")
            .y_desc("Artist Popularity")
            .x_label_formatter(&|v| si_label(*v))
            .y_label_formatter(&|v| si_label(*v))
            .draw()?;

        let dot = DOT_FILL.mix(0.6).filled();
        chart.draw_series(
            points
                .iter()
                .filter(|p| p.followers > 0.0)
                .map(|p| Circle::new((p.followers, p.popularity), 3, dot)),
        )?;

        root.present()?;
    }
    Ok(svg)
}

/// Stacked yearly bars of explicit vs. non-explicit tracks with the explicit
/// share drawn as a line against a secondary percentage axis.
pub fn explicit_svg(stats: &[YearlyExplicitStat], size: ChartSize) -> Result<String> {
    let first = stats.first().map_or(0, |s| s.year) as f64;
    let last = stats.last().map_or(0, |s| s.year) as f64;
    let x_range = (first - 0.5)..(last + 0.5);
    let max_total = stats.iter().map(|s| s.total()).max().unwrap_or(0).max(1) as f64;

    let series: Vec<Vec<f64>> = vec![
        stats.iter().map(|s| s.non_explicit_count as f64).collect(),
        stats.iter().map(|s| s.explicit_count as f64).collect(),
    ];
    let bands = stack(&series, Offset::None);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, pixels(size)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled("The Rise of Explicit Content in Music", (FONT, 20))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Share of tracks with explicit lyrics per release year",
                (FONT, 13),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .right_y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), 0.0..max_total * 1.05)?
            .set_secondary_coord(x_range, 0.0..1.0);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Year")
            .y_desc("Number of Tracks")
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| si_label(*v))
            .draw()?;

        chart
            .configure_secondary_axes()
            .y_desc("% Explicit")
            .y_label_formatter(&|v| format!("{:.0}%", v * 100.0))
            .draw()?;

        let half = BAR_WIDTH / 2.0;
        for (layer, (label, fill)) in bands.iter().zip([
            ("Non-Explicit", NON_EXPLICIT_FILL),
            ("Explicit", EXPLICIT_FILL),
        ]) {
            chart
                .draw_series(stats.iter().zip(layer).map(|(stat, &(lo, hi))| {
                    let x = stat.year as f64;
                    Rectangle::new([(x - half, lo), (x + half, hi)], fill.filled())
                }))?
                .label(label)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], fill.filled()));
        }

        chart
            .draw_secondary_series(LineSeries::new(
                stats.iter().map(|s| (s.year as f64, s.pct_explicit)),
                BLACK.stroke_width(2),
            ))?
            .label("% Explicit")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], BLACK.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}

/// Streamgraph of the selected genres over the configured year span.
pub fn stream_svg(matrix: &GenreYearMatrix, size: ChartSize, years: &YearRange) -> Result<String> {
    let series: Vec<Vec<f64>> = (0..matrix.genres.len())
        .map(|g| matrix.series(g).into_iter().map(|c| c as f64).collect())
        .collect();
    let bands = stack(&series, Offset::Wiggle);
    let (lo, hi) = extent(&bands).unwrap_or((0.0, 1.0));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, pixels(size)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled("Shifting Genre Dominance Across Eras", (FONT, 20))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Track counts of the most frequent genres per release year",
                (FONT, 13),
            )
            .margin(15)
            .x_label_area_size(45)
            .build_cartesian_2d(
                axis_range(years.min as f64, years.max as f64),
                axis_range(lo, hi),
            )?;

        chart
            .configure_mesh()
            .disable_mesh()
            .disable_y_axis()
            .x_desc("Year")
            .x_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;

        for (g, (genre, layer)) in matrix.genres.iter().zip(&bands).enumerate() {
            let (top, bottom): (Vec<_>, Vec<_>) = matrix
                .years
                .iter()
                .zip(layer)
                .map(|(&year, &(lower, upper))| ((year as f64, upper), (year as f64, lower)))
                .unzip();
            let color = TABLEAU10[g % TABLEAU10.len()];

            chart
                .draw_series(std::iter::once(Polygon::new(
                    basis_area(&top, &bottom, CURVE_STEPS),
                    color.filled(),
                )))?
                .label(genre.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
        }

        if !matrix.genres.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.85))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
    }
    Ok(svg)
}
