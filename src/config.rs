//! Run configuration: dataset bounds, genre selection size, and chart sizes.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override:
//! ```json
//! {
//!   "year_range": { "min": 1960, "max": 2020 },
//!   "charts": { "stream": { "width": 1600, "height": 600 } }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::aggregators::DEFAULT_TOP_GENRES;

/// Inclusive bounds on the release year of a retained track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1950,
            max: 2025,
        }
    }
}

/// Pixel dimensions of one chart's SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

const SCATTER_SIZE: ChartSize = ChartSize::new(640.0, 480.0);
const EXPLICIT_SIZE: ChartSize = ChartSize::new(640.0, 480.0);
const STREAM_SIZE: ChartSize = ChartSize::new(1280.0, 520.0);

/// A chart size where either dimension may be left out of the file.
#[derive(Debug, Default, Deserialize)]
struct PartialSize {
    width: Option<f64>,
    height: Option<f64>,
}

impl PartialSize {
    fn over(self, base: ChartSize) -> ChartSize {
        ChartSize {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
        }
    }
}

fn scatter_size<'de, D: Deserializer<'de>>(d: D) -> Result<ChartSize, D::Error> {
    Ok(PartialSize::deserialize(d)?.over(SCATTER_SIZE))
}

fn explicit_size<'de, D: Deserializer<'de>>(d: D) -> Result<ChartSize, D::Error> {
    Ok(PartialSize::deserialize(d)?.over(EXPLICIT_SIZE))
}

fn stream_size<'de, D: Deserializer<'de>>(d: D) -> Result<ChartSize, D::Error> {
    Ok(PartialSize::deserialize(d)?.over(STREAM_SIZE))
}

/// Per-chart sizes. Each chart, and each dimension within it, falls back to
/// its own default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSizes {
    #[serde(deserialize_with = "scatter_size")]
    pub scatter: ChartSize,
    #[serde(deserialize_with = "explicit_size")]
    pub explicit: ChartSize,
    #[serde(deserialize_with = "stream_size")]
    pub stream: ChartSize,
}

impl Default for ChartSizes {
    fn default() -> Self {
        Self {
            scatter: SCATTER_SIZE,
            explicit: EXPLICIT_SIZE,
            stream: STREAM_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub year_range: YearRange,
    /// Number of genres kept for the streamgraph.
    pub top_genres: usize,
    pub charts: ChartSizes,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            year_range: YearRange::default(),
            top_genres: DEFAULT_TOP_GENRES,
            charts: ChartSizes::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads overrides from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
