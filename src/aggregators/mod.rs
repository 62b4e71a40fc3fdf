//! Derived datasets computed from the filtered tracks.
//!
//! Each aggregator is a pure function over `&[Track]`; they share no state
//! and can run in any order.

pub mod explicit_rate;
pub mod genre_stream;
pub mod scatter;
pub mod types;
pub mod utility;

pub use explicit_rate::explicit_by_year;
pub use genre_stream::{genre_stream, DEFAULT_TOP_GENRES};
pub use scatter::scatter_points;
pub use types::{GenreYearMatrix, ScatterPoint, YearlyExplicitStat};
