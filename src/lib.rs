pub mod aggregators;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use pipeline::{build_dashboard, load_dashboard, load_source};
