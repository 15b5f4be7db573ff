// Cloudflare Radar attack rankings

pub mod client;
pub mod types;

pub use client::{parse_ranking, RadarClient};
pub use types::{Direction, Endpoint, Metric, RankedEntry};
