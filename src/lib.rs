// Attack Atlas Library
// Radar attack rankings to CSV, a comparison chart and a flagged-country map

pub mod align;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod map;
pub mod pipeline;
pub mod radar;
pub mod reference;
