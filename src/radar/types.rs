// Ranking data types for the Radar "top locations" attack endpoints

use std::fmt;

/// Network-stack level at which attacks are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Layer3,
    Layer7,
}

impl Metric {
    /// Path segment used by the API
    pub fn path_segment(&self) -> &'static str {
        match self {
            Metric::Layer3 => "layer3",
            Metric::Layer7 => "layer7",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Layer3 => "Layer 3",
            Metric::Layer7 => "Layer 7",
        }
    }
}

/// Whether a ranking lists attack sources or attack destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Origin,
    Target,
}

impl Direction {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Direction::Origin => "origin",
            Direction::Target => "target",
        }
    }

    /// JSON key holding the alpha-2 code in a result row
    pub fn code_key(&self) -> &'static str {
        match self {
            Direction::Origin => "originCountryAlpha2",
            Direction::Target => "targetCountryAlpha2",
        }
    }

    /// JSON key holding the display name in a result row
    pub fn name_key(&self) -> &'static str {
        match self {
            Direction::Origin => "originCountryName",
            Direction::Target => "targetCountryName",
        }
    }

    /// Word used in output file names
    pub fn file_label(&self) -> &'static str {
        match self {
            Direction::Origin => "source",
            Direction::Target => "target",
        }
    }
}

/// One of the four (metric, direction) ranking endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint {
    pub metric: Metric,
    pub direction: Direction,
}

impl Endpoint {
    pub const LAYER7_ORIGIN: Endpoint = Endpoint::new(Metric::Layer7, Direction::Origin);
    pub const LAYER7_TARGET: Endpoint = Endpoint::new(Metric::Layer7, Direction::Target);
    pub const LAYER3_ORIGIN: Endpoint = Endpoint::new(Metric::Layer3, Direction::Origin);
    pub const LAYER3_TARGET: Endpoint = Endpoint::new(Metric::Layer3, Direction::Target);

    /// All endpoints, in fetch order
    pub const ALL: [Endpoint; 4] = [
        Endpoint::LAYER7_ORIGIN,
        Endpoint::LAYER7_TARGET,
        Endpoint::LAYER3_ORIGIN,
        Endpoint::LAYER3_TARGET,
    ];

    pub const fn new(metric: Metric, direction: Direction) -> Self {
        Self { metric, direction }
    }

    /// Path below the API base, e.g. "layer7/top/locations/origin"
    pub fn path(&self) -> String {
        format!(
            "{}/top/locations/{}",
            self.metric.path_segment(),
            self.direction.path_segment()
        )
    }

    /// CSV file name, e.g. "layer7_source_attack_data.csv"
    pub fn csv_file_name(&self) -> String {
        format!(
            "{}_{}_attack_data.csv",
            self.metric.path_segment(),
            self.direction.file_label()
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.metric.path_segment(), self.direction.path_segment())
    }
}

/// One row of a ranking result
///
/// Every field is optional because the API may omit any of them; each
/// consumer decides what a missing field means.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedEntry {
    /// ISO 3166-1 alpha-2 code
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub value: Option<f64>,
    /// `value` exactly as the API sent it, e.g. "10.00"
    pub value_text: Option<String>,
    pub rank: Option<u32>,
}

impl RankedEntry {
    pub fn new(code: &str, name: &str, value: f64, rank: u32) -> Self {
        Self {
            country_code: Some(code.to_string()),
            country_name: Some(name.to_string()),
            value: Some(value),
            value_text: Some(value.to_string()),
            rank: Some(rank),
        }
    }
}
