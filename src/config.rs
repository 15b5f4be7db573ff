// Runtime configuration
//
// Everything that used to be a literal (credential, API base, file paths,
// image sizes) is read from the environment once at startup.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4/radar/attacks";
pub const DEFAULT_RANKING_NAME: &str = "main";
pub const DEFAULT_DATE_RANGE: &str = "28d";
pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_BOUNDARY_PATH: &str = "data/ne_110m_admin_0_countries.geojson";

/// Pixel dimensions of a rendered image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse "WIDTHxHEIGHT", e.g. "1600x800"
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.trim().to_lowercase().split_once('x').map(|(w, h)| {
            (w.trim().to_string(), h.trim().to_string())
        })?;
        let width: u32 = w.parse().ok()?;
        let height: u32 = h.parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Settings for the Radar API
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub ranking_name: String,
    pub date_range: String,
    pub limit: u32,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .field("ranking_name", &self.ranking_name)
            .field("date_range", &self.date_range)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Where the boundary dataset lives and which properties carry name and code
#[derive(Debug, Clone)]
pub struct BoundaryConfig {
    pub path: PathBuf,
    pub name_field: String,
    pub code_field: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub output_dir: PathBuf,
    pub boundary: BoundaryConfig,
    pub map_size: ImageSize,
    pub chart_size: ImageSize,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let token = get("RADAR_API_TOKEN").ok_or(ConfigError::MissingToken)?;

        let limit = match get("RADAR_LIMIT") {
            Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| ConfigError::Invalid {
                key: "RADAR_LIMIT",
                reason: format!("expected a positive integer, got '{}'", v),
            })?,
            None => DEFAULT_LIMIT,
        };

        let map_size = parse_size(get("ATLAS_MAP_SIZE"), "ATLAS_MAP_SIZE", ImageSize::new(4000, 2000))?;
        let chart_size = parse_size(get("ATLAS_CHART_SIZE"), "ATLAS_CHART_SIZE", ImageSize::new(1600, 800))?;

        Ok(Self {
            api: ApiConfig {
                base_url: get("RADAR_API_BASE")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                token,
                ranking_name: get("RADAR_RANKING_NAME").unwrap_or_else(|| DEFAULT_RANKING_NAME.to_string()),
                date_range: get("RADAR_DATE_RANGE").unwrap_or_else(|| DEFAULT_DATE_RANGE.to_string()),
                limit,
            },
            output_dir: get("ATLAS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            boundary: BoundaryConfig {
                path: get("ATLAS_BOUNDARY_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_BOUNDARY_PATH)),
                name_field: get("ATLAS_BOUNDARY_NAME_FIELD").unwrap_or_else(|| "NAME".to_string()),
                code_field: get("ATLAS_BOUNDARY_CODE_FIELD").unwrap_or_else(|| "ADM0_A3".to_string()),
            },
            map_size,
            chart_size,
        })
    }

    pub fn map_path(&self) -> PathBuf {
        self.output_dir.join("flagged_countries_map.png")
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join("attack_comparison.png")
    }
}

fn parse_size(value: Option<String>, key: &'static str, default: ImageSize) -> Result<ImageSize, ConfigError> {
    match value {
        Some(v) => ImageSize::parse(&v).ok_or_else(|| ConfigError::Invalid {
            key,
            reason: format!("expected WIDTHxHEIGHT, got '{}'", v),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_token_only() {
        let config = Config::from_lookup(lookup(&[("RADAR_API_TOKEN", "secret")])).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api.ranking_name, "main");
        assert_eq!(config.api.date_range, "28d");
        assert_eq!(config.api.limit, 10);
        assert_eq!(config.boundary.name_field, "NAME");
        assert_eq!(config.boundary.code_field, "ADM0_A3");
        assert_eq!(config.map_size, ImageSize::new(4000, 2000));
        assert_eq!(config.map_path(), PathBuf::from("output/flagged_countries_map.png"));
    }

    #[test]
    fn test_missing_token() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));

        let err = Config::from_lookup(lookup(&[("RADAR_API_TOKEN", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RADAR_API_TOKEN", "secret"),
            ("RADAR_API_BASE", "http://127.0.0.1:9000/radar/"),
            ("RADAR_LIMIT", "25"),
            ("ATLAS_OUTPUT_DIR", "/tmp/atlas"),
            ("ATLAS_CHART_SIZE", "800x600"),
        ]))
        .unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/radar");
        assert_eq!(config.api.limit, 25);
        assert_eq!(config.chart_size, ImageSize::new(800, 600));
        assert_eq!(config.chart_path(), PathBuf::from("/tmp/atlas/attack_comparison.png"));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("RADAR_API_TOKEN", "t"), ("RADAR_LIMIT", "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RADAR_LIMIT", .. }));

        let err = Config::from_lookup(lookup(&[("RADAR_API_TOKEN", "t"), ("ATLAS_MAP_SIZE", "big")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "ATLAS_MAP_SIZE", .. }));
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = Config::from_lookup(lookup(&[("RADAR_API_TOKEN", "very-secret")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_image_size_parse() {
        assert_eq!(ImageSize::parse("1600x800"), Some(ImageSize::new(1600, 800)));
        assert_eq!(ImageSize::parse(" 20 X 10 "), Some(ImageSize::new(20, 10)));
        assert_eq!(ImageSize::parse("0x10"), None);
        assert_eq!(ImageSize::parse("1600"), None);
    }
}
