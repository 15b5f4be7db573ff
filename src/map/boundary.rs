// Country boundary dataset
// Natural Earth admin-0 countries exported as a GeoJSON FeatureCollection.
// Each feature carries a display name, an alpha-3 code and (multi)polygon
// geometry; features without polygon geometry are skipped.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use geo::{GeodesicArea, Geometry, InteriorPoint, MultiPolygon, Point};
use geojson::GeoJson;

use crate::config::BoundaryConfig;
use crate::error::BoundaryError;

/// One country shape from the boundary dataset
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    /// Native dataset name, e.g. "United States of America"
    pub name: String,
    /// ISO alpha-3 style code, e.g. "USA"
    pub alpha3: String,
    pub shape: MultiPolygon<f64>,
}

impl BoundaryFeature {
    /// Surface area on the WGS84 ellipsoid, in square metres
    pub fn area_m2(&self) -> f64 {
        self.shape.geodesic_area_unsigned()
    }

    /// A point guaranteed to lie inside the shape; None for empty geometry
    pub fn representative_point(&self) -> Option<Point<f64>> {
        self.shape.interior_point()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoundaryDataset {
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryDataset {
    /// Read the dataset named in the configuration
    pub fn load(config: &BoundaryConfig) -> Result<Self, BoundaryError> {
        let path = config.path.as_path();
        let file = File::open(path).map_err(|source| BoundaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let geojson = GeoJson::from_reader(BufReader::new(file))
            .map_err(|e| geojson_error(path, geojson::Error::MalformedJson(e)))?;
        let dataset = Self::from_geojson(geojson, &config.name_field, &config.code_field, path)?;
        log::info!(
            "Loaded {} country shapes from {}",
            dataset.features.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse a dataset from GeoJSON text
    pub fn parse(text: &str, name_field: &str, code_field: &str, source: &Path) -> Result<Self, BoundaryError> {
        let geojson = GeoJson::from_str(text).map_err(|e| geojson_error(source, e))?;
        Self::from_geojson(geojson, name_field, code_field, source)
    }

    fn from_geojson(
        geojson: GeoJson,
        name_field: &str,
        code_field: &str,
        source: &Path,
    ) -> Result<Self, BoundaryError> {
        let GeoJson::FeatureCollection(fc) = geojson else {
            return Err(BoundaryError::NotFeatureCollection(source.to_path_buf()));
        };

        let mut features = Vec::with_capacity(fc.features.len());
        for feature in fc.features {
            let property = |key: &str| {
                feature
                    .properties
                    .as_ref()
                    .and_then(|p| p.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .trim()
                    .to_string()
            };
            let name = property(name_field);
            let alpha3 = property(code_field).to_uppercase();

            let Some(gj) = feature.geometry.as_ref() else {
                log::debug!("Skipping {}: no geometry", name);
                continue;
            };
            let geom: Geometry<f64> = match gj.value.clone().try_into() {
                Ok(g) => g,
                Err(e) => {
                    log::warn!("Skipping {}: unreadable geometry: {}", name, e);
                    continue;
                }
            };
            let shape = match geom {
                Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                Geometry::MultiPolygon(m) => m,
                _ => {
                    log::debug!("Skipping {}: not a polygon", name);
                    continue;
                }
            };

            features.push(BoundaryFeature { name, alpha3, shape });
        }

        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn geojson_error(path: &Path, err: geojson::Error) -> BoundaryError {
    BoundaryError::GeoJson {
        path: path.to_path_buf(),
        source: Box::new(err),
    }
}
