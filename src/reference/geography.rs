//! Reader for the geography feature collection.
//!
//! Only two properties of each feature are used: the country display name
//! and its ISO-3 code. Geometry is ignored.

use crate::utils::config::{COUNTRY_NAME_PROPERTIES, ISO3_PROPERTIES, MISSING_ISO3};
use crate::utils::error::ReferenceError;
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load (name, iso3) pairs from a GeoJSON file
///
/// **Public** - main entry point for geography loading
///
/// # Errors
/// * `ReferenceError::Io` - file cannot be opened
/// * `ReferenceError::Json` - file is not JSON
/// * `ReferenceError::InvalidFormat` - JSON is not a feature collection
pub fn load_geography(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, ReferenceError> {
    let path = path.as_ref();

    info!("Loading geography from: {}", path.display());

    let file = File::open(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_geography(&document)
}

/// Project (name, iso3) pairs out of an already parsed feature collection
///
/// **Public** - used by `load_geography` and tests
pub fn parse_geography(document: &Value) -> Result<Vec<(String, String)>, ReferenceError> {
    let features = document
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ReferenceError::InvalidFormat("expected a FeatureCollection with a 'features' array".to_string())
        })?;

    let mut pairs = Vec::with_capacity(features.len());
    let mut skipped = 0usize;

    for (index, feature) in features.iter().enumerate() {
        let Some(properties) = feature.get("properties") else {
            skipped += 1;
            debug!("Feature {} has no properties, skipping", index);
            continue;
        };

        let name = first_string(properties, COUNTRY_NAME_PROPERTIES);
        let iso = first_string(properties, ISO3_PROPERTIES);

        match (name, iso) {
            (Some(name), Some(iso)) if iso != MISSING_ISO3 => {
                pairs.push((name.to_string(), iso.to_string()));
            }
            (name, iso) => {
                skipped += 1;
                debug!("Feature {} skipped (name: {:?}, iso: {:?})", index, name, iso);
            }
        }
    }

    info!("Geography loaded: {} countries ({} features skipped)", pairs.len(), skipped);

    Ok(pairs)
}

/// First non-empty string value among the candidate property names
fn first_string<'a>(properties: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
}
