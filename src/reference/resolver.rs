//! Two-tier country resolver.
//!
//! Lookups consult the override table first and fall back to the base
//! table built from the geography source. The base table is never patched
//! in place, so every entry in it can be traced back to the source file.

use super::geography::load_geography;
use crate::utils::config::COUNTRY_OVERRIDES;
use crate::utils::error::ReferenceError;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Country display name -> ISO-3 code lookup
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    base: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ReferenceTable {
    /// Build a table from (name, iso3) pairs with the built-in overrides applied
    ///
    /// Later duplicates in `pairs` replace earlier ones.
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let base: HashMap<String, String> = pairs
            .into_iter()
            .map(|(name, iso)| (name.into(), iso.into()))
            .collect();

        let overrides: HashMap<String, String> = COUNTRY_OVERRIDES
            .iter()
            .map(|(name, iso)| (name.to_string(), iso.to_string()))
            .collect();

        Self { base, overrides }
    }

    /// Build a table from a GeoJSON file with the built-in overrides applied
    pub fn from_geojson(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let pairs = load_geography(path)?;
        Ok(Self::from_pairs(pairs))
    }

    /// Add (or replace) a manual override
    pub fn with_override(mut self, name: impl Into<String>, iso: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), iso.into());
        self
    }

    /// Resolve a display name to its ISO-3 code
    ///
    /// # Errors
    /// * `ReferenceError::EmptyName` - blank input
    /// * `ReferenceError::UnknownCountry` - neither table knows the name
    pub fn resolve(&self, name: &str) -> Result<&str, ReferenceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReferenceError::EmptyName);
        }

        if let Some(iso) = self.overrides.get(name) {
            debug!("Resolved '{}' -> {} via override", name, iso);
            return Ok(iso.as_str());
        }

        self.base
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ReferenceError::UnknownCountry(name.to_string()))
    }

    /// ISO code straight from the geography source, ignoring overrides
    pub fn base_code(&self, name: &str) -> Option<&str> {
        self.base.get(name.trim()).map(String::as_str)
    }

    /// Number of entries in the base table
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    /// Number of manual overrides
    pub fn override_len(&self) -> usize {
        self.overrides.len()
    }
}
