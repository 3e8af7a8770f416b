//! GeoJSON ingestion and property access.
//!
//! The core operates directly on `geojson::FeatureCollection`; this module
//! parses one from text, bytes or a file, converts feature geometry into
//! the flat `MultiPolygon` representation the geometry routines use, and
//! picks the best available display name out of the conventional property
//! keys used by world boundary datasets.

use crate::geometry::MultiPolygon;
use anyhow::Result;
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use std::fs;
use std::path::Path;

/// Property keys tried in order when extracting a feature's display name.
/// `name_full`/`name_en` are also the keys reconciliation writes back to,
/// so a reconciled collection resolves to its canonical names here.
const NAME_KEYS: [&str; 5] = ["name_full", "name_en", "name", "NAME", "ADMIN"];

/// Parse a FeatureCollection from GeoJSON text.
pub fn parse_collection(text: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = text.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// Parse a FeatureCollection from raw JSON bytes (simd-json fast path).
/// The buffer is mutated in place by the parser.
pub fn parse_collection_bytes(bytes: &mut [u8]) -> Result<FeatureCollection> {
    let geojson: GeoJson = simd_json::serde::from_slice(bytes)?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// Read and parse a boundary file (e.g. a Natural Earth world.json).
pub fn load_collection(path: &Path) -> Result<FeatureCollection> {
    let mut bytes = fs::read(path)?;
    parse_collection_bytes(&mut bytes)
}

/// Extract a feature's geometry as a list of polygons.
///
/// A Polygon becomes a single-element list, a MultiPolygon maps member by
/// member; any other geometry type (or no geometry) yields an empty list,
/// which downstream consumers treat as "no contribution".
pub fn feature_polygons(feature: &Feature) -> MultiPolygon {
    let Some(geometry) = &feature.geometry else {
        return Vec::new();
    };

    match &geometry.value {
        Value::Polygon(rings) => vec![convert_rings(rings)],
        Value::MultiPolygon(polygons) => polygons.iter().map(|p| convert_rings(p)).collect(),
        _ => Vec::new(),
    }
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Vec<Vec<(f64, f64)>> {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .filter(|pos| pos.len() >= 2)
                .map(|pos| (pos[0], pos[1]))
                .collect()
        })
        .collect()
}

/// Best-available display name for a feature: first non-empty string
/// among the conventional name keys, or `""` when none is present.
pub fn display_name(feature: &Feature) -> String {
    NAME_KEYS
        .iter()
        .find_map(|&key| {
            feature
                .property(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("")
        .to_string()
}
