//! Dense interior lattice sampling for area-fill marker placement.
//!
//! Brute-force by design: every lattice coordinate of the feature's
//! bounding box is tested with the same containment routine used
//! everywhere else, so emitted points are self-consistent with the rest
//! of the pipeline rather than accurate against some other ground truth.

use crate::data::{display_name, feature_polygons};
use crate::geometry::{bounding_box, contains_with_wraparound, Polygon};
use crate::PickPoint;
use geojson::FeatureCollection;
use rayon::prelude::*;

/// Default lattice step in degrees.
pub const DEFAULT_GRID_STEP: f64 = 1.0;

/// Sample a regular lattice over the polygons' bounding box and keep the
/// points verified inside.
///
/// The lattice has `ceil(height/step)+1` rows and `ceil(width/step)+1`
/// columns starting at the bbox minimum. A trailing candidate can fall
/// past the bbox edge when the extent is not a step multiple; those are
/// skipped outright, because the ±360° wraparound shifts could otherwise
/// readmit an out-of-bbox point for geometry near the antimeridian.
/// Empty geometry or a non-positive step yields nothing.
pub fn sample_interior_grid(name: &str, polygons: &[Polygon], step: f64) -> Vec<PickPoint> {
    if step <= 0.0 {
        return Vec::new();
    }
    let Some((min_lon, min_lat, max_lon, max_lat)) = bounding_box(polygons) else {
        return Vec::new();
    };

    let (rows, cols) = lattice_dims(max_lon - min_lon, max_lat - min_lat, step);

    let mut points = Vec::new();
    for i in 0..rows {
        let lat = min_lat + i as f64 * step;
        if lat > max_lat {
            break;
        }
        for j in 0..cols {
            let lon = min_lon + j as f64 * step;
            if lon > max_lon {
                break;
            }
            if contains_with_wraparound(lon, lat, polygons) {
                points.push(PickPoint {
                    name: name.to_string(),
                    lon,
                    lat,
                });
            }
        }
    }
    points
}

/// Candidate lattice dimensions for a bbox extent: `ceil(height/step)+1`
/// rows by `ceil(width/step)+1` columns.
fn lattice_dims(width: f64, height: f64, step: f64) -> (usize, usize) {
    let rows = (height / step).ceil() as usize + 1;
    let cols = (width / step).ceil() as usize + 1;
    (rows, cols)
}

/// Interior grid points for every feature in the collection, in feature
/// order. Features are sampled in parallel; each feature's points carry
/// its current display name.
pub fn flood_pick_points(collection: &FeatureCollection, step: f64) -> Vec<PickPoint> {
    collection
        .features
        .par_iter()
        .map(|feature| {
            let polygons = feature_polygons(feature);
            if polygons.is_empty() {
                return Vec::new();
            }
            sample_interior_grid(&display_name(feature), &polygons, step)
        })
        .flatten()
        .collect()
}
