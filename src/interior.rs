//! Interior point resolution: one representative coordinate per feature,
//! suitable for label/marker placement.
//!
//! Centroids and bbox centers can land outside concave or multi-lobed
//! shapes, so the resolver tries an ordered chain of candidate points and
//! keeps the first one verified inside the polygon. Each step is cheaper
//! than searching a fine grid for a guaranteed interior point.

use crate::data::{display_name, feature_polygons};
use crate::geometry::{
    bounding_box, centroid_of_ring, contains_with_wraparound, signed_area, Polygon,
};
use crate::PickPoint;
use geojson::FeatureCollection;

/// Member polygon with the largest outer-ring |area|; ties keep the first
/// encountered. `None` for an empty multipolygon.
pub fn largest_polygon(polygons: &[Polygon]) -> Option<&Polygon> {
    let mut best: Option<(&Polygon, f64)> = None;
    for poly in polygons {
        let area = poly
            .first()
            .map(|outer| signed_area(outer).abs())
            .unwrap_or(0.0);
        if best.map_or(true, |(_, a)| area > a) {
            best = Some((poly, area));
        }
    }
    best.map(|(poly, _)| poly)
}

/// Midpoint between the ring's first point and its point at half length.
fn ring_midpoint(ring: &[(f64, f64)]) -> Option<(f64, f64)> {
    let (x0, y0) = *ring.first()?;
    let (x1, y1) = ring[(ring.len() / 2) % ring.len()];
    Some(((x0 + x1) / 2.0, (y0 + y1) / 2.0))
}

/// Resolve a representative interior coordinate for a multipolygon.
///
/// Picks the largest member polygon, then tries candidates in order —
/// outer-ring centroid, bbox center of all rings, first/half-index
/// midpoint — accepting the first one verified inside via
/// [`contains_with_wraparound`]. If nothing verifies, the outer ring's
/// first vertex is returned unverified as a last resort. `None` only when
/// the geometry has no usable points at all.
pub fn resolve_interior_point(polygons: &[Polygon]) -> Option<(f64, f64)> {
    let poly = largest_polygon(polygons)?;
    let outer: &[(f64, f64)] = poly.first().map(Vec::as_slice).unwrap_or(&[]);
    let single = std::slice::from_ref(poly);

    let candidates: [&dyn Fn() -> Option<(f64, f64)>; 3] = [
        &|| centroid_of_ring(outer),
        &|| bounding_box(single).map(|(a, b, c, d)| ((a + c) / 2.0, (b + d) / 2.0)),
        &|| ring_midpoint(outer),
    ];

    for candidate in candidates {
        if let Some((lon, lat)) = candidate() {
            if contains_with_wraparound(lon, lat, single) {
                return Some((lon, lat));
            }
        }
    }

    // Last resort: a boundary vertex, unverified.
    outer.first().copied()
}

/// One interior [`PickPoint`] per feature with polygon geometry, carrying
/// the feature's current display name. Features without usable geometry
/// contribute nothing.
pub fn center_pick_points(collection: &FeatureCollection) -> Vec<PickPoint> {
    collection
        .features
        .iter()
        .filter_map(|feature| {
            let polygons = feature_polygons(feature);
            let (lon, lat) = resolve_interior_point(&polygons)?;
            Some(PickPoint {
                name: display_name(feature),
                lon,
                lat,
            })
        })
        .collect()
}
