//! Point-in-polygon tests, shoelace area and bounding boxes over raw
//! lon/lat coordinate lists.
//!
//! Coordinates are plain `(lon, lat)` pairs in degrees; rings are
//! implicitly closed (the first point need not be repeated at the end)
//! and no winding convention is assumed.

/// One boundary loop: ordered (lon, lat) pairs, implicitly closed.
pub type Ring = Vec<(f64, f64)>;

/// Outer ring plus zero or more hole rings.
pub type Polygon = Vec<Ring>;

/// Multiple disjoint polygons representing one feature.
pub type MultiPolygon = Vec<Polygon>;

/// Even-odd ray-casting test against a single ring.
///
/// Casts a ray towards +lon and counts edge crossings. Edges are taken
/// cyclically, so the closing edge is counted whether or not the ring
/// repeats its first point. Empty rings contain nothing.
pub fn point_in_ring(lon: f64, lat: f64, ring: &[(f64, f64)]) -> bool {
    if ring.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];

        if (yi > lat) != (yj > lat) {
            // Denominator floor guards exact-zero latitude spans
            let mut dy = yj - yi;
            if dy == 0.0 {
                dy = 1e-12;
            }
            let x_at_lat = (xj - xi) * (lat - yi) / dy + xi;
            if lon < x_at_lat {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Even-odd test against a whole polygon: XOR of containment across all
/// rings. Correctly subtracts holes only when hole rings are wound
/// opposite to the outer ring, which the source data is assumed to do;
/// ring 0 is not special-cased.
pub fn point_in_polygon(lon: f64, lat: f64, polygon: &[Ring]) -> bool {
    let mut inside = false;
    for ring in polygon {
        if point_in_ring(lon, lat, ring) {
            inside = !inside;
        }
    }
    inside
}

/// True if any member polygon contains the point.
pub fn point_in_multi_polygon(lon: f64, lat: f64, polygons: &[Polygon]) -> bool {
    polygons.iter().any(|poly| point_in_polygon(lon, lat, poly))
}

/// Containment test that also tries the point shifted by ±360° longitude,
/// for geometry split or re-wound across the antimeridian.
pub fn contains_with_wraparound(lon: f64, lat: f64, polygons: &[Polygon]) -> bool {
    point_in_multi_polygon(lon, lat, polygons)
        || point_in_multi_polygon(lon + 360.0, lat, polygons)
        || point_in_multi_polygon(lon - 360.0, lat, polygons)
}

/// Shoelace sum over the ring, halved. Sign encodes winding; take the
/// absolute value when comparing areas. Empty rings have zero area.
pub fn signed_area(ring: &[(f64, f64)]) -> f64 {
    if ring.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (x0, y0) = ring[j];
        let (x1, y1) = ring[i];
        sum += x0 * y1 - x1 * y0;
        j = i;
    }
    sum * 0.5
}

/// Area-weighted centroid of a ring. Near-degenerate rings (|area| below
/// 1e-9, where the weighted formula is unstable) fall back to the
/// arithmetic mean of the points. `None` for empty rings.
pub fn centroid_of_ring(ring: &[(f64, f64)]) -> Option<(f64, f64)> {
    if ring.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (x0, y0) = ring[j];
        let (x1, y1) = ring[i];
        let f = x0 * y1 - x1 * y0;
        sum += f;
        cx += (x0 + x1) * f;
        cy += (y0 + y1) * f;
        j = i;
    }

    let area = sum * 0.5;
    if area.abs() < 1e-9 {
        let n = ring.len() as f64;
        let (sx, sy) = ring
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        return Some((sx / n, sy / n));
    }

    Some((cx / (6.0 * area), cy / (6.0 * area)))
}

/// Scan every point of every ring of every polygon and return
/// `(min_lon, min_lat, max_lon, max_lat)`, or `None` if there are no
/// points at all.
pub fn bounding_box(polygons: &[Polygon]) -> Option<(f64, f64, f64, f64)> {
    let mut min_lon = f64::MAX;
    let mut min_lat = f64::MAX;
    let mut max_lon = f64::MIN;
    let mut max_lat = f64::MIN;
    let mut any = false;

    for poly in polygons {
        for ring in poly {
            for &(lon, lat) in ring {
                min_lon = min_lon.min(lon);
                max_lon = max_lon.max(lon);
                min_lat = min_lat.min(lat);
                max_lat = max_lat.max(lat);
                any = true;
            }
        }
    }

    any.then_some((min_lon, min_lat, max_lon, max_lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]
    }

    #[test]
    fn test_point_in_ring_inside_outside() {
        let ring = square();
        assert!(point_in_ring(5.0, 5.0, &ring));
        assert!(!point_in_ring(15.0, 5.0, &ring));
        assert!(!point_in_ring(5.0, -5.0, &ring));
        assert!(!point_in_ring(-100.0, 50.0, &ring));
    }

    #[test]
    fn test_point_in_ring_empty() {
        assert!(!point_in_ring(0.0, 0.0, &[]));
    }

    #[test]
    fn test_point_in_polygon_hole_xor() {
        // Outer square with an inner square: XOR across rings excludes
        // the hole interior.
        let outer = square();
        let hole = vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)];
        let poly = vec![outer, hole];
        assert!(!point_in_polygon(5.0, 5.0, &poly));
        assert!(point_in_polygon(2.0, 2.0, &poly));
        assert!(!point_in_polygon(20.0, 20.0, &poly));
    }

    #[test]
    fn test_wraparound_containment() {
        // Fiji-style geometry stored past the antimeridian (170..190):
        // a point at -175 is only found via the +360 shift.
        let ring = vec![
            (170.0, -10.0),
            (190.0, -10.0),
            (190.0, 10.0),
            (170.0, 10.0),
            (170.0, -10.0),
        ];
        let polys = vec![vec![ring]];
        assert!(!point_in_multi_polygon(-175.0, 0.0, &polys));
        assert!(contains_with_wraparound(-175.0, 0.0, &polys));
        assert!(contains_with_wraparound(175.0, 0.0, &polys));
        assert!(!contains_with_wraparound(150.0, 0.0, &polys));
    }

    #[test]
    fn test_signed_area_square() {
        assert!((signed_area(&square()).abs() - 100.0).abs() < 1e-9);
        assert_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn test_signed_area_rotation_invariant() {
        let ring = square();
        let base = signed_area(&ring).abs();
        for shift in 1..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(shift);
            assert!((signed_area(&rotated).abs() - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_signed_area_scales_quadratically() {
        let ring = square();
        let k = 3.0;
        let scaled: Ring = ring.iter().map(|&(x, y)| (x * k, y * k)).collect();
        let a = signed_area(&ring).abs();
        let b = signed_area(&scaled).abs();
        assert!((b - a * k * k).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_of_square() {
        let (cx, cy) = centroid_of_ring(&square()).unwrap();
        assert!((cx - 5.0).abs() < 1e-9);
        assert!((cy - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_degenerate_ring_uses_mean() {
        // Collinear points: zero area, centroid formula would blow up.
        let sliver = vec![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)];
        let (cx, cy) = centroid_of_ring(&sliver).unwrap();
        assert!((cx - 2.0).abs() < 1e-9);
        assert!(cy.abs() < 1e-9);
        assert_eq!(centroid_of_ring(&[]), None);
    }

    #[test]
    fn test_bounding_box() {
        let polys = vec![
            vec![square()],
            vec![vec![(-20.0, 30.0), (-15.0, 35.0), (-18.0, 40.0)]],
        ];
        let (min_lon, min_lat, max_lon, max_lat) = bounding_box(&polys).unwrap();
        assert_eq!(min_lon, -20.0);
        assert_eq!(min_lat, 0.0);
        assert_eq!(max_lon, 10.0);
        assert_eq!(max_lat, 40.0);
        assert_eq!(bounding_box(&[]), None);
        assert_eq!(bounding_box(&[vec![vec![]]]), None);
    }
}
