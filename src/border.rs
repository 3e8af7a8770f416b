//! Boundary flattening: every ring of every feature becomes one named
//! polyline, alongside a name-indexed lookup of the source features.

use crate::data::{display_name, feature_polygons};
use crate::BorderLine;
use geojson::{Feature, FeatureCollection};
use std::collections::HashMap;

/// Flatten every polygon ring in the collection into [`BorderLine`]s and
/// build a display-name lookup of the features.
///
/// Ring coordinates are carried verbatim: no simplification and no
/// dedup of the closing point. Features without polygon geometry emit no
/// lines but still enter the lookup; duplicate names overwrite (last
/// write wins).
pub fn flatten_boundaries(
    collection: &FeatureCollection,
) -> (Vec<BorderLine>, HashMap<String, Feature>) {
    let mut lines = Vec::new();
    let mut by_name = HashMap::new();

    for feature in &collection.features {
        let name = display_name(feature);
        by_name.insert(name.clone(), feature.clone());

        for polygon in feature_polygons(feature) {
            for ring in polygon {
                lines.push(BorderLine {
                    name: name.clone(),
                    coords: ring,
                });
            }
        }
    }

    (lines, by_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::GeoJson;

    fn collection(json: &str) -> FeatureCollection {
        json.parse::<GeoJson>().unwrap().try_into().unwrap()
    }

    #[test]
    fn test_one_line_per_ring() {
        // MultiPolygon with one holed polygon (2 rings) and one plain
        // polygon (1 ring): exactly 3 lines.
        let fc = collection(
            r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Ringland"},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [
                        [[0.0,0.0],[0.0,10.0],[10.0,10.0],[10.0,0.0],[0.0,0.0]],
                        [[4.0,4.0],[4.0,6.0],[6.0,6.0],[6.0,4.0],[4.0,4.0]]
                    ],
                    [
                        [[20.0,20.0],[20.0,25.0],[25.0,25.0],[25.0,20.0],[20.0,20.0]]
                    ]
                ]}
            }]
        }"#,
        );

        let (lines, by_name) = flatten_boundaries(&fc);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.name == "Ringland"));
        // Verbatim coordinates, closing point included
        assert_eq!(lines[0].coords.len(), 5);
        assert_eq!(lines[0].coords.first(), lines[0].coords.last());
        assert!(by_name.contains_key("Ringland"));
    }

    #[test]
    fn test_geometryless_feature_still_indexed() {
        let fc = collection(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type":"Feature","properties":{"name":"Ghost"},"geometry":null},
                {"type":"Feature","properties":{"name":"Ghost"},"geometry":null}
            ]
        }"#,
        );

        let (lines, by_name) = flatten_boundaries(&fc);
        assert!(lines.is_empty());
        assert_eq!(by_name.len(), 1);
        assert!(by_name.contains_key("Ghost"));
    }
}
