//! Pipeline driver: reconcile names first, then fan the three pure
//! derivations out over the read-only collection.

use crate::border::flatten_boundaries;
use crate::interior::center_pick_points;
use crate::names::reconcile_names;
use crate::sample::flood_pick_points;
use crate::{BorderLine, PickPoint};
use geojson::{Feature, FeatureCollection};
use std::collections::HashMap;

/// Everything the rendering layer consumes, derived in one pass.
pub struct AtlasOutputs {
    /// One verified interior point per feature, for labels/markers.
    pub centers: Vec<PickPoint>,
    /// Dense interior lattice points, for area-fill markers.
    pub flood: Vec<PickPoint>,
    /// One polyline per boundary ring.
    pub borders: Vec<BorderLine>,
    /// Display-name lookup of the reconciled features.
    pub by_name: HashMap<String, Feature>,
}

/// Run the full pipeline over a boundary collection.
///
/// Name reconciliation mutates the collection in place and completes
/// before anything reads the name fields; the derivations then run in
/// parallel over the immutable collection, each producing an independent
/// output. `step` is the flood-lattice spacing in degrees
/// ([`crate::DEFAULT_GRID_STEP`] for the stock density).
pub fn run<I, S>(collection: &mut FeatureCollection, reference: I, step: f64) -> AtlasOutputs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    reconcile_names(collection, reference);

    // Reconciliation is done; fan out over the now read-only collection.
    let collection: &FeatureCollection = collection;
    let ((centers, flood), (borders, by_name)) = rayon::join(
        || {
            rayon::join(
                || center_pick_points(collection),
                || flood_pick_points(collection, step),
            )
        },
        || flatten_boundaries(collection),
    );

    AtlasOutputs {
        centers,
        flood,
        borders,
        by_name,
    }
}
