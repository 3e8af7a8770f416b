//! Geospatial reconciliation core for world boundary data.
//!
//! Takes a GeoJSON `FeatureCollection` of country polygons, reconciles each
//! feature's name against a canonical reference corpus (diacritic- and
//! order-insensitive), resolves one verified interior point per country for
//! label placement, samples a dense interior lattice for area-fill markers,
//! and flattens boundary rings into named polylines for outline rendering.
//! Projection and drawing belong to the consuming renderer.

pub mod border;
pub mod data;
pub mod geometry;
pub mod interior;
pub mod names;
pub mod pipeline;
pub mod sample;

pub use border::flatten_boundaries;
pub use interior::{center_pick_points, resolve_interior_point};
pub use names::reconcile_names;
pub use pipeline::{run, AtlasOutputs};
pub use sample::{flood_pick_points, sample_interior_grid, DEFAULT_GRID_STEP};

/// A named coordinate used for marker/label placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PickPoint {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// A named polyline used for outline rendering (one per boundary ring).
#[derive(Clone, Debug, PartialEq)]
pub struct BorderLine {
    pub name: String,
    pub coords: Vec<(f64, f64)>,
}
