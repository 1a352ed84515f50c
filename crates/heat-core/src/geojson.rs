//! Hotspot and coolspot markers as GeoJSON.
//!
//! Only the small slice of GeoJSON the map overlay needs: point features in
//! a flat FeatureCollection, coordinates in [longitude, latitude] order.

use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection of point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self { collection_type: "FeatureCollection".to_string(), features: Vec::new() }
    }

    /// Builder-style append.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature with point geometry and marker properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: HotspotProperties,
}

impl Feature {
    /// Create a point feature at (longitude, latitude).
    pub fn point(lng: f64, lat: f64, properties: HotspotProperties) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry: PointGeometry::new(lng, lat),
            properties,
        }
    }
}

/// Point geometry holding [longitude, latitude].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { geometry_type: "Point".to_string(), coordinates: [lng, lat] }
    }
}

/// Marker kind: a heat source or a cool refuge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotKind {
    Hotspot,
    Coolspot,
}

/// Properties attached to each marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotProperties {
    pub name: String,
    /// Measured heat island delta at the marker, degrees C.
    pub duhi: f64,
    #[serde(rename = "type")]
    pub kind: SpotKind,
    /// What drives the heating or cooling at this spot.
    pub source: String,
}

impl HotspotProperties {
    fn new(name: &str, duhi: f64, kind: SpotKind, source: &str) -> Self {
        Self { name: name.to_string(), duhi, kind, source: source.to_string() }
    }
}

/// The five fixed heat and cool markers for the map overlay.
pub fn hotspots() -> FeatureCollection {
    FeatureCollection::new()
        .with_feature(Feature::point(
            -79.6951,
            43.6847,
            HotspotProperties::new(
                "Industrial Belt (Manufacturing)",
                6.8,
                SpotKind::Hotspot,
                "Factories, warehouses, large paved areas",
            ),
        ))
        .with_feature(Feature::point(
            -79.6200,
            43.7525,
            HotspotProperties::new(
                "Highway 427 Industrial Zone",
                7.2,
                SpotKind::Hotspot,
                "Industrial parks, logistics centers, minimal vegetation",
            ),
        ))
        .with_feature(Feature::point(
            -79.7800,
            43.7000,
            HotspotProperties::new(
                "Commercial District (Shopping Centers)",
                5.8,
                SpotKind::Hotspot,
                "Large parking lots, shopping malls, limited trees",
            ),
        ))
        .with_feature(Feature::point(
            -79.8312,
            43.7525,
            HotspotProperties::new(
                "Claireville Conservation Area",
                1.2,
                SpotKind::Coolspot,
                "Dense forest, wetlands, natural cooling",
            ),
        ))
        .with_feature(Feature::point(
            -79.8500,
            43.6700,
            HotspotProperties::new(
                "Credit Valley Parks",
                1.5,
                SpotKind::Coolspot,
                "River valley, mature trees, green corridors",
            ),
        ))
}
