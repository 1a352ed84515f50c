//! Fixed reference locations for the Peel region.
//!
//! Ten hand-picked points across Brampton and Mississauga with baseline
//! heat-island deltas and vegetation indices. Arbitrary coordinates are
//! resolved against this table by nearest-neighbor lookup in raw degree
//! space, which is accurate enough at single-metro scale.

use serde::{Deserialize, Serialize};

/// Land cover category attached to each reference location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandCategory {
    Downtown,
    Industrial,
    Commercial,
    Park,
    Residential,
    Water,
}

impl LandCategory {
    /// Wire name used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            LandCategory::Downtown => "downtown",
            LandCategory::Industrial => "industrial",
            LandCategory::Commercial => "commercial",
            LandCategory::Park => "park",
            LandCategory::Residential => "residential",
            LandCategory::Water => "water",
        }
    }

    /// Human-readable blurb shown in map popups.
    pub fn description(&self) -> &'static str {
        match self {
            LandCategory::Downtown => "Dense urban core with limited green space",
            LandCategory::Industrial => {
                "Industrial/manufacturing zone - high heat from buildings and pavement"
            }
            LandCategory::Commercial => {
                "Commercial district with large parking lots and minimal shade"
            }
            LandCategory::Park => "Park or conservation area with good vegetation coverage",
            LandCategory::Residential => "Residential neighborhood with moderate tree cover",
            LandCategory::Water => {
                "Water body (lake/river) - temperature data not applicable for water surfaces"
            }
        }
    }
}

/// A known location with baseline measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lng: f64,
    pub category: LandCategory,
    /// Baseline urban heat island delta, degrees C above the rural baseline.
    pub heat_delta: f64,
    /// Baseline vegetation index in [-1, 1].
    pub ndvi: f64,
}

const fn point(lat: f64, lng: f64, category: LandCategory, heat_delta: f64, ndvi: f64) -> ReferencePoint {
    ReferencePoint { lat, lng, category, heat_delta, ndvi }
}

/// Known locations in Brampton/Peel. Never mutated.
pub const REFERENCE_POINTS: [ReferencePoint; 10] = [
    // Industrial / hot zones
    point(43.7315, -79.7624, LandCategory::Downtown, 5.5, 0.25), // Brampton downtown
    point(43.6847, -79.6951, LandCategory::Industrial, 6.8, 0.18), // Industrial belt south
    point(43.7525, -79.6200, LandCategory::Industrial, 7.2, 0.15), // Highway 427 industrial
    point(43.7000, -79.7800, LandCategory::Commercial, 5.8, 0.22), // Shopping districts
    // Parks / cool zones
    point(43.7525, -79.8312, LandCategory::Park, 1.2, 0.65), // Claireville Conservation
    point(43.6700, -79.8500, LandCategory::Park, 1.5, 0.62), // Credit Valley
    point(43.7800, -79.7000, LandCategory::Park, 1.8, 0.58), // Bramalea parks
    // Residential
    point(43.7200, -79.7400, LandCategory::Residential, 3.5, 0.38),
    point(43.7100, -79.8100, LandCategory::Residential, 3.2, 0.42),
    // Water bodies
    point(43.6500, -79.8000, LandCategory::Water, 0.3, 0.15), // Lake areas
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_ten_points() {
        assert_eq!(REFERENCE_POINTS.len(), 10);
    }

    #[test]
    fn all_points_inside_region() {
        for p in &REFERENCE_POINTS {
            assert!(p.lat > 43.0 && p.lat < 44.0, "lat out of region: {}", p.lat);
            assert!(p.lng > -80.0 && p.lng < -79.0, "lng out of region: {}", p.lng);
        }
    }

    #[test]
    fn baselines_within_documented_ranges() {
        for p in &REFERENCE_POINTS {
            assert!((0.0..=10.0).contains(&p.heat_delta));
            assert!((-1.0..=1.0).contains(&p.ndvi));
        }
    }

    #[test]
    fn category_wire_names_are_lowercase() {
        let json = serde_json::to_string(&LandCategory::Industrial).unwrap();
        assert_eq!(json, "\"industrial\"");
        let back: LandCategory = serde_json::from_str("\"park\"").unwrap();
        assert_eq!(back, LandCategory::Park);
    }

    #[test]
    fn descriptions_are_nonempty() {
        for cat in [
            LandCategory::Downtown,
            LandCategory::Industrial,
            LandCategory::Commercial,
            LandCategory::Park,
            LandCategory::Residential,
            LandCategory::Water,
        ] {
            assert!(!cat.description().is_empty());
            assert!(!cat.as_str().is_empty());
        }
    }
}
