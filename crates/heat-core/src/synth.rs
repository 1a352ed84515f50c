//! Synthetic raster layers.
//!
//! These stand in for the LST/NDVI/DUHI rasters a real pipeline would
//! ingest: each layer kind has a fixed sampling distribution, and the RNG is
//! injected so exports and tests can pin a seed while the HTTP layer draws
//! fresh randomness per request.

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default synthetic raster width, cells.
pub const GRID_WIDTH: usize = 1000;
/// Default synthetic raster height, cells.
pub const GRID_HEIGHT: usize = 1000;

/// The three raster layers the dashboard serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Land surface temperature, degrees C.
    Lst,
    /// Normalized difference vegetation index.
    Ndvi,
    /// Urban heat island delta, degrees C.
    Duhi,
}

impl LayerKind {
    /// Wire name used in URLs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Lst => "lst",
            LayerKind::Ndvi => "ndvi",
            LayerKind::Duhi => "duhi",
        }
    }

    /// Parse a wire name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lst" => Some(LayerKind::Lst),
            "ndvi" => Some(LayerKind::Ndvi),
            "duhi" => Some(LayerKind::Duhi),
            _ => None,
        }
    }
}

/// A dense row-major grid of cells.
#[derive(Debug, Clone)]
pub struct SyntheticGrid {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

/// Generate one synthetic layer at the given shape.
pub fn generate_grid<R: Rng + ?Sized>(
    kind: LayerKind,
    width: usize,
    height: usize,
    rng: &mut R,
) -> CoreResult<SyntheticGrid> {
    let len = width
        .checked_mul(height)
        .filter(|&n| n > 0)
        .ok_or(CoreError::InvalidGridShape { width, height })?;

    let data: Vec<f32> = match kind {
        LayerKind::Lst => {
            // Warm-season surface temperatures: mean 32 C, sigma 3.
            let normal = Normal::new(32.0f32, 3.0)
                .map_err(|e| CoreError::InvalidDistribution(e.to_string()))?;
            normal.sample_iter(&mut *rng).take(len).collect()
        }
        LayerKind::Ndvi => {
            // Moderately vegetated suburb: mean 0.35, sigma 0.1, with the
            // index clamped to its physical range.
            let normal = Normal::new(0.35f32, 0.1)
                .map_err(|e| CoreError::InvalidDistribution(e.to_string()))?;
            normal
                .sample_iter(&mut *rng)
                .take(len)
                .map(|v| v.clamp(-1.0, 1.0))
                .collect()
        }
        LayerKind::Duhi => {
            // Exponential body (mean 2.5 C) plus gaussian roughness, clamped
            // to the plausible delta range.
            let exp = Exp::new(1.0 / 2.5f32)
                .map_err(|e| CoreError::InvalidDistribution(e.to_string()))?;
            let noise = Normal::new(0.0f32, 0.5)
                .map_err(|e| CoreError::InvalidDistribution(e.to_string()))?;
            (0..len)
                .map(|_| (exp.sample(rng) + noise.sample(rng)).clamp(-2.0, 10.0))
                .collect()
        }
    };

    Ok(SyntheticGrid { data, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grid_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = generate_grid(LayerKind::Lst, 40, 25, &mut rng).unwrap();
        assert_eq!(g.width, 40);
        assert_eq!(g.height, 25);
        assert_eq!(g.data.len(), 1000);
    }

    #[test]
    fn zero_shape_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_grid(LayerKind::Ndvi, 0, 100, &mut rng).is_err());
        assert!(generate_grid(LayerKind::Ndvi, 100, 0, &mut rng).is_err());
    }

    #[test]
    fn ndvi_cells_respect_physical_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let g = generate_grid(LayerKind::Ndvi, 200, 200, &mut rng).unwrap();
        assert!(g.data.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn duhi_cells_respect_delta_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = generate_grid(LayerKind::Duhi, 200, 200, &mut rng).unwrap();
        assert!(g.data.iter().all(|v| (-2.0..=10.0).contains(v)));
    }

    #[test]
    fn lst_sample_mean_near_distribution_mean() {
        let mut rng = StdRng::seed_from_u64(4);
        let g = generate_grid(LayerKind::Lst, 100, 100, &mut rng).unwrap();
        let mean = g.data.iter().map(|&v| v as f64).sum::<f64>() / g.data.len() as f64;
        assert!((mean - 32.0).abs() < 0.3, "sample mean {mean}");
    }

    #[test]
    fn duhi_sample_mean_near_exponential_mean() {
        // The [-2, 10] clamp trims the exponential's upper tail a little,
        // so check a band around 2.5 rather than the exact value.
        let mut rng = StdRng::seed_from_u64(5);
        let g = generate_grid(LayerKind::Duhi, 100, 100, &mut rng).unwrap();
        let mean = g.data.iter().map(|&v| v as f64).sum::<f64>() / g.data.len() as f64;
        assert!((2.0..3.0).contains(&mean), "sample mean {mean}");
    }

    #[test]
    fn same_seed_same_grid() {
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        let g1 = generate_grid(LayerKind::Duhi, 50, 50, &mut a).unwrap();
        let g2 = generate_grid(LayerKind::Duhi, 50, 50, &mut b).unwrap();
        assert_eq!(g1.data, g2.data);
    }

    #[test]
    fn layer_names_round_trip() {
        for kind in [LayerKind::Lst, LayerKind::Ndvi, LayerKind::Duhi] {
            assert_eq!(LayerKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(LayerKind::from_name("albedo"), None);
        assert_eq!(LayerKind::from_name(""), None);
    }

    #[test]
    fn layer_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LayerKind::Duhi).unwrap(), "\"duhi\"");
    }
}
