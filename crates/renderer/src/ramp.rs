//! Evenly-spaced color ramps for the dashboard layers.
//!
//! Each ramp maps a value window [vmin, vmax] onto a list of stops with
//! linear interpolation between neighbors, the way the front-end legends
//! describe them. Values outside the window clamp to the end colors.

use crate::error::{RenderError, RenderResult};
use crate::gradient::{interpolate_color, Color};

/// A color ramp over a fixed value window.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    stops: Vec<Color>,
    vmin: f32,
    vmax: f32,
}

impl ColorRamp {
    /// Build a ramp from opaque color stops.
    pub fn new(stops: Vec<Color>, vmin: f32, vmax: f32) -> RenderResult<Self> {
        if stops.len() < 2 {
            return Err(RenderError::NotEnoughStops(stops.len()));
        }
        Ok(Self { stops, vmin, vmax })
    }

    /// Build a ramp from `#RRGGBB` stop strings.
    pub fn from_hex(stops: &[&str], vmin: f32, vmax: f32) -> RenderResult<Self> {
        let parsed: RenderResult<Vec<Color>> = stops.iter().map(|s| hex_to_color(s)).collect();
        Self::new(parsed?, vmin, vmax)
    }

    pub fn vmin(&self) -> f32 {
        self.vmin
    }

    pub fn vmax(&self) -> f32 {
        self.vmax
    }

    /// Map a data value to its ramp color.
    pub fn color_at(&self, value: f32) -> Color {
        let range = self.vmax - self.vmin;
        let range = if range.abs() < f32::EPSILON { 1.0 } else { range };
        let t = ((value - self.vmin) / range).clamp(0.0, 1.0);

        // Stops are evenly spaced over [0, 1].
        let pos = t * (self.stops.len() - 1) as f32;
        let i = (pos.floor() as usize).min(self.stops.len() - 2);
        let frac = pos - i as f32;
        interpolate_color(self.stops[i], self.stops[i + 1], frac)
    }
}

/// Parse a `#RRGGBB` string into an opaque color.
pub fn hex_to_color(hex: &str) -> RenderResult<Color> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(RenderError::InvalidHexColor(hex.to_string()));
    }
    let parse = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| RenderError::InvalidHexColor(hex.to_string()))
    };
    let r = parse(&digits[0..2])?;
    let g = parse(&digits[2..4])?;
    let b = parse(&digits[4..6])?;
    Ok(Color::new(r, g, b, 255))
}

/// Diverging blue-to-red ramp for the heat island delta, window [-2, 8] C.
pub fn duhi_ramp() -> ColorRamp {
    ColorRamp {
        stops: vec![
            Color::new(33, 102, 172, 255),  // #2166AC
            Color::new(103, 169, 207, 255), // #67A9CF
            Color::new(247, 247, 247, 255), // #F7F7F7
            Color::new(244, 165, 130, 255), // #F4A582
            Color::new(178, 24, 43, 255),   // #B2182B
        ],
        vmin: -2.0,
        vmax: 8.0,
    }
}

/// Red-to-green vegetation ramp, window [-0.2, 0.8].
pub fn ndvi_ramp() -> ColorRamp {
    ColorRamp {
        stops: vec![
            Color::new(215, 48, 39, 255),   // #d73027
            Color::new(253, 174, 97, 255),  // #fdae61
            Color::new(255, 255, 191, 255), // #ffffbf
            Color::new(166, 217, 106, 255), // #a6d96a
            Color::new(26, 152, 80, 255),   // #1a9850
        ],
        vmin: -0.2,
        vmax: 0.8,
    }
}

/// Cool-to-hot surface temperature ramp, window [20, 45] C.
pub fn lst_ramp() -> ColorRamp {
    ColorRamp {
        stops: vec![
            Color::new(49, 54, 149, 255),   // #313695
            Color::new(69, 117, 180, 255),  // #4575b4
            Color::new(116, 173, 209, 255), // #74add1
            Color::new(253, 174, 97, 255),  // #fdae61
            Color::new(244, 109, 67, 255),  // #f46d43
            Color::new(215, 48, 39, 255),   // #d73027
            Color::new(165, 0, 38, 255),    // #a50026
        ],
        vmin: 20.0,
        vmax: 45.0,
    }
}
