//! Gradient rasterization for gridded layer data.

use crate::error::{RenderError, RenderResult};
use crate::ramp::ColorRamp;

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }
}

/// Linear color interpolation, `t` clamped to [0, 1].
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.max(0.0).min(1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)) as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)) as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)) as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)) as u8,
    )
}

/// Resample grid data to a different resolution with bilinear interpolation.
pub fn resample_grid(
    data: &[f32],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
) -> Vec<f32> {
    if src_width == dst_width && src_height == dst_height {
        return data.to_vec();
    }

    let mut output = vec![0.0f32; dst_width * dst_height];

    // Degenerate single-row/column targets pin to the first source sample.
    let x_ratio = if dst_width > 1 {
        (src_width - 1) as f32 / (dst_width - 1) as f32
    } else {
        0.0
    };
    let y_ratio = if dst_height > 1 {
        (src_height - 1) as f32 / (dst_height - 1) as f32
    } else {
        0.0
    };

    for y in 0..dst_height {
        for x in 0..dst_width {
            let src_x = x as f32 * x_ratio;
            let src_y = y as f32 * y_ratio;

            let x1 = src_x.floor() as usize;
            let y1 = src_y.floor() as usize;
            let x2 = (x1 + 1).min(src_width - 1);
            let y2 = (y1 + 1).min(src_height - 1);

            let dx = src_x - x1 as f32;
            let dy = src_y - y1 as f32;

            let v11 = data.get(y1 * src_width + x1).copied().unwrap_or(0.0);
            let v21 = data.get(y1 * src_width + x2).copied().unwrap_or(0.0);
            let v12 = data.get(y2 * src_width + x1).copied().unwrap_or(0.0);
            let v22 = data.get(y2 * src_width + x2).copied().unwrap_or(0.0);

            let v1 = v11 * (1.0 - dx) + v21 * dx;
            let v2 = v12 * (1.0 - dx) + v22 * dx;
            output[y * dst_width + x] = v1 * (1.0 - dy) + v2 * dy;
        }
    }

    output
}

/// Render grid data through a color ramp.
///
/// Returns RGBA pixel data, 4 bytes per pixel in row-major order. Cells
/// holding NaN render as transparent.
pub fn render_grid(
    data: &[f32],
    width: usize,
    height: usize,
    ramp: &ColorRamp,
) -> RenderResult<Vec<u8>> {
    if data.len() != width * height {
        return Err(RenderError::ShapeMismatch { len: data.len(), width, height });
    }

    let mut pixels = vec![0u8; width * height * 4];
    for (idx, &value) in data.iter().enumerate() {
        let color = if value.is_nan() { Color::transparent() } else { ramp.color_at(value) };
        let pixel_idx = idx * 4;
        pixels[pixel_idx] = color.r;
        pixels[pixel_idx + 1] = color.g;
        pixels[pixel_idx + 2] = color.b;
        pixels[pixel_idx + 3] = color.a;
    }

    Ok(pixels)
}
