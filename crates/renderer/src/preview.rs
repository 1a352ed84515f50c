//! Layer previews as base64 data URIs.

use crate::error::{RenderError, RenderResult};
use crate::gradient::{render_grid, resample_grid};
use crate::ramp::ColorRamp;

/// Default preview width in pixels.
pub const PREVIEW_WIDTH: usize = 800;
/// Default preview height in pixels.
pub const PREVIEW_HEIGHT: usize = 600;

/// Render a grid to a `data:image/png;base64,...` URI at the given output
/// size: bilinear resample, ramp colorization, PNG encode, base64.
pub fn render_data_uri(
    data: &[f32],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    ramp: &ColorRamp,
) -> RenderResult<String> {
    if data.len() != src_width * src_height {
        return Err(RenderError::ShapeMismatch {
            len: data.len(),
            width: src_width,
            height: src_height,
        });
    }

    let resampled = resample_grid(data, src_width, src_height, dst_width, dst_height);
    let pixels = render_grid(&resampled, dst_width, dst_height, ramp)?;
    let png = crate::png::create_png(&pixels, dst_width, dst_height)?;

    let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &png);
    Ok(format!("data:image/png;base64,{encoded}"))
}
