//! Image rendering for the dashboard layer previews.
//!
//! Pipeline: bilinear resample to the preview size, colorize through an
//! evenly-spaced ramp, encode as RGBA PNG, wrap in a base64 data URI.

pub mod error;
pub mod gradient;
pub mod png;
pub mod preview;
pub mod ramp;

pub use error::{RenderError, RenderResult};
pub use gradient::{interpolate_color, render_grid, resample_grid, Color};
pub use preview::{render_data_uri, PREVIEW_HEIGHT, PREVIEW_WIDTH};
pub use ramp::{duhi_ramp, hex_to_color, lst_ramp, ndvi_ramp, ColorRamp};
