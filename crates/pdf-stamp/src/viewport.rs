//! Fitting a page into the on-screen viewport
//!
//! The scale is derived in two sequential steps: fit the width first, then
//! re-check the height using the possibly reduced scale. Shrinking for height
//! can only make the page narrower, so no second width check is needed.
//! Pages smaller than the viewport are never enlarged.

use crate::options::ViewportOptions;
use crate::types::*;

impl ViewportBounds {
    pub fn new(max_width: f32, max_height: f32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Bounds available inside a window of the given size
    pub fn from_window(window_width: f32, window_height: f32, options: &ViewportOptions) -> Self {
        Self {
            max_width: window_width * options.width_fraction,
            max_height: window_height * options.height_fraction,
        }
    }
}

/// Compute the display scale for a page inside the given bounds.
pub fn fit_scale(page: PageSize, bounds: ViewportBounds) -> Result<f32> {
    if !is_positive(page.width_pt) || !is_positive(page.height_pt) {
        return Err(StampError::Config(format!(
            "Page size must be positive, got {} x {} pt",
            page.width_pt, page.height_pt
        )));
    }
    if !is_positive(bounds.max_width) || !is_positive(bounds.max_height) {
        return Err(StampError::Config(format!(
            "Viewport bounds must be positive, got {} x {} px",
            bounds.max_width, bounds.max_height
        )));
    }

    let mut scale = 1.0;
    if page.width_pt > bounds.max_width {
        scale = bounds.max_width / page.width_pt;
    }
    if page.height_pt * scale > bounds.max_height {
        scale = bounds.max_height / page.height_pt;
    }

    Ok(scale)
}

impl ViewportState {
    /// Fit a page into the bounds
    pub fn fit(page: PageSize, bounds: ViewportBounds) -> Result<Self> {
        Ok(Self {
            page,
            scale: fit_scale(page, bounds)?,
        })
    }

    /// Size of the rendered page in display pixels
    pub fn display_size(&self) -> (f32, f32) {
        (
            self.page.width_pt * self.scale,
            self.page.height_pt * self.scale,
        )
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
