//! Display space <-> PDF user space
//!
//! Display space is top-down and scaled by the viewport scale `s`; PDF user
//! space is bottom-up and unscaled. Results are not clamped to the page, so
//! a click near the bottom of a shrunken page can map below y = 0.

use crate::options::OverlayOptions;
use crate::types::*;

/// Map a display-space anchor into PDF user space: `(x / s, H - y / s)`.
pub fn to_pdf_space(anchor: Anchor, scale: f32, page_height: f32) -> (f32, f32) {
    (anchor.x / scale, page_height - anchor.y / scale)
}

/// Inverse of [`to_pdf_space`]: `(x * s, (H - y) * s)`.
pub fn to_display_space(x: f32, y: f32, scale: f32, page_height: f32) -> Anchor {
    Anchor {
        x: x * scale,
        y: (page_height - y) * scale,
    }
}

/// Where an overlay lands on the page.
///
/// The width is the kind's fixed footprint; the height keeps the image's
/// aspect ratio. `center` is the anchor in PDF space, the kind's offset is
/// applied here.
pub fn overlay_rect(
    kind: OverlayKind,
    center: (f32, f32),
    image_width: u32,
    image_height: u32,
    options: &OverlayOptions,
) -> PdfRect {
    let width = options.footprint(kind);
    let height = width * image_height as f32 / image_width as f32;
    let (dx, dy) = options.offset(kind);

    PdfRect {
        x: center.0 + dx - width / 2.0,
        y: center.1 + dy - height / 2.0,
        width,
        height,
    }
}
