//! Shared constants for overlay placement
//!
//! This module centralizes the fixed sizes and offsets used by both the
//! live preview and the PDF mutation engine.

// =============================================================================
// Overlay Footprints
// =============================================================================

/// Stamp width in PDF points (height follows the image's aspect ratio)
pub const STAMP_FOOTPRINT_PT: f32 = 200.0;

/// Signature width in PDF points
pub const SIGNATURE_FOOTPRINT_PT: f32 = 100.0;

/// Offset of the signature center from the stamp center, in PDF points.
/// Positive y points up the page.
pub const SIGNATURE_OFFSET_PT: (f32, f32) = (100.0, 0.0);

// =============================================================================
// Viewport Fitting
// =============================================================================

/// Share of the window width available to the rendered page
pub const VIEWPORT_WIDTH_FRACTION: f32 = 0.9;

/// Share of the window height available to the rendered page
pub const VIEWPORT_HEIGHT_FRACTION: f32 = 0.8;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

/// How far up the page tree to look for an inherited attribute
pub(crate) const MAX_INHERIT_DEPTH: usize = 10;
