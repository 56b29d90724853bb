use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error("Failed to parse PDF: {0}")]
    DocumentParse(#[source] lopdf::Error),
    #[error("Document has no pages")]
    PageNotFound,
    #[error("{} image is not a valid PNG: {source}", .kind.label())]
    ImageDecode {
        kind: OverlayKind,
        #[source]
        source: image::ImageError,
    },
    #[error("No anchor recorded; click on the page before placing overlays")]
    MissingAnchor,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, StampError>;

/// Native page size in PDF points (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }
}

/// Area available for the rendered page, in display pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub max_width: f32,
    pub max_height: f32,
}

/// Result of fitting a page into the viewport.
///
/// The scale never exceeds 1.0 and stays fixed for the lifetime of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub page: PageSize,
    pub scale: f32,
}

/// A click location in display pixels, relative to the canvas top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An anchor paired with the viewport scale that was active when it was recorded.
///
/// Display-to-PDF conversion must always use this scale, even if the page
/// has since been rendered at a different size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickAnchor {
    pub anchor: Anchor,
    pub scale: f32,
}

/// Which overlay an asset represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayKind {
    /// Drawn centered on the anchor
    Stamp,
    /// Drawn to the right of the stamp
    Signature,
}

impl OverlayKind {
    pub fn label(self) -> &'static str {
        match self {
            OverlayKind::Stamp => "Stamp",
            OverlayKind::Signature => "Signature",
        }
    }

    /// Default width of the overlay on the page, in points
    pub fn footprint_pt(self) -> f32 {
        match self {
            OverlayKind::Stamp => crate::constants::STAMP_FOOTPRINT_PT,
            OverlayKind::Signature => crate::constants::SIGNATURE_FOOTPRINT_PT,
        }
    }

    /// Resource name prefix for the image XObject
    pub(crate) fn resource_prefix(self) -> &'static str {
        match self {
            OverlayKind::Stamp => "Stamp",
            OverlayKind::Signature => "Sig",
        }
    }
}

/// A user-supplied PNG for one overlay kind
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayAsset {
    pub kind: OverlayKind,
    pub bytes: Vec<u8>,
}

impl OverlayAsset {
    pub fn new(kind: OverlayKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }
}

/// Everything the engine needs besides the document and options
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StampRequest {
    pub anchor: Option<ClickAnchor>,
    pub stamp: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
}

impl StampRequest {
    pub fn has_overlays(&self) -> bool {
        self.stamp.is_some() || self.signature.is_some()
    }

    /// Requested assets in drawing order (stamp first, then signature)
    pub fn assets(&self) -> impl Iterator<Item = (OverlayKind, &[u8])> {
        let stamp = self
            .stamp
            .as_deref()
            .map(|bytes| (OverlayKind::Stamp, bytes));
        let signature = self
            .signature
            .as_deref()
            .map(|bytes| (OverlayKind::Signature, bytes));
        stamp.into_iter().chain(signature)
    }
}

/// Axis-aligned rectangle in display pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Axis-aligned rectangle in PDF user space (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PdfRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
