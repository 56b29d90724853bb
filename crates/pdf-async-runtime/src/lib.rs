use std::path::PathBuf;
use std::sync::Arc;

// Re-export types from library crates
pub use pdf_stamp::{OverlayKind, OverlayOptions, StampRequest, ViewportBounds, ViewportState};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    /// Read a PDF and render its first page to fit the viewport
    LoadDocument {
        doc_id: DocumentId,
        path: PathBuf,
        bounds: ViewportBounds,
    },
    /// Read an overlay PNG for an open document
    LoadAsset {
        doc_id: DocumentId,
        kind: OverlayKind,
        path: PathBuf,
    },
    /// Stamp page 1 and write the result. Only the newest queued request runs.
    Generate {
        doc_id: DocumentId,
        document: Arc<[u8]>,
        request: StampRequest,
        options: OverlayOptions,
        output_path: PathBuf,
    },
    CloseDocument {
        doc_id: DocumentId,
    },
    LoadOptions {
        path: PathBuf,
    },
    SaveOptions {
        options: OverlayOptions,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    DocumentRendered {
        doc_id: DocumentId,
        document: Arc<[u8]>,
        viewport: ViewportState,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    AssetLoaded {
        doc_id: DocumentId,
        kind: OverlayKind,
        path: PathBuf,
        bytes: Vec<u8>,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    GenerateComplete {
        doc_id: DocumentId,
        path: PathBuf,
        byte_count: usize,
    },
    DocumentClosed {
        doc_id: DocumentId,
    },
    OptionsLoaded {
        options: OverlayOptions,
    },
    OptionsSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

impl PdfUpdate {
    /// Document this update belongs to, if any
    pub fn doc_id(&self) -> Option<DocumentId> {
        match self {
            PdfUpdate::DocumentRendered { doc_id, .. }
            | PdfUpdate::AssetLoaded { doc_id, .. }
            | PdfUpdate::GenerateComplete { doc_id, .. }
            | PdfUpdate::DocumentClosed { doc_id } => Some(*doc_id),
            PdfUpdate::OptionsLoaded { .. }
            | PdfUpdate::OptionsSaved { .. }
            | PdfUpdate::Error { .. } => None,
        }
    }
}

/// Handle to a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

impl DocumentId {
    pub fn next(self) -> Self {
        DocumentId(self.0 + 1)
    }
}
