use pdf_async_runtime::{DocumentId, OverlayKind};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Documents the worker has rendered and not yet closed
#[derive(Default)]
pub struct DocumentStore {
    documents: HashMap<DocumentId, PathBuf>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, doc_id: DocumentId, path: PathBuf) {
        self.documents.insert(doc_id, path);
    }

    pub fn get_document(&self, doc_id: &DocumentId) -> Option<&Path> {
        self.documents.get(doc_id).map(PathBuf::as_path)
    }

    pub fn remove_document(&mut self, doc_id: DocumentId) -> Option<PathBuf> {
        self.documents.remove(&doc_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Overlay images requested for the current document and not yet loaded.
///
/// A loaded image is accepted only for the document and file most recently
/// requested for its kind, so a slow earlier pick cannot overwrite a later one.
#[derive(Default)]
pub struct PendingAssets {
    doc_id: Option<DocumentId>,
    paths: HashMap<OverlayKind, PathBuf>,
}

impl PendingAssets {
    /// Drop every outstanding request and follow a new document
    pub fn reset(&mut self, doc_id: Option<DocumentId>) {
        self.doc_id = doc_id;
        self.paths.clear();
    }

    /// Record a pick, replacing any earlier pick of the same kind
    pub fn request(&mut self, kind: OverlayKind, path: PathBuf) {
        self.paths.insert(kind, path);
    }

    pub fn cancel(&mut self, kind: OverlayKind) {
        self.paths.remove(&kind);
    }

    /// Whether a loaded image answers the outstanding request; a match consumes it
    pub fn accept(&mut self, doc_id: DocumentId, kind: OverlayKind, path: &Path) -> bool {
        let matches = self.doc_id == Some(doc_id)
            && self.paths.get(&kind).is_some_and(|pending| pending == path);
        if matches {
            self.paths.remove(&kind);
        }
        matches
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Default output name for a stamped copy: `report.pdf` becomes `report_stamped.pdf`
pub fn stamped_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    format!("{}_stamped.pdf", stem)
}
