use pdf_async_runtime::{DocumentId, PdfUpdate, ViewportBounds};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::documents::DocumentStore;

#[cfg(feature = "pdf-viewer")]
pub async fn handle_load(
    doc_id: DocumentId,
    path: PathBuf,
    bounds: ViewportBounds,
    store: &mut DocumentStore,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let bytes = match pdf_stamp::read_document(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to read {}: {}", path.display(), e),
            });
            return;
        }
    };
    let document: Arc<[u8]> = bytes.into();

    match pdf_stamp::render::render_first_page_async(document.to_vec(), bounds).await {
        Ok(page) => {
            log::info!(
                "Rendered {} at scale {:.3} ({}x{})",
                path.display(),
                page.viewport.scale,
                page.width,
                page.height
            );
            store.add_document(doc_id, path);
            let _ = update_tx.send(PdfUpdate::DocumentRendered {
                doc_id,
                document,
                viewport: page.viewport,
                width: page.width,
                height: page.height,
                rgba_data: page.rgba_data,
            });
        }
        Err(e) => {
            log::warn!("Failed to render {}: {}", path.display(), e);
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to render PDF: {}", e),
            });
        }
    }
}

pub async fn handle_close(
    doc_id: DocumentId,
    store: &mut DocumentStore,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    if let Some(path) = store.remove_document(doc_id) {
        log::debug!("Closed {} ({} still open)", path.display(), store.len());
    }
    let _ = update_tx.send(PdfUpdate::DocumentClosed { doc_id });
}

#[cfg(not(feature = "pdf-viewer"))]
pub async fn handle_viewer_unavailable(update_tx: &mpsc::UnboundedSender<PdfUpdate>) {
    let _ = update_tx.send(PdfUpdate::Error {
        message: "PDF rendering not available (pdf-viewer feature disabled)".to_string(),
    });
}
