use pdf_async_runtime::{
    DocumentId, OverlayKind, OverlayOptions, PdfUpdate, StampRequest,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::documents::DocumentStore;

pub async fn handle_load_asset(
    doc_id: DocumentId,
    kind: OverlayKind,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let asset = match pdf_stamp::load_asset(kind, &path).await {
        Ok(asset) => asset,
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to read {} image: {}", kind.label(), e),
            });
            return;
        }
    };

    // Decode once for the on-screen thumbnail; the engine decodes again when stamping
    let bytes = asset.bytes;
    match tokio::task::spawn_blocking(move || {
        let rgba = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)?.to_rgba8();
        Ok::<_, image::ImageError>((bytes, rgba))
    })
    .await
    {
        Ok(Ok((bytes, rgba))) => {
            log::info!(
                "Loaded {} image {} ({}x{})",
                kind.label(),
                path.display(),
                rgba.width(),
                rgba.height()
            );
            let _ = update_tx.send(PdfUpdate::AssetLoaded {
                doc_id,
                kind,
                path,
                bytes,
                width: rgba.width() as usize,
                height: rgba.height() as usize,
                rgba_data: rgba.into_raw(),
            });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("{} image is not a valid PNG: {}", kind.label(), e),
            });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Task join error: {}", e),
            });
        }
    }
}

pub async fn handle_generate(
    doc_id: DocumentId,
    document: Arc<[u8]>,
    request: StampRequest,
    options: OverlayOptions,
    output_path: PathBuf,
    store: &DocumentStore,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let Some(source) = store.get_document(&doc_id) else {
        let _ = update_tx.send(PdfUpdate::Error {
            message: format!("Document {:?} is no longer open", doc_id),
        });
        return;
    };
    log::info!(
        "Stamping {} → {}",
        source.display(),
        output_path.display()
    );

    let result = async {
        let stamped = pdf_stamp::stamp_pdf(document.to_vec(), request, options).await?;
        pdf_stamp::write_document(&output_path, &stamped).await?;
        Ok::<_, pdf_stamp::StampError>(stamped.len())
    }
    .await;

    match result {
        Ok(byte_count) => {
            let _ = update_tx.send(PdfUpdate::GenerateComplete {
                doc_id,
                path: output_path,
                byte_count,
            });
        }
        Err(e) => {
            log::warn!("Stamping failed: {}", e);
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to generate PDF: {}", e),
            });
        }
    }
}

pub async fn handle_load_options(path: PathBuf, update_tx: &mpsc::UnboundedSender<PdfUpdate>) {
    match OverlayOptions::load(&path).await {
        Ok(options) => {
            log::info!("Loaded overlay settings from {}", path.display());
            let _ = update_tx.send(PdfUpdate::OptionsLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to load settings: {}", e),
            });
        }
    }
}

pub async fn handle_save_options(
    options: OverlayOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(PdfUpdate::OptionsSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Failed to save settings: {}", e),
            });
        }
    }
}
