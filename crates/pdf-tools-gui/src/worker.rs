use pdf_async_runtime::{PdfCommand, PdfUpdate};
use tokio::sync::mpsc;

use crate::documents::DocumentStore;
use crate::handlers;

/// Async worker task that processes PDF commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
) {
    let mut store = DocumentStore::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut store, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: PdfCommand,
    store: &mut DocumentStore,
    command_rx: &mut mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match cmd {
        #[cfg(feature = "pdf-viewer")]
        PdfCommand::LoadDocument {
            doc_id,
            path,
            bounds,
        } => {
            handlers::document::handle_load(doc_id, path, bounds, store, update_tx).await;
        }
        #[cfg(not(feature = "pdf-viewer"))]
        PdfCommand::LoadDocument { .. } => {
            handlers::document::handle_viewer_unavailable(update_tx).await;
        }
        PdfCommand::LoadAsset { doc_id, kind, path } => {
            handlers::stamp::handle_load_asset(doc_id, kind, path, update_tx).await;
        }
        PdfCommand::Generate {
            mut doc_id,
            mut document,
            mut request,
            mut options,
            mut output_path,
        } => {
            // Drain any queued generate commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let PdfCommand::Generate {
                    doc_id: new_doc_id,
                    document: new_document,
                    request: new_request,
                    options: new_options,
                    output_path: new_output_path,
                } = next_cmd
                {
                    log::debug!("Discarding queued generate, using newer request");
                    doc_id = new_doc_id;
                    document = new_document;
                    request = new_request;
                    options = new_options;
                    output_path = new_output_path;
                } else {
                    // Can't put it back, so run it before the generate
                    Box::pin(process_command(next_cmd, store, command_rx, update_tx)).await;
                }
            }

            handlers::stamp::handle_generate(
                doc_id,
                document,
                request,
                options,
                output_path,
                store,
                update_tx,
            )
            .await;
        }
        PdfCommand::CloseDocument { doc_id } => {
            handlers::document::handle_close(doc_id, store, update_tx).await;
        }
        PdfCommand::LoadOptions { path } => {
            handlers::stamp::handle_load_options(path, update_tx).await;
        }
        PdfCommand::SaveOptions { options, path } => {
            handlers::stamp::handle_save_options(options, path, update_tx).await;
        }
    }
}
