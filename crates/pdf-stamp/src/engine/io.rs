//! Document and asset I/O

use super::page::{first_page_id, page_size};
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Basic facts about a document, read without mutating it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentInfo {
    pub page_count: usize,
    pub first_page: PageSize,
}

/// Read a PDF from disk
pub async fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}

/// Write the stamped document
pub async fn write_document(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Read an overlay PNG from disk. The bytes are decoded later, by the engine.
pub async fn load_asset(kind: OverlayKind, path: impl AsRef<Path>) -> Result<OverlayAsset> {
    let bytes = tokio::fs::read(path).await?;
    Ok(OverlayAsset::new(kind, bytes))
}

/// Page count and page 1 size
pub fn document_info(bytes: &[u8]) -> Result<DocumentInfo> {
    let doc = Document::load_mem(bytes).map_err(StampError::DocumentParse)?;
    let page_id = first_page_id(&doc)?;

    Ok(DocumentInfo {
        page_count: doc.get_pages().len(),
        first_page: page_size(&doc, page_id)?,
    })
}

/// Size of page 1 in points
pub fn first_page_size(bytes: &[u8]) -> Result<PageSize> {
    document_info(bytes).map(|info| info.first_page)
}
