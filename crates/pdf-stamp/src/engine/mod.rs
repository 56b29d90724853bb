//! PDF mutation engine - baking overlays into page 1
//!
//! This module orchestrates the stamping process:
//! 1. Validate the request (anchor present, scale usable)
//! 2. Load the document and read page 1's height
//! 3. Decode every requested PNG before touching the document
//! 4. Embed the stamp, then the signature, as image XObjects
//! 5. Save to a fresh buffer
//!
//! Any failure aborts the whole call; no partial document is produced.

mod io;
mod page;
mod transform;
mod xobject;

pub use io::{DocumentInfo, document_info, first_page_size, load_asset, read_document, write_document};
pub use page::{first_page_id, page_size};
pub use transform::{overlay_rect, to_display_space, to_pdf_space};

use crate::options::OverlayOptions;
use crate::types::*;
use lopdf::{Document, Object};
use page::{append_page_content, draw_image_command, local_resources, next_resource_name};
use xobject::{add_image_xobject, decode_png};

/// Stamp a document on the blocking pool
pub async fn stamp_pdf(
    original: impl Into<Vec<u8>>,
    request: StampRequest,
    options: OverlayOptions,
) -> Result<Vec<u8>> {
    let original = original.into();

    tokio::task::spawn_blocking(move || stamp_pdf_bytes(&original, &request, &options)).await?
}

/// Embed the requested overlays into page 1 and return the new document bytes.
///
/// The transform uses the scale captured with the anchor. Calling this again
/// on its own output adds a second set of overlays on top of the first.
pub fn stamp_pdf_bytes(
    original: &[u8],
    request: &StampRequest,
    options: &OverlayOptions,
) -> Result<Vec<u8>> {
    options.validate()?;

    // Without overlays the anchor is never used, so it is not checked
    let anchor = if request.has_overlays() {
        let click = request.anchor.ok_or(StampError::MissingAnchor)?;
        Some(validate_anchor(click)?)
    } else {
        None
    };

    let mut doc = Document::load_mem(original).map_err(StampError::DocumentParse)?;
    let page_id = first_page_id(&doc)?;
    let page = page_size(&doc, page_id)?;

    let overlays = request
        .assets()
        .map(|(kind, bytes)| Ok((kind, decode_png(kind, bytes)?)))
        .collect::<Result<Vec<_>>>()?;

    if let Some(click) = anchor {
        let center = to_pdf_space(click.anchor, click.scale, page.height_pt);
        let placements = overlays
            .iter()
            .map(|(kind, image)| {
                let rect = overlay_rect(*kind, center, image.width, image.height, options);
                Ok((*kind, image, checked_rect(*kind, rect)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut resources = local_resources(&doc, page_id)?;
        let mut xobjects = resources
            .get(b"XObject")
            .and_then(Object::as_dict)
            .cloned()
            .unwrap_or_default();
        let mut ops = String::new();

        for (kind, image, rect) in placements {
            let image_id = add_image_xobject(&mut doc, image)?;
            let name = next_resource_name(&xobjects, kind.resource_prefix());
            ops.push_str(&draw_image_command(&name, &rect));
            xobjects.set(name.into_bytes(), Object::Reference(image_id));
        }

        resources.set("XObject", Object::Dictionary(xobjects));
        append_page_content(&mut doc, page_id, resources, &ops)?;
    }

    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

fn validate_anchor(click: ClickAnchor) -> Result<ClickAnchor> {
    if !(click.scale.is_finite() && click.scale > 0.0) {
        return Err(StampError::Config(format!(
            "Anchor scale must be positive, got {}",
            click.scale
        )));
    }
    if !(click.anchor.x.is_finite() && click.anchor.y.is_finite()) {
        return Err(StampError::Config(format!(
            "Anchor coordinates must be finite, got ({}, {})",
            click.anchor.x, click.anchor.y
        )));
    }
    Ok(click)
}

/// Content streams cannot hold `inf` or `NaN`, so an overflowing placement is rejected
fn checked_rect(kind: OverlayKind, rect: PdfRect) -> Result<PdfRect> {
    let PdfRect {
        x,
        y,
        width,
        height,
    } = rect;
    if [x, y, width, height].iter().all(|v| v.is_finite()) {
        Ok(rect)
    } else {
        Err(StampError::Config(format!(
            "{} placement is out of range: {} x {} at ({}, {})",
            kind.label(),
            width,
            height,
            x,
            y
        )))
    }
}
