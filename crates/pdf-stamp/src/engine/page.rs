//! Page-level access and mutation
//!
//! Only page 1 is ever modified. Resources that page 1 inherits or shares
//! with other pages are copied into a page-local dictionary before anything
//! is added, so the other pages keep their objects untouched.

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, MAX_INHERIT_DEPTH};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// Page Lookup
// =============================================================================

/// Object ID of the first page
pub fn first_page_id(doc: &Document) -> Result<ObjectId> {
    doc.get_pages()
        .values()
        .next()
        .copied()
        .ok_or(StampError::PageNotFound)
}

/// Page size in points from the (possibly inherited) MediaBox
pub fn page_size(doc: &Document, page_id: ObjectId) -> Result<PageSize> {
    let (default_width, default_height) = DEFAULT_PAGE_DIMENSIONS;

    let media_box = inherited_attribute(doc, page_id, b"MediaBox")?
        .and_then(|obj| resolve(doc, &obj).as_array().ok().cloned());

    let size = match media_box.as_deref() {
        Some([llx, lly, urx, ury]) => {
            match (
                extract_number(llx),
                extract_number(lly),
                extract_number(urx),
                extract_number(ury),
            ) {
                (Some(llx), Some(lly), Some(urx), Some(ury)) => {
                    PageSize::new((urx - llx).abs(), (ury - lly).abs())
                }
                _ => PageSize::new(default_width, default_height),
            }
        }
        _ => PageSize::new(default_width, default_height),
    };

    Ok(size)
}

/// Look up a page attribute, walking up the page tree for inheritable keys
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
    let mut current = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERIT_DEPTH {
        if let Ok(value) = current.get(key) {
            return Ok(Some(value.clone()));
        }
        match current.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => current = doc.get_dictionary(parent_id)?,
            Err(_) => break,
        }
    }

    Ok(None)
}

/// Follow a reference, returning the object itself otherwise
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// =============================================================================
// Resources
// =============================================================================

/// A private copy of the page's resources, with its XObject map inlined.
pub(crate) fn local_resources(doc: &Document, page_id: ObjectId) -> Result<Dictionary> {
    let mut resources = inherited_attribute(doc, page_id, b"Resources")?
        .and_then(|obj| resolve(doc, &obj).as_dict().ok().cloned())
        .unwrap_or_default();

    let xobjects = resources
        .get(b"XObject")
        .ok()
        .and_then(|obj| resolve(doc, obj).as_dict().ok().cloned())
        .unwrap_or_default();
    resources.set("XObject", Object::Dictionary(xobjects));

    Ok(resources)
}

/// First unused XObject name of the form `{prefix}{n}`
pub(crate) fn next_resource_name(xobjects: &Dictionary, prefix: &str) -> String {
    (1..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|name| !xobjects.has(name.as_bytes()))
        .unwrap_or_else(|| prefix.to_string())
}

// =============================================================================
// Content
// =============================================================================

/// Content stream command that paints an image XObject into a rectangle.
pub(crate) fn draw_image_command(xobject_name: &str, rect: &PdfRect) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}

/// Append overlay drawing operations to a page.
///
/// The existing content is wrapped in `q ... Q` so whatever graphics state it
/// leaves behind does not affect the overlays.
pub(crate) fn append_page_content(
    doc: &mut Document,
    page_id: ObjectId,
    resources: Dictionary,
    overlay_ops: &str,
) -> Result<()> {
    let existing = existing_content_refs(doc, page_id)?;

    let save_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
    let overlay_id = doc.add_object(Stream::new(
        Dictionary::new(),
        format!("\nQ\n{}", overlay_ops).into_bytes(),
    ));

    let mut contents = Vec::with_capacity(existing.len() + 2);
    contents.push(Object::Reference(save_id));
    contents.extend(existing);
    contents.push(Object::Reference(overlay_id));

    let page = doc.get_dictionary_mut(page_id)?;
    page.set("Contents", Object::Array(contents));
    page.set("Resources", Object::Dictionary(resources));

    Ok(())
}

/// References to the page's current content streams, in order
fn existing_content_refs(doc: &Document, page_id: ObjectId) -> Result<Vec<Object>> {
    let page = doc.get_dictionary(page_id)?;

    let refs = match page.get(b"Contents") {
        Ok(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(arr)) => arr.clone(),
            _ => vec![Object::Reference(*id)],
        },
        Ok(Object::Array(arr)) => arr.clone(),
        _ => Vec::new(), // No content = blank page
    };

    Ok(refs)
}
