//! Image XObject creation for overlays
//!
//! Overlay PNGs are decoded to 8-bit RGB plus an optional soft mask and
//! stored as Flate-compressed image XObjects.

use crate::types::*;
use image::ImageFormat;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// A decoded overlay, ready to be embedded
#[derive(Debug, Clone)]
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    /// Alpha channel, only kept when at least one pixel is not fully opaque
    pub alpha: Option<Vec<u8>>,
}

/// Decode PNG bytes, rejecting anything that is not a PNG.
pub(crate) fn decode_png(kind: OverlayKind, bytes: &[u8]) -> Result<DecodedImage> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|source| StampError::ImageDecode { kind, source })?;

    let width = decoded.width();
    let height = decoded.height();
    let rgba = decoded.to_rgba8();

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    let mut alpha = Vec::with_capacity((width * height) as usize);
    let mut has_alpha = false;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a != u8::MAX {
            has_alpha = true;
        }
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    Ok(DecodedImage {
        width,
        height,
        rgb,
        alpha: has_alpha.then_some(alpha),
    })
}

/// Add an image XObject (and its soft mask) to the document.
pub(crate) fn add_image_xobject(doc: &mut Document, image: &DecodedImage) -> Result<ObjectId> {
    let smask_id = match &image.alpha {
        Some(alpha) => Some(add_image_stream(
            doc,
            image.width,
            image.height,
            "DeviceGray",
            alpha.clone(),
            None,
        )?),
        None => None,
    };

    add_image_stream(
        doc,
        image.width,
        image.height,
        "DeviceRGB",
        image.rgb.clone(),
        smask_id,
    )
}

fn add_image_stream(
    doc: &mut Document,
    width: u32,
    height: u32,
    color_space: &str,
    data: Vec<u8>,
    smask_id: Option<ObjectId>,
) -> Result<ObjectId> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    if let Some(smask_id) = smask_id {
        dict.set("SMask", Object::Reference(smask_id));
    }

    let mut stream = Stream::new(dict, data);
    stream.compress()?;

    Ok(doc.add_object(stream))
}
