#![allow(dead_code)]

use image::{ImageBuffer, ImageFormat, Rgba};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Cursor;

/// Build a test PDF whose pages share one indirect Resources dictionary and
/// inherit their MediaBox from the page tree root.
pub fn create_test_pdf(num_pages: usize, width: i64, height: i64) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "F1",
            Object::Reference(font_id),
        )])),
    )]));

    let mut kids = Vec::new();
    for i in 0..num_pages {
        let text = format!("BT /F1 24 Tf 100 700 Td (Page {}) Tj ET", i + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), text.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(height),
            ]),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

/// US Letter test document
pub fn letter_pdf(num_pages: usize) -> Vec<u8> {
    create_test_pdf(num_pages, 612, 792)
}

/// Solid-color PNG of the given size
pub fn create_png(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([20u8, 40, 160, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn load(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).unwrap()
}

pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// The page dictionary and its decoded content, for comparing pages across documents
pub fn page_fingerprint(doc: &Document, page_id: ObjectId) -> (String, Vec<u8>) {
    let dict = doc.get_dictionary(page_id).unwrap();
    (format!("{:?}", dict), doc.get_page_content(page_id).unwrap())
}

/// Content of the last stream in a page's Contents array
pub fn last_content_stream(doc: &Document, page_id: ObjectId) -> String {
    let dict = doc.get_dictionary(page_id).unwrap();
    let contents = dict.get(b"Contents").unwrap().as_array().unwrap();
    let last = contents.last().unwrap().as_reference().unwrap();
    let stream = doc.get_object(last).unwrap().as_stream().unwrap();
    String::from_utf8(stream.content.clone()).unwrap()
}

/// Names in page 1's XObject resource dictionary
pub fn xobject_names(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let dict = doc.get_dictionary(page_id).unwrap();
    let resources = dict.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    xobjects
        .iter()
        .map(|(name, _)| String::from_utf8(name.clone()).unwrap())
        .collect()
}
