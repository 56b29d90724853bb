mod common;

use common::*;
use pdf_stamp::*;

fn click(x: f32, y: f32, scale: f32) -> Option<ClickAnchor> {
    Some(ClickAnchor {
        anchor: Anchor::new(x, y),
        scale,
    })
}

#[test]
fn test_off_page_anchor_is_not_clamped() {
    assert_eq!(
        to_pdf_space(Anchor::new(300.0, 400.0), 0.5, 792.0),
        (600.0, -8.0)
    );

    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(300.0, 400.0, 0.5),
        stamp: Some(create_png(10, 10)),
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    // Center (600, -8), 200pt square
    assert_eq!(
        last_content_stream(&doc, page1),
        "\nQ\nq 200 0 0 200 500 -108 cm /Stamp1 Do Q\n"
    );
}

#[test]
fn test_no_overlays_leaves_page_one_unchanged() {
    let input = letter_pdf(3);
    let output =
        stamp_pdf_bytes(&input, &StampRequest::default(), &OverlayOptions::default()).unwrap();

    let before = load(&input);
    let after = load(&output);
    assert_eq!(page_ids(&before), page_ids(&after));
    for page_id in page_ids(&before) {
        assert_eq!(
            page_fingerprint(&before, page_id),
            page_fingerprint(&after, page_id)
        );
    }
}

#[test]
fn test_stamp_keeps_aspect_ratio() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(300.0, 400.0, 0.5),
        stamp: Some(create_png(400, 200)),
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    assert_eq!(
        last_content_stream(&doc, page1),
        "\nQ\nq 200 0 0 100 500 -58 cm /Stamp1 Do Q\n"
    );
}

#[test]
fn test_overlay_without_anchor_fails() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: None,
        stamp: Some(create_png(10, 10)),
        signature: None,
    };
    let result = stamp_pdf_bytes(&input, &request, &OverlayOptions::default());
    assert!(matches!(result, Err(StampError::MissingAnchor)));
}

#[test]
fn test_signature_is_offset_from_stamp() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(100.0, 100.0, 0.5),
        stamp: Some(create_png(20, 20)),
        signature: Some(create_png(50, 50)),
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    // Anchor maps to (200, 592); signature center is 100pt to the right
    assert_eq!(
        last_content_stream(&doc, page1),
        "\nQ\nq 200 0 0 200 100 492 cm /Stamp1 Do Q\nq 100 0 0 100 250 542 cm /Sig1 Do Q\n"
    );
    assert_eq!(xobject_names(&doc, page1), vec!["Stamp1", "Sig1"]);
}

#[test]
fn test_signature_only() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(0.0, 0.0, 1.0),
        stamp: None,
        signature: Some(create_png(100, 50)),
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    // Center (100, 792), 100 x 50
    assert_eq!(
        last_content_stream(&doc, page1),
        "\nQ\nq 100 0 0 50 50 767 cm /Sig1 Do Q\n"
    );
}

#[test]
fn test_other_pages_are_untouched() {
    let input = letter_pdf(4);
    let request = StampRequest {
        anchor: click(120.0, 80.0, 0.75),
        stamp: Some(create_png(30, 30)),
        signature: Some(create_png(30, 60)),
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let before = load(&input);
    let after = load(&output);
    let ids = page_ids(&before);
    assert_eq!(ids, page_ids(&after));

    assert_ne!(
        page_fingerprint(&before, ids[0]),
        page_fingerprint(&after, ids[0])
    );
    for &page_id in &ids[1..] {
        assert_eq!(
            page_fingerprint(&before, page_id),
            page_fingerprint(&after, page_id)
        );
    }
}

#[test]
fn test_shared_resources_are_copied_not_modified() {
    let input = letter_pdf(2);
    let request = StampRequest {
        anchor: click(50.0, 50.0, 1.0),
        stamp: Some(create_png(8, 8)),
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let before = load(&input);
    let after = load(&output);
    let ids = page_ids(&after);

    let shared = before
        .get_dictionary(ids[1])
        .unwrap()
        .get(b"Resources")
        .unwrap()
        .as_reference()
        .unwrap();
    assert_eq!(
        format!("{:?}", before.get_dictionary(shared).unwrap()),
        format!("{:?}", after.get_dictionary(shared).unwrap())
    );

    // Page 1 now carries its own resources, fonts included
    let page1 = after.get_dictionary(ids[0]).unwrap();
    let resources = page1.get(b"Resources").unwrap().as_dict().unwrap();
    assert!(resources.has(b"Font"));
    assert!(resources.has(b"XObject"));
}

#[test]
fn test_page_one_content_is_preserved_inside_save_restore() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(50.0, 50.0, 1.0),
        stamp: Some(create_png(8, 8)),
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    let content = String::from_utf8(doc.get_page_content(page1).unwrap()).unwrap();
    let original = content.find("(Page 1) Tj").unwrap();
    assert!(content.starts_with("q\n"));
    assert!(content[original..].contains("\nQ\nq 200 0 0 200"));
}

#[test]
fn test_generate_twice_is_additive() {
    let input = letter_pdf(2);
    let request = StampRequest {
        anchor: click(200.0, 200.0, 0.5),
        stamp: Some(create_png(16, 16)),
        signature: Some(create_png(16, 16)),
    };
    let options = OverlayOptions::default();

    let once = stamp_pdf_bytes(&input, &request, &options).unwrap();
    let twice = stamp_pdf_bytes(&once, &request, &options).unwrap();
    assert_ne!(once, twice);

    let doc = load(&twice);
    let page1 = page_ids(&doc)[0];
    assert_eq!(
        xobject_names(&doc, page1),
        vec!["Stamp1", "Sig1", "Stamp2", "Sig2"]
    );
}

#[test]
fn test_output_keeps_page_count() {
    let input = letter_pdf(5);
    let request = StampRequest {
        anchor: click(10.0, 10.0, 1.0),
        stamp: Some(create_png(4, 4)),
        signature: Some(create_png(4, 4)),
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();
    assert_eq!(document_info(&output).unwrap().page_count, 5);
}

#[test]
fn test_invalid_document_fails_to_parse() {
    let request = StampRequest::default();
    let result = stamp_pdf_bytes(b"definitely not a pdf", &request, &OverlayOptions::default());
    assert!(matches!(result, Err(StampError::DocumentParse(_))));
}

#[test]
fn test_document_without_pages() {
    let input = create_test_pdf(0, 612, 792);
    let request = StampRequest::default();
    let result = stamp_pdf_bytes(&input, &request, &OverlayOptions::default());
    assert!(matches!(result, Err(StampError::PageNotFound)));
}

#[test]
fn test_non_png_asset_fails_before_mutation() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(10.0, 10.0, 1.0),
        stamp: Some(create_png(4, 4)),
        signature: Some(b"\xff\xd8\xff\xe0 jpeg-ish".to_vec()),
    };
    let result = stamp_pdf_bytes(&input, &request, &OverlayOptions::default());
    assert!(matches!(
        result,
        Err(StampError::ImageDecode {
            kind: OverlayKind::Signature,
            ..
        })
    ));
}

#[test]
fn test_non_positive_scale_is_rejected() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(10.0, 10.0, 0.0),
        stamp: Some(create_png(4, 4)),
        signature: None,
    };
    let result = stamp_pdf_bytes(&input, &request, &OverlayOptions::default());
    assert!(matches!(result, Err(StampError::Config(_))));
}

#[test]
fn test_overflowing_placement_is_rejected() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(1.0e10, 10.0, 1.0e-30),
        stamp: Some(create_png(4, 4)),
        signature: None,
    };
    let result = stamp_pdf_bytes(&input, &request, &OverlayOptions::default());
    assert!(matches!(result, Err(StampError::Config(_))));
}

#[test]
fn test_unused_anchor_is_not_validated() {
    let input = letter_pdf(2);
    let request = StampRequest {
        anchor: click(10.0, 10.0, 0.0),
        stamp: None,
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();

    let before = load(&input);
    let after = load(&output);
    for page_id in page_ids(&before) {
        assert_eq!(
            page_fingerprint(&before, page_id),
            page_fingerprint(&after, page_id)
        );
    }
}

#[test]
fn test_custom_footprints() {
    let input = letter_pdf(1);
    let options = OverlayOptions {
        stamp_footprint_pt: 50.0,
        ..Default::default()
    };
    let request = StampRequest {
        anchor: click(100.0, 92.0, 1.0),
        stamp: Some(create_png(10, 10)),
        signature: None,
    };
    let output = stamp_pdf_bytes(&input, &request, &options).unwrap();

    let doc = load(&output);
    let page1 = page_ids(&doc)[0];
    // Center (100, 700)
    assert_eq!(
        last_content_stream(&doc, page1),
        "\nQ\nq 50 0 0 50 75 675 cm /Stamp1 Do Q\n"
    );
}

#[test]
fn test_document_info_reads_inherited_media_box() {
    let input = create_test_pdf(2, 1000, 1500);
    let info = document_info(&input).unwrap();
    assert_eq!(info.page_count, 2);
    assert_eq!(info.first_page, PageSize::new(1000.0, 1500.0));
    assert_eq!(first_page_size(&input).unwrap(), info.first_page);
}

#[tokio::test]
async fn test_stamp_pdf_async() {
    let input = letter_pdf(1);
    let request = StampRequest {
        anchor: click(300.0, 400.0, 0.5),
        stamp: Some(create_png(400, 200)),
        signature: None,
    };
    let expected = stamp_pdf_bytes(&input, &request, &OverlayOptions::default()).unwrap();
    let output = stamp_pdf(input, request, OverlayOptions::default())
        .await
        .unwrap();
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_read_and_write_document() {
    use tempfile::NamedTempFile;

    let input = letter_pdf(2);
    let temp = NamedTempFile::new().unwrap();
    write_document(temp.path(), &input).await.unwrap();

    let loaded = read_document(temp.path()).await.unwrap();
    assert_eq!(loaded, input);

    let asset = load_asset(OverlayKind::Stamp, temp.path()).await.unwrap();
    assert_eq!(asset.kind, OverlayKind::Stamp);
    assert_eq!(asset.bytes, input);
}
