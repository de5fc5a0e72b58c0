// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Whole-document behavior: ordering, file I/O, reload and unknown keys.

#![allow(missing_docs)]
use czml_codec::{CodecOptions, CzmlJson, DocumentExt, UnknownFields};
use czml_types::{Billboard, Color, Document, Number, Packet};
use serde_json::json;

fn billboard_document() -> Document {
    let mut doc = Document::with_header("1.0");
    let mut packet = Packet::new("billboard");
    packet.billboard = Some(Billboard {
        scale: Some(Number::new(0.7).unwrap()),
        show: Some(true),
        image: Some("http://localhost/img.png".to_owned()),
        color: Some(Color::rgba(0, 255, 127, 55).unwrap()),
        ..Billboard::default()
    });
    doc.push(packet);
    doc
}

#[test]
fn billboard_document_end_to_end() {
    let data = billboard_document().data();
    let packets = data.as_array().unwrap();
    assert_eq!(packets.len(), 2);
    assert_eq!(packets[0], json!({"id": "document", "version": "1.0"}));
    assert_eq!(
        packets[1],
        json!({
            "id": "billboard",
            "billboard": {
                "scale": 0.7,
                "show": true,
                "image": "http://localhost/img.png",
                "color": {"rgba": [0, 255, 127, 55]},
            },
        })
    );
    assert!(billboard_document().dumps().contains(r#""rgba":[0,255,127,55]"#));
}

#[test]
fn packet_order_is_preserved() {
    let text = r#"[{"id":"document","version":"1.0"},{"id":"c"},{"id":"a"},{"id":"b"},{"id":"a"}]"#;
    let doc = Document::loads(text).unwrap();
    let ids: Vec<_> = doc.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, ["document", "c", "a", "b", "a"]);
    assert_eq!(doc.data(), serde_json::from_str::<serde_json::Value>(text).unwrap());
    assert_eq!(doc.header().and_then(|p| p.version.as_deref()), Some("1.0"));
}

#[test]
fn top_level_must_be_an_array() {
    let err = Document::loads(r#"{"not":"an array"}"#).unwrap_err();
    assert!(err.is_parse_error());
    assert!(!err.is_validation_error());
}

#[test]
fn empty_document() {
    let doc = Document::loads("[]").unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.dumps(), "[]");
}

#[test]
fn write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.czml");
    let doc = billboard_document();

    doc.write(&path).unwrap();
    let compact = std::fs::read_to_string(&path).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(Document::read(&path).unwrap(), doc);

    doc.write_with(&path, &CodecOptions::default().pretty()).unwrap();
    let pretty = std::fs::read_to_string(&path).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(Document::read(&path).unwrap(), doc);
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::read(dir.path().join("absent.czml")).unwrap_err();
    assert!(matches!(err, czml_codec::CodecError::Io(_)));
    assert_eq!(err.path(), None);
}

#[test]
fn read_failure_midway_is_io_error() {
    // Opening a directory succeeds; reading from it fails.
    let dir = tempfile::tempdir().unwrap();
    let err = Document::read(dir.path()).unwrap_err();
    assert!(matches!(err, czml_codec::CodecError::Io(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn written_floats_read_back_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floats.czml");
    let mut packet = Packet::new("p");
    packet.billboard = Some(Billboard {
        scale: Some(Number::new(-537190573247.48315).unwrap()),
        ..Billboard::default()
    });
    let doc: Document = vec![packet].into();
    doc.write(&path).unwrap();
    assert_eq!(Document::read(&path).unwrap(), doc);
}

#[test]
fn reload_is_atomic() {
    let mut doc = billboard_document();
    let before = doc.clone();

    let bad = r#"[{"id":"x"},{"id":"y","point":{"color":{"rgba":[0,0,0,999]}}}]"#;
    assert!(doc.reload(bad).is_err());
    assert_eq!(doc, before);

    doc.reload(r#"[{"id":"x"}]"#).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.packets[0].id.as_deref(), Some("x"));
}

#[test]
fn unknown_keys_follow_policy() {
    let text = r#"[{"id":"a","futureProperty":{"k":1},"point":{"pixelSize":3}}]"#;
    let nested = r#"[{"id":"a","point":{"pixelSize":3,"futureKey":true}}]"#;

    let err = Document::loads(text).unwrap_err();
    assert_eq!(err.path(), Some("$[0]"));
    assert!(Document::loads(nested).is_err());

    let ignore = CodecOptions {
        unknown_fields: UnknownFields::Ignore,
        ..CodecOptions::default()
    };
    let doc = Document::loads_with(text, &ignore).unwrap();
    assert!(doc.packets[0].extensions.is_empty());
    assert!(Document::loads_with(nested, &ignore).is_ok());

    let permissive = CodecOptions::permissive();
    let doc = Document::loads_with(text, &permissive).unwrap();
    assert_eq!(
        doc.data(),
        json!([{"id": "a", "point": {"pixelSize": 3}, "futureProperty": {"k": 1}}])
    );
    let doc = Document::loads_with(nested, &permissive).unwrap();
    assert_eq!(doc.data(), json!([{"id": "a", "point": {"pixelSize": 3}}]));
}

#[test]
fn reload_with_options() {
    let mut doc = Document::new();
    doc.reload_with(r#"[{"id":"a","extra":1}]"#, &CodecOptions::permissive())
        .unwrap();
    assert_eq!(doc.packets[0].extensions.get("extra"), Some(&json!(1)));
}
