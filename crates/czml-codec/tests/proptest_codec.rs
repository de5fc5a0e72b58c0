// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property tests: decoding never panics, constants survive a round trip.

#![allow(missing_docs)]
use czml_codec::{CodecOptions, CzmlJson};
use czml_types::{Color, Document, Number, Packet, Position};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn loads_never_panics(text in ".{0,256}") {
        let _ = Document::loads(&text);
        let _ = Packet::loads(&text);
        let _ = Document::loads_with(&text, &CodecOptions::permissive());
    }

    #[test]
    fn loads_never_panics_on_json_shaped_text(
        key in "[a-zA-Z]{1,12}",
        values in prop::collection::vec(any::<f64>(), 0..12),
    ) {
        let values: Vec<_> = values.into_iter().filter(|v| v.is_finite()).collect();
        let value = json!([{ "id": "p", key.clone(): values, "point": { key: values } }]);
        let _ = Document::load(&value);
        let _ = Document::load_with(&value, &CodecOptions::permissive());
    }

    #[test]
    fn constant_numbers_roundtrip(value in -1.0e12f64..1.0e12) {
        let number = Number::new(value).unwrap();
        prop_assert_eq!(Number::loads(&number.dumps()).unwrap(), number);
    }

    #[test]
    fn rgba_roundtrip(r in 0i64..=255, g in 0i64..=255, b in 0i64..=255, a in 0i64..=255) {
        let color = Color::rgba(r, g, b, a).unwrap();
        prop_assert_eq!(Color::load(&color.data()).unwrap(), color);
    }

    #[test]
    fn rgba_out_of_range_rejected(a in 256i64..10_000) {
        prop_assert!(Color::rgba(0, 0, 0, a).is_err());
        let value = json!({"rgba": [0, 0, 0, a]});
        prop_assert!(Color::load(&value).unwrap_err().is_validation_error());
    }

    #[test]
    fn cartographic_positions_roundtrip(
        lon in -180.0f64..=180.0,
        lat in -90.0f64..=90.0,
        height in -1.0e4f64..1.0e6,
    ) {
        let position = Position::cartographic_degrees(lon, lat, height).unwrap();
        prop_assert_eq!(Position::loads(&position.dumps()).unwrap(), position);
    }
}
