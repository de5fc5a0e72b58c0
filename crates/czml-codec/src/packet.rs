// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON mapping for packets, and a builder that accepts raw JSON records.

use czml_types::{
    Availability, Billboard, Cone, Ellipse, Ellipsoid, Label, Orientation, Packet, Path, Point,
    Polygon, Polyline, Position, Positions, Pyramid, ValidationError, Vector3,
};
use serde_json::Value;
use tracing::warn;

use crate::json::{Context, CzmlJson, Object};
use crate::{CodecError, CodecOptions};

impl CzmlJson for Packet {
    fn data(&self) -> Value {
        let mut out = Object::new();
        out.put("id", self.id.as_ref());
        out.put("name", self.name.as_ref());
        out.put("parent", self.parent.as_ref());
        out.put("description", self.description.as_ref());
        out.put("version", self.version.as_ref());
        out.put("availability", self.availability.as_ref());
        out.put("delete", self.delete.as_ref());
        out.put("position", self.position.as_ref());
        out.put("billboard", self.billboard.as_ref());
        out.put("label", self.label.as_ref());
        out.put("point", self.point.as_ref());
        out.put("path", self.path.as_ref());
        out.put("polyline", self.polyline.as_ref());
        out.put("polygon", self.polygon.as_ref());
        out.put("ellipse", self.ellipse.as_ref());
        out.put("ellipsoid", self.ellipsoid.as_ref());
        out.put("orientation", self.orientation.as_ref());
        out.put("viewFrom", self.view_from.as_ref());
        out.put("vertexPositions", self.vertex_positions.as_ref());
        out.put("cone", self.cone.as_ref());
        out.put("pyramid", self.pyramid.as_ref());
        for (key, value) in &self.extensions {
            if Self::is_modeled_key(key) {
                warn!(field = %key, "skipping extension that shadows a packet key");
                continue;
            }
            out.put_value(key, value.clone());
        }
        out.into_value()
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let mut fields = cx.object(value)?;
        let mut packet = Self {
            id: fields.take("id")?,
            name: fields.take("name")?,
            parent: fields.take("parent")?,
            description: fields.take("description")?,
            version: fields.take("version")?,
            availability: fields.take("availability")?,
            delete: fields.take("delete")?,
            position: fields.take("position")?,
            billboard: fields.take("billboard")?,
            label: fields.take("label")?,
            point: fields.take("point")?,
            path: fields.take("path")?,
            polyline: fields.take("polyline")?,
            polygon: fields.take("polygon")?,
            ellipse: fields.take("ellipse")?,
            ellipsoid: fields.take("ellipsoid")?,
            orientation: fields.take("orientation")?,
            view_from: fields.take("viewFrom")?,
            vertex_positions: fields.take("vertexPositions")?,
            cone: fields.take("cone")?,
            pyramid: fields.take("pyramid")?,
            ..Self::default()
        };
        packet.extensions = fields.finish_packet()?;
        Ok(packet)
    }
}

/// A value that can fill a packet slot of type `T`.
///
/// Implemented for `T` itself and for `serde_json::Value`, which is decoded
/// as `T` on the spot.
pub trait IntoProperty<T> {
    /// Convert, reporting errors at the location described by `cx`.
    fn into_property(self, cx: &Context<'_>) -> Result<T, CodecError>;
}

impl<T: CzmlJson> IntoProperty<T> for Value {
    fn into_property(self, cx: &Context<'_>) -> Result<T, CodecError> {
        T::decode(&self, cx)
    }
}

impl IntoProperty<String> for &str {
    fn into_property(self, _cx: &Context<'_>) -> Result<String, CodecError> {
        Ok(self.to_owned())
    }
}

macro_rules! typed_property {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoProperty<$ty> for $ty {
                fn into_property(self, _cx: &Context<'_>) -> Result<$ty, CodecError> {
                    Ok(self)
                }
            }
        )+
    };
}

typed_property!(
    String,
    bool,
    Availability,
    Position,
    Billboard,
    Label,
    Point,
    Path,
    Polyline,
    Polygon,
    Ellipse,
    Ellipsoid,
    Orientation,
    Vector3,
    Positions,
    Cone,
    Pyramid,
);

macro_rules! setters {
    ($($method:ident: $ty:ty => $field:ident, $key:literal;)+) => {
        $(
            #[doc = concat!("Set `", $key, "` from a typed value or a raw JSON record.")]
            #[must_use]
            pub fn $method(self, value: impl IntoProperty<$ty>) -> Self {
                self.set($key, value, |packet, value| packet.$field = Some(value))
            }
        )+
    };
}

/// Incremental packet construction.
///
/// Raw JSON records are decoded and validated as soon as they are set.
/// The first failure is kept and returned by [`build`](Self::build); later
/// setters are skipped.
///
/// `PacketBuilder::default()` starts a packet without an id.
///
/// ```
/// use czml_codec::PacketBuilder;
/// use serde_json::json;
///
/// let packet = PacketBuilder::new("billboard")
///     .billboard(json!({"scale": 0.7, "show": true}))
///     .build()
///     .unwrap();
/// assert!(packet.billboard.is_some());
/// ```
#[derive(Debug, Default)]
pub struct PacketBuilder {
    packet: Packet,
    options: CodecOptions,
    error: Option<CodecError>,
}

impl PacketBuilder {
    /// Builder for a packet with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            packet: Packet::new(id),
            options: CodecOptions::default(),
            error: None,
        }
    }

    /// Options used to decode raw records set after this call.
    #[must_use]
    pub const fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    setters! {
        name: String => name, "name";
        parent: String => parent, "parent";
        description: String => description, "description";
        version: String => version, "version";
        availability: Availability => availability, "availability";
        delete: bool => delete, "delete";
        position: Position => position, "position";
        billboard: Billboard => billboard, "billboard";
        label: Label => label, "label";
        point: Point => point, "point";
        path: Path => path, "path";
        polyline: Polyline => polyline, "polyline";
        polygon: Polygon => polygon, "polygon";
        ellipse: Ellipse => ellipse, "ellipse";
        ellipsoid: Ellipsoid => ellipsoid, "ellipsoid";
        orientation: Orientation => orientation, "orientation";
        view_from: Vector3 => view_from, "viewFrom";
        vertex_positions: Positions => vertex_positions, "vertexPositions";
        cone: Cone => cone, "cone";
        pyramid: Pyramid => pyramid, "pyramid";
    }

    /// Carry an extra packet-level key through to the output verbatim.
    ///
    /// Keys of modeled packet fields are rejected.
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if self.error.is_none() {
            if Packet::is_modeled_key(&key) {
                let cx = Context::root(&self.options).field(&key);
                self.error = Some(cx.invalid(ValidationError::ReservedKey(key)));
            } else {
                self.packet.extensions.insert(key, value);
            }
        }
        self
    }

    fn set<T>(
        mut self,
        key: &'static str,
        value: impl IntoProperty<T>,
        assign: impl FnOnce(&mut Packet, T),
    ) -> Self {
        if self.error.is_none() {
            let cx = Context::root(&self.options).field(key);
            match value.into_property(&cx) {
                Ok(value) => assign(&mut self.packet, value),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// The packet, or the first error raised by a setter.
    pub fn build(self) -> Result<Packet, CodecError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.packet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnknownFields;
    use czml_types::Number;
    use serde_json::json;

    #[test]
    fn test_packet_key_order() {
        let mut packet = Packet::new("a");
        packet.delete = Some(true);
        packet.name = Some("A".to_owned());
        packet.point = Some(Point::default());
        let keys: Vec<String> = match packet.data() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        };
        assert_eq!(keys, ["id", "name", "delete", "point"]);
    }

    #[test]
    fn test_unknown_packet_key_policies() {
        let value = json!({"id": "a", "agi_extra": {"x": 1}});
        assert!(matches!(
            Packet::load(&value).unwrap_err(),
            CodecError::UnknownField { ref path, ref field } if path == "$" && field == "agi_extra"
        ));

        let ignore = CodecOptions {
            unknown_fields: UnknownFields::Ignore,
            pretty: false,
        };
        let packet = Packet::load_with(&value, &ignore).unwrap();
        assert!(packet.extensions.is_empty());

        let packet = Packet::load_with(&value, &CodecOptions::permissive()).unwrap();
        assert_eq!(packet.extensions.get("agi_extra"), Some(&json!({"x": 1})));
        assert_eq!(packet.data(), value);
    }

    #[test]
    fn test_extensions_never_shadow_packet_keys() {
        let mut packet = Packet::new("a");
        packet.extensions.insert("id".to_owned(), json!("shadow"));
        packet
            .extensions
            .insert("billboard".to_owned(), json!({"scale": "huge"}));
        let data = packet.data();
        assert_eq!(data, json!({"id": "a"}));
        assert_eq!(Packet::load(&data).unwrap(), Packet::new("a"));
    }

    #[test]
    fn test_builder_rejects_reserved_extension() {
        let err = PacketBuilder::new("a")
            .extension("billboard", json!({"scale": "huge"}))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::Validation {
                source: ValidationError::ReservedKey(ref key),
                ..
            } if key == "billboard"
        ));
        assert_eq!(err.path(), Some("$.billboard"));

        let packet = PacketBuilder::new("a")
            .extension("agi_custom", json!(1))
            .build()
            .unwrap();
        assert_eq!(packet.data(), json!({"id": "a", "agi_custom": 1}));
    }

    #[test]
    fn test_builder_without_id() {
        let packet = PacketBuilder::default().name("anonymous").build().unwrap();
        assert_eq!(packet.id, None);
        assert_eq!(packet.data(), json!({"name": "anonymous"}));
    }

    #[test]
    fn test_builder_mixes_typed_and_raw() {
        let packet = PacketBuilder::new("b")
            .name("B")
            .billboard(Billboard {
                scale: Some(Number::new(2.0).unwrap()),
                ..Billboard::default()
            })
            .point(json!({"pixelSize": 10, "color": {"rgba": [255, 0, 0, 255]}}))
            .build()
            .unwrap();
        assert_eq!(packet.name.as_deref(), Some("B"));
        assert_eq!(
            packet.point.and_then(|p| p.pixel_size).and_then(|n| n.as_f64()),
            Some(10.0)
        );
    }

    #[test]
    fn test_builder_keeps_first_error() {
        let err = PacketBuilder::new("b")
            .point(json!({"color": {"rgba": [0, 0, 0, 256]}}))
            .label(json!({"show": "nope"}))
            .build()
            .unwrap_err();
        assert_eq!(err.path(), Some("$.point.color.rgba"));
    }
}
