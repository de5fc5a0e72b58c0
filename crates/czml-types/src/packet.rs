// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Packets: one named bundle of optional properties.

use crate::{
    Billboard, Cone, Ellipse, Ellipsoid, Label, Orientation, Path, Point, Polygon, Polyline,
    Position, Positions, Pyramid, ValidationError, ViewFrom,
};

/// Packet-level keys this crate does not model, kept verbatim in order.
pub type Extensions = serde_json::Map<String, serde_json::Value>;

/// When data for an object is available: one or more `start/stop` intervals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    intervals: Vec<String>,
    single: bool,
}

impl Availability {
    /// A single interval, encoded as a bare string.
    pub fn interval(interval: impl Into<String>) -> Result<Self, ValidationError> {
        let interval = check_interval(interval.into())?;
        Ok(Self {
            intervals: vec![interval],
            single: true,
        })
    }

    /// A list of intervals, encoded as an array.
    pub fn intervals<I, S>(intervals: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let intervals = intervals
            .into_iter()
            .map(|i| check_interval(i.into()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            intervals,
            single: false,
        })
    }

    /// The intervals, in order.
    pub fn as_slice(&self) -> &[String] {
        &self.intervals
    }

    /// True when this was a single bare-string interval.
    pub const fn is_single(&self) -> bool {
        self.single
    }
}

fn check_interval(interval: String) -> Result<String, ValidationError> {
    match interval.split_once('/') {
        Some((start, stop))
            if !start.trim().is_empty() && !stop.trim().is_empty() && !stop.contains('/') =>
        {
            Ok(interval)
        }
        _ => Err(ValidationError::InvalidInterval(interval)),
    }
}

/// A CZML packet describing one object in the scene.
///
/// Several packets may share an `id`; each describes a different aspect of
/// the same object. The first packet of a document conventionally has id
/// `"document"` and carries the CZML `version`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packet {
    /// `id`: identifies the object described.
    pub id: Option<String>,
    /// `name`: human-readable name.
    pub name: Option<String>,
    /// `parent`: id of the parent object.
    pub parent: Option<String>,
    /// `description`: HTML description.
    pub description: Option<String>,
    /// `version`: CZML version, meaningful on the document packet only.
    pub version: Option<String>,
    /// `availability`
    pub availability: Option<Availability>,
    /// `delete`: remove the object from the client.
    pub delete: Option<bool>,
    /// `position`
    pub position: Option<Position>,
    /// `billboard`
    pub billboard: Option<Billboard>,
    /// `label`
    pub label: Option<Label>,
    /// `point`
    pub point: Option<Point>,
    /// `path`
    pub path: Option<Path>,
    /// `polyline`
    pub polyline: Option<Polyline>,
    /// `polygon`
    pub polygon: Option<Polygon>,
    /// `ellipse`
    pub ellipse: Option<Ellipse>,
    /// `ellipsoid`
    pub ellipsoid: Option<Ellipsoid>,
    /// `orientation`
    pub orientation: Option<Orientation>,
    /// `viewFrom`
    pub view_from: Option<ViewFrom>,
    /// `vertexPositions`
    pub vertex_positions: Option<Positions>,
    /// `cone`
    pub cone: Option<Cone>,
    /// `pyramid`
    pub pyramid: Option<Pyramid>,
    /// Unmodeled keys, filled only when decoding in preserve mode.
    pub extensions: Extensions,
}

impl Packet {
    /// Id of the document header packet.
    pub const DOCUMENT_ID: &'static str = "document";

    /// The CZML keys of the modeled packet fields, in output order.
    /// Extensions may not use these.
    pub const KEYS: [&'static str; 21] = [
        "id",
        "name",
        "parent",
        "description",
        "version",
        "availability",
        "delete",
        "position",
        "billboard",
        "label",
        "point",
        "path",
        "polyline",
        "polygon",
        "ellipse",
        "ellipsoid",
        "orientation",
        "viewFrom",
        "vertexPositions",
        "cone",
        "pyramid",
    ];

    /// True when `key` names a modeled packet field.
    pub fn is_modeled_key(key: &str) -> bool {
        Self::KEYS.contains(&key)
    }

    /// Empty packet with an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// The `{"id": "document", "version": ..}` header packet.
    pub fn document_header(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::new(Self::DOCUMENT_ID)
        }
    }

    /// True for the document header packet.
    pub fn is_document_header(&self) -> bool {
        self.id.as_deref() == Some(Self::DOCUMENT_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_intervals() {
        let single = Availability::interval("2012-08-04T16:00:00Z/2012-08-04T18:00:00Z").unwrap();
        assert!(single.is_single());
        assert_eq!(single.as_slice().len(), 1);

        let many = Availability::intervals(["a/b", "c/d"]).unwrap();
        assert!(!many.is_single());
        assert_eq!(many.as_slice(), &["a/b".to_owned(), "c/d".to_owned()]);
    }

    #[test]
    fn test_availability_rejects_open_intervals() {
        assert!(matches!(
            Availability::interval("2012-08-04T16:00:00Z"),
            Err(ValidationError::InvalidInterval(_))
        ));
        assert!(Availability::interval("/2012").is_err());
        assert!(Availability::intervals(["a/b", "c/"]).is_err());
        assert!(matches!(
            Availability::interval("a/b/c"),
            Err(ValidationError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_document_header() {
        let header = Packet::document_header("1.0");
        assert!(header.is_document_header());
        assert_eq!(header.version.as_deref(), Some("1.0"));
        assert!(!Packet::new("billboard").is_document_header());
    }

    #[test]
    fn test_modeled_keys() {
        assert!(Packet::is_modeled_key("billboard"));
        assert!(Packet::is_modeled_key("vertexPositions"));
        assert!(!Packet::is_modeled_key("agi_custom"));
    }
}
