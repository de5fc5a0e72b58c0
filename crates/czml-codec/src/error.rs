// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Codec error type.

use czml_types::ValidationError;
use thiserror::Error;

/// Error raised while loading or writing CZML.
///
/// Paths use `$` for the decoded root, e.g. `$[1].billboard.color.rgba`.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document did not have the shape of a CZML stream.
    #[error("{path}: expected {expected}")]
    Shape {
        /// Location of the offending value.
        path: String,
        /// What the location should have held.
        expected: &'static str,
    },
    /// A field held a JSON value of the wrong type.
    #[error("{path}: expected {expected}")]
    WrongType {
        /// Location of the offending value.
        path: String,
        /// The JSON type the field requires.
        expected: &'static str,
    },
    /// A required key was absent.
    #[error("{path}: missing {expected}")]
    MissingField {
        /// Location of the incomplete object.
        path: String,
        /// Description of the missing key(s).
        expected: &'static str,
    },
    /// A value failed a range or layout constraint.
    #[error("{path}: {source}")]
    Validation {
        /// Location of the offending value.
        path: String,
        /// The violated constraint.
        #[source]
        source: ValidationError,
    },
    /// A key not known to this crate was found while rejecting unknown keys.
    #[error("{path}: unknown field {field:?}")]
    UnknownField {
        /// Location of the object containing the key.
        path: String,
        /// The unknown key.
        field: String,
    },
    /// Reading or writing a document file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// True for malformed JSON and for a document of the wrong shape.
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Shape { .. })
    }

    /// True for wrong-typed, missing or out-of-range field values.
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::WrongType { .. } | Self::MissingField { .. } | Self::Validation { .. }
        )
    }

    /// The location of the error inside the decoded value, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Shape { path, .. }
            | Self::WrongType { path, .. }
            | Self::MissingField { path, .. }
            | Self::Validation { path, .. }
            | Self::UnknownField { path, .. } => Some(path),
            Self::Json(_) | Self::Io(_) => None,
        }
    }
}
