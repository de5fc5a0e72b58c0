// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Codec configuration.

use serde::{Deserialize, Serialize};

/// What to do with keys the model does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFields {
    /// Fail the load with [`CodecError::UnknownField`](crate::CodecError::UnknownField).
    #[default]
    Reject,
    /// Drop unknown keys.
    Ignore,
    /// Keep unknown packet-level keys in
    /// [`Packet::extensions`](czml_types::Packet::extensions) and re-emit
    /// them on dump. Unknown keys inside property objects are dropped.
    Preserve,
}

/// Options controlling how documents are decoded and written.
///
/// Serializable so tools can persist it alongside their other settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Policy for unknown keys.
    pub unknown_fields: UnknownFields,
    /// Indent written files.
    pub pretty: bool,
}

impl CodecOptions {
    /// Reject anything the model does not know. Same as `default()`.
    pub const fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Reject,
            pretty: false,
        }
    }

    /// Pass unknown packet-level keys through, for CZML written against a
    /// newer schema.
    pub const fn permissive() -> Self {
        Self {
            unknown_fields: UnknownFields::Preserve,
            pretty: false,
        }
    }

    /// Same options, with pretty-printed output.
    #[must_use]
    pub const fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(CodecOptions::default(), CodecOptions::strict());
    }

    #[test]
    fn test_options_from_partial_config() {
        let options: CodecOptions =
            serde_json::from_str(r#"{"unknown_fields":"preserve"}"#).unwrap();
        assert_eq!(options, CodecOptions::permissive());

        let options: CodecOptions = serde_json::from_str(r#"{"pretty":true}"#).unwrap();
        assert_eq!(options, CodecOptions::strict().pretty());
    }
}
