// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Whole-document load, dump and file I/O.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use czml_types::{Document, Packet};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::json::{Context, CzmlJson};
use crate::{CodecError, CodecOptions};

impl CzmlJson for Document {
    fn data(&self) -> Value {
        let packets: Vec<Value> = self.iter().map(Packet::data).collect();
        debug!(packets = packets.len(), "dumped CZML document");
        Value::Array(packets)
    }

    fn decode(value: &Value, cx: &Context<'_>) -> Result<Self, CodecError> {
        let entries = value.as_array().ok_or_else(|| CodecError::Shape {
            path: cx.path().to_owned(),
            expected: "a JSON array of packets",
        })?;
        let packets = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let cx = cx.index(i);
                if !entry.is_object() {
                    return Err(CodecError::Shape {
                        path: cx.path().to_owned(),
                        expected: "a packet object",
                    });
                }
                let packet = Packet::decode(entry, &cx)?;
                if i > 0 && packet.version.is_some() {
                    warn!(path = cx.path(), "version is only meaningful on the first packet");
                }
                Ok(packet)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(packets = packets.len(), "loaded CZML document");
        Ok(Self::from(packets))
    }
}

/// Document-level operations on top of [`CzmlJson`].
pub trait DocumentExt: Sized {
    /// The JSON array of packets. Same as [`CzmlJson::data`].
    fn dump(&self) -> Value;

    /// Write to `path` with default options (compact).
    fn write(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        self.write_with(path, &CodecOptions::default())
    }

    /// Write to `path`, pretty-printed when `options.pretty` is set.
    fn write_with(&self, path: impl AsRef<Path>, options: &CodecOptions)
        -> Result<(), CodecError>;

    /// Read a document written by [`write`](Self::write), strictly.
    fn read(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        Self::read_with(path, &CodecOptions::default())
    }

    /// Read a document from `path`.
    fn read_with(path: impl AsRef<Path>, options: &CodecOptions) -> Result<Self, CodecError>;

    /// Replace the packets with those parsed from `text`, strictly.
    fn reload(&mut self, text: &str) -> Result<(), CodecError> {
        self.reload_with(text, &CodecOptions::default())
    }

    /// Replace the packets with those parsed from `text`.
    ///
    /// On error `self` is left unchanged.
    fn reload_with(&mut self, text: &str, options: &CodecOptions) -> Result<(), CodecError>;
}

impl DocumentExt for Document {
    fn dump(&self) -> Value {
        self.data()
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    fn write_with(
        &self,
        path: impl AsRef<Path>,
        options: &CodecOptions,
    ) -> Result<(), CodecError> {
        let data = self.data();
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        let written = if options.pretty {
            serde_json::to_writer_pretty(&mut writer, &data)
        } else {
            serde_json::to_writer(&mut writer, &data)
        };
        written.map_err(std::io::Error::from)?;
        writer.flush()?;
        info!(packets = self.len(), pretty = options.pretty, "wrote CZML document");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    fn read_with(path: impl AsRef<Path>, options: &CodecOptions) -> Result<Self, CodecError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let document = Self::loads_with(&text, options)?;
        info!(packets = document.len(), "read CZML document");
        Ok(document)
    }

    fn reload_with(&mut self, text: &str, options: &CodecOptions) -> Result<(), CodecError> {
        *self = Self::loads_with(text, options)?;
        Ok(())
    }
}
