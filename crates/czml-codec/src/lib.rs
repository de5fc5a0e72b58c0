// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON codec for czml-types.
//!
//! This crate provides:
//! - the [`CzmlJson`] trait: `data()` renders the CZML wire shape, `load`
//!   and `loads` decode and validate it
//! - [`DocumentExt`] for file I/O and atomic reload of whole documents
//! - [`PacketBuilder`] for building packets from typed values or raw JSON
//!
//! # Design
//!
//! Serialization is kept out of the model crate so czml-types stays free
//! of JSON concerns. Decoding reports the failing location as a path such
//! as `$[1].billboard.color.rgba`.
//!
//! ```
//! use czml_codec::{CzmlJson, DocumentExt};
//! use czml_types::{Billboard, Color, Document, Number, Packet};
//!
//! let mut doc = Document::with_header("1.0");
//! let mut packet = Packet::new("billboard");
//! packet.billboard = Some(Billboard {
//!     scale: Some(Number::new(0.7).unwrap()),
//!     color: Some(Color::rgba(0, 255, 127, 55).unwrap()),
//!     ..Billboard::default()
//! });
//! doc.push(packet);
//!
//! let text = doc.dumps();
//! assert_eq!(Document::loads(&text).unwrap(), doc);
//! assert_eq!(doc.dump().as_array().map(Vec::len), Some(2));
//! ```

mod document;
mod error;
mod graphics;
mod json;
mod options;
mod packet;
mod values;

pub use document::DocumentExt;
pub use error::CodecError;
pub use json::{Context, CzmlJson};
pub use options::{CodecOptions, UnknownFields};
pub use packet::{IntoProperty, PacketBuilder};

pub use czml_types;
