// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The CZML document: an ordered list of packets.

use crate::Packet;

/// An ordered sequence of packets.
///
/// Order is significant and preserved. Ids are not required to be unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    /// The packets, in document order.
    pub packets: Vec<Packet>,
}

impl Document {
    /// Empty document.
    pub const fn new() -> Self {
        Self {
            packets: Vec::new(),
        }
    }

    /// Document starting with a `{"id": "document", "version": ..}` header.
    pub fn with_header(version: impl Into<String>) -> Self {
        Self {
            packets: vec![Packet::document_header(version)],
        }
    }

    /// Append a packet.
    pub fn push(&mut self, packet: Packet) {
        self.packets.push(packet);
    }

    /// The header packet, if the document starts with one.
    pub fn header(&self) -> Option<&Packet> {
        self.packets.first().filter(|p| p.is_document_header())
    }

    /// Iterate over the packets carrying `id`.
    pub fn packets_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Packet> + 'a {
        self.packets
            .iter()
            .filter(move |p| p.id.as_deref() == Some(id))
    }

    /// Number of packets.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// True when there are no packets.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Iterate over the packets in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Packet> {
        self.packets.iter()
    }
}

impl From<Vec<Packet>> for Document {
    fn from(packets: Vec<Packet>) -> Self {
        Self { packets }
    }
}

impl FromIterator<Packet> for Document {
    fn from_iter<I: IntoIterator<Item = Packet>>(iter: I) -> Self {
        Self {
            packets: iter.into_iter().collect(),
        }
    }
}

impl Extend<Packet> for Document {
    fn extend<I: IntoIterator<Item = Packet>>(&mut self, iter: I) {
        self.packets.extend(iter);
    }
}

impl IntoIterator for Document {
    type Item = Packet;
    type IntoIter = std::vec::IntoIter<Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Packet;
    type IntoIter = core::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_when_first() {
        let mut doc = Document::with_header("1.0");
        doc.push(Packet::new("a"));
        assert_eq!(doc.header().and_then(|p| p.version.as_deref()), Some("1.0"));

        let doc: Document = vec![Packet::new("a"), Packet::document_header("1.0")].into();
        assert!(doc.header().is_none());
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let doc: Document = ["x", "y", "x"].into_iter().map(Packet::new).collect();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.packets_with_id("x").count(), 2);
    }
}
