//! The `CIDToGIDMap` of CID fonts.

use log::warn;
use pdfa_syntax::object::Object;
use pdfa_syntax::object::dict::Dict;
use pdfa_syntax::object::dict::keys::{CID_TO_GID_MAP, IDENTITY};
use pdfa_syntax::object::name::Name;
use pdfa_syntax::object::stream::Stream;
use skrifa::GlyphId;
use std::ops::Deref;

/// How a CID font declares the mapping from CIDs to glyph indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MappingMode {
    /// The `Identity` name.
    Identity,
    /// A stream with a custom mapping table.
    Custom,
    /// Missing, or anything else.
    Unknown,
}

impl MappingMode {
    /// The name of the mode as reported to the validation model, `None` for
    /// unknown modes.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Identity => Some("Identity"),
            Self::Custom => Some("Custom"),
            Self::Unknown => None,
        }
    }
}

/// Classify the value of a `CIDToGIDMap` entry.
pub fn classify(entry: Option<&Object>) -> MappingMode {
    match entry {
        Some(Object::Stream(_)) => MappingMode::Custom,
        Some(o) if o.is_name(IDENTITY) => MappingMode::Identity,
        _ => MappingMode::Unknown,
    }
}

/// The mapping from CIDs to glyph indices of a CID font.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CidToGidMap {
    /// CIDs are glyph indices.
    #[default]
    Identity,
    /// The glyph index of each CID, indexed by CID.
    Mapped(Vec<GlyphId>),
}

impl CidToGidMap {
    /// Read the `CIDToGIDMap` entry of a CID font dictionary.
    ///
    /// Returns `None` if the entry is neither `Identity` nor a readable stream.
    /// A missing entry means `Identity`.
    pub fn new(dict: &Dict) -> Option<Self> {
        if !dict.contains_key(CID_TO_GID_MAP) {
            return Some(Self::Identity);
        }

        if let Some(name) = dict.get::<Name>(CID_TO_GID_MAP) {
            if name.deref() == IDENTITY {
                Some(Self::Identity)
            } else {
                warn!("unknown CIDToGIDMap name {}", name.as_str());

                None
            }
        } else if let Some(stream) = dict.get::<Stream>(CID_TO_GID_MAP) {
            let decoded = stream
                .decoded()
                .inspect_err(|e| warn!("failed to decode CIDToGIDMap stream: {e}"))
                .ok()?;

            Some(Self::from_table(&decoded))
        } else {
            warn!("CIDToGIDMap is neither a name nor a stream");

            None
        }
    }

    /// Create a mapping from a table of big-endian 16-bit glyph indices.
    ///
    /// A trailing odd byte is ignored.
    pub fn from_table(data: &[u8]) -> Self {
        Self::Mapped(
            data.chunks_exact(2)
                .map(|gid| GlyphId::new(u16::from_be_bytes([gid[0], gid[1]]) as u32))
                .collect(),
        )
    }

    /// Map a CID to a glyph index.
    ///
    /// Returns `None` for CIDs not covered by a custom mapping.
    pub fn map(&self, cid: u32) -> Option<GlyphId> {
        match self {
            Self::Identity => Some(GlyphId::new(cid)),
            Self::Mapped(gids) => gids.get(cid as usize).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::mapping::{CidToGidMap, MappingMode, classify};
    use pdfa_syntax::object::Object;
    use pdfa_syntax::object::dict::Dict;
    use pdfa_syntax::object::dict::keys::{CID_TO_GID_MAP, FILTER};
    use pdfa_syntax::object::name::Name;
    use pdfa_syntax::object::stream::Stream;
    use skrifa::GlyphId;

    #[test]
    fn classify_entries() {
        let stream = Object::Stream(Stream::new(Dict::empty(), vec![]));

        assert_eq!(classify(Some(&stream)), MappingMode::Custom);
        assert_eq!(
            classify(Some(&Object::Name(Name::new(b"Identity")))),
            MappingMode::Identity
        );
        assert_eq!(
            classify(Some(&Object::Name(Name::new(b"Other")))),
            MappingMode::Unknown
        );
        assert_eq!(classify(Some(&Object::Integer(1))), MappingMode::Unknown);
        assert_eq!(classify(None), MappingMode::Unknown);
    }

    #[test]
    fn mode_names() {
        assert_eq!(MappingMode::Identity.as_str(), Some("Identity"));
        assert_eq!(MappingMode::Custom.as_str(), Some("Custom"));
        assert_eq!(MappingMode::Unknown.as_str(), None);
    }

    #[test]
    fn identity() {
        let dict = Dict::empty().with(CID_TO_GID_MAP, Name::new(b"Identity"));
        let map = CidToGidMap::new(&dict).unwrap();

        assert_eq!(map, CidToGidMap::Identity);
        assert_eq!(map.map(7), Some(GlyphId::new(7)));
        assert_eq!(CidToGidMap::new(&Dict::empty()), Some(CidToGidMap::Identity));
    }

    #[test]
    fn custom_table() {
        let stream = Stream::new(Dict::empty(), vec![0x00, 0x00, 0x00, 0x05, 0x01, 0x00, 0xff]);
        let dict = Dict::empty().with(CID_TO_GID_MAP, stream);
        let map = CidToGidMap::new(&dict).unwrap();

        assert_eq!(map.map(0), Some(GlyphId::NOTDEF));
        assert_eq!(map.map(1), Some(GlyphId::new(5)));
        assert_eq!(map.map(2), Some(GlyphId::new(256)));
        assert_eq!(map.map(3), None);
    }

    #[test]
    fn invalid_entries() {
        let name = Dict::empty().with(CID_TO_GID_MAP, Name::new(b"Custom"));
        let number = Dict::empty().with(CID_TO_GID_MAP, 3);
        let broken = Dict::empty().with(
            CID_TO_GID_MAP,
            Stream::new(Dict::empty().with(FILTER, Name::new(b"LZWDecode")), vec![]),
        );

        assert_eq!(CidToGidMap::new(&name), None);
        assert_eq!(CidToGidMap::new(&number), None);
        assert_eq!(CidToGidMap::new(&broken), None);
    }
}
