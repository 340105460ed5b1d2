//! Decoding the data of PDF streams.

mod ascii_hex;
mod flate;

use crate::object::dict::Dict;
use crate::object::dict::keys::*;
use crate::{DecodeError, Result};
use log::warn;

/// Apply a single filter to some data.
pub fn apply_filter(data: &[u8], filter: Filter, params: Option<&Dict>) -> Result<Vec<u8>> {
    filter.apply(data, params)
}

/// A PDF filter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Filter {
    /// The `ASCIIHexDecode` filter.
    AsciiHexDecode,
    /// The `FlateDecode` filter.
    FlateDecode,
}

impl Filter {
    fn debug_name(&self) -> &'static str {
        match self {
            Self::AsciiHexDecode => "ascii_hex",
            Self::FlateDecode => "flate",
        }
    }

    /// Resolve a filter from its (possibly abbreviated) name.
    pub fn from_name(name: &[u8]) -> Result<Self> {
        match name {
            ASCII_HEX_DECODE | ASCII_HEX_DECODE_ABBREVIATION => Ok(Self::AsciiHexDecode),
            FLATE_DECODE | FLATE_DECODE_ABBREVIATION => Ok(Self::FlateDecode),
            _ => {
                let name = String::from_utf8_lossy(name).into_owned();
                warn!("unsupported filter {name}");

                Err(DecodeError::UnsupportedFilter(name))
            }
        }
    }

    /// Apply the filter to some data.
    pub fn apply(&self, data: &[u8], params: Option<&Dict>) -> Result<Vec<u8>> {
        let result = match self {
            Self::AsciiHexDecode => ascii_hex::decode(data),
            Self::FlateDecode => flate::decode(data, params)?,
        };

        result.ok_or_else(|| {
            warn!("failed to apply {} filter", self.debug_name());

            DecodeError::Corrupt(self.debug_name())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::DecodeError;
    use crate::filter::Filter;

    #[test]
    fn resolve_names() {
        assert_eq!(Filter::from_name(b"Fl"), Ok(Filter::FlateDecode));
        assert_eq!(Filter::from_name(b"FlateDecode"), Ok(Filter::FlateDecode));
        assert_eq!(Filter::from_name(b"AHx"), Ok(Filter::AsciiHexDecode));
        assert_eq!(
            Filter::from_name(b"LZWDecode"),
            Err(DecodeError::UnsupportedFilter("LZWDecode".to_string()))
        );
        assert_eq!(
            Filter::from_name(b"ASCII85Decode"),
            Err(DecodeError::UnsupportedFilter("ASCII85Decode".to_string()))
        );
    }

    #[test]
    fn corrupt_data() {
        assert_eq!(
            Filter::AsciiHexDecode.apply(b"XY>", None),
            Err(DecodeError::Corrupt("ascii_hex"))
        );
    }
}
