//! Embedded font programs.
//!
//! A CID font can embed its glyphs as a bare CFF font, as an OpenType font
//! (with either CFF or TrueType outlines) or as a TrueType font. For checking
//! a `CIDSet`, only two questions need to be answered about a font program:
//! how many glyphs it has, and whether it has a glyph for a given CID.

pub mod cff;
pub mod true_type;

use crate::mapping::CidToGidMap;
use crate::program::cff::CffProgram;
use crate::program::true_type::TrueTypeProgram;
use core::fmt;
use log::warn;
use pdfa_syntax::DecodeError;
use pdfa_syntax::object::dict::Dict;
use pdfa_syntax::object::dict::keys::*;
use pdfa_syntax::object::name::Name;
use pdfa_syntax::object::stream::Stream;
use skrifa::FontRef;
use skrifa::raw::ReadError;
use skrifa::raw::ps::error::Error as CffError;
use skrifa::raw::types::Tag;
use std::ops::Deref;

/// The font program embedded in a font descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontProgram {
    /// A CFF font program, either bare or from an OpenType font.
    Cff(CffProgram),
    /// A TrueType font program.
    TrueType(TrueTypeProgram),
    /// A missing, unsupported or unreadable font program.
    Other,
}

impl FontProgram {
    /// Load the font program from a font descriptor.
    ///
    /// This never fails: missing or unreadable font programs are logged and
    /// result in [`FontProgram::Other`].
    pub fn from_descriptor(descriptor: &Dict, cid_to_gid: &CidToGidMap) -> Self {
        match Self::load(descriptor, cid_to_gid) {
            Ok(Some(program)) => program,
            Ok(None) => Self::Other,
            Err(e) => {
                warn!("failed to read embedded font program: {e}");

                Self::Other
            }
        }
    }

    fn load(descriptor: &Dict, cid_to_gid: &CidToGidMap) -> Result<Option<Self>, FontProgramError> {
        if let Some(stream) = descriptor.get::<Stream>(FONT_FILE2) {
            let decoded = stream.decoded()?;

            return Ok(Some(Self::TrueType(TrueTypeProgram::parse(
                &decoded,
                cid_to_gid.clone(),
            )?)));
        }

        if let Some(stream) = descriptor.get::<Stream>(FONT_FILE3) {
            let decoded = stream.decoded()?;

            let Some(subtype) = stream.dict().get::<Name>(SUBTYPE) else {
                warn!("FontFile3 stream is missing its subtype");

                return Ok(None);
            };

            return match subtype.deref() {
                CID_FONT_TYPE0C | TYPE1C => Ok(Some(Self::Cff(CffProgram::parse(&decoded)?))),
                OPEN_TYPE => Self::open_type(&decoded, cid_to_gid).map(Some),
                _ => {
                    warn!("unknown subtype {} for FontFile3", subtype.as_str());

                    Ok(None)
                }
            };
        }

        if descriptor.contains_key(FONT_FILE) {
            warn!("Type 1 font programs can't be inspected");
        } else {
            warn!("CID font doesn't have an embedded font file");
        }

        Ok(None)
    }

    fn open_type(data: &[u8], cid_to_gid: &CidToGidMap) -> Result<Self, FontProgramError> {
        let font = FontRef::new(data)?;

        match font.table_data(Tag::new(b"CFF ")) {
            Some(cff) => Ok(Self::Cff(CffProgram::parse(cff.as_bytes())?)),
            None => Ok(Self::TrueType(TrueTypeProgram::from_font(
                &font,
                cid_to_gid.clone(),
            )?)),
        }
    }

    /// Whether the font program has a glyph for the given CID.
    ///
    /// Always true for [`FontProgram::Other`], since there is nothing to look at.
    pub fn contains_cid(&self, cid: u32) -> bool {
        match self {
            Self::Cff(c) => c.contains_cid(cid),
            Self::TrueType(t) => t.contains_cid(cid),
            Self::Other => true,
        }
    }

    /// The number of glyphs in the font program, if known.
    pub fn glyph_count(&self) -> Option<u32> {
        match self {
            Self::Cff(c) => Some(c.glyph_count()),
            Self::TrueType(t) => Some(t.glyph_count()),
            Self::Other => None,
        }
    }

    /// Whether the font program is either a CID-keyed CFF font or a TrueType font.
    ///
    /// Only for those, a `CIDSet` can be compared against the total number of
    /// glyphs.
    pub fn is_cid_keyed_or_true_type(&self) -> bool {
        match self {
            Self::Cff(c) => c.is_cid(),
            Self::TrueType(_) => true,
            Self::Other => false,
        }
    }
}

/// An error that occurred while reading a font program.
#[derive(Debug, Clone)]
pub enum FontProgramError {
    /// The font file stream couldn't be decoded.
    Decode(DecodeError),
    /// The font data is malformed.
    Read(ReadError),
    /// The CFF data is malformed.
    Cff(CffError),
}

impl From<DecodeError> for FontProgramError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

impl From<ReadError> for FontProgramError {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}

impl From<CffError> for FontProgramError {
    fn from(value: CffError) -> Self {
        Self::Cff(value)
    }
}

impl fmt::Display for FontProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "failed to decode font file: {e}"),
            Self::Read(e) => write!(f, "malformed font data: {e}"),
            Self::Cff(e) => write!(f, "malformed CFF data: {e}"),
        }
    }
}

impl core::error::Error for FontProgramError {}
