//! CFF font programs.

use crate::program::FontProgramError;
use rustc_hash::FxHashSet;
use skrifa::raw::ps::cff::CffFontRef;
use skrifa::raw::ps::error::Error as CffError;

/// The glyph-related information of a CFF font program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CffProgram {
    is_cid: bool,
    glyph_count: u32,
    cids: FxHashSet<u32>,
}

impl CffProgram {
    /// Parse the first font of a CFF font program.
    ///
    /// This works both for bare CFF data and for the `CFF ` table of an
    /// OpenType font.
    pub fn parse(data: &[u8]) -> Result<Self, FontProgramError> {
        Self::from_font(&CffFontRef::new_cff(data, 0, None)?)
    }

    /// Extract the information of a parsed CFF font.
    pub fn from_font(font: &CffFontRef<'_>) -> Result<Self, FontProgramError> {
        let glyph_count = font.num_glyphs();

        if !font.is_cid() {
            return Ok(Self::name_keyed(glyph_count));
        }

        // In CID-keyed fonts, the charset maps glyphs to CIDs instead of SIDs.
        let charset = font.charset().ok_or(CffError::MissingCharset)?;
        let cids = charset
            .iter()
            .take(glyph_count as usize)
            .map(|(_, cid)| u32::from(cid.to_u16()));

        Ok(Self::cid_keyed(glyph_count, cids))
    }

    /// Create a CID-keyed font with the given glyph count, containing glyphs for `cids`.
    ///
    /// CID 0 is always contained.
    pub fn cid_keyed(glyph_count: u32, cids: impl IntoIterator<Item = u32>) -> Self {
        let mut cids = cids.into_iter().collect::<FxHashSet<_>>();
        cids.insert(0);

        Self {
            is_cid: true,
            glyph_count,
            cids,
        }
    }

    /// Create a name-keyed font with the given glyph count.
    pub fn name_keyed(glyph_count: u32) -> Self {
        Self {
            is_cid: false,
            glyph_count,
            cids: FxHashSet::default(),
        }
    }

    /// Whether the font is CID-keyed.
    pub fn is_cid(&self) -> bool {
        self.is_cid
    }

    /// The number of glyphs in the font.
    pub fn glyph_count(&self) -> u32 {
        self.glyph_count
    }

    /// Whether the font has a glyph for the given CID.
    ///
    /// Name-keyed fonts don't have CIDs, so the CID is interpreted as a glyph index.
    pub fn contains_cid(&self, cid: u32) -> bool {
        if self.is_cid {
            self.cids.contains(&cid)
        } else {
            cid < self.glyph_count
        }
    }
}
