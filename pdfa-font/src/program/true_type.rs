//! TrueType font programs.

use crate::mapping::CidToGidMap;
use crate::program::FontProgramError;
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId};

/// The glyph-related information of a TrueType font program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueTypeProgram {
    glyph_count: u16,
    cid_to_gid: CidToGidMap,
}

impl TrueTypeProgram {
    /// Parse a TrueType font program.
    ///
    /// Glyphs are looked up by mapping CIDs through `cid_to_gid`.
    pub fn parse(data: &[u8], cid_to_gid: CidToGidMap) -> Result<Self, FontProgramError> {
        Self::from_font(&FontRef::new(data)?, cid_to_gid)
    }

    /// Extract the information of an already parsed font.
    pub fn from_font(font: &FontRef<'_>, cid_to_gid: CidToGidMap) -> Result<Self, FontProgramError> {
        Ok(Self::new(font.maxp()?.num_glyphs(), cid_to_gid))
    }

    /// Create a new font with the given number of glyphs.
    pub fn new(glyph_count: u16, cid_to_gid: CidToGidMap) -> Self {
        Self {
            glyph_count,
            cid_to_gid,
        }
    }

    /// The number of glyphs in the font, according to its `maxp` table.
    pub fn glyph_count(&self) -> u32 {
        self.glyph_count as u32
    }

    /// Whether the font has a glyph for the given CID.
    pub fn contains_cid(&self, cid: u32) -> bool {
        match self.cid_to_gid.map(cid) {
            // Mapping a CID other than 0 to .notdef means the glyph is missing.
            Some(gid) if gid == GlyphId::NOTDEF && cid != 0 => false,
            Some(gid) => gid.to_u32() < self.glyph_count(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::mapping::CidToGidMap;
    use crate::program::FontProgramError;
    use crate::program::true_type::TrueTypeProgram;

    #[test]
    fn identity_mapping() {
        let font = TrueTypeProgram::new(4, CidToGidMap::Identity);

        assert_eq!(font.glyph_count(), 4);
        assert!(font.contains_cid(0));
        assert!(font.contains_cid(3));
        assert!(!font.contains_cid(4));
    }

    #[test]
    fn custom_mapping() {
        // CID 0 -> 0, 1 -> 3, 2 -> 0, 3 -> 9
        let map = CidToGidMap::from_table(&[0, 0, 0, 3, 0, 0, 0, 9]);
        let font = TrueTypeProgram::new(4, map);

        assert!(font.contains_cid(0));
        assert!(font.contains_cid(1));
        assert!(!font.contains_cid(2));
        assert!(!font.contains_cid(3));
        assert!(!font.contains_cid(4));
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            TrueTypeProgram::parse(b"\0\x01\0\0", CidToGidMap::Identity),
            Err(FontProgramError::Read(_))
        ));
    }
}
