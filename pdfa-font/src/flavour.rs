//! PDF/A conformance flavours.

use core::fmt;
use core::str::FromStr;

/// A PDF/A part and conformance level a document is validated against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Flavour {
    /// PDF/A-1a.
    PdfA1A,
    /// PDF/A-1b.
    PdfA1B,
    /// PDF/A-2a.
    PdfA2A,
    /// PDF/A-2b.
    PdfA2B,
    /// PDF/A-2u.
    PdfA2U,
    /// PDF/A-3a.
    PdfA3A,
    /// PDF/A-3b.
    PdfA3B,
    /// PDF/A-3u.
    PdfA3U,
    /// PDF/A-4.
    PdfA4,
    /// PDF/A-4e.
    PdfA4E,
    /// PDF/A-4f.
    PdfA4F,
}

impl Flavour {
    /// All flavours, in order.
    pub const ALL: [Self; 11] = [
        Self::PdfA1A,
        Self::PdfA1B,
        Self::PdfA2A,
        Self::PdfA2B,
        Self::PdfA2U,
        Self::PdfA3A,
        Self::PdfA3B,
        Self::PdfA3U,
        Self::PdfA4,
        Self::PdfA4E,
        Self::PdfA4F,
    ];

    /// The short identifier of the flavour, for example `2b`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::PdfA1A => "1a",
            Self::PdfA1B => "1b",
            Self::PdfA2A => "2a",
            Self::PdfA2B => "2b",
            Self::PdfA2U => "2u",
            Self::PdfA3A => "3a",
            Self::PdfA3B => "3b",
            Self::PdfA3U => "3u",
            Self::PdfA4 => "4",
            Self::PdfA4E => "4e",
            Self::PdfA4F => "4f",
        }
    }

    /// The PDF/A part the flavour belongs to.
    pub fn part(&self) -> u8 {
        match self {
            Self::PdfA1A | Self::PdfA1B => 1,
            Self::PdfA2A | Self::PdfA2B | Self::PdfA2U => 2,
            Self::PdfA3A | Self::PdfA3B | Self::PdfA3U => 3,
            Self::PdfA4 | Self::PdfA4E | Self::PdfA4F => 4,
        }
    }

    /// Whether a `CIDSet` must list every glyph of the font program, instead of
    /// only glyphs that actually exist.
    ///
    /// PDF/A-1 only requires the latter.
    pub fn requires_complete_cid_set(&self) -> bool {
        !matches!(self, Self::PdfA1A | Self::PdfA1B)
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF/A-{}", self.id().to_ascii_uppercase())
    }
}

/// An error returned when parsing an unknown flavour identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlavourError(String);

impl fmt::Display for ParseFlavourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown PDF/A flavour '{}'", self.0)
    }
}

impl core::error::Error for ParseFlavourError {}

impl FromStr for Flavour {
    type Err = ParseFlavourError;

    /// Parse identifiers like `1b`, `pdfa-2u` or `PDF/A-3B`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let id = ["pdf/a-", "pdfa-", "pdfa"]
            .iter()
            .find_map(|prefix| lower.strip_prefix(prefix))
            .unwrap_or(lower.as_str());

        Self::ALL
            .into_iter()
            .find(|f| f.id() == id)
            .ok_or_else(|| ParseFlavourError(s.to_string()))
    }
}
