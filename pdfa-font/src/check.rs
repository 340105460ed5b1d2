//! Checking a `CIDSet` against the glyphs of a font program.

use crate::cid_set::{self, CidSet};
use crate::flavour::Flavour;
use crate::program::FontProgram;
use core::fmt;
use log::debug;
use pdfa_syntax::DecodeError;
use pdfa_syntax::object::stream::Stream;
use smallvec::SmallVec;

/// The outcome of a `CIDSet` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The `CIDSet` is consistent with the font program, or there is no `CIDSet`.
    Consistent,
    /// The `CIDSet` disagrees with the font program.
    Inconsistent(Inconsistency),
    /// The `CIDSet` stream could not be read.
    Unreadable(DecodeError),
}

/// The way in which a `CIDSet` disagrees with its font program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// The bit of a CID is set, but the font program has no glyph for it.
    MissingGlyph {
        /// The first CID without a glyph.
        cid: u32,
    },
    /// The font program contains more glyphs than the `CIDSet` declares.
    UndeclaredGlyphs {
        /// The number of bits set in the `CIDSet`.
        declared: usize,
        /// The number of glyphs in the font program.
        glyph_count: u32,
    },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph { cid } => {
                write!(f, "CID {cid} is listed but has no glyph in the font program")
            }
            Self::UndeclaredGlyphs {
                declared,
                glyph_count,
            } => write!(
                f,
                "CIDSet lists {declared} CIDs, but the font program has {glyph_count} glyphs"
            ),
        }
    }
}

/// A non-fatal observation made while reading a `CIDSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The stream contained fewer bytes than its length entry declares.
    ShortRead {
        /// The declared length.
        declared: usize,
        /// The number of bytes actually read.
        actual: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRead { declared, actual } => {
                write!(f, "read {actual} of {declared} declared CIDSet bytes")
            }
        }
    }
}

/// The result of checking a `CIDSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidSetCheck {
    /// The verdict.
    pub verdict: Verdict,
    /// Diagnostics collected along the way.
    pub diagnostics: SmallVec<[Diagnostic; 1]>,
}

impl CidSetCheck {
    fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            diagnostics: SmallVec::new(),
        }
    }

    /// Whether the `CIDSet` correctly lists all glyphs of the font program.
    ///
    /// An unreadable `CIDSet` is never consistent.
    pub fn is_consistent(&self) -> bool {
        matches!(self.verdict, Verdict::Consistent)
    }
}

/// Check whether a `CIDSet` stream is consistent with a font program.
///
/// Every CID listed in the `CIDSet` (except CID 0) must have a glyph in the
/// font program. For flavours that require it, the `CIDSet` must also list at
/// least as many CIDs as there are glyphs in a CID-keyed CFF or TrueType font
/// program. A missing stream is always consistent.
pub fn check_cid_set(
    cid_set: Option<&Stream>,
    program: &FontProgram,
    flavour: Flavour,
) -> CidSetCheck {
    let Some(stream) = cid_set else {
        return CidSetCheck::new(Verdict::Consistent);
    };

    match cid_set::read(stream) {
        Ok((bits, diagnostic)) => {
            let mut check = CidSetCheck::new(check_bits(&bits, program, flavour));
            check.diagnostics.extend(diagnostic);

            check
        }
        Err(e) => {
            debug!("failed to read CIDSet stream: {e}");

            CidSetCheck::new(Verdict::Unreadable(e))
        }
    }
}

/// Check already decoded `CIDSet` bits against a font program.
pub fn check_bits(bits: &CidSet, program: &FontProgram, flavour: Flavour) -> Verdict {
    // The bit for CID 0 is not checked, every font has a .notdef glyph.
    if let Some(cid) = bits
        .iter()
        .skip_while(|cid| *cid == 0)
        .find(|cid| !program.contains_cid(*cid))
    {
        return Verdict::Inconsistent(Inconsistency::MissingGlyph { cid });
    }

    if flavour.requires_complete_cid_set()
        && program.is_cid_keyed_or_true_type()
        && let Some(glyph_count) = program.glyph_count()
    {
        let declared = bits.cardinality();

        if declared < glyph_count as usize {
            return Verdict::Inconsistent(Inconsistency::UndeclaredGlyphs {
                declared,
                glyph_count,
            });
        }
    }

    Verdict::Consistent
}
