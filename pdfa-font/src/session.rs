//! State shared by all checks of one validation run.

use crate::flavour::Flavour;
use crate::program::FontProgram;
use pdfa_syntax::object::ObjRef;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// The state of a validation run.
///
/// Font programs are cached per font, so that a font used on many pages is
/// only parsed once. Call [`ValidationSession::reset`] before validating
/// another document.
#[derive(Debug)]
pub struct ValidationSession {
    flavour: Flavour,
    font_programs: FxHashMap<ObjRef, Arc<FontProgram>>,
    file_specification_keys: FxHashSet<ObjRef>,
    valid_pdf: bool,
}

impl ValidationSession {
    /// Create a new session validating against `flavour`.
    pub fn new(flavour: Flavour) -> Self {
        Self {
            flavour,
            font_programs: FxHashMap::default(),
            file_specification_keys: FxHashSet::default(),
            valid_pdf: true,
        }
    }

    /// The flavour documents are validated against.
    pub fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// Change the flavour for subsequent checks.
    pub fn set_flavour(&mut self, flavour: Flavour) {
        self.flavour = flavour;
    }

    /// Return the cached font program of a font, loading it with `load` on first use.
    pub fn font_program(
        &mut self,
        font: ObjRef,
        load: impl FnOnce() -> FontProgram,
    ) -> Arc<FontProgram> {
        self.font_programs
            .entry(font)
            .or_insert_with(|| Arc::new(load()))
            .clone()
    }

    /// The number of cached font programs.
    pub fn cached_font_programs(&self) -> usize {
        self.font_programs.len()
    }

    /// Record an embedded file specification as seen.
    ///
    /// Returns `false` if it was already recorded.
    pub fn add_file_specification_key(&mut self, key: ObjRef) -> bool {
        self.file_specification_keys.insert(key)
    }

    /// Whether the document is structurally valid so far.
    pub fn is_valid_pdf(&self) -> bool {
        self.valid_pdf
    }

    /// Mark the document as structurally invalid.
    pub fn mark_invalid(&mut self) {
        self.valid_pdf = false;
    }

    /// Clear all per-document state. The flavour is kept.
    pub fn reset(&mut self) {
        self.font_programs.clear();
        self.file_specification_keys.clear();
        self.valid_pdf = true;
    }
}
