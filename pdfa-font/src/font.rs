//! CID fonts as seen by the validator.

use crate::check::{CidSetCheck, check_cid_set};
use crate::flavour::Flavour;
use crate::mapping::{self, CidToGidMap, MappingMode};
use crate::program::FontProgram;
use crate::session::ValidationSession;
use log::warn;
use pdfa_syntax::OptionLog;
use pdfa_syntax::object::Object;
use pdfa_syntax::object::array::Array;
use pdfa_syntax::object::dict::Dict;
use pdfa_syntax::object::dict::keys::*;
use pdfa_syntax::object::stream::Stream;
use std::sync::Arc;

/// The name of the link from a CID font to its `CIDSet` stream.
pub const CID_SET_LINK: &str = "CIDSet";

/// A CID font dictionary together with its embedded font program.
#[derive(Debug, Clone)]
pub struct CidFont {
    dict: Dict,
    program: Arc<FontProgram>,
    flavour: Flavour,
}

impl CidFont {
    /// Create a new CID font from its dictionary.
    ///
    /// If the dictionary is an indirect object, its font program is only loaded
    /// once per session.
    pub fn new(dict: Dict, session: &mut ValidationSession) -> Self {
        let load = || match dict
            .get::<Dict>(FONT_DESC)
            .warn_none("CID font is missing its font descriptor")
        {
            Some(descriptor) => {
                let cid_to_gid = CidToGidMap::new(&dict).unwrap_or_default();
                FontProgram::from_descriptor(&descriptor, &cid_to_gid)
            }
            None => FontProgram::Other,
        };

        let program = match dict.obj_id() {
            Some(id) => session.font_program(id, load),
            None => Arc::new(load()),
        };

        Self {
            dict,
            program,
            flavour: session.flavour(),
        }
    }

    /// Create the CID font that is the descendant of a Type0 font.
    pub fn from_type0(type0: &Dict, session: &mut ValidationSession) -> Option<Self> {
        let descendant = type0
            .get::<Array>(DESCENDANT_FONTS)
            .warn_none("Type0 font is missing its descendant fonts")?
            .iter::<Dict>()
            .next()?;

        Some(Self::new(descendant, session))
    }

    /// The CID font dictionary.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// The flavour the font is checked against.
    pub fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// The font descriptor.
    pub fn font_descriptor(&self) -> Option<Dict> {
        self.dict.get::<Dict>(FONT_DESC)
    }

    /// The embedded font program.
    pub fn font_program(&self) -> Arc<FontProgram> {
        self.program.clone()
    }

    /// The `CIDSet` stream of the font descriptor.
    pub fn cid_set(&self) -> Option<Stream> {
        self.font_descriptor()?.get::<Stream>(CID_SET)
    }

    /// The objects reachable from the font through `link`.
    ///
    /// Only [`CID_SET_LINK`] is known, every other link yields no objects.
    pub fn linked_objects(&self, link: &str) -> Vec<Object> {
        match link {
            CID_SET_LINK => self.cid_set().map(Object::Stream).into_iter().collect(),
            _ => {
                warn!("unknown link {link} for CID font");

                vec![]
            }
        }
    }

    /// How the font maps CIDs to glyph indices.
    pub fn cid_to_gid_map(&self) -> MappingMode {
        mapping::classify(self.dict.get_raw(CID_TO_GID_MAP))
    }

    /// Check the `CIDSet` of the font against its font program.
    pub fn check_cid_set(&self) -> CidSetCheck {
        check_cid_set(self.cid_set().as_ref(), &self.program, self.flavour)
    }

    /// Whether the `CIDSet` is missing, or lists exactly the glyphs of the font program.
    pub fn cid_set_lists_all_glyphs(&self) -> bool {
        self.check_cid_set().is_consistent()
    }
}

#[cfg(test)]
mod tests {
    use crate::check::Verdict;
    use crate::flavour::Flavour;
    use crate::font::{CID_SET_LINK, CidFont};
    use crate::mapping::MappingMode;
    use crate::program::FontProgram;
    use crate::session::ValidationSession;
    use pdfa_syntax::object::array::Array;
    use pdfa_syntax::object::dict::Dict;
    use pdfa_syntax::object::dict::keys::*;
    use pdfa_syntax::object::name::Name;
    use pdfa_syntax::object::stream::Stream;
    use pdfa_syntax::object::{ObjRef, Object};

    fn cid_font(descriptor: Dict) -> Dict {
        Dict::empty()
            .with(TYPE, Name::new(FONT))
            .with(SUBTYPE, Name::new(CID_FONT_TYPE2))
            .with(FONT_DESC, descriptor)
    }

    #[test]
    fn without_font_descriptor() {
        let mut session = ValidationSession::new(Flavour::PdfA2B);
        let font = CidFont::new(Dict::empty(), &mut session);

        assert_eq!(font.font_descriptor(), None);
        assert_eq!(font.cid_set(), None);
        assert_eq!(*font.font_program(), FontProgram::Other);
        assert!(font.cid_set_lists_all_glyphs());
    }

    #[test]
    fn cid_set_must_be_a_stream() {
        let mut session = ValidationSession::new(Flavour::PdfA2B);
        let font = CidFont::new(
            cid_font(Dict::empty().with(CID_SET, Name::new(b"All"))),
            &mut session,
        );

        assert_eq!(font.cid_set(), None);
        assert!(font.linked_objects(CID_SET_LINK).is_empty());
        assert!(font.cid_set_lists_all_glyphs());
    }

    #[test]
    fn linked_cid_set() {
        let mut session = ValidationSession::new(Flavour::PdfA1B);
        let cid_set = Stream::new(Dict::empty().with(LENGTH, 1), vec![0xe0]);
        let font = CidFont::new(
            cid_font(Dict::empty().with(CID_SET, cid_set.clone())),
            &mut session,
        );

        assert_eq!(font.cid_set(), Some(cid_set.clone()));
        assert_eq!(
            font.linked_objects(CID_SET_LINK),
            vec![Object::Stream(cid_set)]
        );
        assert!(font.linked_objects("FontFile2").is_empty());
    }

    #[test]
    fn unknown_program_is_consistent() {
        let mut session = ValidationSession::new(Flavour::PdfA4);
        let cid_set = Stream::new(Dict::empty(), vec![0xff, 0xff]);
        let font = CidFont::new(
            cid_font(Dict::empty().with(CID_SET, cid_set)),
            &mut session,
        );

        assert_eq!(font.check_cid_set().verdict, Verdict::Consistent);
    }

    #[test]
    fn unreadable_cid_set() {
        let mut session = ValidationSession::new(Flavour::PdfA1B);
        let cid_set = Stream::new(
            Dict::empty().with(FILTER, Name::new(b"CCITTFaxDecode")),
            vec![0xff],
        );
        let font = CidFont::new(
            cid_font(Dict::empty().with(CID_SET, cid_set)),
            &mut session,
        );

        assert!(matches!(font.check_cid_set().verdict, Verdict::Unreadable(_)));
        assert!(!font.cid_set_lists_all_glyphs());
    }

    #[test]
    fn mapping_mode() {
        let mut session = ValidationSession::new(Flavour::PdfA2B);
        let with_map = |map: Object| cid_font(Dict::empty()).with(CID_TO_GID_MAP, map);

        let identity = CidFont::new(with_map(Object::Name(Name::new(IDENTITY))), &mut session);
        let custom = CidFont::new(
            with_map(Object::Stream(Stream::new(Dict::empty(), vec![0, 0]))),
            &mut session,
        );
        let missing = CidFont::new(cid_font(Dict::empty()), &mut session);

        assert_eq!(identity.cid_to_gid_map(), MappingMode::Identity);
        assert_eq!(custom.cid_to_gid_map(), MappingMode::Custom);
        assert_eq!(missing.cid_to_gid_map(), MappingMode::Unknown);
    }

    #[test]
    fn program_is_cached_per_font() {
        let mut session = ValidationSession::new(Flavour::PdfA2B);
        let dict = cid_font(Dict::empty()).with_id(ObjRef::new(12, 0));

        let first = CidFont::new(dict.clone(), &mut session);
        let second = CidFont::new(dict, &mut session);
        CidFont::new(cid_font(Dict::empty()), &mut session);

        assert!(std::sync::Arc::ptr_eq(
            &first.font_program(),
            &second.font_program()
        ));
        assert_eq!(session.cached_font_programs(), 1);
    }

    #[test]
    fn descendant_of_type0() {
        let mut session = ValidationSession::new(Flavour::PdfA3B);
        let descendant = cid_font(Dict::empty()).with_id(ObjRef::new(7, 0));
        let type0 = Dict::empty()
            .with(SUBTYPE, Name::new(TYPE0))
            .with(DESCENDANT_FONTS, Array::new([Object::Dict(descendant.clone())]));

        let font = CidFont::from_type0(&type0, &mut session).unwrap();

        assert_eq!(font.dict(), &descendant);
        assert_eq!(font.flavour(), Flavour::PdfA3B);
        assert!(CidFont::from_type0(&Dict::empty(), &mut session).is_none());
    }
}
