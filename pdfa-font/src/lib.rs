/*!
Checking the `CIDSet` of embedded CID fonts.

The font descriptor of a CID font may contain a `CIDSet` stream, a bitmap with
one bit for each CID that has a glyph in the embedded font program. PDF/A
requires this bitmap to be truthful: each CID it lists must actually be in the
font program, and, starting with PDF/A-2, every glyph in the font program must
be listed.

The main entry point is [`CidFont`], which wraps a CID font dictionary and
resolves its font program through a [`ValidationSession`]:

```
use pdfa_font::{CidFont, Flavour, ValidationSession};
use pdfa_syntax::object::dict::Dict;

let mut session = ValidationSession::new(Flavour::PdfA2B);
let font = CidFont::new(Dict::empty(), &mut session);

// Without a font descriptor, there is no `CIDSet` that could be wrong.
assert!(font.cid_set_lists_all_glyphs());
```

The individual steps are available as well: [`cid_set::decode`] for the
bitmap, [`FontProgram`] for the glyphs of a font program,
[`check::check_cid_set`] for combining both, and [`mapping::classify`] for the
`CIDToGIDMap` entry.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod check;
pub mod cid_set;
pub mod flavour;
pub mod font;
pub mod mapping;
pub mod program;
pub mod session;

pub use check::{CidSetCheck, Diagnostic, Inconsistency, Verdict};
pub use cid_set::CidSet;
pub use flavour::Flavour;
pub use font::CidFont;
pub use mapping::{CidToGidMap, MappingMode};
pub use program::{FontProgram, FontProgramError};
pub use session::ValidationSession;
