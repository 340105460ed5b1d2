//! Names.

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;

/// A PDF name.
///
/// Names are stored in their unescaped form, i.e. `#xx` sequences have already been
/// replaced by the byte they represent.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(SmallVec<[u8; 23]>);

impl Name {
    /// Create a new name from its unescaped bytes.
    pub fn new(data: &[u8]) -> Self {
        Self(SmallVec::from_slice(data))
    }

    /// Return the raw bytes of the name.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return a string representation of the name.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("{non-ascii key}")
    }
}

impl Deref for Name {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// `SmallVec` hashes like the slice it derefs to, so lookups by `&[u8]` are consistent.
impl Borrow<[u8]> for Name {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Name {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<&[u8; N]> for Name {
    fn from(value: &[u8; N]) -> Self {
        Self::new(value)
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::object::name::Name;

    #[test]
    fn name_roundtrip() {
        let name = Name::new(b"CIDToGIDMap");

        assert_eq!(name.as_str(), "CIDToGIDMap");
        assert_eq!(&*name, b"CIDToGIDMap");
        assert_eq!(format!("{name:?}"), "/CIDToGIDMap");
    }

    #[test]
    fn non_ascii_name() {
        let name = Name::new(&[0xff, 0xfe]);
        assert_eq!(name.as_str(), "{non-ascii key}");
    }
}
