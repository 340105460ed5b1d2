//! Dictionaries.

use crate::object::name::Name;
use crate::object::{ObjRef, Object, ObjectLike};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A dictionary, which is a key-value map, keys being names, and values being any
/// (already resolved) PDF object.
#[derive(Clone, Default, PartialEq)]
pub struct Dict {
    entries: Arc<FxHashMap<Name, Object>>,
    obj_id: Option<ObjRef>,
}

impl Dict {
    /// Create a new empty dictionary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a copy of the dictionary with an additional entry.
    ///
    /// An existing entry with the same key is replaced.
    pub fn with(mut self, key: &[u8], value: impl Into<Object>) -> Self {
        Arc::make_mut(&mut self.entries).insert(Name::new(key), value.into());

        self
    }

    /// Return a copy of the dictionary that remembers which indirect object it was
    /// resolved from.
    pub fn with_id(mut self, obj_id: ObjRef) -> Self {
        self.obj_id = Some(obj_id);

        self
    }

    /// Returns the number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether the dictionary contains an entry with a specific key.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry of a key as a specific object.
    ///
    /// Returns `None` if the entry doesn't exist or has a different type.
    #[allow(
        private_bounds,
        reason = "users shouldn't be able to implement `ObjectLike` for custom objects."
    )]
    pub fn get<T>(&self, key: &[u8]) -> Option<T>
    where
        T: ObjectLike,
    {
        self.get_raw(key)?.clone().cast::<T>()
    }

    /// Return the raw entry for a specific key.
    pub fn get_raw(&self, key: &[u8]) -> Option<&Object> {
        self.entries.get(key)
    }

    /// An iterator over all entries in the dictionary, sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = (&Name, &Object)> {
        let mut sorted = self.entries.iter().collect::<Vec<_>>();
        sorted.sort_by(|(n1, _), (n2, _)| n1.as_bytes().cmp(n2.as_bytes()));
        sorted.into_iter()
    }

    /// Return the object identifier of the dict, if it's an indirect object.
    pub fn obj_id(&self) -> Option<ObjRef> {
        self.obj_id
    }
}

impl Debug for Dict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Dict");

        for (key, val) in self.entries() {
            debug_struct.field(key.as_str(), val);
        }

        debug_struct.finish()
    }
}

/// A collection of possible keys in a PDF dictionary.
#[allow(missing_docs)]
pub mod keys {
    macro_rules! key {
        ($i:ident, $e:expr) => {
            pub const $i: &'static [u8] = $e;
        };
    }

    // A
    key!(ASCII_HEX_DECODE, b"ASCIIHexDecode");
    key!(ASCII_HEX_DECODE_ABBREVIATION, b"AHx");

    // B
    key!(BASE_FONT, b"BaseFont");

    // C
    key!(CID_FONT_TYPE0, b"CIDFontType0");
    key!(CID_FONT_TYPE0C, b"CIDFontType0C");
    key!(CID_FONT_TYPE2, b"CIDFontType2");
    key!(CID_SET, b"CIDSet");
    key!(CID_SYSTEM_INFO, b"CIDSystemInfo");
    key!(CID_TO_GID_MAP, b"CIDToGIDMap");

    // D
    key!(DECODE_PARMS, b"DecodeParms");
    key!(DESCENDANT_FONTS, b"DescendantFonts");
    key!(DL, b"DL");

    // F
    key!(F, b"F");
    key!(FILTER, b"Filter");
    key!(FLATE_DECODE, b"FlateDecode");
    key!(FLATE_DECODE_ABBREVIATION, b"Fl");
    key!(FONT, b"Font");
    key!(FONT_DESC, b"FontDescriptor");
    key!(FONT_FILE, b"FontFile");
    key!(FONT_FILE2, b"FontFile2");
    key!(FONT_FILE3, b"FontFile3");
    key!(FONT_NAME, b"FontName");

    // I
    key!(IDENTITY, b"Identity");

    // L
    key!(LENGTH, b"Length");

    // O
    key!(OPEN_TYPE, b"OpenType");

    // P
    key!(PREDICTOR, b"Predictor");

    // S
    key!(SUBTYPE, b"Subtype");

    // T
    key!(TYPE, b"Type");
    key!(TYPE0, b"Type0");
    key!(TYPE1C, b"Type1C");
}

#[cfg(test)]
mod tests {
    use crate::object::dict::Dict;
    use crate::object::dict::keys::*;
    use crate::object::name::Name;
    use crate::object::{ObjRef, Object};

    #[test]
    fn typed_access() {
        let dict = Dict::empty()
            .with(LENGTH, 12)
            .with(SUBTYPE, Name::new(CID_FONT_TYPE2));

        assert_eq!(dict.get::<usize>(LENGTH), Some(12));
        assert_eq!(dict.get::<Name>(SUBTYPE), Some(Name::new(b"CIDFontType2")));
        assert_eq!(dict.get::<Dict>(SUBTYPE), None);
        assert_eq!(dict.get::<Name>(FONT_DESC), None);
        assert!(dict.contains_key(LENGTH));
        assert!(!dict.contains_key(CID_SET));
    }

    #[test]
    fn entries_are_sorted() {
        let dict = Dict::empty()
            .with(SUBTYPE, Object::Null)
            .with(BASE_FONT, Object::Null)
            .with(LENGTH, Object::Null);
        let keys = dict.entries().map(|(k, _)| k.as_str()).collect::<Vec<_>>();

        assert_eq!(keys, vec!["BaseFont", "Length", "Subtype"]);
    }

    #[test]
    fn copies_are_independent() {
        let base = Dict::empty().with(LENGTH, 1);
        let extended = base.clone().with(LENGTH, 2).with_id(ObjRef::new(4, 0));

        assert_eq!(base.get::<i32>(LENGTH), Some(1));
        assert_eq!(extended.get::<i32>(LENGTH), Some(2));
        assert_eq!(base.obj_id(), None);
        assert_eq!(extended.obj_id(), Some(ObjRef::new(4, 0)));
    }
}
