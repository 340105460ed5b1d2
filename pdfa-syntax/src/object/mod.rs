//! PDF objects.

use crate::object::array::Array;
use crate::object::dict::Dict;
use crate::object::name::Name;
use crate::object::stream::Stream;
use crate::object::string::String;
use std::fmt::Debug;

pub mod array;
pub mod dict;
pub mod name;
pub mod r#ref;
pub mod stream;
pub mod string;

pub use r#ref::ObjRef;

/// A trait for PDF objects.
pub(crate) trait ObjectLike: TryFrom<Object> + Debug + Clone {}

macro_rules! object {
    ($t:ident, $s:ident) => {
        impl TryFrom<Object> for $t {
            type Error = ();

            fn try_from(value: Object) -> Result<Self, Self::Error> {
                match value {
                    Object::$s(b) => Ok(b),
                    _ => Err(()),
                }
            }
        }

        impl crate::object::ObjectLike for $t {}
    };
}

/// A primitive PDF object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A null object.
    Null,
    /// A boolean object.
    Boolean(bool),
    /// An integer number.
    Integer(i64),
    /// A real number.
    Real(f64),
    /// A string object.
    String(String),
    /// A name object.
    Name(Name),
    /// A dict object.
    Dict(Dict),
    /// An array object.
    Array(Array),
    /// A stream object.
    Stream(Stream),
}

impl Object {
    /// Try casting the object to a specific subtype.
    pub(crate) fn cast<T>(self) -> Option<T>
    where
        T: ObjectLike,
    {
        self.try_into().ok()
    }

    /// A short, human-readable name of the type of the object.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::String(_) => "string",
            Self::Name(_) => "name",
            Self::Dict(_) => "dictionary",
            Self::Array(_) => "array",
            Self::Stream(_) => "stream",
        }
    }

    /// Return the object as a dictionary, if it is one.
    #[inline(always)]
    pub fn into_dict(self) -> Option<Dict> {
        self.cast()
    }

    /// Return the object as a name, if it is one.
    #[inline(always)]
    pub fn into_name(self) -> Option<Name> {
        self.cast()
    }

    /// Return the object as a stream, if it is one.
    #[inline(always)]
    pub fn into_stream(self) -> Option<Stream> {
        self.cast()
    }

    /// Return the object as an array, if it is one.
    #[inline(always)]
    pub fn into_array(self) -> Option<Array> {
        self.cast()
    }

    /// Whether the object is a name equal to `name`.
    pub fn is_name(&self, name: &[u8]) -> bool {
        matches!(self, Self::Name(n) if n.as_bytes() == name)
    }
}

object!(Dict, Dict);
object!(Name, Name);
object!(Stream, Stream);
object!(Array, Array);
object!(String, String);
object!(bool, Boolean);

macro_rules! int_object {
    ($($t:ident),*) => {
        $(
            impl TryFrom<Object> for $t {
                type Error = ();

                fn try_from(value: Object) -> Result<Self, Self::Error> {
                    match value {
                        Object::Integer(i) => $t::try_from(i).map_err(|_| ()),
                        _ => Err(()),
                    }
                }
            }

            impl ObjectLike for $t {}
        )*
    };
}

int_object!(u8, u16, u32, i32, i64, usize);

impl TryFrom<Object> for f32 {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Integer(i) => Ok(i as Self),
            Object::Real(r) => Ok(r as Self),
            _ => Err(()),
        }
    }
}

impl ObjectLike for f32 {}

impl From<Name> for Object {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Dict> for Object {
    fn from(value: Dict) -> Self {
        Self::Dict(value)
    }
}

impl From<Stream> for Object {
    fn from(value: Stream) -> Self {
        Self::Stream(value)
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<usize> for Object {
    fn from(value: usize) -> Self {
        // Object sizes never get anywhere near `i64::MAX`.
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}
