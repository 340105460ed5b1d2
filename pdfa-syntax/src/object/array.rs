//! Arrays.

use crate::object::{Object, ObjectLike};
use std::sync::Arc;

/// An array of PDF objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(Arc<[Object]>);

impl Array {
    /// Create a new array from its items.
    pub fn new(items: impl IntoIterator<Item = Object>) -> Self {
        Self(items.into_iter().collect())
    }

    /// Return the number of items in the array.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the raw item at the given index.
    pub fn get_raw(&self, index: usize) -> Option<&Object> {
        self.0.get(index)
    }

    /// Returns an iterator over the items of the array, cast to `T`.
    ///
    /// The iterator stops at the first item that can't be cast.
    #[allow(
        private_bounds,
        reason = "users shouldn't be able to implement `ObjectLike` for custom objects."
    )]
    pub fn iter<T>(&self) -> impl Iterator<Item = T> + '_
    where
        T: ObjectLike,
    {
        self.0.iter().map_while(|o| o.clone().cast::<T>())
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use crate::object::Object;
    use crate::object::array::Array;
    use crate::object::name::Name;

    #[test]
    fn iter_stops_at_mismatch() {
        let array = Array::new([
            Object::Integer(1),
            Object::Integer(2),
            Object::Name(Name::new(b"A")),
            Object::Integer(3),
        ]);

        assert_eq!(array.iter::<i32>().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(array.len(), 4);
    }
}
