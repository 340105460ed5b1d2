//! Strings.

use std::sync::Arc;

/// A PDF string, i.e. an arbitrary sequence of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct String(Arc<[u8]>);

impl String {
    /// Create a new string from its (already unescaped) bytes.
    pub fn new(data: &[u8]) -> Self {
        Self(Arc::from(data))
    }

    /// Return the bytes of the string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
