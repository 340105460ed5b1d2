use log::warn;

/// Log a warning when an optional value turns out to be missing.
pub trait OptionLog {
    /// Emit `f` as a warning if `self` is `None`.
    fn warn_none(self, f: &str) -> Self;
}

impl<T> OptionLog for Option<T> {
    #[inline]
    fn warn_none(self, f: &str) -> Self {
        self.or_else(|| {
            warn!("{f}");

            None
        })
    }
}
