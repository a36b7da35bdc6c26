use crate::f;

/// Display helpers for values a reader may never have recorded
pub trait OptionExt {
    /// Contained value, or `fallback` for `None`
    ///
    /// ```rust
    /// # use stools_utils::OptionExt;
    /// let groups: Option<usize> = None;
    /// assert_eq!(groups.display_or("unknown"), "unknown");
    /// assert_eq!(Some(2).display_or("unknown"), "2");
    /// ```
    fn display_or(&self, fallback: &str) -> String;

    /// Contained value, or "none"
    fn display(&self) -> String {
        self.display_or("none")
    }
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display_or(&self, fallback: &str) -> String {
        self.as_ref()
            .map_or_else(|| fallback.to_string(), |value| f!("{value}"))
    }
}
