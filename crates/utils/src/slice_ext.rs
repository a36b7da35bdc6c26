/// Extends slices with exact-match index lookups
pub trait SliceExt<T> {
    /// Indices of every element that is a member of `wanted`
    ///
    /// Indices are returned in the order of the slice itself, not the order of
    /// `wanted`. Comparison is exact, so floats must match bit-for-bit in
    /// value.
    ///
    /// ```rust
    /// # use stools_utils::SliceExt;
    /// let days = [0.0, 10.0, 20.0, 30.0];
    ///
    /// // requested order does not matter
    /// assert_eq!(days.positions_in(&[30.0, 0.0]), vec![0, 3]);
    ///
    /// // values not present are skipped
    /// assert_eq!(days.positions_in(&[15.0]), Vec::<usize>::new());
    /// ```
    fn positions_in(&self, wanted: &[T]) -> Vec<usize>;

    /// Every element of `wanted` that is missing from the slice
    ///
    /// Keeps the order of `wanted` so diagnostics list values the way they
    /// were requested.
    ///
    /// ```rust
    /// # use stools_utils::SliceExt;
    /// let days = [0.0, 10.0, 20.0];
    /// assert_eq!(days.missing_from(&[5.0, 10.0, 50.0]), vec![5.0, 50.0]);
    /// ```
    fn missing_from(&self, wanted: &[T]) -> Vec<T>;
}

impl<T: PartialEq + Clone> SliceExt<T> for [T] {
    fn positions_in(&self, wanted: &[T]) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, value)| wanted.contains(value))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn missing_from(&self, wanted: &[T]) -> Vec<T> {
        wanted
            .iter()
            .filter(|value| !self.contains(value))
            .cloned()
            .collect()
    }
}
