
//! Various utility functions.

/// Zips two arrays of the same length together, using the given
/// function.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where T: Copy,
      S: Copy,
      F: FnMut(T, S) -> U {
  std::array::from_fn(|i| f(left[i], right[i]))
}
