//! Linear scans over sample buffers.

use crate::sat::sat_i32;

/// Collect indices of samples equal to `target`.
///
/// Scans `vec` in ascending order and writes each matching index to `out`,
/// stopping after `max_results` matches (`0` means no limit) or when `out` is
/// full, whichever comes first. Returns the number of indices written.
///
/// Size `out` for the largest count you need: a count equal to `out.len()` may
/// mean the scan was cut short and later matches exist.
///
/// # Example
///
/// ```
/// use numbers::find_equal_i16;
///
/// let samples = [3, 5, 3, 7, 3];
/// let mut idx = [0usize; 5];
///
/// let n = find_equal_i16(&mut idx, &samples, 3, 0);
/// assert_eq!(&idx[..n], &[0, 2, 4]);
///
/// // First match only.
/// let n = find_equal_i16(&mut idx, &samples, 3, 1);
/// assert_eq!(&idx[..n], &[0]);
/// ```
#[must_use]
pub fn find_equal_i16(out: &mut [usize], vec: &[i16], target: i16, max_results: usize) -> usize {
  let limit = if max_results == 0 { out.len() } else { max_results.min(out.len()) };
  let matches = vec.iter().enumerate().filter(|&(_, &v)| v == target).map(|(i, _)| i);

  let mut found = 0;
  for (slot, idx) in out.iter_mut().take(limit).zip(matches) {
    *slot = idx;
    found += 1;
  }
  found
}

/// Smallest sample in `vec`, or `None` if it is empty.
///
/// ```
/// use numbers::find_min_i16;
///
/// assert_eq!(find_min_i16(&[5, -2, 9, -2, 0]), Some(-2));
/// assert_eq!(find_min_i16(&[]), None);
/// ```
#[inline]
#[must_use]
pub fn find_min_i16(vec: &[i16]) -> Option<i16> {
  vec.iter().copied().min()
}

/// Largest absolute value in `vec`, or `None` if it is empty.
///
/// The magnitude is accumulated as `i64`, so `|i32::MIN|` saturates to
/// `i32::MAX` instead of overflowing.
///
/// ```
/// use numbers::find_max_abs_i32;
///
/// assert_eq!(find_max_abs_i32(&[-5, 3, -9]), Some(9));
/// assert_eq!(find_max_abs_i32(&[i32::MIN]), Some(i32::MAX));
/// ```
#[must_use]
pub fn find_max_abs_i32(vec: &[i32]) -> Option<i32> {
  let (&first, rest) = vec.split_first()?;
  let amax = rest.iter().fold(i64::from(first).abs(), |amax, &v| amax.max(i64::from(v).abs()));
  Some(sat_i32(amax))
}
