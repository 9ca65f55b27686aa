//! Index-set algebra.
//!
//! An index set is an ordered list of column-major element positions. The
//! builders here are pure functions of a matrix shape; invalid selectors
//! produce an empty set instead of an error.

use crate::storage::Matrix;

/// A caller-supplied element position that may count from the end.
///
/// Negative positions are normalized as `k + n` where `n` is the element
/// count, so `-1` is the last element.
pub trait LogicalIndex: Copy {
    /// Resolve to a non-negative position in a matrix of `n` elements.
    fn resolve(self, n: usize) -> usize;
}

impl LogicalIndex for usize {
    #[inline]
    fn resolve(self, _n: usize) -> usize {
        self
    }
}

macro_rules! impl_logical_index_signed {
    ($($t:ty),*) => {
        $(
            impl LogicalIndex for $t {
                #[inline]
                fn resolve(self, n: usize) -> usize {
                    normalize_index(self as isize, n)
                }
            }
        )*
    };
}

impl_logical_index_signed!(isize, i64, i32);

/// Normalize a possibly negative position against `n` elements.
///
/// # Panics
/// Panics if `k < -n`; counting back past the first element is a caller
/// bug, not something to clamp.
#[inline]
pub fn normalize_index(k: isize, n: usize) -> usize {
    if k >= 0 {
        return k as usize;
    }
    let back = k.unsigned_abs();
    assert!(
        back <= n,
        "index {} out of range for {} elements",
        k,
        n
    );
    n - back
}

/// Positions `start, start + step, ...` strictly below `end`.
///
/// Negative bounds are clamped to zero and a non-positive step is treated
/// as one; `end <= start` gives an empty set.
///
/// ```
/// use dense_matrix::make_index_set;
///
/// assert_eq!(make_index_set(1, 8, 3), vec![1, 4, 7]);
/// assert_eq!(make_index_set(-4, 3, 0), vec![0, 1, 2]);
/// assert!(make_index_set(5, 5, 1).is_empty());
/// ```
pub fn make_index_set(start: isize, end: isize, step: isize) -> Vec<usize> {
    let start = start.max(0) as usize;
    let end = end.max(0) as usize;
    let step = if step <= 0 { 1 } else { step as usize };
    if end <= start {
        return Vec::new();
    }
    (start..end).step_by(step).collect()
}

/// Diagonal positions `i * rows + i` of a square `rows x cols` matrix.
///
/// Empty unless `rows == cols`.
pub fn make_diagonal_set(rows: usize, cols: usize) -> Vec<usize> {
    if rows != cols {
        return Vec::new();
    }
    (0..rows).map(|i| i * rows + i).collect()
}

/// Index set for `row` of `m`: `(row + i) * cols` for `i` in `0..cols`.
///
/// For row 0 this walks the first row of a square matrix; other rows follow
/// the same arithmetic and callers that mutate through the set rely on
/// exactly these positions. Empty if `row >= rows`; `row == rows` is rejected
/// too, since it would name positions past the last element.
pub fn row_indexes<M: Matrix + ?Sized>(m: &M, row: usize) -> Vec<usize> {
    let (nrows, ncols) = m.size();
    if row >= nrows {
        return Vec::new();
    }
    (0..ncols).map(|i| (row + i) * ncols).collect()
}

/// Index set for column `col` of `m`: `col * rows + i` for `i` in `0..rows`.
///
/// Empty if `col >= cols`; `col == cols` is rejected too, since it would
/// name positions past the last element.
pub fn column_indexes<M: Matrix + ?Sized>(m: &M, col: usize) -> Vec<usize> {
    let (nrows, ncols) = m.size();
    if col >= ncols {
        return Vec::new();
    }
    (0..nrows).map(|i| col * nrows + i).collect()
}

/// Index set for the diagonal of a square `m`; empty otherwise.
pub fn diagonal_indexes<M: Matrix + ?Sized>(m: &M) -> Vec<usize> {
    let (rows, cols) = m.size();
    make_diagonal_set(rows, cols)
}
