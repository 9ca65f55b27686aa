//! Column-major storage model.
//!
//! A matrix is a linear buffer plus `(rows, cols, step)`: element `(i, j)`
//! lives at offset `j * step + i`. Owned matrices are packed
//! (`step == rows`); views into a larger matrix keep the parent's step.

use crate::error::Shape;

/// Matrix dimensions with leading stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dims {
    rows: usize,
    cols: usize,
    step: usize,
}

impl Dims {
    /// Dimensions of a packed matrix (`step == rows`).
    pub const fn packed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            step: rows,
        }
    }

    /// Dimensions of a view with leading stride `step`.
    ///
    /// # Panics
    /// Panics if `step < rows`.
    pub fn strided(rows: usize, cols: usize, step: usize) -> Self {
        assert!(step >= rows, "step {} smaller than rows {}", step, rows);
        Self { rows, cols, step }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance in the buffer between the starts of consecutive columns.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    #[inline]
    pub fn is_packed(&self) -> bool {
        self.step == self.rows
    }

    /// Buffer offset of element `(i, j)`.
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        j * self.step + i
    }

    /// Buffer offset of the `k`-th element in column-major order.
    ///
    /// Identity for packed matrices.
    #[inline]
    pub fn real_index(&self, k: usize) -> usize {
        if self.is_packed() || self.rows == 0 {
            k
        } else {
            (k / self.rows) * self.step + k % self.rows
        }
    }

    /// Smallest buffer length that holds every element.
    #[inline]
    pub fn min_len(&self) -> usize {
        if self.cols == 0 || self.rows == 0 {
            0
        } else {
            (self.cols - 1) * self.step + self.rows
        }
    }

    /// Reinterpret as a packed `rows x cols` matrix. The buffer is untouched.
    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.step = rows;
    }

    /// Buffer offsets of every element, column by column.
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let Dims { rows, cols, step } = *self;
        (0..cols).flat_map(move |j| (j * step)..(j * step + rows))
    }
}

/// Shape queries shared by every matrix kind.
///
/// Also implemented for `Option<&M>`: an absent matrix has zero rows,
/// zero columns and never matches a size.
pub trait Matrix {
    /// Storage dimensions, `None` for an absent matrix.
    fn dims(&self) -> Option<Dims>;

    /// True if the elements are complex valued.
    fn is_complex(&self) -> bool;

    /// The number of rows.
    fn rows(&self) -> usize {
        self.dims().map_or(0, |d| d.rows())
    }

    /// The number of columns.
    fn cols(&self) -> usize {
        self.dims().map_or(0, |d| d.cols())
    }

    /// The number of elements, `rows * cols`.
    fn num_elements(&self) -> usize {
        self.dims().map_or(0, |d| d.num_elements())
    }

    /// `(rows, cols)` pair.
    fn size(&self) -> (usize, usize) {
        self.dims().map_or((0, 0), |d| d.size())
    }

    /// Leading stride; equals the row count for packed matrices.
    fn leading_index(&self) -> usize {
        self.dims().map_or(0, |d| d.step())
    }

    /// True if present and exactly `rows x cols`.
    fn size_match(&self, rows: usize, cols: usize) -> bool {
        self.dims()
            .is_some_and(|d| d.rows() == rows && d.cols() == cols)
    }
}

impl<M: Matrix + ?Sized> Matrix for Option<&M> {
    fn dims(&self) -> Option<Dims> {
        self.and_then(|m| m.dims())
    }

    fn is_complex(&self) -> bool {
        self.is_some_and(|m| m.is_complex())
    }
}
