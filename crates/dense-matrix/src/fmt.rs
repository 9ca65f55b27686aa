//! Text rendering: one bracketed row per line.

use std::fmt;

use dense_types::DenseScalar;

use crate::mat::{Mat, MatRef};

impl<'a, T: DenseScalar> fmt::Display for MatRef<'a, T> {
    /// Writes `[a b]` rows separated by newlines. A precision such as
    /// `{:.2}` is applied to every element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dims.size();
        for i in 0..rows {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for j in 0..cols {
                if j > 0 {
                    f.write_str(" ")?;
                }
                let v = self[(i, j)];
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<T: DenseScalar> fmt::Display for Mat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}
