//! Basic tour of dense matrices: construction, views, index sets,
//! arithmetic and the multiply kernel.
//!
//! Run with `RUST_LOG=dense_matrix=debug` to see rejected operations logged.

use dense_matrix::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    println!("Dense Matrix - Basic Example\n");
    println!("{}\n", dense_matrix::version_info());

    let a = FloatMatrix::from_row_major(
        &[
            1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, //
            7.0, 8.0, 9.0, //
        ],
        3,
        3,
    );
    println!("A =\n{:.1}\n", a);

    // Index sets select column-major positions
    let diag = diagonal_indexes(&a);
    let col = column_indexes(&a, 2);
    println!("diagonal positions {:?}, column 2 positions {:?}", diag, col);
    println!(
        "trace = {}, max of column 2 = {}\n",
        a.sum_at(&diag),
        a.max_at(&col)
    );

    // In-place updates through a view write into the owner
    let mut b = a.clone();
    b.submatrix_mut(1, 1, 2, 2).scale(-1.0);
    b.add_at(100.0, &[-1]);
    println!("B (lower-right block negated, last element shifted) =\n{:.1}\n", b);

    // Element-wise arithmetic reports shape mismatches as errors
    match a.plus(&FloatMatrix::zeros(2, 3)) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("A + zeros(2, 3): {}\n", err),
    }

    // Matrix product through the zero-skipping kernel
    let d = FloatMatrix::diagonal(3, 2.0);
    match a.matmul(&d) {
        Ok(c) => println!("A * 2I =\n{:.1}\n", c),
        Err(err) => println!("matmul failed: {}", err),
    }

    let z = ComplexMatrix::with_value(2, 2, dense_matrix::Complex64::new(0.0, 1.0));
    if let Ok(zz) = &z * &z {
        println!("(iJ)^2 =\n{:.1}", zz);
    }

    println!("\nDone!");
}
