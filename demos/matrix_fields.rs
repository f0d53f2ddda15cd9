//! Arrays of matrices: a per-cell tensor field over a 3D grid, as used in
//! finite-difference computations where the array spans a volume of space
//! and each cell carries a matrix-valued physical property.
//!
//! Run with `cargo run --example matrix_fields`.

use anyhow::Result;
use cellmat::MatrixField;

fn main() -> Result<()> {
    env_logger::init();

    let mut am1 = MatrixField::<f64>::zeros((10, 10, 10), (6, 9));
    let mut am2 = MatrixField::<f64>::zeros((10, 10, 10), (6, 9));
    let mut am3 = MatrixField::<f64>::zeros((10, 10, 10), (9, 8));
    let mut am4 = MatrixField::<f64>::zeros((10, 10, 10), (9, 8));
    am1.set_random(0, 9);
    am2.set_random(0, 9);
    am3.set_random(0, 9);
    am4.set_random(0, 9);

    // Array operations run cellwise; the `*` between 6x9 and 9x8 cells is a
    // true matrix product per cell, giving 6x8 cells.
    let am5: MatrixField<f64> = (((&am1 + 2.88) - &am2) * (&am3 + &am4 / 5.73)).eval();

    println!("am5 dims = {:?}, cell shape = {:?}", am5.dims(), am5.cell_shape());
    println!("am5(0,0,0) =\n{}", am5[(0, 0, 0)]);

    Ok(())
}
