//! Walkthrough of matrices, cell arrays, and the lazy expression engine.
//!
//! Run with `cargo run --example basic_usage`.

use anyhow::Result;
use cellmat::algebra::{determinant, inverse};
use cellmat::{CellArray, Matrix};

fn main() -> Result<()> {
    env_logger::init();

    // Matrices are shaped at construction; arithmetic between them builds a
    // lazy expression that is only computed by eval() or assign().
    let mut mat1 = Matrix::<f64>::zeros(6, 10);
    let mut mat2 = Matrix::<f64>::zeros(6, 10);
    let mut mat4 = Matrix::<f64>::zeros(10, 4);
    let mut mat5 = Matrix::<f64>::zeros(10, 4);
    mat1.set_random(0, 9);
    mat2.set_random(0, 9);
    mat4.set_random(0, 9);
    mat5.set_random(0, 9);

    let mat6: Matrix<f64> = (((&mat1 + 7.9) * &mat4) - ((&mat2 * 2.8) * (3.3 + &mat5))).eval();
    println!("mat6 = ({} x {}):\n{}", mat6.nrows(), mat6.ncols(), mat6);

    // Matrix algebra on small square matrices.
    let mut m = Matrix::<f64>::zeros(3, 3);
    m.set(&[4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0]);
    println!("det(m) = {}", determinant(&m));
    match inverse(&m) {
        Ok(inv) => println!("inverse(m) =\n{}", inv),
        Err(err) => println!("no inverse: {}", err),
    }

    // Cell arrays are shaped at run time and carry grid geometry.
    let mut arr1 = CellArray::<f64>::zeros((2, 3, 1));
    let mut arr2 = CellArray::<f64>::zeros((2, 3, 1));
    let mut arr3 = CellArray::<f64>::zeros((2, 3, 1));
    arr1.set_random(1, 9);
    arr2.set_random(1, 9);
    arr3.set_random(1, 9);

    arr1 = ((&arr1 * 3.76) * (&arr2 + 4.13) / &arr3).eval();
    println!("arr1 =\n{}", arr1);

    Ok(())
}
