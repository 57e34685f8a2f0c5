use numeth::linalg::{cholesky, gauss, lu};
use numeth::nalgebra::{dmatrix, dvector};

fn main() -> Result<(), String> {
    let a = dmatrix![
        4.0, 12.0, -16.0;
        12.0, 37.0, -43.0;
        -16.0, -43.0, 98.0
    ];
    let b = dvector![0.0, 6.0, 39.0];

    let solution = gauss(&a, &b).map_err(|error| format!("{error}"))?;
    println!("Gauss elimination");
    for step in solution.steps() {
        println!("{}:{}{}", step.description(), step.matrix(), step.vector());
    }
    for step in solution.substitution() {
        println!("{}", step.formula());
    }

    let solution = lu(&a, &b).map_err(|error| format!("{error}"))?;
    println!("LU decomposition");
    println!("L ={}U ={}", solution.l(), solution.u());
    for step in solution.forward().iter().chain(solution.backward()) {
        println!("{}", step.formula());
    }

    let solution = cholesky(&a, &b).map_err(|error| format!("{error}"))?;
    println!("Cholesky decomposition");
    println!("L ={}", solution.l());
    for step in solution.forward().iter().chain(solution.backward()) {
        println!("{}", step.formula());
    }

    println!("x ={}", solution.x());

    Ok(())
}
