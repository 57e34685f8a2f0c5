use numeth::analysis::find_sign_changes;
use numeth::{find_root, Bracket, Expression, RootMethod, RootParams};

fn main() -> Result<(), String> {
    let equation = "x^3 - 2x - 5";

    // Look for intervals with a sign change first.
    let f = Expression::parse(equation).map_err(|error| format!("{error}"))?;
    let range = Bracket::new(-5.0, 5.0).map_err(|error| format!("{error}"))?;
    let brackets = find_sign_changes(&f, &range, 20);
    let bracket = brackets
        .first()
        .ok_or_else(|| "no sign change found".to_string())?;
    println!("sign change in {}", bracket);

    let (xl, xr) = (bracket.lower(), bracket.upper());
    let runs = [
        (RootMethod::Bisection, RootParams::Bracket { xl, xr }),
        (RootMethod::FalsePosition, RootParams::Bracket { xl, xr }),
        (RootMethod::NewtonRaphson, RootParams::Initial { x0: xr }),
        (RootMethod::Secant, RootParams::Seeds { x0: xl, x1: xr }),
        (
            RootMethod::Graphical,
            RootParams::Range {
                start: xl,
                end: xr,
            },
        ),
    ];

    for (method, params) in runs {
        let solution =
            find_root(method, equation, params).map_err(|error| format!("{error}"))?;

        println!();
        println!("{} for f(x) = {}", solution.method(), solution.equation());
        if let Some(derivative) = solution.derivative() {
            println!("f'(x) = {}", derivative);
        }

        for record in solution.trace() {
            println!("{}", record);
        }

        if solution.converged() {
            println!("root = {:.6}", solution.root());
        } else {
            println!("did not converge, last estimate = {:.6}", solution.root());
        }
    }

    Ok(())
}
