use numeth::interp::{interpolate, InterpolationMethod, PointSet, SplineDegree};

fn main() -> Result<(), String> {
    // Gravitational acceleration by altitude.
    let mut points: PointSet = [
        (0.0, 9.81),
        (20_000.0, 9.7487),
        (40_000.0, 9.6879),
        (60_000.0, 9.6879),
        (80_000.0, 9.5682),
    ]
    .into_iter()
    .collect();

    let x = 42_235.0;

    for method in [
        InterpolationMethod::Lagrange,
        InterpolationMethod::Spline(SplineDegree::Linear),
    ] {
        let result = interpolate(method, &points, x).map_err(|error| format!("{error}"))?;
        println!("{}", method);
        println!("{}", result.equation());
        println!("f({}) = {:.4}", x, result.value());
    }

    // Only the points around the query.
    points
        .select_only(&[1, 2, 3])
        .map_err(|error| format!("{error}"))?;
    let result = interpolate(InterpolationMethod::Lagrange, &points, x)
        .map_err(|error| format!("{error}"))?;
    println!("Lagrange with 3 points: f({}) = {:.4}", x, result.value());

    Ok(())
}
