// numerical helpers used to cross-check analytic derivatives

/// `num_values` evenly spaced points from `start` to `end` inclusive.
/// A single point is `start`, zero points is an empty vector.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values as f64 - 1.0);
            (0..num_values).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Points on the straight line between `start` and `end`: the i-th point takes
/// the i-th value of every per-coordinate linspace.
///
///  start = [0, 10], end = [1, 20], num_values = 3
///  -> [[0, 10], [0.5, 15], [1, 20]]
pub fn linspace_points(start: &[f64], end: &[f64], num_values: usize) -> Vec<Vec<f64>> {
    let per_coordinate: Vec<Vec<f64>> = start
        .iter()
        .zip(end.iter())
        .map(|(s, e)| linspace(*s, *e, num_values))
        .collect();
    (0..num_values)
        .map(|i| per_coordinate.iter().map(|values| values[i]).collect())
        .collect()
}

/*
   central difference of f along coordinate `index` at `point`:
   df/dx_i = (f(x + h e_i) - f(x - h e_i)) / 2h
*/
pub fn numerical_partial<F, E>(f: F, point: &[f64], index: usize, h: f64) -> Result<f64, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let mut x_plus_h = point.to_vec();
    let mut x_minus_h = point.to_vec();
    if let (Some(plus), Some(minus)) = (x_plus_h.get_mut(index), x_minus_h.get_mut(index)) {
        *plus += h;
        *minus -= h;
    }
    let f_x_plus_h = f(&x_plus_h)?;
    let f_x_minus_h = f(&x_minus_h)?;
    Ok((f_x_plus_h - f_x_minus_h) / (2.0 * h))
}

// compute norm of two vectors
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
