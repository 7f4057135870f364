use calc_compute::function::RealFunction;
use log::trace;
use rayon::prelude::*;
use super::point::GraphPoint;

/// Evaluates `function` at `samples` evenly spaced values of `x` from `x_min` to `x_max`, both
/// included, and returns the resulting points in order of increasing `x`.
///
/// Points where the function is undefined (NaN) or diverges (infinite) are dropped, leaving a gap
/// in the curve. The function is evaluated in parallel.
pub fn sample(function: &RealFunction, (x_min, x_max): (f64, f64), samples: usize) -> Vec<GraphPoint<f64>> {
    let step = if samples > 1 {
        (x_max - x_min) / (samples - 1) as f64
    } else {
        0.0
    };

    let points = (0..samples)
        .into_par_iter()
        .map(|i| {
            let x = x_min + step * i as f64;
            GraphPoint(x, function.eval(x))
        })
        .filter(|point| point.is_finite())
        .collect::<Vec<_>>();

    trace!("kept {} of {} samples", points.len(), samples);
    points
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn evenly_spaced() {
        let f = RealFunction::identity() * RealFunction::identity();
        let points = sample(&f, (-2.0, 2.0), 5);
        assert_eq!(points, vec![
            GraphPoint(-2.0, 4.0),
            GraphPoint(-1.0, 1.0),
            GraphPoint(0.0, 0.0),
            GraphPoint(1.0, 1.0),
            GraphPoint(2.0, 4.0),
        ]);
    }

    #[test]
    fn drops_non_finite() {
        // 1/x is infinite at 0
        let f = RealFunction::constant(1.0) / RealFunction::identity();
        let points = sample(&f, (-1.0, 1.0), 3);
        assert_eq!(points, vec![GraphPoint(-1.0, -1.0), GraphPoint(1.0, 1.0)]);
    }

    #[test]
    fn degenerate_counts() {
        let f = RealFunction::constant(3.0);
        assert!(sample(&f, (0.0, 1.0), 0).is_empty());
        assert_eq!(sample(&f, (0.5, 1.0), 1), vec![GraphPoint(0.5, 3.0)]);
    }
}
