//! Linear interpolation over integer steps.
//!
//! [`interpolate`] is the primitive behind every edge walk in the renderer:
//! X as a function of Y along a triangle edge, Y as a function of X along a
//! wireframe line, and depth/intensity across a scanline.

use approx::abs_diff_eq;

/// Independent-axis spans shorter than this collapse to a single sample.
pub const SPAN_EPSILON: f32 = 1e-4;

/// Samples the line through `(i0, d0)` and `(i1, d1)` once per integer step
/// of the independent axis.
///
/// The endpoints are normalized so the result always runs in ascending
/// independent-axis order: calling with `i0 > i1` gives the same sequence as
/// calling with the pairs swapped. The output has
/// `ceil(i1) - floor(i0) + 1` samples, starts at exactly the dependent value
/// of the lower endpoint and ends at exactly the dependent value of the upper
/// one. Intermediate samples never overshoot the final value.
///
/// If `i0` and `i1` are within [`SPAN_EPSILON`] the result is `[d0]`.
///
/// ```
/// use rasty::interpolate::interpolate;
///
/// assert_eq!(interpolate(0.0, 0.0, 4.0, 8.0), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(interpolate(2.0, 7.0, 2.0, 9.0), vec![7.0]);
/// ```
pub fn interpolate(i0: f32, d0: f32, i1: f32, d1: f32) -> Vec<f32> {
    if abs_diff_eq!(i0, i1, epsilon = SPAN_EPSILON) {
        return vec![d0];
    }

    let (i0, d0, i1, d1) = if i0 > i1 {
        (i1, d1, i0, d0)
    } else {
        (i0, d0, i1, d1)
    };

    let count = (i1.ceil() - i0.floor()) as usize + 1;
    let slope = (d1 - d0) / (i1 - i0);
    let ascending = d1 >= d0;

    let mut values = Vec::with_capacity(count);
    let mut d = d0;
    for _ in 0..count - 1 {
        values.push(d);
        d += slope;
        // Accumulated error must not carry the walk past the endpoint.
        if (ascending && d > d1) || (!ascending && d < d1) {
            d = d1;
        }
    }
    values.push(d1);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_exact() {
        let values = interpolate(0.0, 0.1, 7.0, 0.7);
        assert_eq!(values[0], 0.1);
        assert_eq!(*values.last().unwrap(), 0.7);
    }

    #[test]
    fn length_spans_every_integer_step() {
        assert_eq!(interpolate(0.0, 0.0, 10.0, 1.0).len(), 11);
        // floor(0.5) = 0, ceil(10.2) = 11
        assert_eq!(interpolate(0.5, 0.0, 10.2, 1.0).len(), 12);
        assert_eq!(interpolate(-3.0, 0.0, 2.0, 1.0).len(), 6);
    }

    #[test]
    fn equal_endpoints_give_single_sample() {
        assert_eq!(interpolate(3.0, 5.0, 3.0, 9.0), vec![5.0]);
        assert_eq!(interpolate(3.0, 5.0, 3.00005, 9.0), vec![5.0]);
    }

    #[test]
    fn descending_input_is_normalized() {
        let forward = interpolate(1.0, 10.0, 6.0, 20.0);
        let backward = interpolate(6.0, 20.0, 1.0, 10.0);
        assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.iter().zip(&backward) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-5);
        }
        assert_eq!(backward[0], 10.0);
    }

    #[test]
    fn values_are_monotonic_and_never_overshoot() {
        let rising = interpolate(0.3, 0.0, 9.7, 1.0);
        assert!(rising.windows(2).all(|w| w[1] >= w[0]));
        assert!(rising.iter().all(|&v| v <= 1.0));

        let falling = interpolate(0.3, 5.0, 9.7, -5.0);
        assert!(falling.windows(2).all(|w| w[1] <= w[0]));
        assert!(falling.iter().all(|&v| v >= -5.0));
    }

    #[test]
    fn integer_endpoints_are_linear() {
        let values = interpolate(0.0, 0.0, 4.0, 2.0);
        for (i, v) in values.iter().enumerate() {
            assert_abs_diff_eq!(*v, i as f32 * 0.5, epsilon = 1e-6);
        }
    }
}
