/// Piecewise-linear map of `x` through the control points `(input[i], output[i])`.
///
/// `input` must be sorted in increasing order. Values outside of `input`'s
/// range are clamped to the first or last output, which is also what an
/// undefined (NaN) `x` maps to. Without control points the result is NaN.
pub fn interpolate<const N: usize>(input: &[f64; N], output: &[f64; N], x: f64) -> f64 {
    let (Some(&first), Some(&last)) = (input.first(), input.last()) else {
        return f64::NAN;
    };
    if x.is_nan() || x <= first {
        return output.first().copied().unwrap_or(f64::NAN);
    }
    if x >= last {
        return output.last().copied().unwrap_or(f64::NAN);
    }

    // x is strictly inside (input[0], input[last]), so there's a segment for it:
    let segment = input.windows(2).position(|w| x < w[1]).unwrap_or(0);
    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);
    if x1 <= x0 {
        return y1;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
