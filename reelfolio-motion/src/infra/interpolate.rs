//! Piecewise-linear range mapping
//!
//! Maps a scalar through matching input/output breakpoints, the way the
//! renderer maps scroll progress to card offsets or scroll velocity to a
//! marquee speed factor.

/// Behaviour outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Hold the first/last output value.
    #[default]
    Clamp,
    /// Continue the first/last segment linearly.
    Extrapolate,
}

/// Map `value` from `input` breakpoints to `output` breakpoints.
///
/// `input` must be non-decreasing and the same length as `output`. A single
/// breakpoint maps everything to its output; empty or mismatched ranges leave
/// `value` unchanged. Repeated breakpoints resolve to the later output.
pub fn interpolate(
    value: f32,
    input: &[f32],
    output: &[f32],
    clamp: ClampPolicy,
) -> f32 {
    if input.len() != output.len() || input.is_empty() {
        log::debug!(
            "interpolate: mismatched ranges ({} inputs, {} outputs)",
            input.len(),
            output.len()
        );
        return value;
    }
    if input.len() == 1 {
        return output[0];
    }

    let last = input.len() - 1;
    if clamp == ClampPolicy::Clamp {
        if value < input[0] {
            return output[0];
        }
        if value > input[last] {
            return output[last];
        }
    }

    let segment = (0..last)
        .find(|&i| value <= input[i + 1])
        .unwrap_or(last - 1);

    let (a, b) = (input[segment], input[segment + 1]);
    let (from, to) = (output[segment], output[segment + 1]);
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        return to;
    }

    let t = (value - a) / span;
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn maps_inside_segments() {
        let input = [0.0, 0.25, 0.5, 0.6];
        let output = [100.0, 0.0, 0.0, -100.0];
        assert!(approx(
            interpolate(0.125, &input, &output, ClampPolicy::Clamp),
            50.0
        ));
        assert!(approx(
            interpolate(0.4, &input, &output, ClampPolicy::Clamp),
            0.0
        ));
        assert!(approx(
            interpolate(0.55, &input, &output, ClampPolicy::Clamp),
            -50.0
        ));
    }

    #[test]
    fn clamps_outside_range() {
        let input = [0.0, 1000.0];
        let output = [0.0, 5.0];
        assert_eq!(interpolate(-10.0, &input, &output, ClampPolicy::Clamp), 0.0);
        assert_eq!(interpolate(3000.0, &input, &output, ClampPolicy::Clamp), 5.0);
    }

    #[test]
    fn extrapolates_past_both_ends() {
        let input = [0.0, 1000.0];
        let output = [0.0, 5.0];
        assert!(approx(
            interpolate(2000.0, &input, &output, ClampPolicy::Extrapolate),
            10.0
        ));
        assert!(approx(
            interpolate(-400.0, &input, &output, ClampPolicy::Extrapolate),
            -2.0
        ));
    }

    #[test]
    fn repeated_breakpoints_take_later_output() {
        let input = [0.5, 0.5, 0.75, 0.75];
        let output = [100.0, 0.0, 0.0, -100.0];
        assert_eq!(interpolate(0.5, &input, &output, ClampPolicy::Clamp), 0.0);
        assert_eq!(interpolate(0.75, &input, &output, ClampPolicy::Clamp), 0.0);
        assert_eq!(interpolate(0.8, &input, &output, ClampPolicy::Clamp), -100.0);
    }

    #[test]
    fn degenerate_ranges() {
        assert_eq!(interpolate(3.0, &[], &[], ClampPolicy::Clamp), 3.0);
        assert_eq!(interpolate(3.0, &[1.0], &[7.0], ClampPolicy::Clamp), 7.0);
        assert_eq!(
            interpolate(3.0, &[0.0, 1.0], &[1.0], ClampPolicy::Clamp),
            3.0
        );
    }
}
