use std::f64::consts::TAU;

use anyhow::Result;

use crate::Sample;

/// Integrates yaw rate into an absolute heading in [0, 2π) radians.
///
/// Each interval uses the yaw rate sampled at its end (a rectangle rule, not trapezoidal).
pub fn get_headings(samples: &[Sample]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        bail!("Can't integrate headings without any samples");
    }

    let mut theta = 0.0;
    let mut headings = vec![theta];
    for pair in samples.windows(2) {
        let dt = pair[1].timestamp - pair[0].timestamp;
        theta = wrap_angle(theta + pair[1].yaw_rate * dt);
        headings.push(theta);
    }
    Ok(headings)
}

/// Wraps any finite angle into [0, 2π). Non-finite input comes back as NaN.
pub fn wrap_angle(rads: f64) -> f64 {
    let wrapped = rads.rem_euclid(TAU);
    // A tiny negative input rounds up to exactly 2π
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
