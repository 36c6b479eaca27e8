use anyhow::Result;

use crate::Sample;

/// Dead-reckons (x, y) in meters from the origin, using speeds and headings computed over the
/// same samples.
pub fn get_x_y(samples: &[Sample], speeds: &[f64], headings: &[f64]) -> Result<Vec<(f64, f64)>> {
    if samples.is_empty() {
        bail!("Can't integrate positions without any samples");
    }
    if speeds.len() != samples.len() || headings.len() != samples.len() {
        bail!(
            "{} samples, but {} speeds and {} headings",
            samples.len(),
            speeds.len(),
            headings.len()
        );
    }

    let mut x = 0.0;
    let mut y = 0.0;
    let mut positions = vec![(x, y)];
    for (idx, pair) in samples.windows(2).enumerate() {
        let i = idx + 1;
        let dt = pair[1].timestamp - pair[0].timestamp;
        let dist = speeds[i] * dt;
        // The heading is wrapped, but sin and cos don't care
        let (sin, cos) = headings[i].sin_cos();
        x += dist * cos;
        y += dist * sin;
        positions.push((x, y));
    }
    Ok(positions)
}
