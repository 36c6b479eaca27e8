use geom::{Angle, Distance, Duration, Pt2D, Speed};

use crate::{Reconstruction, Sample};

/// Headline numbers about one reconstructed trajectory. geom's units reject NaN and infinity, so
/// any non-finite values are left out.
#[derive(Clone, Debug)]
pub struct Summary {
    pub num_samples: usize,
    /// None if the total overflows
    pub duration: Option<Duration>,
    pub distance: Option<Distance>,
    pub top_speed: Speed,
    /// None if the final position isn't finite
    pub final_pos: Option<Pt2D>,
    pub final_heading: Option<Angle>,
    pub degenerate_intervals: usize,
}

impl Summary {
    pub fn new(samples: &[Sample], reconstruction: &Reconstruction) -> Self {
        let mut seconds: f64 = 0.0;
        let mut meters: f64 = 0.0;
        let mut top_speed: f64 = 0.0;
        let speeds = reconstruction.speeds().iter().skip(1);
        for (pair, speed) in samples.windows(2).zip(speeds) {
            let dt = pair[1].timestamp - pair[0].timestamp;
            if dt.is_finite() {
                seconds += dt;
            }
            let dist = (speed * dt).abs();
            if dist.is_finite() {
                meters += dist;
            }
            if speed.is_finite() {
                top_speed = top_speed.max(speed.abs());
            }
        }

        let final_pos = reconstruction
            .positions
            .last()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| Pt2D::new(*x, *y));
        let final_heading = reconstruction
            .headings
            .last()
            .filter(|theta| theta.is_finite())
            .map(|theta| Angle::degrees(theta.to_degrees()));

        Self {
            num_samples: samples.len(),
            duration: finite(seconds).map(Duration::seconds),
            distance: finite(meters).map(Distance::meters),
            top_speed: Speed::meters_per_second(top_speed),
            final_pos,
            final_heading,
            degenerate_intervals: reconstruction.speed.degenerate.len(),
        }
    }
}

// Each term summed is finite, but the total can still overflow
fn finite(x: f64) -> Option<f64> {
    if x.is_finite() {
        Some(x)
    } else {
        None
    }
}
