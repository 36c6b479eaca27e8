use anyhow::Result;

use crate::Sample;

/// Intervals shorter than this (in seconds) are too short to divide by.
pub const MIN_INTERVAL: f64 = 0.0001;

/// Average speed per interval, plus the intervals that couldn't be measured.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedEstimate {
    /// Meters per second over the interval ending at each sample. The first entry is always 0.
    pub speeds: Vec<f64>,
    /// Indices where the interval was too short, and the speed is just a 0 placeholder
    pub degenerate: Vec<usize>,
}

/// Backward-difference speed from the odometer. Acceleration isn't used.
pub fn get_speeds(samples: &[Sample]) -> Result<SpeedEstimate> {
    if samples.is_empty() {
        bail!("Can't estimate speeds without any samples");
    }

    let mut speeds = vec![0.0];
    let mut degenerate = Vec::new();
    // Only advanced over intervals we could measure, so no displacement is lost when a pair of
    // samples share a timestamp
    let mut last = samples[0];
    for (idx, sample) in samples.iter().enumerate().skip(1) {
        let dt = sample.timestamp - last.timestamp;
        if dt < MIN_INTERVAL {
            warn!(
                "Interval ending at sample {idx} is only {dt}s long (t = {}), using speed 0",
                sample.timestamp
            );
            degenerate.push(idx);
            speeds.push(0.0);
            continue;
        }
        let dx = sample.displacement - last.displacement;
        speeds.push(dx / dt);
        last = *sample;
    }

    if !degenerate.is_empty() {
        debug!(
            "{} of {} intervals were degenerate",
            degenerate.len(),
            samples.len() - 1
        );
    }
    Ok(SpeedEstimate { speeds, degenerate })
}
