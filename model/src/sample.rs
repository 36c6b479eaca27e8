use anyhow::{Context, Result};
use serde::Deserialize;

/// One raw dead-reckoning record.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Sample {
    /// Seconds
    pub timestamp: f64,
    /// Total distance travelled so far, in meters, from the odometer
    pub displacement: f64,
    /// Radians per second. Positive is counter-clockwise.
    pub yaw_rate: f64,
    /// Meters per second squared, along the direction of motion. Nothing reads this yet.
    pub acceleration: f64,
}

impl Sample {
    pub fn new(timestamp: f64, displacement: f64, yaw_rate: f64, acceleration: f64) -> Self {
        Self {
            timestamp,
            displacement,
            yaw_rate,
            acceleration,
        }
    }
}

impl From<(f64, f64, f64, f64)> for Sample {
    fn from((timestamp, displacement, yaw_rate, acceleration): (f64, f64, f64, f64)) -> Self {
        Self::new(timestamp, displacement, yaw_rate, acceleration)
    }
}

/// Reads samples from CSV with a `timestamp,displacement,yaw_rate,acceleration` header.
pub fn load_samples<R: std::io::Read>(reader: R) -> Result<Vec<Sample>> {
    let mut samples: Vec<Sample> = Vec::new();
    for (idx, rec) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let sample: Sample = rec.with_context(|| format!("sample record {idx}"))?;

        if let Some(prev) = samples.last() {
            if prev.timestamp > sample.timestamp {
                bail!(
                    "Samples out-of-order at record {idx}: {} then {}",
                    prev.timestamp,
                    sample.timestamp
                );
            }
            // The odometer shouldn't run backwards, but one bad reading isn't worth rejecting
            // the whole file over
            if prev.displacement > sample.displacement {
                warn!(
                    "Displacement decreases at record {idx}: {} then {}",
                    prev.displacement, sample.displacement
                );
            }
        }

        samples.push(sample);
    }

    if samples.is_empty() {
        bail!("No samples in input");
    }
    Ok(samples)
}
