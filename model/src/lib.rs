#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod heading;
mod position;
mod render;
mod sample;
mod speed;
mod summary;

use anyhow::Result;

pub use self::heading::{get_headings, wrap_angle};
pub use self::position::get_x_y;
pub use self::render::{show_x_y, Pivot, Plotter, QuiverField, QuiverStyle, ScaleKey};
pub use self::sample::{load_samples, Sample};
pub use self::speed::{get_speeds, SpeedEstimate, MIN_INTERVAL};
pub use self::summary::Summary;

/// Everything derived from one sequence of samples. Every series has one entry per sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Reconstruction {
    pub speed: SpeedEstimate,
    /// Radians in [0, 2π)
    pub headings: Vec<f64>,
    /// Meters from the starting point
    pub positions: Vec<(f64, f64)>,
}

impl Reconstruction {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speed.speeds
    }

    /// Draws every `increment`-th position with an arrow for the heading there
    pub fn show<P: Plotter + ?Sized>(
        &self,
        plotter: &mut P,
        increment: usize,
        style: &QuiverStyle,
    ) -> Result<()> {
        show_x_y(plotter, &self.positions, &self.headings, increment, style)
    }
}

/// Runs the whole pipeline. Speed and heading are independent; position needs both.
pub fn reconstruct(samples: &[Sample]) -> Result<Reconstruction> {
    let speed = get_speeds(samples)?;
    let headings = get_headings(samples)?;
    let positions = get_x_y(samples, &speed.speeds, &headings)?;
    Ok(Reconstruction {
        speed,
        headings,
        positions,
    })
}
