//! End-to-end checks: load samples, reconstruct the trajectory, hand it to a plotter.

use std::f64::consts::TAU;

use anyhow::Result;
use approx::assert_relative_eq;

use model::{
    get_headings, get_speeds, get_x_y, load_samples, reconstruct, Plotter, QuiverField,
    QuiverStyle, Sample, Summary,
};

const EXAMPLE: &str = include_str!("../../data/trajectory_example.csv");

fn example() -> Vec<Sample> {
    load_samples(EXAMPLE.as_bytes()).unwrap()
}

/// Samples at a fixed interval with constant speed and yaw rate
fn constant_motion(n: usize, dt: f64, speed: f64, yaw_rate: f64) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let t = i as f64 * dt;
            if i == 0 {
                Sample::new(0.0, 0.0, 0.0, 0.0)
            } else {
                Sample::new(t, speed * t, yaw_rate, 0.0)
            }
        })
        .collect()
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(QuiverField, QuiverStyle)>,
}

impl Plotter for Recorder {
    fn draw_quiver(&mut self, field: &QuiverField, style: &QuiverStyle) -> Result<()> {
        self.calls.push((field.clone(), style.clone()));
        Ok(())
    }
}

#[test]
fn example_lengths_and_initial_state() {
    let samples = example();
    let result = reconstruct(&samples).unwrap();
    assert_eq!(samples.len(), 15);
    assert_eq!(result.speeds().len(), samples.len());
    assert_eq!(result.headings.len(), samples.len());
    assert_eq!(result.positions.len(), samples.len());
    assert_eq!(result.speeds()[0], 0.0);
    assert_eq!(result.headings[0], 0.0);
    assert_eq!(result.positions[0], (0.0, 0.0));
}

#[test]
fn example_speeds_and_headings() {
    let samples = example();
    let speeds = get_speeds(&samples).unwrap().speeds;
    let headings = get_headings(&samples).unwrap();
    for (actual, expected) in speeds.iter().zip([0.0, 0.0, 4.9, 9.8, 14.7, 19.6]) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
    // Constant speed once it stops accelerating
    for speed in &speeds[6..] {
        assert_relative_eq!(*speed, 19.6, epsilon = 1e-9);
    }
    for heading in &headings[..6] {
        assert_eq!(*heading, 0.0);
    }
    for heading in &headings {
        assert!((0.0..TAU).contains(heading));
    }
}

#[test]
fn example_accelerates_then_turns_right() {
    let result = reconstruct(&example()).unwrap();
    // Straight along x while the yaw rate is 0
    for (idx, (x, y)) in result.positions[..6].iter().enumerate() {
        assert_eq!(*y, 0.0, "y at {idx}");
        assert!(*x >= 0.0);
    }
    assert_relative_eq!(result.positions[5].0, 12.25, epsilon = 1e-9);
    // A negative yaw rate turns clockwise, so y goes negative
    let (_, y) = result.positions[6];
    assert!(y < 0.0);
}

#[test]
fn zero_yaw_rate_stays_on_the_x_axis() {
    let displacements = [0.0, 0.5, 0.5, 2.0, 4.5, 4.6, 9.0];
    let samples: Vec<Sample> = displacements
        .iter()
        .enumerate()
        .map(|(i, disp)| Sample::new(i as f64 * 0.1, *disp, 0.0, 0.0))
        .collect();
    let result = reconstruct(&samples).unwrap();
    for (i, (x, y)) in result.positions.iter().enumerate() {
        assert_eq!(result.headings[i], 0.0);
        assert_eq!(*y, 0.0);
        assert_relative_eq!(*x, displacements[i], epsilon = 1e-9);
    }
}

#[test]
fn full_circle_returns_to_origin() {
    let n = 1001;
    let dt = 0.01;
    let yaw_rate = TAU / ((n - 1) as f64 * dt);
    let samples = constant_motion(n, dt, 2.0, yaw_rate);
    let result = reconstruct(&samples).unwrap();

    let (x, y) = *result.positions.last().unwrap();
    assert_relative_eq!(x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(y, 0.0, epsilon = 1e-6);

    // Halfway around, we're as far from the start as the circle's diameter
    let radius = 2.0 / yaw_rate;
    let (x, y) = result.positions[(n - 1) / 2];
    assert_relative_eq!(x.hypot(y), 2.0 * radius, epsilon = 0.05);
    for heading in &result.headings {
        assert!((0.0..TAU).contains(heading));
    }
}

#[test]
fn repeated_timestamp_is_flagged_not_fatal() {
    let samples = vec![
        Sample::new(0.0, 0.0, 0.0, 0.0),
        Sample::new(0.5, 1.0, 0.1, 0.0),
        Sample::new(0.5, 1.0, 0.1, 0.0),
        Sample::new(1.0, 2.0, 0.1, 0.0),
    ];
    let result = reconstruct(&samples).unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(result.speed.degenerate, vec![2]);
    assert_eq!(result.speeds()[2], 0.0);
    assert!(result
        .positions
        .iter()
        .all(|(x, y)| x.is_finite() && y.is_finite()));
}

#[test]
fn mismatched_series_are_rejected() {
    let samples = example();
    let speeds = get_speeds(&samples).unwrap().speeds;
    let headings = get_headings(&samples).unwrap();
    assert!(get_x_y(&samples, &speeds[1..], &headings).is_err());
    assert!(get_x_y(&samples[1..], &speeds, &headings).is_err());
}

#[test]
fn empty_input_is_rejected() {
    assert!(reconstruct(&[]).is_err());
}

#[test]
fn show_passes_decimated_arrows_to_plotter() {
    let result = reconstruct(&example()).unwrap();
    let mut plotter = Recorder::default();
    result.show(&mut plotter, 5, &QuiverStyle::default()).unwrap();

    assert_eq!(plotter.calls.len(), 1);
    let (field, style) = &plotter.calls[0];
    assert_eq!(field.len(), 3);
    assert_eq!(field.origins[1], result.positions[5]);
    assert_eq!(field.origins[2], result.positions[10]);
    let (dx, dy) = field.directions[2];
    assert_relative_eq!(dx, result.headings[10].cos());
    assert_relative_eq!(dy, result.headings[10].sin());
    assert_eq!(style, &QuiverStyle::default());

    assert!(result.show(&mut plotter, 0, &QuiverStyle::default()).is_err());
    assert_eq!(plotter.calls.len(), 1);
}

#[test]
fn summary_of_example() {
    let samples = example();
    let summary = Summary::new(&samples, &reconstruct(&samples).unwrap());
    assert_relative_eq!(summary.duration.unwrap().inner_seconds(), 3.5, epsilon = 1e-3);
    assert_relative_eq!(summary.distance.unwrap().inner_meters(), 56.35, epsilon = 1e-3);
    assert_relative_eq!(
        summary.top_speed.inner_meters_per_second(),
        19.6,
        epsilon = 1e-3
    );
    assert!(summary.final_pos.is_some());
    assert_eq!(summary.degenerate_intervals, 0);
}
