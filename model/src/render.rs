use anyhow::Result;

/// Arrows to draw: one origin and one unit direction each.
#[derive(Clone, Debug, PartialEq)]
pub struct QuiverField {
    pub origins: Vec<(f64, f64)>,
    pub directions: Vec<(f64, f64)>,
    /// Only every `stride`-th position made it into the field
    pub stride: usize,
}

impl QuiverField {
    /// Samples every `stride`-th position (starting with the first) and points an arrow along
    /// the heading there.
    pub fn new(positions: &[(f64, f64)], headings: &[f64], stride: usize) -> Result<Self> {
        if positions.len() != headings.len() {
            bail!(
                "{} positions, but {} headings",
                positions.len(),
                headings.len()
            );
        }
        if stride == 0 {
            bail!("Arrow stride must be positive");
        }

        let origins = positions.iter().step_by(stride).cloned().collect();
        let directions = headings
            .iter()
            .step_by(stride)
            .map(|theta| (theta.cos(), theta.sin()))
            .collect();
        Ok(Self {
            origins,
            directions,
            stride,
        })
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn arrows(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.origins
            .iter()
            .cloned()
            .zip(self.directions.iter().cloned())
    }
}

/// Which part of the arrow sits on its origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    Tail,
    Middle,
    Tip,
}

/// A reference arrow drawn once, explaining the scale
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleKey {
    /// In [0, 1] fractions of the whole figure, from the bottom-left
    pub figure_pos: (f64, f64),
    pub length: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuiverStyle {
    pub pivot: Pivot,
    pub key: Option<ScaleKey>,
}

impl Default for QuiverStyle {
    fn default() -> Self {
        Self {
            pivot: Pivot::Tip,
            key: Some(ScaleKey {
                figure_pos: (0.9, 0.9),
                length: 2.0,
                label: "1 m/s".to_string(),
            }),
        }
    }
}

/// Something that can actually draw a quiver plot.
pub trait Plotter {
    fn draw_quiver(&mut self, field: &QuiverField, style: &QuiverStyle) -> Result<()>;
}

/// Plots position with heading arrows, drawing every `increment`-th arrow.
pub fn show_x_y<P: Plotter + ?Sized>(
    plotter: &mut P,
    positions: &[(f64, f64)],
    headings: &[f64],
    increment: usize,
    style: &QuiverStyle,
) -> Result<()> {
    let field = QuiverField::new(positions, headings, increment)?;
    debug!("Plotting {} of {} positions", field.len(), positions.len());
    plotter.draw_quiver(&field, style)
}
