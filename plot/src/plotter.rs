//! Draws quiver plots to SVG files.

use std::path::PathBuf;

use anyhow::Result;
use geom::{Bounds, Pt2D};
use svg::node::element::{Definitions, Group, Line, Marker, Path, Rectangle, Text};
use svg::Document;

use model::{Pivot, Plotter, QuiverField, QuiverStyle};

const ARROWHEAD_ID: &str = "arrowhead";

#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per meter
    pub scale: f64,
    /// Pixels around the arrows
    pub padding: f64,
    pub stroke_width: f64,
    pub arrow_color: String,
    pub background: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            padding: 40.0,
            stroke_width: 1.5,
            arrow_color: "#2222AA".to_string(),
            background: "white".to_string(),
        }
    }
}

/// Renders each quiver plot to the same SVG file, overwriting the previous one.
pub struct SvgPlotter {
    path: PathBuf,
    config: SvgConfig,
}

impl SvgPlotter {
    pub fn new<P: Into<PathBuf>>(path: P, config: SvgConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn render(&self, field: &QuiverField, style: &QuiverStyle) -> Document {
        // Arrows are built in world space first, so the bounds cover them entirely
        let mut arrows = Vec::new();
        let mut skipped = 0;
        for (origin, dir) in field.arrows() {
            // Arrows are measured in meters, so a unit direction is drawn 1m long
            match arrow_endpoints(origin, dir, 1.0, style.pivot) {
                Some(pair) => arrows.push(pair),
                None => {
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!(
                "Skipping {skipped} of {} arrows that aren't finite",
                field.len()
            );
        }

        let bounds = finite_bounds(arrows.iter().flat_map(|(a, b)| [*a, *b]));
        let scale = self.config.scale;
        let pad = self.config.padding;
        let width = bounds.width() * scale + 2.0 * pad;
        let height = bounds.height() * scale + 2.0 * pad;
        // SVG's y axis points down
        let to_screen = |(x, y): (f64, f64)| {
            (
                (x - bounds.min_x) * scale + pad,
                (bounds.max_y - y) * scale + pad,
            )
        };

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(self.arrowhead_definition())
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", self.config.background.as_str()),
            );

        let mut group = Group::new().set("id", "quiver");
        for (start, end) in arrows {
            group = group.add(self.arrow(to_screen(start), to_screen(end)));
        }
        doc = doc.add(group);

        if let Some(ref key) = style.key {
            let (fx, fy) = key.figure_pos;
            let start = (fx * width, (1.0 - fy) * height);
            // The key sits at its tail, with the label to the east
            let end = (start.0 + key.length * scale, start.1);
            doc = doc.add(
                Group::new()
                    .set("id", "key")
                    .add(self.arrow(start, end))
                    .add(
                        Text::new(key.label.as_str())
                            .set("x", end.0 + 6.0)
                            .set("y", end.1 + 4.0)
                            .set("font-size", 12)
                            .set("font-family", "sans-serif"),
                    ),
            );
        }

        doc
    }

    fn arrow(&self, start: (f64, f64), end: (f64, f64)) -> Line {
        Line::new()
            .set("x1", start.0)
            .set("y1", start.1)
            .set("x2", end.0)
            .set("y2", end.1)
            .set("stroke", self.config.arrow_color.as_str())
            .set("stroke-width", self.config.stroke_width)
            .set("marker-end", format!("url(#{ARROWHEAD_ID})"))
    }

    fn arrowhead_definition(&self) -> Definitions {
        Definitions::new().add(
            Marker::new()
                .set("id", ARROWHEAD_ID)
                .set("markerWidth", 6)
                .set("markerHeight", 6)
                .set("refX", 5)
                .set("refY", 3)
                .set("orient", "auto")
                .add(
                    Path::new()
                        .set("d", "M0,0 L6,3 L0,6 Z")
                        .set("fill", self.config.arrow_color.as_str()),
                ),
        )
    }
}

impl Plotter for SvgPlotter {
    fn draw_quiver(&mut self, field: &QuiverField, style: &QuiverStyle) -> Result<()> {
        let doc = self.render(field, style);
        fs_err::write(&self.path, doc.to_string())?;
        Ok(())
    }
}

/// Where an arrow starts and ends in world space. None if anything isn't finite.
fn arrow_endpoints(
    origin: (f64, f64),
    dir: (f64, f64),
    length: f64,
    pivot: Pivot,
) -> Option<((f64, f64), (f64, f64))> {
    if ![origin.0, origin.1, dir.0, dir.1]
        .iter()
        .all(|v| v.is_finite())
    {
        return None;
    }
    let offset = match pivot {
        Pivot::Tail => 0.0,
        Pivot::Middle => 0.5,
        Pivot::Tip => 1.0,
    };
    let start = (
        origin.0 - offset * length * dir.0,
        origin.1 - offset * length * dir.1,
    );
    let end = (start.0 + length * dir.0, start.1 + length * dir.1);
    Some((start, end))
}

fn finite_bounds<I: Iterator<Item = (f64, f64)>>(pts: I) -> Bounds {
    let mut bounds = Bounds::new();
    let mut any = false;
    for (x, y) in pts {
        if x.is_finite() && y.is_finite() {
            bounds.update(Pt2D::new(x, y));
            any = true;
        }
    }
    if !any {
        // Avoid a degenerate canvas when there's nothing to draw
        return Bounds::from(&[Pt2D::zero(), Pt2D::new(1.0, 1.0)]);
    }
    bounds
}
