use std::f64::consts::TAU;

use plotters::{
    coord::types::RangedCoordf64,
    prelude::{Cartesian2d, ChartContext, DrawingBackend, PathElement, RGBColor},
    style::Color,
};

use crate::{chart::render_err, errors::AppError};

const ARC_SAMPLES: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourtShape {
    Circle {
        center: (f64, f64),
        radius: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
    },
    Rect {
        origin: (f64, f64),
        width: f64,
        height: f64,
    },
    /// Angles in degrees, counter-clockwise from +x.
    Arc {
        center: (f64, f64),
        diameter: f64,
        theta1: f64,
        theta2: f64,
    },
}

/// Half-court lines in hoop-centred coordinates, in drawing order.
pub fn court_shapes() -> Vec<CourtShape> {
    vec![
        // hoop
        CourtShape::Circle {
            center: (0.0, 0.0),
            radius: 7.5,
        },
        // backboard
        CourtShape::Line {
            from: (-30.0, -12.5),
            to: (30.0, -12.5),
        },
        // paint
        CourtShape::Rect {
            origin: (-80.0, -47.5),
            width: 160.0,
            height: 190.0,
        },
        CourtShape::Rect {
            origin: (-60.0, -47.5),
            width: 120.0,
            height: 190.0,
        },
        // free throw
        CourtShape::Arc {
            center: (0.0, 142.5),
            diameter: 120.0,
            theta1: 0.0,
            theta2: 180.0,
        },
        // three point line
        CourtShape::Line {
            from: (-220.0, -47.5),
            to: (-220.0, 92.5),
        },
        CourtShape::Line {
            from: (220.0, -47.5),
            to: (220.0, 92.5),
        },
        CourtShape::Arc {
            center: (0.0, 0.0),
            diameter: 475.0,
            theta1: 22.0,
            theta2: 158.0,
        },
    ]
}

impl CourtShape {
    /// Outline as a polyline in data coordinates.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        match *self {
            CourtShape::Circle { center, radius } => sample_arc(center, radius, 0.0, TAU),
            CourtShape::Line { from, to } => vec![from, to],
            CourtShape::Rect {
                origin: (x, y),
                width,
                height,
            } => vec![
                (x, y),
                (x + width, y),
                (x + width, y + height),
                (x, y + height),
                (x, y),
            ],
            CourtShape::Arc {
                center,
                diameter,
                theta1,
                theta2,
            } => sample_arc(center, diameter / 2.0, theta1.to_radians(), theta2.to_radians()),
        }
    }
}

fn sample_arc(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    (0..=ARC_SAMPLES)
        .map(|i| {
            let t = start + (end - start) * i as f64 / ARC_SAMPLES as f64;
            (center.0 + radius * t.cos(), center.1 + radius * t.sin())
        })
        .collect()
}

pub fn draw_court<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    color: RGBColor,
    line_width: u32,
) -> Result<(), AppError> {
    let style = color.stroke_width(line_width);
    chart
        .draw_series(
            court_shapes()
                .iter()
                .map(|shape| PathElement::new(shape.outline(), style)),
        )
        .map_err(render_err)?;
    Ok(())
}
