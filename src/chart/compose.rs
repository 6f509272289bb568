use std::iter;

use plotters::{
    coord::Shift,
    prelude::{
        BLUE, ChartBuilder, Circle, Cross, DrawingArea, DrawingBackend, RGBColor, Rectangle,
        WHITE,
    },
    style::{Color, IntoFont},
};

use crate::{
    chart::{TITLE_FONT_FAMILY, court::draw_court, init_title_font, render_err},
    errors::AppError,
    models::{ShotEvent, ShotOutcome},
};

/// Figure size in inches.
pub const FIGURE_SIZE: (f64, f64) = (12.0, 11.0);
pub const TITLE_FONT_PT: f64 = 18.0;

// Marker sizes are areas in pt², widths in pt.
const MISSED_MARKER_AREA: f64 = 300.0;
const MADE_MARKER_AREA: f64 = 100.0;
const MARKER_LINE_WIDTH: f64 = 3.0;

const MISSED_COLOR: RGBColor = RGBColor(255, 0, 0);
const MADE_COLOR: RGBColor = RGBColor(0, 128, 0);

// Subplot margins as a fraction of the canvas.
const MARGIN_LEFT: f64 = 0.125;
const MARGIN_RIGHT: f64 = 0.1;
const MARGIN_TOP: f64 = 0.12;
const MARGIN_BOTTOM: f64 = 0.11;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub xlim: (f64, f64),
    /// First value sits at the bottom of the plot.
    pub ylim: (f64, f64),
    pub line_color: RGBColor,
    pub court_line_width: f64,
    pub flip_court: bool,
    pub despine: bool,
    pub dpi: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            xlim: (-250.0, 250.0),
            ylim: (422.5, -47.5),
            line_color: BLUE,
            court_line_width: 2.0,
            flip_court: false,
            despine: false,
            dpi: 100,
        }
    }
}

impl ChartOptions {
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (FIGURE_SIZE.0 * dpi).round() as u32,
            (FIGURE_SIZE.1 * dpi).round() as u32,
        )
    }

    /// Axis ranges as drawn, after `flip_court`.
    pub fn axis_ranges(&self) -> ((f64, f64), (f64, f64)) {
        if self.flip_court {
            ((self.xlim.1, self.xlim.0), (self.ylim.1, self.ylim.0))
        } else {
            (self.xlim, self.ylim)
        }
    }

    fn points_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }

    fn stroke_px(&self, pt: f64) -> u32 {
        self.points_to_px(pt).round().max(1.0) as u32
    }

    fn in_bounds(&self, (x, y): (f64, f64)) -> bool {
        let within = |v: f64, (a, b): (f64, f64)| v >= a.min(b) && v <= a.max(b);
        within(x, self.xlim) && within(y, self.ylim)
    }
}

/// Shot locations split by outcome. Unrecognised event labels are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotPartition {
    pub made: Vec<(f64, f64)>,
    pub missed: Vec<(f64, f64)>,
}

impl ShotPartition {
    pub fn from_shots(shots: &[ShotEvent]) -> Self {
        let mut partition = Self::default();
        for shot in shots {
            match shot.outcome() {
                Some(ShotOutcome::Made) => partition.made.push((shot.loc_x, shot.loc_y)),
                Some(ShotOutcome::Missed) => partition.missed.push((shot.loc_x, shot.loc_y)),
                None => {}
            }
        }
        partition
    }

    pub fn attempts(&self) -> usize {
        self.made.len() + self.missed.len()
    }

    /// Field-goal percentage, or `None` with no attempts.
    pub fn percentage(&self) -> Option<f64> {
        match self.attempts() {
            0 => None,
            n => Some(self.made.len() as f64 * 100.0 / n as f64),
        }
    }
}

/// A composed chart, ready to be drawn onto any plotters backend.
#[derive(Debug, Clone)]
pub struct ShotChart {
    pub title: String,
    pub partition: ShotPartition,
    pub options: ChartOptions,
}

impl ShotChart {
    pub fn compose(shots: &[ShotEvent], title: impl Into<String>, options: ChartOptions) -> Self {
        Self {
            title: title.into(),
            partition: ShotPartition::from_shots(shots),
            options,
        }
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.options.canvas_size()
    }

    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), AppError> {
        let opts = &self.options;
        let (width, height) = root.dim_in_pixel();
        root.fill(&WHITE).map_err(render_err)?;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin_left((width as f64 * MARGIN_LEFT) as u32)
            .margin_right((width as f64 * MARGIN_RIGHT) as u32)
            .margin_top((height as f64 * MARGIN_TOP) as u32)
            .margin_bottom((height as f64 * MARGIN_BOTTOM) as u32);
        if !self.title.is_empty() {
            init_title_font(None)?;
            let size = opts.points_to_px(TITLE_FONT_PT);
            builder.caption(&self.title, (TITLE_FONT_FAMILY, size).into_font());
        }

        let (x_range, y_range) = opts.axis_ranges();
        let mut chart = builder
            .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
            .map_err(render_err)?;

        let court_px = opts.stroke_px(opts.court_line_width);
        draw_court(&mut chart, opts.line_color, court_px)?;

        let marker_px = opts.stroke_px(MARKER_LINE_WIDTH);
        let missed_half = (opts.points_to_px(MISSED_MARKER_AREA.sqrt()) / 2.0).round() as i32;
        let made_radius = (opts.points_to_px(MADE_MARKER_AREA.sqrt()) / 2.0).round() as i32;

        chart
            .draw_series(
                self.partition
                    .missed
                    .iter()
                    .copied()
                    .filter(|p| opts.in_bounds(*p))
                    .map(|p| Cross::new(p, missed_half, MISSED_COLOR.stroke_width(marker_px))),
            )
            .map_err(render_err)?;

        chart
            .draw_series(
                self.partition
                    .made
                    .iter()
                    .copied()
                    .filter(|p| opts.in_bounds(*p))
                    .map(|p| Circle::new(p, made_radius, MADE_COLOR.stroke_width(marker_px))),
            )
            .map_err(render_err)?;

        if !opts.despine {
            let frame = Rectangle::new(
                [(x_range.0, y_range.0), (x_range.1, y_range.1)],
                opts.line_color.stroke_width(court_px),
            );
            chart.draw_series(iter::once(frame)).map_err(render_err)?;
        }

        Ok(())
    }
}
