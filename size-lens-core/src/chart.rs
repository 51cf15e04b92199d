use plotters::prelude::*;
use size_lens_common::{Result, SizeLensError};
use std::path::Path;

use crate::histogram::{Bucket, Histogram};

pub const CHART_TITLE: &str = "Message Size Distribution";
pub const X_AXIS_LABEL: &str = "Message Size (bytes)";
pub const Y_AXIS_LABEL: &str = "Count";

/// Self-contained description of one chart, built per call and discarded
/// after rendering. All title/label/limit state lives on this value, so
/// nothing is shared between renders.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// explicit x-axis clamp; None means auto-scaling with a small margin
    pub x_range: Option<(f64, f64)>,
    pub width: u32,
    pub height: u32,
    pub bars: Vec<Bucket>,
}

impl ChartSpec {
    pub fn for_histogram(
        hist: &Histogram,
        fix_axis_range: bool,
        width: u32,
        height: u32,
    ) -> ChartSpec {
        ChartSpec {
            title: CHART_TITLE.into(),
            x_label: X_AXIS_LABEL.into(),
            y_label: Y_AXIS_LABEL.into(),
            x_range: fix_axis_range.then_some((hist.min as f64, hist.max as f64)),
            width,
            height,
            bars: hist.buckets.clone(),
        }
    }

    fn x_bounds(&self) -> (f64, f64) {
        let (mut lo, mut hi) = match self.x_range {
            Some(range) => range,
            None => {
                let lo = self.bars.first().map(|b| b.lower).unwrap_or(0.0);
                let hi = self.bars.last().map(|b| b.upper).unwrap_or(1.0);
                let pad = 0.05 * (hi - lo);
                (lo - pad, hi + pad)
            }
        };
        if hi - lo <= 0.0 {
            // a zero-width axis cannot be drawn; widen around the point
            lo -= 0.5;
            hi += 0.5;
        }
        (lo, hi)
    }

    /// Render the chart as a PNG at `out_path`, overwriting any existing
    /// file. Every backend failure surfaces as a write error carrying the
    /// destination path.
    pub fn render(&self, out_path: &Path) -> Result<()> {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(SizeLensError::Write {
                    path: out_path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                });
            }
        }
        let write_err = |reason: String| SizeLensError::Write {
            path: out_path.to_path_buf(),
            reason,
        };
        let (x0, x1) = self.x_bounds();
        let y_max = self
            .bars
            .iter()
            .map(|b| b.count as f64)
            .fold(0.0f64, f64::max)
            .max(1.0);
        let root = BitMapBackend::new(out_path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| write_err(e.to_string()))?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x0..x1, 0.0..(y_max * 1.1))
            .map_err(|e| write_err(e.to_string()))?;
        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(|e| write_err(e.to_string()))?;
        for bar in &self.bars {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(bar.lower, 0.0), (bar.upper, bar.count as f64)],
                    BLUE.mix(0.6).filled(),
                )))
                .map_err(|e| write_err(e.to_string()))?;
        }
        root.present().map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}
