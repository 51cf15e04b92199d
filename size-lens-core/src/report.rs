use serde::{Deserialize, Serialize};
use size_lens_common::{Config, Result};
use std::path::Path;

use crate::chart::ChartSpec;
use crate::decode::{load_samples, Endianness, SampleFileInfo};
use crate::export::print_summary;
use crate::histogram::Histogram;
use crate::stats::{summarize, SampleSummary};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub bucket_count: usize,
    pub fix_axis_range: bool,
    pub endianness: Endianness,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> ReportOptions {
        ReportOptions {
            bucket_count: config.report.bucket_count,
            fix_axis_range: config.report.fix_axis_range,
            endianness: config.report.endianness.parse().unwrap_or_default(),
            chart_width: config.chart.width,
            chart_height: config.chart.height,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub info: SampleFileInfo,
    pub summary: SampleSummary,
    pub histogram: Histogram,
}

/// The whole pipeline: load the size log, print the sample summary,
/// bucket the samples, render the chart. One image per successful run;
/// any failure aborts before an image is produced.
pub fn generate_report(input_path: &Path, output_path: &Path, opts: &ReportOptions) -> Result<Report> {
    let (info, samples) = load_samples(input_path, opts.endianness)?;
    let summary = summarize(&samples);
    print_summary(&info, &summary);
    let histogram = Histogram::build(&samples, opts.bucket_count)?;
    let spec = ChartSpec::for_histogram(
        &histogram,
        opts.fix_axis_range,
        opts.chart_width,
        opts.chart_height,
    );
    spec.render(output_path)?;
    Ok(Report {
        info,
        summary,
        histogram,
    })
}

/// Load and bucket without rendering, for the headless export path.
pub fn build_report(input_path: &Path, opts: &ReportOptions) -> Result<Report> {
    let (info, samples) = load_samples(input_path, opts.endianness)?;
    let summary = summarize(&samples);
    let histogram = Histogram::build(&samples, opts.bucket_count)?;
    Ok(Report {
        info,
        summary,
        histogram,
    })
}
