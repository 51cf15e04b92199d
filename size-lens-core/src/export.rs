use size_lens_common::{Result, SizeLensError};
use std::io::Write;
use std::path::Path;

use crate::decode::SampleFileInfo;
use crate::report::Report;
use crate::stats::SampleSummary;

pub fn print_summary(info: &SampleFileInfo, summary: &SampleSummary) {
    println!("{:<16} {}", "Samples:", info.sample_count);
    println!("{:<16} {} bytes", "Log size:", info.file_size);
    println!("{:<16} {} bytes", "Min:", summary.min);
    println!("{:<16} {} bytes", "Max:", summary.max);
    println!("{:<16} {:.2} bytes", "Mean:", summary.mean);
    println!("{:<16} {:.2} bytes", "Median:", summary.median);
}

pub fn export_json(output_path: &Path, report: &Report) -> Result<()> {
    let doc = serde_json::json!({
        "input": report.info,
        "summary": report.summary,
        "histogram": report.histogram,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| SizeLensError::Other(e.to_string()))?;
    Ok(())
}

/// One row per bucket; bounds in bytes.
pub fn export_csv(output_path: &Path, report: &Report) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "bucket_lower,bucket_upper,count")?;
    for b in &report.histogram.buckets {
        writeln!(file, "{:.4},{:.4},{}", b.lower, b.upper, b.count)?;
    }
    Ok(())
}
