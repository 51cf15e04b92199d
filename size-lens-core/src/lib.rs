pub mod chart;
pub mod decode;
pub mod export;
pub mod histogram;
pub mod report;
pub mod stats;

pub use size_lens_common::{Config, Result, SizeLensError};

pub use chart::ChartSpec;
pub use decode::{load_samples, Endianness, SampleFileInfo, SAMPLE_WIDTH};
pub use export::{export_csv, export_json, print_summary};
pub use histogram::{Bucket, Histogram};
pub use report::{build_report, generate_report, Report, ReportOptions};
pub use stats::{summarize, SampleSummary};
