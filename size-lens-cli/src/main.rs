use clap::{Parser, Subcommand};
use size_lens_common::Config;
use size_lens_core::{
    build_report, export_csv, export_json, generate_report, load_samples, print_summary,
    summarize, Endianness, ReportOptions,
};
use std::path::PathBuf;

fn parse_bucket_count(s: &str) -> Result<usize, String> {
    // reject zero at parse time so the core never sees it
    let v: usize = s.parse().map_err(|_| format!("not an integer: {s}"))?;
    if v > 0 {
        Ok(v)
    } else {
        Err("bucket count must be positive".into())
    }
}

fn parse_endian(s: &str) -> Result<Endianness, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "size-lens", version, about = "Message size log inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a size log and render its histogram chart
    Report {
        path: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = parse_bucket_count)]
        buckets: Option<usize>,
        #[arg(long)]
        fix_axis: bool,
        #[arg(long, value_parser = parse_endian)]
        endian: Option<Endianness>,
    },
    /// Print the sample summary without rendering anything
    Summary {
        path: String,
        #[arg(long)]
        save: bool,
        #[arg(long, value_parser = parse_endian)]
        endian: Option<Endianness>,
    },
    /// Write the bucketed report to JSON or CSV instead of an image
    Export {
        path: String,
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = parse_bucket_count)]
        buckets: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Report {
            path,
            output,
            buckets,
            fix_axis,
            endian,
        } => run_report(path, output, buckets, fix_axis, endian, &config)?,
        Commands::Summary { path, save, endian } => run_summary(path, save, endian, &config)?,
        Commands::Export {
            path,
            format,
            output,
            buckets,
        } => run_export(path, format, output, buckets, &config)?,
    }
    Ok(())
}

fn run_report(
    input_path: String,
    output: Option<String>,
    buckets: Option<usize>,
    fix_axis: bool,
    endian: Option<Endianness>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut opts = ReportOptions::from_config(config);
    if let Some(b) = buckets {
        opts.bucket_count = b;
    }
    if fix_axis {
        opts.fix_axis_range = true;
    }
    if let Some(e) = endian {
        opts.endianness = e;
    }
    let out_path: PathBuf = match output {
        Some(o) => PathBuf::from(o),
        None => PathBuf::from(&config.chart.output_name),
    };
    generate_report(std::path::Path::new(&input_path), &out_path, &opts)?;
    println!("Chart written to {}", out_path.display());
    Ok(())
}

fn run_summary(
    input_path: String,
    save: bool,
    endian: Option<Endianness>,
    config: &Config,
) -> anyhow::Result<()> {
    let endianness = endian.unwrap_or_else(|| {
        config.report.endianness.parse().unwrap_or_default()
    });
    let (info, samples) = load_samples(std::path::Path::new(&input_path), endianness)?;
    let summary = summarize(&samples);
    print_summary(&info, &summary);
    if save {
        let out_dir = std::path::Path::new(&config.export.output_dir);
        std::fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join("summary.json");
        let doc = serde_json::json!({ "input": info, "summary": summary });
        std::fs::write(&out_path, serde_json::to_string_pretty(&doc)?)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}

fn run_export(
    input_path: String,
    format: String,
    output: Option<String>,
    buckets: Option<usize>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut opts = ReportOptions::from_config(config);
    if let Some(b) = buckets {
        opts.bucket_count = b;
    }
    let report = build_report(std::path::Path::new(&input_path), &opts)?;
    let default_name = format!("size-report.{format}");
    let out_path: PathBuf = match output {
        Some(o) => PathBuf::from(o),
        None => std::path::Path::new(&config.export.output_dir).join(&default_name),
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            export_json(&out_path, &report)?;
            println!("Exported to {}", out_path.display());
        }
        "csv" => {
            export_csv(&out_path, &report)?;
            println!("Exported to {}", out_path.display());
        }
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    Ok(())
}
