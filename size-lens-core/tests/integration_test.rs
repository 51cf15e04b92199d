use size_lens_core::{
    build_report, export_csv, export_json, generate_report, load_samples, Endianness, ReportOptions,
    SizeLensError,
};
use std::io::Write;
use tempfile::TempDir;

fn write_log(dir: &TempDir, name: &str, samples: &[i64]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for s in samples {
        file.write_all(&s.to_le_bytes()).unwrap();
    }
    path
}

#[test]
fn sample_count_is_file_size_over_eight() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "sizes.log", &[1, 2, 3, 4, 5]);
    let (info, samples) = load_samples(&path, Endianness::Little).unwrap();
    assert_eq!(info.file_size, 40);
    assert_eq!(info.sample_count, 5);
    assert_eq!(samples, vec![1, 2, 3, 4, 5]);
}

#[test]
fn missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.log");
    match load_samples(&path, Endianness::Little) {
        Err(SizeLensError::NotFound { path: p }) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn misaligned_log_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.log");
    std::fs::write(&path, [0u8; 7]).unwrap();
    match load_samples(&path, Endianness::Little) {
        Err(SizeLensError::Decode { len, .. }) => assert_eq!(len, 7),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[test]
fn zero_byte_log_is_empty_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.log");
    std::fs::write(&path, []).unwrap();
    assert!(matches!(
        load_samples(&path, Endianness::Little),
        Err(SizeLensError::EmptyInput { .. })
    ));
}

#[test]
fn big_endian_logs_decode_too() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("be.log");
    let mut file = std::fs::File::create(&path).unwrap();
    for s in [256i64, -1] {
        file.write_all(&s.to_be_bytes()).unwrap();
    }
    drop(file);
    let (_, samples) = load_samples(&path, Endianness::Big).unwrap();
    assert_eq!(samples, vec![256, -1]);
}

#[test]
fn report_pipeline_writes_a_chart() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "sizes.log", &[10, 10, 20]);
    let output = dir.path().join("size-histogram.png");
    let opts = ReportOptions {
        bucket_count: 2,
        fix_axis_range: true,
        ..ReportOptions::default()
    };
    let report = generate_report(&input, &output, &opts).unwrap();
    assert_eq!(report.info.sample_count, 3);
    assert_eq!(report.histogram.buckets.len(), 2);
    assert_eq!(report.histogram.buckets[0].count, 2);
    assert_eq!(report.histogram.buckets[1].count, 1);
    let meta = std::fs::metadata(&output).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn report_overwrites_an_existing_chart() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "sizes.log", &[5, 15, 25, 35]);
    let output = dir.path().join("size-histogram.png");
    std::fs::write(&output, b"stale").unwrap();
    generate_report(&input, &output, &ReportOptions::default()).unwrap();
    let meta = std::fs::metadata(&output).unwrap();
    assert_ne!(meta.len(), 5);
}

#[test]
fn missing_output_parent_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "sizes.log", &[1, 2, 3]);
    let output = dir.path().join("no-such-dir").join("chart.png");
    match generate_report(&input, &output, &ReportOptions::default()) {
        Err(SizeLensError::Write { path, .. }) => assert_eq!(path, output),
        other => panic!("expected Write, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn no_chart_is_written_on_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.log");
    std::fs::write(&input, []).unwrap();
    let output = dir.path().join("chart.png");
    assert!(generate_report(&input, &output, &ReportOptions::default()).is_err());
    assert!(!output.exists());
}

#[test]
fn json_export_round_trips_bucket_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "sizes.log", &[10, 10, 20]);
    let opts = ReportOptions {
        bucket_count: 2,
        ..ReportOptions::default()
    };
    let report = build_report(&input, &opts).unwrap();
    let out = dir.path().join("report.json");
    export_json(&out, &report).unwrap();
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["summary"]["count"], 3);
    let buckets = doc["histogram"]["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["count"], 2);
    assert_eq!(buckets[1]["count"], 1);
}

#[test]
fn csv_export_has_one_row_per_bucket() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "sizes.log", &[0, 25, 50, 75, 100]);
    let opts = ReportOptions {
        bucket_count: 4,
        ..ReportOptions::default()
    };
    let report = build_report(&input, &opts).unwrap();
    let out = dir.path().join("report.csv");
    export_csv(&out, &report).unwrap();
    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "bucket_lower,bucket_upper,count");
    assert_eq!(lines.len(), 5); // header + 4 buckets
}
