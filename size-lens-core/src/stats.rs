use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: f64,
}

fn median_i64(sorted: &[i64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    }
}

/// Aggregate statistics over the loaded sample sequence. Zeroed summary
/// for an empty slice; callers reject empty logs before reaching here.
pub fn summarize(samples: &[i64]) -> SampleSummary {
    let n = samples.len();
    if n == 0 {
        return SampleSummary {
            count: 0,
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
        };
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    SampleSummary {
        count: n,
        min: sorted[0],
        max: sorted[n - 1],
        mean,
        median: median_i64(&sorted),
    }
}
