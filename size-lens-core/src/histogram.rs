use serde::{Deserialize, Serialize};
use size_lens_common::{Result, SizeLensError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Binned frequency distribution over a sample sequence. Buckets are
/// equal-width, contiguous, and together span exactly `[min, max]` of
/// the observed samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub min: i64,
    pub max: i64,
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    /// Build `bucket_count` equal-width buckets over a non-empty sample
    /// slice. A sample equal to the global max lands in the last bucket.
    /// When every sample is identical the span collapses to one bucket.
    pub fn build(samples: &[i64], bucket_count: usize) -> Result<Histogram> {
        if samples.is_empty() {
            return Err(SizeLensError::Other(
                "cannot build a histogram from zero samples".into(),
            ));
        }
        if bucket_count == 0 {
            return Err(SizeLensError::Other("bucket count must be positive".into()));
        }
        let min = samples.iter().copied().min().unwrap_or(0);
        let max = samples.iter().copied().max().unwrap_or(0);
        if min == max {
            return Ok(Histogram {
                min,
                max,
                buckets: vec![Bucket {
                    lower: min as f64,
                    upper: max as f64,
                    count: samples.len() as u64,
                }],
            });
        }
        let span = max as f64 - min as f64;
        let width = span / bucket_count as f64;
        let mut counts = vec![0u64; bucket_count];
        for &v in samples {
            let idx = ((v as f64 - min as f64) / width) as usize;
            let idx = idx.min(bucket_count - 1);
            counts[idx] += 1;
        }
        let buckets = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| Bucket {
                lower: min as f64 + i as f64 * width,
                upper: if i + 1 == bucket_count {
                    max as f64 // last bucket closes exactly on the max
                } else {
                    min as f64 + (i + 1) as f64 * width
                },
                count: c,
            })
            .collect();
        Ok(Histogram { min, max, buckets })
    }

    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
