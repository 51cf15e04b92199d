use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use size_lens_common::{Result, SizeLensError};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// width of one encoded sample in bytes
pub const SAMPLE_WIDTH: usize = 8;

/// Byte order of the 64-bit samples in the log. The producing backend
/// writes little-endian; kept explicit so logs from other writers can
/// still be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl FromStr for Endianness {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "little" | "le" => Ok(Endianness::Little),
            "big" | "be" => Ok(Endianness::Big),
            other => Err(format!("unknown endianness: {other} (use little or big)")),
        }
    }
}

impl Endianness {
    fn decode(self, raw: [u8; SAMPLE_WIDTH]) -> i64 {
        match self {
            Endianness::Little => i64::from_le_bytes(raw),
            Endianness::Big => i64::from_be_bytes(raw),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleFileInfo {
    pub path: PathBuf,
    pub file_size: u64,
    pub sample_count: usize,
}

/// Bulk-load every sample from a flat binary size log. The whole file is
/// one contiguous run of 8-byte signed integers; anything else is a
/// decode failure.
pub fn load_samples(path: &Path, endianness: Endianness) -> Result<(SampleFileInfo, Vec<i64>)> {
    if !path.exists() {
        return Err(SizeLensError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    let file_size = file.metadata()?.len();
    if file_size % SAMPLE_WIDTH as u64 != 0 {
        return Err(SizeLensError::Decode {
            path: path.to_path_buf(),
            len: file_size,
        });
    }
    if file_size == 0 {
        return Err(SizeLensError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    // memory-map the log for a single zero-copy decode pass
    let mmap: Mmap = unsafe { Mmap::map(&file)? };
    let samples: Vec<i64> = mmap
        .chunks_exact(SAMPLE_WIDTH)
        .map(|chunk| {
            let mut raw = [0u8; SAMPLE_WIDTH];
            raw.copy_from_slice(chunk);
            endianness.decode(raw)
        })
        .collect();
    let info = SampleFileInfo {
        path: path.to_path_buf(),
        file_size,
        sample_count: samples.len(),
    };
    Ok((info, samples))
}
