//! Algorithm selection and file-level entry points.
//!
//! This is the layer the CLI talks to: pick an algorithm, hand it an input
//! and output path, get back a `CodecMetrics` describing the run. Codes
//! 0, 1 and 2 identify RLE, Huffman and LZW for callers that configure by
//! number rather than by name.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::huffman::Huffman;
use crate::lzw::Lzw;
use crate::metrics::CodecMetrics;
use crate::rle::Rle;
use crate::traits::Codec;

/// The available compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Rle = 0,
    Huffman = 1,
    Lzw = 2,
}

impl Algorithm {
    /// Numeric identifier, stable across releases.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a numeric identifier.
    ///
    /// # Errors
    /// Returns `Error::InvalidAlgorithm` for unknown codes.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Rle),
            1 => Ok(Self::Huffman),
            2 => Ok(Self::Lzw),
            other => Err(Error::InvalidAlgorithm(other)),
        }
    }

    /// Resolve a CLI-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rle" => Some(Self::Rle),
            "huffman" => Some(Self::Huffman),
            "lzw" => Some(Self::Lzw),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rle => "Run-Length Encoding",
            Self::Huffman => "Huffman Coding",
            Self::Lzw => "LZW",
        }
    }

    /// The codec implementing this algorithm.
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Rle => &Rle,
            Self::Huffman => &Huffman,
            Self::Lzw => &Lzw,
        }
    }

    /// Shape check for this algorithm's container format.
    pub fn is_valid_container(self, data: &[u8]) -> bool {
        match self {
            Self::Rle => Rle::is_valid_container(data),
            Self::Huffman => Huffman::is_valid_container(data),
            Self::Lzw => Lzw::is_valid_container(data),
        }
    }
}

/// Which way a codec run transforms its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Compress => "compress",
            Self::Decompress => "decompress",
        }
    }
}

/// Compress `input` into `output` with the chosen algorithm.
///
/// # Errors
/// - `Error::InputNotFound` if `input` does not exist
/// - `Error::Io` for read/write failures
/// - codec errors for inputs the container format cannot represent
pub fn compress_file(algorithm: Algorithm, input: &Path, output: &Path) -> Result<CodecMetrics> {
    run(algorithm, Direction::Compress, input, output)
}

/// Decompress `input` into `output` with the chosen algorithm.
///
/// # Errors
/// - `Error::InputNotFound` if `input` does not exist
/// - `Error::Io` for read/write failures
/// - codec errors for truncated or corrupt containers
pub fn decompress_file(algorithm: Algorithm, input: &Path, output: &Path) -> Result<CodecMetrics> {
    run(algorithm, Direction::Decompress, input, output)
}

fn run(
    algorithm: Algorithm,
    direction: Direction,
    input: &Path,
    output: &Path,
) -> Result<CodecMetrics> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let started = Instant::now();
    let data = std::fs::read(input)?;

    let codec = algorithm.codec();
    let transformed = match direction {
        Direction::Compress => codec.compress(&data)?,
        Direction::Decompress => codec.decompress(&data)?,
    };

    std::fs::write(output, &transformed)?;
    let elapsed = started.elapsed();

    let (original_size_bytes, compressed_size_bytes) = match direction {
        Direction::Compress => (data.len() as u64, transformed.len() as u64),
        Direction::Decompress => (transformed.len() as u64, data.len() as u64),
    };

    info!(
        "{} {} completed: {} -> {}",
        algorithm.name(),
        direction.name(),
        input.display(),
        output.display()
    );
    debug!(
        "original {} bytes, compressed {} bytes, {:.3} ms",
        original_size_bytes,
        compressed_size_bytes,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(CodecMetrics {
        algorithm,
        direction,
        original_size_bytes,
        compressed_size_bytes,
        elapsed,
    })
}
