//! Size and timing figures for a single codec run.
//!
//! The dispatch layer fills one `CodecMetrics` per successful call; the
//! derived figures (ratio, speed) are computed on demand rather than
//! stored. Failures surface through `Error`, so a metrics record always
//! describes a completed operation.

use std::time::Duration;

use crate::dispatch::{Algorithm, Direction};

/// Metrics for one compress or decompress operation.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    /// Which codec ran
    pub algorithm: Algorithm,

    /// Which direction it ran in
    pub direction: Direction,

    /// Uncompressed side of the operation, in bytes
    pub original_size_bytes: u64,

    /// Compressed side of the operation, in bytes
    pub compressed_size_bytes: u64,

    /// Wall time for the whole operation, including file I/O
    pub elapsed: Duration,
}

impl CodecMetrics {
    /// Compressed size as a percentage of the original size.
    ///
    /// Returns 0.0 when the original side is empty.
    pub fn ratio_percent(&self) -> f64 {
        if self.original_size_bytes == 0 {
            0.0
        } else {
            self.compressed_size_bytes as f64 / self.original_size_bytes as f64 * 100.0
        }
    }

    /// Throughput over the uncompressed side, in MiB per second.
    pub fn speed_mbps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            self.original_size_bytes as f64 / (1024.0 * 1024.0) / seconds
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== {} ({}) ===", self.algorithm.name(), self.direction.name());
        println!("Original size:   {} bytes", self.original_size_bytes);
        println!("Compressed size: {} bytes", self.compressed_size_bytes);
        println!("Ratio: {:.1}%", self.ratio_percent());
        println!(
            "Time: {:.3} ms ({:.2} MB/s)",
            self.elapsed.as_secs_f64() * 1000.0,
            self.speed_mbps()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodecMetrics {
        CodecMetrics {
            algorithm: Algorithm::Rle,
            direction: Direction::Compress,
            original_size_bytes: 1000,
            compressed_size_bytes: 250,
            elapsed: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(sample().ratio_percent(), 25.0);
    }

    #[test]
    fn test_ratio_empty_original() {
        let mut metrics = sample();
        metrics.original_size_bytes = 0;
        assert_eq!(metrics.ratio_percent(), 0.0);
    }

    #[test]
    fn test_speed() {
        // 1000 bytes in 100 ms.
        let expected = 1000.0 / (1024.0 * 1024.0) / 0.1;
        assert!((sample().speed_mbps() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_speed_zero_elapsed() {
        let mut metrics = sample();
        metrics.elapsed = Duration::ZERO;
        assert_eq!(metrics.speed_mbps(), 0.0);
    }
}
