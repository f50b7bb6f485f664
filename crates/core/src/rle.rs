//! Run-length encoding.
//!
//! The container is a bare sequence of 2-byte records `[count][byte]`,
//! no header. Counts run 1..=255; a longer run is split into adjacent
//! saturated records.

use crate::error::{Result, RleError};
use crate::traits::{Compressor, Decompressor};

const MAX_RUN_LENGTH: u8 = 255;

/// Run-length codec over byte slices.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rle;

impl Rle {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Cheap shape check for a run-length container: positive, even size.
    /// A passing check does not guarantee the payload decodes.
    pub fn is_valid_container(data: &[u8]) -> bool {
        !data.is_empty() && data.len() % 2 == 0
    }
}

impl Compressor for Rle {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len().min(1 << 16));
        let mut run: Option<(u8, u8)> = None;

        for &b in input {
            run = Some(match run {
                Some((byte, count)) if byte == b && count < MAX_RUN_LENGTH => (byte, count + 1),
                Some((byte, count)) => {
                    output.push(count);
                    output.push(byte);
                    (b, 1)
                }
                None => (b, 1),
            });
        }

        if let Some((byte, count)) = run {
            output.push(count);
            output.push(byte);
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "RLE"
    }
}

impl Decompressor for Rle {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() % 2 != 0 {
            return Err(RleError::OddLength(input.len()).into());
        }

        let mut output = Vec::new();

        for (i, record) in input.chunks_exact(2).enumerate() {
            let count = record[0];
            let byte = record[1];

            if count == 0 {
                return Err(RleError::ZeroRun(i * 2).into());
            }

            output.extend(std::iter::repeat(byte).take(usize::from(count)));
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "RLE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_empty() {
        let result = Rle::new().compress(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_decompress_empty() {
        let result = Rle::new().decompress(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_compress_single_byte() {
        let result = Rle::new().compress(&[0x42]).unwrap();
        assert_eq!(result, vec![1, 0x42]);
    }

    #[test]
    fn test_compress_mixed_runs() {
        // AAAAABBBCCDAA
        let input = [
            0x41, 0x41, 0x41, 0x41, 0x41, 0x42, 0x42, 0x42, 0x43, 0x43, 0x44, 0x41, 0x41,
        ];
        let result = Rle::new().compress(&input).unwrap();
        assert_eq!(
            result,
            vec![0x05, 0x41, 0x03, 0x42, 0x02, 0x43, 0x01, 0x44, 0x02, 0x41]
        );
    }

    #[test]
    fn test_run_saturation_at_255() {
        let input = vec![0x41; 300];
        let result = Rle::new().compress(&input).unwrap();
        assert_eq!(result, vec![0xFF, 0x41, 0x2D, 0x41]);
    }

    #[test]
    fn test_saturated_record_count() {
        // A run of N identical bytes costs exactly 2 * ceil(N / 255) bytes.
        for n in [1usize, 254, 255, 256, 510, 511, 1_000_000] {
            let input = vec![0xAA; n];
            let compressed = Rle::new().compress(&input).unwrap();
            assert_eq!(compressed.len(), 2 * n.div_ceil(255), "run of {n}");
            assert_eq!(Rle::new().decompress(&compressed).unwrap(), input);
        }
    }

    #[test]
    fn test_roundtrip_alternating() {
        let input = b"abababab";
        let compressed = Rle::new().compress(input).unwrap();
        assert_eq!(compressed.len(), 16);
        assert_eq!(Rle::new().decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_full_alphabet() {
        let input: Vec<u8> = (0..=255).collect();
        let compressed = Rle::new().compress(&input).unwrap();
        let decompressed = Rle::new().decompress(&compressed).unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn test_decompress_odd_length() {
        let result = Rle::new().decompress(&[1, 2, 3]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decompress_zero_count() {
        let result = Rle::new().decompress(&[0, 0xAA]);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_valid_container() {
        assert!(Rle::is_valid_container(&[1, 0x41]));
        assert!(!Rle::is_valid_container(&[]));
        assert!(!Rle::is_valid_container(&[1, 0x41, 2]));
    }

    #[test]
    fn test_names() {
        assert_eq!(Compressor::name(&Rle::new()), "RLE");
        assert_eq!(Decompressor::name(&Rle::new()), "RLE");
    }
}
