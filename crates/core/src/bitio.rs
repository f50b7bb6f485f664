//! Bit-level I/O for the Huffman and LZW containers.
//!
//! `BitWriter` packs variable-width unsigned values into a byte stream and
//! `BitReader` unpacks them. Both operate MSB-first: the first bit written
//! is the most significant bit of the first output byte, and a value is
//! laid down from its highest meaningful bit to its lowest. The packing is
//! big-endian within every byte and within the 32-bit working register;
//! this ordering is part of the container formats and must not change.
//!
//! # Padding Rules
//! - `BitWriter::flush` pads the trailing byte with zero bits in its
//!   low-order positions
//! - `BitReader` cannot distinguish padding from data; callers terminate
//!   on their own sentinels (STOP code, size headers)
//!
//! # Example
//! ```
//! use bytepress_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! // Bits so far: 10111 -> padded to 10111000
//!
//! let bytes = writer.finish();
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3), 0b101);
//! assert_eq!(reader.read_bits(2), 0b11);
//! ```

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// Bits accumulate in a 32-bit register; each time the register fills, its
/// four bytes are appended to the output in big-endian order. `flush`
/// spills any partial register as whole bytes, zero-padded at the end.
///
/// # Invariants
/// - `pending` holds the next bits to emit, left-justified
/// - `pending_bits` is always < 32 between calls
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for bits not yet spilled (left-justified)
    pending: u32,
    /// Number of live bits in `pending` (0..=31 between calls)
    pending_bits: u32,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            pending: 0,
            pending_bits: 0,
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// `value` is masked to `count` bits, so callers may pass wider
    /// integers without pre-masking.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if `count` is 0 or above 32.
    pub fn write_bits(&mut self, value: u32, count: u32) -> Result<()> {
        if count == 0 || count > 32 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }

        let masked = if count == 32 {
            value
        } else {
            value & ((1u32 << count) - 1)
        };

        let mut remaining = count;
        while remaining > 0 {
            let free = 32 - self.pending_bits;
            let take = remaining.min(free);

            // Highest `take` bits of what is left, so stream order stays
            // MSB-first even when a value straddles the register boundary.
            let chunk = if remaining == 32 && take == 32 {
                masked
            } else {
                (masked >> (remaining - take)) & ((1u32 << take) - 1)
            };
            self.pending |= chunk << (free - take);
            self.pending_bits += take;
            remaining -= take;

            if self.pending_bits == 32 {
                self.bytes.extend_from_slice(&self.pending.to_be_bytes());
                self.pending = 0;
                self.pending_bits = 0;
            }
        }

        Ok(())
    }

    /// Spill any pending bits as whole bytes, zero-padded in the trailing
    /// byte's low-order positions. Safe to call when nothing is pending.
    pub fn flush(&mut self) {
        let whole_bytes = (self.pending_bits as usize + 7) / 8;
        for i in 0..whole_bytes {
            self.bytes.push((self.pending >> (24 - i * 8)) as u8);
        }
        self.pending = 0;
        self.pending_bits = 0;
    }

    /// Total number of bits submitted so far, including pending ones.
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 + u64::from(self.pending_bits)
    }

    /// Flush and return the output bytes, consuming the writer.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.bytes
    }
}

/// Reads bits MSB-first from a byte slice.
///
/// Up to four bytes at a time are pulled into a 32-bit buffer,
/// left-justified. A refill that consumes the final input bytes latches
/// the end-of-input flag; bits already buffered stay readable after the
/// latch. Reading past the end yields whatever bits remain with zero-fill
/// and never fails, so the surrounding container must be self-delimiting.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Next byte to pull into the buffer
    pos: usize,
    /// Buffered bits, left-justified
    buffer: u32,
    /// Number of live bits in `buffer`
    buffered: u32,
    /// Set once a refill finds fewer than four bytes
    exhausted: bool,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            buffer: 0,
            buffered: 0,
            exhausted: false,
        }
    }

    /// Read up to `count` bits (1..=32), MSB-first.
    ///
    /// If the input runs out mid-read, the bits that were available occupy
    /// the high positions of the partial result and the rest are zero.
    pub fn read_bits(&mut self, count: u32) -> u32 {
        debug_assert!((1..=32).contains(&count));

        let mut result = 0u32;
        let mut taken = 0u32;

        while taken < count {
            if self.buffered == 0 {
                if self.exhausted {
                    break;
                }
                self.refill();
                if self.buffered == 0 {
                    break;
                }
            }

            let take = (count - taken).min(self.buffered);
            let chunk = self.buffer >> (32 - take);
            result |= chunk << (count - taken - take);
            // A full-buffer take of 32 would shift by the register width.
            if take == 32 {
                self.buffer = 0;
            } else {
                self.buffer <<= take;
            }
            self.buffered -= take;
            taken += take;
        }

        result
    }

    /// Whether any further bits could still be produced.
    pub fn has_data(&self) -> bool {
        self.buffered > 0 || !self.exhausted
    }

    /// Pull up to four bytes into the buffer, left-justified.
    fn refill(&mut self) {
        let available = self.data.len() - self.pos;
        let n = available.min(4);

        if n == 0 {
            self.exhausted = true;
            return;
        }

        self.buffer = 0;
        for i in 0..n {
            self.buffer |= u32::from(self.data[self.pos + i]) << (24 - i * 8);
        }
        self.buffered = n as u32 * 8;
        self.pos += n;

        if n < 4 {
            self.exhausted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_single_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1011_0011, 8).unwrap();

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b1011_0011]);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(8), 0b1011_0011);
    }

    #[test]
    fn test_partial_bits_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3).unwrap();
        writer.write_bits(0b11, 2).unwrap();
        // 10111 -> 10111000

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b1011_1000]);

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(3), 0b101);
        assert_eq!(reader.read_bits(2), 0b11);
    }

    #[test]
    fn test_value_is_masked() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFFF_FFFF, 3).unwrap();
        assert_eq!(writer.finish(), vec![0b1110_0000]);
    }

    #[test]
    fn test_invalid_bit_count() {
        let mut writer = BitWriter::new();
        assert!(writer.write_bits(0, 0).is_err());
        assert!(writer.write_bits(0, 33).is_err());
    }

    #[test]
    fn test_register_spill_is_big_endian() {
        let mut writer = BitWriter::new();
        writer.write_bits(0x1234_5678, 32).unwrap();
        writer.write_bits(0x9A, 8).unwrap();

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0x12, 0x34, 0x56, 0x78, 0x9A]);
    }

    #[test]
    fn test_straddling_value_stays_msb_first() {
        // 30 bits, then a 9-bit value that crosses the register boundary.
        let mut writer = BitWriter::new();
        writer.write_bits(0, 30).unwrap();
        writer.write_bits(0x1AB, 9).unwrap();
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read_bits(30), 0);
        assert_eq!(reader.read_bits(9), 0x1AB);
    }

    #[test]
    fn test_nine_bit_code_stream() {
        // The width-9 stop code: 257 = 1 0000 0001, padded -> 80 80.
        let mut writer = BitWriter::new();
        writer.write_bits(257, 9).unwrap();
        assert_eq!(writer.finish(), vec![0x80, 0x80]);
    }

    #[test]
    fn test_bit_len() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.bit_len(), 0);
        writer.write_bits(1, 5).unwrap();
        assert_eq!(writer.bit_len(), 5);
        writer.write_bits(0, 30).unwrap();
        assert_eq!(writer.bit_len(), 35);
    }

    #[test]
    fn test_read_past_end_zero_fills() {
        let bytes = vec![0b1010_1010];
        let mut reader = BitReader::new(&bytes);

        assert_eq!(reader.read_bits(4), 0b1010);
        // 4 real bits left; they land in the high positions of the result.
        assert_eq!(reader.read_bits(8), 0b1010_0000);
        assert!(!reader.has_data());
        assert_eq!(reader.read_bits(9), 0);
    }

    #[test]
    fn test_has_data_after_short_refill() {
        let bytes = vec![0xFF, 0x00];
        let mut reader = BitReader::new(&bytes);
        assert!(reader.has_data());
        assert_eq!(reader.read_bits(16), 0xFF00);
        assert!(!reader.has_data());
    }

    #[test]
    fn test_multi_register_roundtrip() {
        let values: Vec<(u32, u32)> = (1..=32).map(|w| (w * 0x0101_0101 % (1 << 16), 17)).collect();

        let mut writer = BitWriter::new();
        for &(v, w) in &values {
            writer.write_bits(v, w).unwrap();
        }
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        for &(v, w) in &values {
            assert_eq!(reader.read_bits(w), v & ((1 << w) - 1));
        }
    }

    #[test]
    fn test_empty_reader() {
        let mut reader = BitReader::new(&[]);
        assert!(reader.has_data());
        assert_eq!(reader.read_bits(9), 0);
        assert!(!reader.has_data());
    }
}
