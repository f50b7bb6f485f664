//! Error types for the bytepress codecs and dispatch layer.
//!
//! All operations return structured errors rather than panicking.
//! Each codec has its own error enum describing how its container can be
//! malformed; the top-level `Error` gathers them together with I/O and
//! dispatch failures.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: invalid use of the bit packing primitives
/// - RLE / Huffman / LZW: malformed compressed containers
/// - I/O: file system operations in the dispatch layer
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O misuse (e.g. a bit count outside 1..=32)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// RLE container error
    #[error("RLE codec error: {0}")]
    Rle(#[from] RleError),

    /// Huffman container error
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// LZW container error
    #[error("LZW codec error: {0}")]
    Lzw(#[from] LzwError),

    /// Input file missing when a dispatch entry point was invoked
    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    /// Unknown algorithm code passed to the dispatch layer
    #[error("invalid algorithm code: {0}")]
    InvalidAlgorithm(u8),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Requested a write outside the supported 1..=32 bit range
    #[error("invalid bit count: {0} (expected 1..=32)")]
    InvalidBitCount(u32),
}

/// RLE container errors.
#[derive(Debug, Error)]
pub enum RleError {
    /// The container must be a sequence of 2-byte records
    #[error("compressed stream has odd length {0}")]
    OddLength(usize),

    /// Run records carry counts 1..=255; zero is not encodable
    #[error("zero-length run record at offset {0}")]
    ZeroRun(usize),
}

/// Huffman container errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Container ends before a declared field or section
    #[error("container truncated: need at least {required} bytes, got {actual}")]
    Truncated { required: usize, actual: usize },

    /// Serialized tree does not describe a 256-symbol prefix tree
    #[error("malformed serialized tree")]
    MalformedTree,

    /// Declared tree size exceeds what any byte-alphabet tree can need
    #[error("serialized tree of {0} bits exceeds the byte-alphabet maximum")]
    TreeTooLarge(u32),

    /// Payload bits ran out before the declared output size was produced
    #[error("decoded length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The container's u32 size fields cannot represent this input
    #[error("input of {0} bytes exceeds the container size limit")]
    InputTooLarge(usize),
}

/// LZW container errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code referenced a dictionary entry that cannot exist yet
    #[error("corrupt code {code} (dictionary holds {dict_len} entries)")]
    CorruptCode { code: u16, dict_len: usize },

    /// A zero-length container has no STOP code and is not decodable
    #[error("compressed stream is empty")]
    EmptyStream,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_rle() {
        let err = Error::from(RleError::OddLength(7));
        assert!(err.to_string().contains("odd length 7"));
    }

    #[test]
    fn test_error_display_huffman() {
        let err = Error::from(HuffmanError::LengthMismatch {
            expected: 10,
            actual: 4,
        });
        assert!(err.to_string().contains("expected 10"));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn test_error_display_lzw() {
        let err = Error::from(LzwError::CorruptCode {
            code: 300,
            dict_len: 258,
        });
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("258"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_result_alias() {
        fn ok() -> Result<u8> {
            Ok(1)
        }
        assert_eq!(ok().unwrap(), 1);
    }
}
