//! bytepress-core: lossless byte-stream compression codecs
//!
//! This library provides three symmetric compress/decompress codecs over
//! arbitrary byte sequences:
//! - RLE (run-length encoding with 255-saturated runs)
//! - Huffman (static prefix coding with an embedded serialized tree)
//! - LZW (dictionary coding with variable-width codes, 9 to 15 bits)
//!
//! plus the bit-level I/O primitives the Huffman and LZW containers are
//! built on, and a file-level dispatch layer that runs a chosen codec and
//! reports timing and size metrics.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bitio`: MSB-first bit packing and unpacking
//! - `rle`, `huffman`, `lzw`: the codecs, pure functions over byte slices
//! - `traits`: the `Compressor` / `Decompressor` seam shared by all codecs
//! - `metrics`: size and timing figures for one codec run
//! - `dispatch`: algorithm selection and file-to-file entry points
//!
//! # Design Principles
//!
//! - **No panics**: all failure paths are structured errors
//! - **Self-contained containers**: every format carries what its decoder
//!   needs (size headers, serialized tree, STOP sentinel)
//! - **No shared state**: every compress or decompress call is independent
//!
//! # Example
//!
//! ```
//! use bytepress_core::{Compressor, Decompressor, Rle};
//!
//! let rle = Rle::new();
//! let data = b"aaabbbccc";
//! let compressed = rle.compress(data).unwrap();
//! let decompressed = rle.decompress(&compressed).unwrap();
//! assert_eq!(decompressed, data);
//! ```

pub mod bitio;
pub mod dispatch;
pub mod error;
pub mod huffman;
pub mod lzw;
pub mod metrics;
pub mod rle;
pub mod traits;

// Re-export commonly used types
pub use dispatch::{compress_file, decompress_file, Algorithm, Direction};
pub use error::{Error, Result};
pub use huffman::Huffman;
pub use lzw::Lzw;
pub use metrics::CodecMetrics;
pub use rle::Rle;
pub use traits::{Codec, Compressor, Decompressor};
