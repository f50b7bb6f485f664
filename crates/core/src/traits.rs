use crate::error::Result;

/// Trait for compression algorithms.
pub trait Compressor {
    /// Compresses the input bytes and returns the compressed container.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be represented by this codec's
    /// container format.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Returns the name of this compression algorithm.
    fn name(&self) -> &'static str;
}

/// Trait for decompression algorithms.
pub trait Decompressor {
    /// Decompresses a container and returns the original data.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is truncated or corrupt.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Returns the name of this decompression algorithm.
    fn name(&self) -> &'static str;
}

/// Trait combining both compression and decompression capabilities.
pub trait Codec: Compressor + Decompressor {}

impl<T: Compressor + Decompressor> Codec for T {}
