//! Error types for png-stego

use crate::chunk::ChunkType;
use std::io;

/// Result type for png-stego operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, mutating or writing a chunk chain
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (file-backed documents only)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The first 8 bytes are not the PNG signature
    #[error("Invalid PNG signature")]
    InvalidSignature,

    /// A chunk declares more bytes than remain in the buffer
    #[error("Truncated chunk at offset {offset}: needs {declared} bytes, {available} available")]
    TruncatedChunk {
        offset: usize,
        declared: u64,
        available: usize,
    },

    /// The buffer ended before an IEND chunk was seen
    #[error("Chunk chain not terminated by IEND ({chunks} chunks read)")]
    UnterminatedChain { chunks: usize },

    /// Stored CRC disagrees with the recomputed one (strict mode)
    #[error("Checksum mismatch in chunk {index} ({chunk_type}): stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        index: usize,
        chunk_type: ChunkType,
        stored: u32,
        computed: u32,
    },

    /// Chain mutation requested at an invalid position
    #[error("Index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Data size exceeds maximum allowed
    #[error("Data too large: {size} bytes (max: {max})")]
    DataTooLarge { size: usize, max: usize },

    /// Invalid chunk contents
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
