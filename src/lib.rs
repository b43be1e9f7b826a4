//! PNG chunk codec for hiding payloads in private chunks.
//!
//! This crate splits a PNG byte stream into its chunk chain, builds new
//! well-formed chunks from arbitrary bytes, and reassembles a chain back into
//! a valid PNG byte stream.
//!
//! # Design Principles
//!
//! - **Bounds-checked reading**: a declared chunk length is never trusted to
//!   read past the end of the buffer
//! - **Fresh checksums**: synthesized chunks always get a newly computed CRC
//! - **Verbatim writing**: the writer reproduces exactly the chain it is given
//! - **Pure and reentrant**: no shared state between calls
//!
//! # Quick Start
//!
//! ```no_run
//! use png_stego::{ChunkFactory, ChunkReader, ChunkType, ChunkWriter, PNG_SIGNATURE};
//!
//! # fn main() -> png_stego::Result<()> {
//! let bytes = std::fs::read("image.png")?;
//!
//! // Split into chunks
//! let mut chain = ChunkReader::new().parse(&bytes)?;
//!
//! // Hide a payload right before IEND
//! let chunk = ChunkFactory::new().create(b"hello".to_vec(), ChunkType::coRS);
//! let index = chain.len() - 1;
//! chain.insert(index, chunk)?;
//!
//! // Reassemble
//! let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain)?;
//! std::fs::write("output.png", output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Document API
//!
//! [`PngDocument`] bundles the signature with a lazily parsed chain:
//!
//! ```no_run
//! use png_stego::{PngDocument, DEFAULT_PAYLOAD_TAG};
//!
//! # fn main() -> png_stego::Result<()> {
//! let mut doc = PngDocument::open("output.png")?;
//! if let Some(chunk) = doc.find_chunk(DEFAULT_PAYLOAD_TAG)? {
//!     println!("Found payload: {} bytes", chunk.length());
//! }
//! # Ok(())
//! # }
//! ```

mod chain;
mod chunk;
mod document;
mod error;
mod ihdr;
mod reader;
mod writer;

pub use chain::ChunkChain;
pub use chunk::{
    chunk_crc, Chunk, ChunkFactory, ChunkType, CHUNK_CRC_SIZE, CHUNK_HEADER_SIZE,
    MAX_CHUNK_DATA_SIZE,
};
pub use document::PngDocument;
pub use error::{Error, Result};
pub use ihdr::{Ihdr, IHDR_LENGTH};
pub use reader::{read_signature, ChunkReader, ReadOptions, PNG_SIGNATURE};
pub use writer::ChunkWriter;

// Test utilities - only compiled for tests or when explicitly enabled
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Chunk type used for embedded payloads unless the caller picks another
pub const DEFAULT_PAYLOAD_TAG: ChunkType = ChunkType::coRS;
