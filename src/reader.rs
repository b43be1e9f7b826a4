//! Chunk chain reader
//!
//! Walks a PNG byte buffer record by record. Every declared length is
//! checked against the bytes that remain before anything is sliced, so a
//! hostile length field yields [`Error::TruncatedChunk`] instead of an
//! out-of-bounds read.

use crate::{
    chain::ChunkChain,
    chunk::{Chunk, ChunkType, CHUNK_CRC_SIZE, CHUNK_HEADER_SIZE},
    error::{Error, Result},
};
use byteorder::{BigEndian, ByteOrder};

/// PNG signature: 89 50 4E 47 0D 0A 1A 0A
pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Options controlling how a chunk chain is read
///
/// The default is permissive: stored CRCs are kept but not checked.
///
/// # Example
///
/// ```
/// use png_stego::ReadOptions;
///
/// let options = ReadOptions::new().strict(true);
/// assert!(options.is_strict());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    strict: bool,
}

impl ReadOptions {
    /// Create permissive read options (no checksum verification)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable checksum verification
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Check the signature at the start of `buffer` and return it
pub fn read_signature(buffer: &[u8]) -> Result<[u8; 8]> {
    match buffer.first_chunk::<8>() {
        Some(signature) if *signature == PNG_SIGNATURE => Ok(*signature),
        _ => Err(Error::InvalidSignature),
    }
}

/// Decomposes a PNG byte buffer into its chunk chain
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkReader {
    options: ReadOptions,
}

impl ChunkReader {
    /// Create a permissive reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given options
    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ReadOptions {
        self.options
    }

    /// Parse a full PNG buffer into its chunk chain
    ///
    /// Stops right after the IEND chunk; anything following it is ignored.
    ///
    /// # Errors
    /// - `InvalidSignature`: the buffer does not start with the PNG signature
    /// - `TruncatedChunk`: a chunk header or body runs past the buffer end
    /// - `UnterminatedChain`: the buffer ends before IEND
    /// - `ChecksumMismatch`: strict mode only
    pub fn parse(&self, buffer: &[u8]) -> Result<ChunkChain> {
        read_signature(buffer)?;

        let mut chain = ChunkChain::new();
        let mut rest = &buffer[PNG_SIGNATURE.len()..];
        let mut offset = PNG_SIGNATURE.len();

        loop {
            if rest.is_empty() {
                return Err(Error::UnterminatedChain {
                    chunks: chain.len(),
                });
            }

            let (header, after_header) = rest
                .split_first_chunk::<CHUNK_HEADER_SIZE>()
                .ok_or(Error::TruncatedChunk {
                    offset,
                    declared: CHUNK_HEADER_SIZE as u64,
                    available: rest.len(),
                })?;

            let length = BigEndian::read_u32(&header[..4]);
            let chunk_type = ChunkType::new([header[4], header[5], header[6], header[7]]);

            // data + CRC must fit in what is left
            let body_len = (length as u64) + CHUNK_CRC_SIZE as u64;
            let (body, after_body) = usize::try_from(body_len)
                .ok()
                .and_then(|n| after_header.split_at_checked(n))
                .ok_or(Error::TruncatedChunk {
                    offset,
                    declared: body_len,
                    available: after_header.len(),
                })?;

            let (data, crc) = body.split_at(body.len() - CHUNK_CRC_SIZE);
            let chunk = Chunk::from_parts(chunk_type, data.to_vec(), BigEndian::read_u32(crc));

            if self.options.strict {
                let computed = chunk.computed_crc();
                if computed != chunk.crc() {
                    return Err(Error::ChecksumMismatch {
                        index: chain.len(),
                        chunk_type,
                        stored: chunk.crc(),
                        computed,
                    });
                }
            }

            let is_end = chunk.is_end();
            chain.append(chunk);
            offset += CHUNK_HEADER_SIZE + body.len();
            rest = after_body;

            if is_end {
                break;
            }
        }

        Ok(chain)
    }
}
