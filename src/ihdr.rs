//! IHDR field decoding
//!
//! Only splits the 13-byte header into its fields. Values are reported as
//! stored; nothing checks them against each other.

use crate::{
    chunk::{Chunk, ChunkType},
    error::{Error, Result},
};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

/// Size of the IHDR data
pub const IHDR_LENGTH: usize = 13;

/// Decoded IHDR fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl Ihdr {
    /// Decode the IHDR fields from raw chunk data
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < IHDR_LENGTH {
            return Err(Error::InvalidFormat(format!(
                "IHDR data too short: {} bytes (expected {})",
                data.len(),
                IHDR_LENGTH
            )));
        }

        let mut cursor = Cursor::new(data);
        Ok(Self {
            width: cursor.read_u32::<BigEndian>()?,
            height: cursor.read_u32::<BigEndian>()?,
            bit_depth: cursor.read_u8()?,
            color_type: cursor.read_u8()?,
            compression_method: cursor.read_u8()?,
            filter_method: cursor.read_u8()?,
            interlace_method: cursor.read_u8()?,
        })
    }

    /// Decode an IHDR chunk
    pub fn from_chunk(chunk: &Chunk) -> Result<Self> {
        if chunk.chunk_type() != ChunkType::IHDR {
            return Err(Error::InvalidFormat(format!(
                "Expected IHDR chunk, found {}",
                chunk.chunk_type()
            )));
        }
        Self::from_bytes(chunk.data())
    }
}
