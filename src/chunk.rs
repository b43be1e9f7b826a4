//! PNG chunk records
//!
//! A chunk on disk is laid out as
//! `[length:4][type:4][data:length][crc:4]`, all integers big-endian.
//! The CRC covers `type ++ data` and uses the ISO-3309 / IEEE 802.3
//! polynomial.

use crate::error::{Error, Result};
use std::fmt;

/// Size of the length field plus the type field
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Size of the trailing CRC field
pub const CHUNK_CRC_SIZE: usize = 4;

/// Largest data length a chunk may declare (2^31 - 1)
pub const MAX_CHUNK_DATA_SIZE: usize = 0x7FFF_FFFF;

/// Compute the chunk CRC over `chunk_type ++ data`
pub fn chunk_crc(chunk_type: &ChunkType, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&chunk_type.0);
    hasher.update(data);
    hasher.finalize()
}

/// A 4-byte chunk type tag
///
/// The tag is kept verbatim; nothing restricts it to the registered
/// vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);

#[allow(nonstandard_style)]
impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const PLTE: Self = Self(*b"PLTE");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");
    pub const tEXt: Self = Self(*b"tEXt");
    /// Private ancillary tag used for embedded payloads
    pub const coRS: Self = Self(*b"coRS");

    /// Create a chunk type from its raw bytes
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw tag bytes
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Ancillary bit (bit 5 of the first byte): decoders may ignore the chunk
    pub const fn is_ancillary(&self) -> bool {
        self.0[0] & 0x20 != 0
    }

    /// Private bit (bit 5 of the second byte): not a registered public chunk
    pub const fn is_private(&self) -> bool {
        self.0[1] & 0x20 != 0
    }

    /// Safe-to-copy bit (bit 5 of the fourth byte)
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 0x20 != 0
    }
}

impl From<[u8; 4]> for ChunkType {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl std::str::FromStr for ChunkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes: [u8; 4] = s.as_bytes().try_into().map_err(|_| {
            Error::InvalidFormat(format!("Chunk type must be exactly 4 bytes: {s:?}"))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkType({self})")
    }
}

/// A single chunk record
///
/// Fields are private so the length always matches the data. Fresh chunks
/// come from [`Chunk::new`] (or [`ChunkFactory`]) which derives the CRC; the
/// reader uses [`Chunk::from_parts`] to keep the stored CRC for later
/// verification.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    chunk_type: ChunkType,
    data: Vec<u8>,
    crc: u32,
}

impl Chunk {
    /// Build a chunk from its type and data, computing the CRC
    pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> Self {
        let crc = chunk_crc(&chunk_type, &data);
        Self {
            chunk_type,
            data,
            crc,
        }
    }

    /// Build a chunk with an existing CRC, as read from a file
    ///
    /// The CRC is kept as-is so a round trip stays byte-exact; call
    /// [`Chunk::verify`] to check it.
    pub fn from_parts(chunk_type: ChunkType, data: Vec<u8>, crc: u32) -> Self {
        Self {
            chunk_type,
            data,
            crc,
        }
    }

    /// Number of data bytes, as written in the length field
    ///
    /// Saturates at `u32::MAX`; [`ChunkWriter`](crate::ChunkWriter) refuses
    /// to write a chunk whose data does not fit the field.
    pub fn length(&self) -> u32 {
        u32::try_from(self.data.len()).unwrap_or(u32::MAX)
    }

    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the chunk, returning its data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Stored CRC
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// CRC recomputed from the current type and data
    pub fn computed_crc(&self) -> u32 {
        chunk_crc(&self.chunk_type, &self.data)
    }

    /// Whether the stored CRC matches the type and data
    pub fn verify(&self) -> bool {
        self.crc == self.computed_crc()
    }

    /// Whether this is the terminal IEND chunk
    pub fn is_end(&self) -> bool {
        self.chunk_type == ChunkType::IEND
    }

    /// Size of the full on-disk record
    pub fn encoded_len(&self) -> usize {
        CHUNK_HEADER_SIZE + self.data.len() + CHUNK_CRC_SIZE
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("length", &self.length())
            .field("chunk_type", &self.chunk_type)
            .field("data", &&self.data[..self.data.len().min(12)])
            .field("crc", &format_args!("{:#010x}", self.crc))
            .finish()
    }
}

/// Builds new, well-formed chunks independent of any chain
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkFactory;

impl ChunkFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a chunk, deriving length and CRC from `data` and `type_tag`
    ///
    /// No size limit is applied here. Data longer than `u32::MAX` bytes
    /// cannot be represented on disk and is rejected with
    /// [`Error::DataTooLarge`] when written; use [`ChunkFactory::try_create`]
    /// to bound the payload to what the container format allows up front.
    pub fn create(&self, data: impl Into<Vec<u8>>, type_tag: ChunkType) -> Chunk {
        Chunk::new(type_tag, data.into())
    }

    /// Like [`ChunkFactory::create`], rejecting data above
    /// [`MAX_CHUNK_DATA_SIZE`]
    pub fn try_create(&self, data: impl Into<Vec<u8>>, type_tag: ChunkType) -> Result<Chunk> {
        let data = data.into();
        if data.len() > MAX_CHUNK_DATA_SIZE {
            return Err(Error::DataTooLarge {
                size: data.len(),
                max: MAX_CHUNK_DATA_SIZE,
            });
        }
        Ok(Chunk::new(type_tag, data))
    }
}
