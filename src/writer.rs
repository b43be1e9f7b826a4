//! Chunk chain writer

use crate::{
    chain::ChunkChain,
    chunk::Chunk,
    error::{Error, Result},
};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// Reassembles a signature and a chunk chain into PNG bytes
///
/// Chunks are written verbatim in chain order: stored CRCs are not
/// recomputed and chain structure is not checked. A chunk whose data does
/// not fit the 32-bit length field fails with [`Error::DataTooLarge`]
/// instead of being written with a wrapped length.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkWriter;

impl ChunkWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize into a new buffer
    pub fn serialize(&self, signature: &[u8; 8], chain: &ChunkChain) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(signature.len() + chain.encoded_len());
        self.write(&mut out, signature, chain)?;
        Ok(out)
    }

    /// Stream the signature and chunks into `writer`
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        signature: &[u8; 8],
        chain: &ChunkChain,
    ) -> Result<()> {
        writer.write_all(signature)?;
        for chunk in chain {
            Self::write_chunk(writer, chunk)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write a single chunk record
    fn write_chunk<W: Write>(writer: &mut W, chunk: &Chunk) -> Result<()> {
        let length = length_field(chunk.data().len())?;
        writer.write_u32::<BigEndian>(length)?;
        writer.write_all(chunk.chunk_type().as_bytes())?;
        writer.write_all(chunk.data())?;
        writer.write_u32::<BigEndian>(chunk.crc())?;
        Ok(())
    }
}

/// Convert a data size into the on-disk length field
fn length_field(size: usize) -> Result<u32> {
    u32::try_from(size).map_err(|_| Error::DataTooLarge {
        size,
        max: u32::MAX as usize,
    })
}
