//! Ordered chunk container

use crate::{
    chunk::{Chunk, ChunkType},
    error::{Error, Result},
};
use std::ops::Index;

/// An ordered sequence of chunks
///
/// Order is the byte order of the reassembled file. The chain does not
/// require IEND to be last; keeping it there is up to whoever mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkChain {
    chunks: Vec<Chunk>,
}

impl ChunkChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    pub fn first(&self) -> Option<&Chunk> {
        self.chunks.first()
    }

    pub fn last(&self) -> Option<&Chunk> {
        self.chunks.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    pub fn as_slice(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Whether the last chunk is IEND
    pub fn is_terminated(&self) -> bool {
        self.last().is_some_and(Chunk::is_end)
    }

    /// Add a chunk at the end
    pub fn append(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Insert a chunk at `index`, shifting later chunks back
    ///
    /// `index` may equal `len()` (same as append). Inserting at `len() - 1`
    /// places the chunk right before the current last chunk.
    pub fn insert(&mut self, index: usize, chunk: Chunk) -> Result<()> {
        if index > self.chunks.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.chunks.len(),
            });
        }
        self.chunks.insert(index, chunk);
        Ok(())
    }

    /// Insert a chunk immediately before the last chunk (normally IEND)
    pub fn insert_before_end(&mut self, chunk: Chunk) -> Result<()> {
        let index = self
            .chunks
            .len()
            .checked_sub(1)
            .ok_or(Error::IndexOutOfRange { index: 0, len: 0 })?;
        self.insert(index, chunk)
    }

    /// Remove and return the chunk at `index`
    pub fn remove(&mut self, index: usize) -> Result<Chunk> {
        if index >= self.chunks.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.chunks.len(),
            });
        }
        Ok(self.chunks.remove(index))
    }

    /// First chunk with the given type
    pub fn find(&self, chunk_type: ChunkType) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.chunk_type() == chunk_type)
    }

    /// Position of the first chunk with the given type
    pub fn position(&self, chunk_type: ChunkType) -> Option<usize> {
        self.chunks.iter().position(|c| c.chunk_type() == chunk_type)
    }

    /// All chunks with the given type, in chain order
    pub fn find_all(&self, chunk_type: ChunkType) -> impl Iterator<Item = &Chunk> + '_ {
        self.chunks
            .iter()
            .filter(move |c| c.chunk_type() == chunk_type)
    }

    /// Total size of all chunk records, excluding the signature
    pub fn encoded_len(&self) -> usize {
        self.chunks.iter().map(Chunk::encoded_len).sum()
    }
}

impl Index<usize> for ChunkChain {
    type Output = Chunk;

    fn index(&self, index: usize) -> &Chunk {
        &self.chunks[index]
    }
}

impl From<Vec<Chunk>> for ChunkChain {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }
}

impl FromIterator<Chunk> for ChunkChain {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ChunkChain {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChunkChain {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
