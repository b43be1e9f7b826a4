//! PNG document: signature plus chunk chain
//!
//! A document read from bytes keeps the raw buffer until the chain is first
//! needed, parses it once and caches the result. A document built from
//! scratch starts with an empty chain.

use crate::{
    chain::ChunkChain,
    chunk::{Chunk, ChunkType},
    error::Result,
    reader::{read_signature, ChunkReader, ReadOptions, PNG_SIGNATURE},
    writer::ChunkWriter,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A PNG file as a signature and an ordered chunk chain
///
/// # Example
///
/// ```no_run
/// use png_stego::{ChunkFactory, ChunkType, PngDocument};
///
/// # fn main() -> png_stego::Result<()> {
/// let mut doc = PngDocument::open("image.png")?;
///
/// let chunk = ChunkFactory::new().create(b"hello".to_vec(), ChunkType::coRS);
/// doc.insert_before_end(chunk)?;
/// doc.write_to("output.png")?;
///
/// let mut verify = PngDocument::open("output.png")?;
/// assert_eq!(verify.find_chunk(ChunkType::coRS)?.unwrap().data(), b"hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PngDocument {
    signature: [u8; 8],

    /// Raw file bytes, released once parsed
    source: Vec<u8>,

    options: ReadOptions,

    /// Parsed chain; `None` until first accessed
    chain: Option<ChunkChain>,
}

impl PngDocument {
    /// Create an empty document with the standard PNG signature
    pub fn new() -> Self {
        Self::with_signature(PNG_SIGNATURE)
    }

    /// Create an empty document with a caller-supplied signature
    pub fn with_signature(signature: [u8; 8]) -> Self {
        Self {
            signature,
            source: Vec::new(),
            options: ReadOptions::default(),
            chain: Some(ChunkChain::new()),
        }
    }

    /// Wrap an existing PNG buffer (permissive parsing)
    ///
    /// Only the signature is checked here; chunks are parsed on first access.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_options(bytes, ReadOptions::default())
    }

    /// Wrap an existing PNG buffer with explicit read options
    pub fn from_bytes_with_options(bytes: Vec<u8>, options: ReadOptions) -> Result<Self> {
        let signature = read_signature(&bytes)?;
        Ok(Self {
            signature,
            source: bytes,
            options,
            chain: None,
        })
    }

    /// Read a PNG file from a path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ReadOptions::default())
    }

    /// Read a PNG file from a path with explicit read options
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ReadOptions) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes_with_options(bytes, options)
    }

    pub fn signature(&self) -> &[u8; 8] {
        &self.signature
    }

    pub fn options(&self) -> ReadOptions {
        self.options
    }

    /// Whether the chunk chain has been populated
    pub fn is_parsed(&self) -> bool {
        self.chain.is_some()
    }

    /// Parse the source buffer once, then return the cached chain
    fn populate(&mut self) -> Result<&mut ChunkChain> {
        if self.chain.is_none() {
            let chain = ChunkReader::with_options(self.options).parse(&self.source)?;
            self.source = Vec::new();
            self.chain = Some(chain);
        }
        Ok(self.chain.get_or_insert_with(ChunkChain::new))
    }

    /// The chunk chain, parsing it on first access
    pub fn chain(&mut self) -> Result<&ChunkChain> {
        self.populate().map(|chain| &*chain)
    }

    /// Add a chunk at the end of the chain
    pub fn append(&mut self, chunk: Chunk) -> Result<()> {
        self.populate()?.append(chunk);
        Ok(())
    }

    /// Insert a chunk at `index` (see [`ChunkChain::insert`])
    pub fn insert(&mut self, index: usize, chunk: Chunk) -> Result<()> {
        self.populate()?.insert(index, chunk)
    }

    /// Insert a chunk right before the last chunk (normally IEND)
    pub fn insert_before_end(&mut self, chunk: Chunk) -> Result<()> {
        self.populate()?.insert_before_end(chunk)
    }

    /// First chunk with the given type
    pub fn find_chunk(&mut self, chunk_type: ChunkType) -> Result<Option<&Chunk>> {
        Ok(self.populate()?.find(chunk_type))
    }

    /// Serialize the signature and chain into a new buffer
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let signature = self.signature;
        let chain = self.populate()?;
        ChunkWriter::new().serialize(&signature, chain)
    }

    /// Stream the document into `writer`
    pub fn write<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        let signature = self.signature;
        let chain = self.populate()?;
        ChunkWriter::new().write(writer, &signature, chain)
    }

    /// Write the document to a file
    pub fn write_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let mut output = BufWriter::new(File::create(path)?);
        self.write(&mut output)
    }

    /// Consume the document, returning its chain
    pub fn into_chain(mut self) -> Result<ChunkChain> {
        self.populate()?;
        Ok(self.chain.unwrap_or_default())
    }
}

impl Default for PngDocument {
    fn default() -> Self {
        Self::new()
    }
}
