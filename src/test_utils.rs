//! Test utilities for building PNG fixtures in memory.
//!
//! The fixtures are structurally valid chunk chains with correct CRCs. Pixel
//! data is a placeholder and is not meant to decode.
//!
//! # Usage
//!
//! ```
//! use png_stego::test_utils::*;
//!
//! let bytes = minimal_png();
//! assert_eq!(&bytes[..8], &png_stego::PNG_SIGNATURE);
//!
//! let bytes = png_with_chunks(&[(*b"IHDR", ihdr_data(2, 2)), (*b"IEND", Vec::new())]);
//! assert_eq!(bytes.len(), 8 + 25 + 12);
//! ```

use crate::{
    chunk::{chunk_crc, ChunkType},
    reader::PNG_SIGNATURE,
};

/// Type alias for fixture chunk specs: (type, data)
pub type ChunkSpec = ([u8; 4], Vec<u8>);

/// IHDR data for an 8-bit RGB image of the given size
pub fn ihdr_data(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[
        0x08, // Bit depth: 8
        0x02, // Color type: RGB
        0x00, // Compression: deflate
        0x00, // Filter: adaptive
        0x00, // Interlace: none
    ]);
    data
}

/// Append one encoded chunk record with a correct CRC
pub fn push_chunk(buf: &mut Vec<u8>, chunk_type: [u8; 4], data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(&chunk_type);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&chunk_crc(&ChunkType::new(chunk_type), data).to_be_bytes());
}

/// Signature followed by the given chunks, in order
pub fn png_with_chunks(chunks: &[ChunkSpec]) -> Vec<u8> {
    let mut buf = PNG_SIGNATURE.to_vec();
    for (chunk_type, data) in chunks {
        push_chunk(&mut buf, *chunk_type, data);
    }
    buf
}

/// Signature + IHDR(1x1) + IEND
pub fn minimal_png() -> Vec<u8> {
    png_with_chunks(&[(*b"IHDR", ihdr_data(1, 1)), (*b"IEND", Vec::new())])
}

/// Signature + IHDR + a few IDAT chunks + a text chunk + IEND
pub fn sample_png() -> Vec<u8> {
    png_with_chunks(&[
        (*b"IHDR", ihdr_data(16, 16)),
        (*b"tEXt", b"Comment\0fixture".to_vec()),
        (*b"IDAT", vec![0x78, 0x9c, 0x01, 0x02, 0x03]),
        (*b"IDAT", vec![0x04, 0x05, 0x06]),
        (*b"IEND", Vec::new()),
    ])
}
