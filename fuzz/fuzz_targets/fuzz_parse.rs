#![no_main]

use libfuzzer_sys::fuzz_target;
use png_stego::{ChunkReader, ReadOptions};

fuzz_target!(|data: &[u8]| {
    // Any input must parse or return a typed error, never panic
    let _ = ChunkReader::new().parse(data);

    if let Ok(chain) = ChunkReader::with_options(ReadOptions::new().strict(true)).parse(data) {
        // Strict mode only accepts chunks whose CRC checks out
        assert!(chain.iter().all(|chunk| chunk.verify()));
    }
});
