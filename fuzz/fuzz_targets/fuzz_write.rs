#![no_main]

use libfuzzer_sys::fuzz_target;
use png_stego::{ChunkFactory, ChunkReader, ChunkType, ChunkWriter, PNG_SIGNATURE};

fuzz_target!(|data: &[u8]| {
    // Parse, insert a payload before the last chunk, write, parse again
    let Ok(mut chain) = ChunkReader::new().parse(data) else {
        return;
    };

    let reversed: Vec<u8> = data.iter().rev().copied().collect();
    let payload = ChunkFactory::new().create(reversed, ChunkType::coRS);
    let index = chain.len() - 1;
    chain.insert(index, payload.clone()).expect("index is in range");

    let output = ChunkWriter::new()
        .serialize(&PNG_SIGNATURE, &chain)
        .expect("chunks from a parsed buffer fit the length field");
    let reparsed = ChunkReader::new().parse(&output).expect("writer output must parse");

    assert_eq!(reparsed, chain);
    assert_eq!(reparsed[reparsed.len() - 2], payload);
});
