// Integration tests using the test_utils module

#[cfg(test)]
mod codec_tests {
    use png_stego::{
        chunk_crc, test_utils::*, Chunk, ChunkFactory, ChunkReader, ChunkType, ChunkWriter,
        ReadOptions, PNG_SIGNATURE,
    };

    #[test]
    fn test_end_to_end_payload() {
        let input = minimal_png();
        let mut chain = ChunkReader::new().parse(&input).expect("Failed to parse");
        assert_eq!(chain.len(), 2);

        let chunk = ChunkFactory::new().create(b"hello".to_vec(), ChunkType::coRS);
        assert_eq!(chunk.length(), 5);
        assert_eq!(chunk.crc(), chunk_crc(&ChunkType::coRS, b"hello"));

        chain.insert(1, chunk).expect("Failed to insert");
        assert_eq!(chain.len(), 3);

        let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();

        // Strict re-parse proves every CRC in the output is right
        let strict = ChunkReader::with_options(ReadOptions::new().strict(true));
        let reparsed = strict.parse(&output).expect("Failed to re-parse output");

        assert_eq!(reparsed.len(), 3);
        assert_eq!(reparsed[0].chunk_type(), ChunkType::IHDR);
        assert_eq!(reparsed[1].chunk_type(), ChunkType::coRS);
        assert_eq!(reparsed[2].chunk_type(), ChunkType::IEND);

        let payload = reparsed.find(ChunkType::coRS).expect("Payload chunk missing");
        assert_eq!(payload.data(), b"hello");
    }

    #[test]
    fn test_round_trip_is_byte_exact() {
        for input in [minimal_png(), sample_png()] {
            let chain = ChunkReader::new().parse(&input).unwrap();
            let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_round_trip_keeps_bad_crc() {
        let mut input = sample_png();
        let last = input.len() - 1;
        input[last] ^= 0x55;

        let chain = ChunkReader::new().parse(&input).unwrap();
        let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_trailing_bytes_dropped() {
        let clean = sample_png();
        let mut input = clean.clone();
        input.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let chain = ChunkReader::new().parse(&input).unwrap();
        let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();
        assert_eq!(output, clean);
    }

    #[test]
    fn test_insert_before_iend_in_larger_chain() {
        let mut chain = ChunkReader::new().parse(&sample_png()).unwrap();
        let before: Vec<Chunk> = chain.iter().cloned().collect();

        let payload = ChunkFactory::new().create(b"secret".to_vec(), ChunkType::coRS);
        let index = chain.len() - 1;
        chain.insert(index, payload.clone()).unwrap();

        let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();
        let reparsed = ChunkReader::new().parse(&output).unwrap();

        let n = reparsed.len();
        assert_eq!(n, before.len() + 1);
        assert_eq!(reparsed[n - 2], payload);
        assert_eq!(reparsed[n - 1], before[before.len() - 1]);
        assert_eq!(&reparsed.as_slice()[..n - 2], &before[..before.len() - 1]);
    }

    #[test]
    fn test_multiple_payload_chunks() {
        let mut chain = ChunkReader::new().parse(&minimal_png()).unwrap();
        let factory = ChunkFactory::new();
        chain.insert_before_end(factory.create(b"one".to_vec(), ChunkType::coRS)).unwrap();
        chain.insert_before_end(factory.create(b"two".to_vec(), ChunkType::coRS)).unwrap();

        let output = ChunkWriter::new().serialize(&PNG_SIGNATURE, &chain).unwrap();
        let reparsed = ChunkReader::new().parse(&output).unwrap();

        let payloads: Vec<&[u8]> = reparsed
            .find_all(ChunkType::coRS)
            .map(|c| c.data())
            .collect();
        assert_eq!(payloads, [&b"one"[..], &b"two"[..]]);
        assert!(reparsed.is_terminated());
    }
}

#[cfg(test)]
mod document_tests {
    use png_stego::{
        test_utils::*, ChunkFactory, ChunkType, Ihdr, PngDocument, DEFAULT_PAYLOAD_TAG,
    };
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("png_stego_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_file_round_trip_with_payload() {
        let input_path = temp_path("input.png");
        let output_path = temp_path("output.png");
        std::fs::write(&input_path, sample_png()).unwrap();

        let mut doc = PngDocument::open(&input_path).expect("Failed to open PNG");
        let chunk = ChunkFactory::new().create(b"aGVsbG8=".to_vec(), DEFAULT_PAYLOAD_TAG);
        doc.insert_before_end(chunk).unwrap();
        doc.write_to(&output_path).expect("Failed to write PNG");

        let mut verify = PngDocument::open(&output_path).expect("Failed to open output");
        let found = verify.find_chunk(DEFAULT_PAYLOAD_TAG).unwrap().unwrap();
        assert_eq!(found.data(), b"aGVsbG8=");
        assert!(verify.chain().unwrap().is_terminated());

        std::fs::remove_file(input_path).ok();
        std::fs::remove_file(output_path).ok();
    }

    #[test]
    fn test_open_missing_file() {
        let result = PngDocument::open(temp_path("does_not_exist.png"));
        assert!(matches!(result.unwrap_err(), png_stego::Error::Io(_)));
    }

    #[test]
    fn test_unmodified_document_round_trip() {
        let input = sample_png();
        let mut doc = PngDocument::from_bytes(input.clone()).unwrap();
        assert_eq!(doc.to_bytes().unwrap(), input);
    }

    #[test]
    fn test_ihdr_from_document() {
        let mut doc = PngDocument::from_bytes(sample_png()).unwrap();
        let ihdr = Ihdr::from_chunk(doc.find_chunk(ChunkType::IHDR).unwrap().unwrap()).unwrap();
        assert_eq!((ihdr.width, ihdr.height), (16, 16));
        assert_eq!(ihdr.bit_depth, 8);
    }

    #[test]
    fn test_stream_write() {
        let mut doc = PngDocument::from_bytes(minimal_png()).unwrap();
        let mut out = Vec::new();
        doc.write(&mut out).unwrap();
        assert_eq!(out, minimal_png());
    }
}
