//! End-to-end tests for the png-stego binary

use png_stego::{test_utils::*, ChunkReader, ChunkType};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("png_stego_cli_{}_{}", std::process::id(), name))
}

fn png_stego(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png-stego"))
        .args(args)
        .output()
        .expect("Failed to run png-stego")
}

// Every byte value, so the payload is not valid UTF-8
fn binary_payload() -> Vec<u8> {
    (0..=255u8).chain([0xFF, 0xFE, 0x00, 0xC3]).collect()
}

#[test]
fn test_embed_then_extract() {
    let payload_path = temp_path("embed_payload.bin");
    let input_path = temp_path("embed_input.png");
    let output_path = temp_path("embed_output.png");
    let extracted_path = temp_path("embed_extracted.bin");
    std::fs::write(&payload_path, binary_payload()).unwrap();
    std::fs::write(&input_path, sample_png()).unwrap();

    let embed = png_stego(&[
        OsStr::new("embed"),
        payload_path.as_os_str(),
        input_path.as_os_str(),
        output_path.as_os_str(),
    ]);
    assert!(embed.status.success(), "embed failed: {embed:?}");

    // Payload chunk sits right before IEND and the output passes strict parsing
    let output = std::fs::read(&output_path).unwrap();
    let original = ChunkReader::new().parse(&sample_png()).unwrap();
    let chain = ChunkReader::new().parse(&output).unwrap();
    let n = chain.len();
    assert_eq!(n, original.len() + 1);
    assert_eq!(chain[n - 2].chunk_type(), ChunkType::coRS);
    assert!(chain[n - 1].is_end());
    assert!(chain.iter().all(|c| c.verify()));

    let extract = png_stego(&[
        OsStr::new("extract"),
        OsStr::new("--strict"),
        output_path.as_os_str(),
        extracted_path.as_os_str(),
    ]);
    assert!(extract.status.success(), "extract failed: {extract:?}");
    assert_eq!(std::fs::read(&extracted_path).unwrap(), binary_payload());

    for path in [payload_path, input_path, output_path, extracted_path] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn test_custom_tag() {
    let payload_path = temp_path("tag_payload.bin");
    let input_path = temp_path("tag_input.png");
    let output_path = temp_path("tag_output.png");
    let extracted_path = temp_path("tag_extracted.bin");
    std::fs::write(&payload_path, b"tagged").unwrap();
    std::fs::write(&input_path, minimal_png()).unwrap();

    let embed = png_stego(&[
        OsStr::new("embed"),
        OsStr::new("--tag"),
        OsStr::new("stGo"),
        payload_path.as_os_str(),
        input_path.as_os_str(),
        output_path.as_os_str(),
    ]);
    assert!(embed.status.success(), "embed failed: {embed:?}");

    // The default tag is absent, the custom one carries the payload
    let default_tag = png_stego(&[
        OsStr::new("extract"),
        output_path.as_os_str(),
        extracted_path.as_os_str(),
    ]);
    assert!(!default_tag.status.success());

    let custom_tag = png_stego(&[
        OsStr::new("extract"),
        OsStr::new("--tag"),
        OsStr::new("stGo"),
        output_path.as_os_str(),
        extracted_path.as_os_str(),
    ]);
    assert!(custom_tag.status.success(), "extract failed: {custom_tag:?}");
    assert_eq!(std::fs::read(&extracted_path).unwrap(), b"tagged");

    for path in [payload_path, input_path, output_path, extracted_path] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn test_extract_without_payload_fails() {
    let input_path = temp_path("plain_input.png");
    let extracted_path = temp_path("plain_extracted.bin");
    std::fs::write(&input_path, minimal_png()).unwrap();

    let extract = png_stego(&[
        OsStr::new("extract"),
        input_path.as_os_str(),
        extracted_path.as_os_str(),
    ]);
    assert!(!extract.status.success());
    assert!(String::from_utf8_lossy(&extract.stderr).contains("coRS"));
    assert!(!extracted_path.exists());

    std::fs::remove_file(input_path).ok();
}

#[test]
fn test_extract_rejects_bad_crc_when_strict() {
    let input_path = temp_path("corrupt_input.png");
    let extracted_path = temp_path("corrupt_extracted.bin");
    let mut data = sample_png();
    let last = data.len() - 1;
    data[last] ^= 0x55;
    std::fs::write(&input_path, data).unwrap();

    let extract = png_stego(&[
        OsStr::new("extract"),
        OsStr::new("--strict"),
        input_path.as_os_str(),
        extracted_path.as_os_str(),
    ]);
    assert!(!extract.status.success());

    std::fs::remove_file(input_path).ok();
}

#[test]
fn test_list() {
    let input_path = temp_path("list_input.png");
    std::fs::write(&input_path, sample_png()).unwrap();

    let list = png_stego(&[OsStr::new("list"), input_path.as_os_str()]);
    assert!(list.status.success(), "list failed: {list:?}");

    let stdout = String::from_utf8_lossy(&list.stdout);
    assert_eq!(stdout.lines().filter(|l| l.contains(" ok")).count(), 5);
    assert!(stdout.contains("IHDR"));
    assert!(stdout.contains("16x16"));
    assert!(stdout.contains("IEND"));

    std::fs::remove_file(input_path).ok();
}
