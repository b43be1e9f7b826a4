//! Command line front end: hide a file in a PNG chunk and get it back out
//!
//! Usage:
//!   png-stego embed <PAYLOAD> <PNG> <OUTPUT>
//!   png-stego extract <PNG> <OUTPUT>
//!   png-stego list <PNG>

use anyhow::{bail, Context};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use png_stego::{ChunkFactory, ChunkType, Ihdr, PngDocument, ReadOptions, DEFAULT_PAYLOAD_TAG};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "png-stego", version, about = "Hide files inside private PNG chunks")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Base64-encode a file and insert it as a chunk before IEND
    Embed {
        /// File to hide
        payload: PathBuf,
        /// Source PNG
        png: PathBuf,
        /// Where to write the modified PNG
        output: PathBuf,
        #[command(flatten)]
        read: ReadArgs,
    },
    /// Decode the payload chunk of a PNG into a file
    Extract {
        /// PNG carrying a payload
        png: PathBuf,
        /// Where to write the recovered file
        output: PathBuf,
        #[command(flatten)]
        read: ReadArgs,
    },
    /// Print the chunk chain of a PNG
    List {
        png: PathBuf,
        #[command(flatten)]
        read: ReadArgs,
    },
}

#[derive(Args, Debug)]
struct ReadArgs {
    /// Verify every chunk CRC while reading
    #[arg(long)]
    strict: bool,

    /// Chunk type that carries the payload
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_TAG)]
    tag: ChunkType,
}

impl ReadArgs {
    fn options(&self) -> ReadOptions {
        ReadOptions::new().strict(self.strict)
    }
}

impl Cli {
    fn init_logger(&self) -> anyhow::Result<()> {
        let level = if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("[{}] {}", record.level(), message))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()?;
        Ok(())
    }

    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Command::Embed {
                payload,
                png,
                output,
                read,
            } => embed(&payload, &png, &output, &read),
            Command::Extract { png, output, read } => extract(&png, &output, &read),
            Command::List { png, read } => list(&png, &read),
        }
    }
}

fn open(png: &Path, read: &ReadArgs) -> anyhow::Result<PngDocument> {
    let doc = PngDocument::open_with_options(png, read.options())
        .with_context(|| format!("failed to read {}", png.display()))?;
    log::debug!(
        "Read PNG: {} (strict CRC checks: {})",
        png.display(),
        doc.options().is_strict()
    );
    Ok(doc)
}

fn embed(payload: &Path, png: &Path, output: &Path, read: &ReadArgs) -> anyhow::Result<()> {
    let data =
        fs::read(payload).with_context(|| format!("failed to read {}", payload.display()))?;
    let encoded = STANDARD.encode(&data);
    log::debug!(
        "Encoded {} payload bytes into {} base64 bytes",
        data.len(),
        encoded.len()
    );

    let mut doc = open(png, read)?;
    let chunk = ChunkFactory::new().try_create(encoded.into_bytes(), read.tag)?;
    let length = chunk.length();
    let position = doc.chain()?.len().saturating_sub(1);
    doc.insert_before_end(chunk)
        .with_context(|| format!("failed to insert {} chunk", read.tag))?;
    log::info!(
        "Inserted {} chunk ({} bytes) at position {}",
        read.tag,
        length,
        position
    );

    doc.write_to(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}

fn extract(png: &Path, output: &Path, read: &ReadArgs) -> anyhow::Result<()> {
    let mut doc = open(png, read)?;
    let Some(chunk) = doc.find_chunk(read.tag)? else {
        bail!("no {} chunk in {}", read.tag, png.display());
    };
    log::debug!("Found {} chunk with {} bytes", read.tag, chunk.length());

    let data = STANDARD
        .decode(chunk.data())
        .with_context(|| format!("{} chunk is not valid base64", read.tag))?;
    fs::write(output, &data).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Extracted {} bytes to {}", data.len(), output.display());
    Ok(())
}

fn list(png: &Path, read: &ReadArgs) -> anyhow::Result<()> {
    let mut doc = open(png, read)?;
    for (index, chunk) in doc.chain()?.iter().enumerate() {
        let status = if chunk.verify() { "ok" } else { "BAD CRC" };
        let marker = if chunk.chunk_type() == read.tag { " <- payload" } else { "" };
        println!(
            "{index:>4}  {}  {:>10}  {:#010x} {status}{marker}",
            chunk.chunk_type(),
            chunk.length(),
            chunk.crc()
        );

        if chunk.chunk_type() == ChunkType::IHDR {
            match Ihdr::from_chunk(chunk) {
                Ok(ihdr) => println!(
                    "      {}x{}, bit depth {}, color type {}",
                    ihdr.width, ihdr.height, ihdr.bit_depth, ihdr.color_type
                ),
                Err(e) => log::warn!("Unreadable IHDR: {e}"),
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logger()?;
    cli.execute()
}
