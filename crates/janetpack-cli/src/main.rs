//! `janetpack` CLI — convert one msgpack file into Janet literal source.
//!
//! ## Usage
//!
//! ```sh
//! # Print the Janet form of a msgpack document to stdout
//! janetpack data.mpk
//!
//! # Pipe it into a file
//! janetpack data.mpk > data.janet
//! ```
//!
//! The output is a single line rendered with the default settings: plain
//! strings, mutable containers (`@{...}`, `@[...]`), keyword map keys.
//!
//! Two failure modes are handled with a one-line message and exit code 1:
//! a missing argument and a file that does not exist. Anything else (an
//! unreadable file, malformed msgpack, a value kind with no Janet literal)
//! propagates as a regular error report.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use janetpack_core::JanetSettings;

#[derive(Parser)]
#[command(
    name = "janetpack",
    version,
    about = "Convert a msgpack file into Janet literal source"
)]
struct Cli {
    /// Path to the msgpack file to read
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.file else {
        eprintln!("Expected an argument naming the msgpack file to read");
        process::exit(1);
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!("Unable to open non-existent file: {}", path.display());
            process::exit(1);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let value = janetpack_core::decode(&bytes)
        .with_context(|| format!("Failed to decode msgpack from: {}", path.display()))?;
    let janet = janetpack_core::format(&value, JanetSettings::default())
        .context("Failed to render the value as Janet source")?;

    println!("{janet}");
    Ok(())
}
