// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! `whispr`: hide and reveal encrypted messages in images from the shell.
//!
//! Accepts PNG or JPEG covers up to 4 MiB and always writes PNG, since any
//! lossy format would wipe the hidden bits.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use image::{ImageFormat, ImageReader, RgbaImage};
use log::{debug, info};

use whispr_core::{capacity_info, decode, encode, PixelBuffer};

/// Largest cover file accepted, in bytes.
const MAX_INPUT_FILE_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "whispr", about = "Hide encrypted messages in images", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hide a message in a cover image and write the result as PNG
    #[command(alias = "e")]
    Encode {
        /// Cover image (PNG or JPEG)
        input: PathBuf,

        /// Output PNG file
        output: PathBuf,

        /// Message to hide (leading/trailing whitespace is trimmed)
        #[arg(short, long)]
        message: String,

        /// Password (empty uses the built-in default)
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Reveal the message hidden in an image
    #[command(alias = "d")]
    Decode {
        /// Image produced by `whispr encode`
        input: PathBuf,

        /// Password used when encoding
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Show how many bytes an image can carry
    #[command(alias = "c")]
    Capacity {
        /// Cover image (PNG or JPEG)
        input: PathBuf,

        /// Draft message to check against the capacity
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Encode { input, output, message, password } => {
            let message = message.trim();
            if message.is_empty() {
                bail!("please enter a secret message");
            }
            let mut image = load_image(&input)?;
            encode(&mut image, message, &password).context("failed to embed message")?;
            save_png(image, &output)?;
            println!("Secret image written to {}", output.display());
        }
        Command::Decode { input, password } => {
            let image = load_image(&input)?;
            let message = decode(&image, &password).context("failed to extract message")?;
            println!("{message}");
        }
        Command::Capacity { input, message } => {
            let image = load_image(&input)?;
            let info = capacity_info(&image, message.as_deref().unwrap_or(""));
            println!("{}x{} pixels", image.width(), image.height());
            println!("Capacity: {} bytes", info.capacity_bytes);
            if message.is_some() {
                let verdict = if info.fits { "fits" } else { "too large" };
                println!("Required: ~{} bytes ({verdict})", info.estimated_bytes);
            }
        }
    }
    Ok(())
}

/// Read a PNG or JPEG cover and convert it to RGBA.
fn load_image(path: &Path) -> Result<PixelBuffer> {
    let size = fs::metadata(path)
        .with_context(|| format!("cannot read {}", path.display()))?
        .len();
    if size > MAX_INPUT_FILE_BYTES {
        bail!("image file is too large ({size} bytes, limit {MAX_INPUT_FILE_BYTES})");
    }

    let reader = ImageReader::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("cannot read {}", path.display()))?;
    match reader.format() {
        Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => {}
        _ => bail!("please select a PNG or JPEG image"),
    }

    let rgba = reader
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    info!("loaded {} ({width}x{height})", path.display());
    Ok(PixelBuffer::from_rgba(width, height, rgba.into_raw())?)
}

/// Write an RGBA buffer as PNG.
fn save_png(image: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    let rgba = RgbaImage::from_raw(width, height, image.into_raw())
        .context("pixel buffer does not match its dimensions")?;
    rgba.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("cannot write {}", path.display()))?;
    debug!("saved {} ({width}x{height})", path.display());
    Ok(())
}
