// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! End-to-end tests for the `whispr` binary.

#![cfg(feature = "cli")]

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{ImageFormat, Rgb, RgbImage};
use tempfile::tempdir;

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(Command::new(env!("CARGO_BIN_EXE_whispr")).args(args).output()?)
}

fn write_cover(path: &Path, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 3 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn encode_then_decode() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("cover.png");
    let stego = dir.path().join("stego.png");
    write_cover(&cover, 80, 60)?;

    let out = run(&["encode", path_str(&cover), path_str(&stego), "-m", "  meet at dawn \n", "-p", "hunter2"])?;
    assert!(out.status.success(), "encode failed: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stego.exists());

    let out = run(&["decode", path_str(&stego), "-p", "hunter2"])?;
    assert!(out.status.success(), "decode failed: {}", String::from_utf8_lossy(&out.stderr));
    // The message is trimmed before embedding.
    assert_eq!(String::from_utf8(out.stdout)?, "meet at dawn\n");
    Ok(())
}

#[test]
fn wrong_password_is_reported_coarsely() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("cover.png");
    let stego = dir.path().join("stego.png");
    write_cover(&cover, 64, 64)?;

    let out = run(&["encode", path_str(&cover), path_str(&stego), "-m", "secret"])?;
    assert!(out.status.success());

    let out = run(&["decode", path_str(&stego), "-p", "guess"])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("wrong password or corrupted data"));
    Ok(())
}

#[test]
fn blank_message_refused() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("cover.png");
    write_cover(&cover, 64, 64)?;

    let out = run(&["encode", path_str(&cover), path_str(&dir.path().join("o.png")), "-m", "   "])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("secret message"));
    Ok(())
}

#[test]
fn tiny_cover_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("tiny.png");
    write_cover(&cover, 10, 10)?;

    let out = run(&["encode", path_str(&cover), path_str(&dir.path().join("o.png")), "-m", "hi"])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("too large"));
    Ok(())
}

#[test]
fn capacity_report() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("cover.png");
    write_cover(&cover, 64, 64)?;

    let out = run(&["capacity", path_str(&cover), "-m", "hello"])?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("Capacity: 1498 bytes"), "{stdout}");
    assert!(stdout.contains("Required: ~67 bytes (fits)"), "{stdout}");
    Ok(())
}

#[test]
fn non_image_input_rejected() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let bogus = dir.path().join("notes.txt");
    fs::write(&bogus, b"just some text, not pixels")?;

    let out = run(&["decode", path_str(&bogus)])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("PNG or JPEG"));
    Ok(())
}

#[test]
fn clean_image_has_no_message() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cover = dir.path().join("cover.png");
    let img = RgbImage::from_pixel(64, 64, Rgb([0x10, 0x20, 0x30]));
    img.save_with_format(&cover, ImageFormat::Png)?;

    let out = run(&["decode", path_str(&cover)])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no hidden message"));
    Ok(())
}
