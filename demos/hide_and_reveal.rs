// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Demo: hide a message in a synthetic gradient and read it back.
use whispr_core::{capacity_info, decode, encode, PixelBuffer};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let message = args.get(1).map(String::as_str).unwrap_or("hello from the low bits");
    let password = args.get(2).map(String::as_str).unwrap_or("");

    let (width, height) = (128u32, 96u32);
    let rgba: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let (x, y) = (i % width, i / width);
            [(x * 2) as u8, (y * 2) as u8, 128, 255]
        })
        .collect();
    let mut image = PixelBuffer::from_rgba(width, height, rgba).expect("valid buffer");

    let info = capacity_info(&image, message);
    println!("Capacity: {} bytes, Required: ~{} bytes", info.capacity_bytes, info.estimated_bytes);

    match encode(&mut image, message, password) {
        Ok(()) => println!("Embedded {} bytes of text", message.len()),
        Err(e) => {
            eprintln!("Encode failed: {e}");
            std::process::exit(1);
        }
    }

    match decode(&image, password) {
        Ok(text) => println!("Decoded message: {text}"),
        Err(e) => eprintln!("Decode failed: {e}"),
    }
}
