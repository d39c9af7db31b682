// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! LSB bit packing over RGB(A) pixel buffers.
//!
//! This module defines the steganographic layout. Absolute bit index `i`
//! lands in the least-significant bit of
//!
//! ```text
//! pixel   = i / 3
//! channel = i % 3        (0 = red, 1 = green, 2 = blue)
//! ```
//!
//! scanning pixels in row-major order. Alpha is never addressed. For RGBA
//! buffers the byte offset is `pixel * 4 + channel`, identical to the
//! browser canvas layout the format was first written against; RGB buffers
//! use the same (pixel, channel) pairs with a stride of 3, so an RGB image
//! and its RGBA expansion carry the same payload.
//!
//! Changing either formula makes previously written images unreadable.

use crate::stego::error::StegoError;
use crate::stego::frame;
use crate::stego::pixels::PixelBuffer;

/// Color channels addressed per pixel.
const CHANNELS_PER_PIXEL: usize = 3;

/// Map an absolute bit index to `(pixel, channel)`.
#[inline]
pub(crate) fn locate(bit_index: usize) -> (usize, usize) {
    (bit_index / CHANNELS_PER_PIXEL, bit_index % CHANNELS_PER_PIXEL)
}

/// Number of addressable payload bits in `buffer`.
pub(crate) fn capacity_bits(buffer: &PixelBuffer) -> usize {
    buffer.pixel_count() * CHANNELS_PER_PIXEL
}

/// Write `bits` (values 0/1) into channel LSBs starting at `start`.
///
/// Stops with [`StegoError::CapacityExceeded`] at the first bit whose
/// channel falls outside the buffer. Bits written before that point stay
/// written; callers abort the whole operation on error.
pub fn write_bits(buffer: &mut PixelBuffer, bits: &[u8], start: usize) -> Result<(), StegoError> {
    for (k, &bit) in bits.iter().enumerate() {
        let bit_index = start + k;
        let (pixel, channel) = locate(bit_index);
        let offset = buffer
            .channel_offset(pixel, channel)
            .ok_or(StegoError::CapacityExceeded { bit_index })?;
        let data = buffer.data_mut();
        data[offset] = (data[offset] & 0xFE) | (bit & 1);
    }
    Ok(())
}

/// Read `count` channel LSBs starting at `start`.
///
/// Fails with [`StegoError::OutOfRange`] if any of the requested bits lies
/// outside the buffer. Nothing is allocated for an out-of-range request.
pub fn read_bits(buffer: &PixelBuffer, start: usize, count: usize) -> Result<Vec<u8>, StegoError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let last = start
        .checked_add(count - 1)
        .ok_or(StegoError::OutOfRange { bit_index: usize::MAX })?;
    if last >= capacity_bits(buffer) {
        let first_bad = start.max(capacity_bits(buffer));
        return Err(StegoError::OutOfRange { bit_index: first_bad });
    }

    let data = buffer.as_raw();
    let mut bits = Vec::with_capacity(count);
    for bit_index in start..=last {
        let (pixel, channel) = locate(bit_index);
        let offset = buffer
            .channel_offset(pixel, channel)
            .ok_or(StegoError::OutOfRange { bit_index })?;
        bits.push(data[offset] & 1);
    }
    Ok(bits)
}

/// Write a `u32` as 32 bits, MSB first.
pub fn write_u32(buffer: &mut PixelBuffer, value: u32, start: usize) -> Result<(), StegoError> {
    write_bits(buffer, &frame::u32_to_bits(value), start)
}

/// Read a `u32` stored as 32 bits, MSB first.
pub fn read_u32(buffer: &PixelBuffer, start: usize) -> Result<u32, StegoError> {
    let bits = read_bits(buffer, start, frame::FIELD_BITS)?;
    Ok(frame::bits_to_u32(&bits))
}

/// Write bytes, MSB first within each byte.
pub fn write_bytes(buffer: &mut PixelBuffer, bytes: &[u8], start: usize) -> Result<(), StegoError> {
    write_bits(buffer, &frame::bytes_to_bits(bytes), start)
}

/// Read `len` bytes, MSB first within each byte.
pub fn read_bytes(buffer: &PixelBuffer, start: usize, len: usize) -> Result<Vec<u8>, StegoError> {
    let bit_count = len
        .checked_mul(8)
        .ok_or(StegoError::OutOfRange { bit_index: usize::MAX })?;
    let bits = read_bits(buffer, start, bit_count)?;
    Ok(frame::bits_to_bytes(&bits))
}
