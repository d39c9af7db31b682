// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Capacity estimation.
//!
//! Every pixel carries three payload bits (one per color channel). A fixed
//! margin of [`RESERVED_PIXELS`] is held back regardless of the actual
//! 64-bit header size; the bit packer's own bounds check covers the header.

use crate::stego::crypto::NONCE_LEN;
use crate::stego::pixels::PixelBuffer;

/// Pixels withheld from the capacity figure.
pub const RESERVED_PIXELS: usize = 100;

/// Payload bits carried per pixel (R, G, B).
pub const BITS_PER_PIXEL: usize = 3;

/// Slack added to the UX estimate for the AEAD tag and headroom.
pub const ESTIMATE_OVERHEAD: usize = 50;

/// Maximum envelope size (nonce + ciphertext + tag) in bytes for an image
/// of the given dimensions. Zero when the image has fewer than
/// [`RESERVED_PIXELS`] pixels. Saturates at `usize::MAX` on targets where
/// the true figure does not fit.
pub fn capacity_bytes(width: u32, height: u32) -> usize {
    let pixels = u128::from(width) * u128::from(height);
    let bytes = pixels.saturating_sub(RESERVED_PIXELS as u128) * BITS_PER_PIXEL as u128 / 8;
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

/// Capacity of an existing pixel buffer. See [`capacity_bytes`].
pub fn buffer_capacity_bytes(buffer: &PixelBuffer) -> usize {
    capacity_bytes(buffer.width(), buffer.height())
}

/// Rough envelope size for a message: UTF-8 length + nonce + fixed overhead.
///
/// This over-estimates on purpose and is only meant for display. The exact
/// check happens inside `encode`.
pub fn estimate_ciphertext_bytes(plaintext: &str) -> usize {
    plaintext.len() + NONCE_LEN + ESTIMATE_OVERHEAD
}

/// Capacity readout for a cover image and a draft message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    /// Envelope bytes the image can hold.
    pub capacity_bytes: usize,
    /// Estimated envelope bytes the message needs.
    pub estimated_bytes: usize,
    /// `estimated_bytes <= capacity_bytes`.
    pub fits: bool,
}

/// Compare the capacity of `buffer` against the estimate for `plaintext`.
pub fn capacity_info(buffer: &PixelBuffer, plaintext: &str) -> CapacityInfo {
    let capacity_bytes = buffer_capacity_bytes(buffer);
    let estimated_bytes = estimate_ciphertext_bytes(plaintext);
    CapacityInfo {
        capacity_bytes,
        estimated_bytes,
        fits: estimated_bytes <= capacity_bytes,
    }
}
