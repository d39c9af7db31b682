// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload frame construction and parsing.
//!
//! The frame is the exact bit sequence written into the image LSBs:
//!
//! ```text
//! bit 0..31   length    (u32, MSB first) byte length of the envelope
//! bit 32..63  checksum  (u32, MSB first) checksum::digest(envelope)
//! bit 64..    envelope  nonce (12 bytes) || AES-GCM ciphertext with tag
//! ```
//!
//! Bits are represented as `u8` values 0 or 1, most significant bit first
//! within every integer and every byte.

use crate::stego::checksum;
use crate::stego::crypto::NONCE_LEN;

/// Width of each header field in bits.
pub const FIELD_BITS: usize = 32;

/// Bit offset of the length field.
pub const LENGTH_OFFSET: usize = 0;

/// Bit offset of the checksum field.
pub const CHECKSUM_OFFSET: usize = 32;

/// Bit offset of the first envelope bit. Also the total header size.
pub const HEADER_BITS: usize = 64;

/// Decoded 64-bit frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Envelope length in bytes.
    pub length: u32,
    /// Checksum of the envelope.
    pub checksum: u32,
}

impl FrameHeader {
    /// Header describing `envelope`. `None` if the envelope is too long for
    /// the 32-bit length field.
    pub fn for_envelope(envelope: &[u8]) -> Option<Self> {
        Some(Self {
            length: length_field(envelope.len())?,
            checksum: checksum::digest(envelope),
        })
    }

    /// Total frame size in bits for this header.
    pub fn frame_bits(&self) -> usize {
        HEADER_BITS + self.length as usize * 8
    }
}

/// Envelope byte length as stored in the header.
pub(crate) fn length_field(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

/// Concatenate nonce and ciphertext into an envelope.
pub fn build_envelope(nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(ciphertext);
    envelope
}

/// Split an envelope into its nonce and ciphertext. `None` if the envelope
/// is shorter than a nonce.
pub fn split_envelope(envelope: &[u8]) -> Option<([u8; NONCE_LEN], &[u8])> {
    if envelope.len() < NONCE_LEN {
        return None;
    }
    let (head, rest) = envelope.split_at(NONCE_LEN);
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(head);
    Some((nonce, rest))
}

/// Convert a `u32` to 32 bits, MSB first.
pub fn u32_to_bits(value: u32) -> Vec<u8> {
    (0..FIELD_BITS).rev().map(|pos| ((value >> pos) & 1) as u8).collect()
}

/// Convert up to 32 bits (MSB first) back to a `u32`.
pub fn bits_to_u32(bits: &[u8]) -> u32 {
    debug_assert!(bits.len() <= FIELD_BITS);
    bits.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1))
}

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Full frame bitstream: length, checksum, then envelope bits, starting at
/// [`LENGTH_OFFSET`]. `None` if the envelope is too long for the header.
pub fn frame_bits(envelope: &[u8]) -> Option<Vec<u8>> {
    let header = FrameHeader::for_envelope(envelope)?;
    let mut bits = Vec::with_capacity(header.frame_bits());
    bits.extend(u32_to_bits(header.length));
    bits.extend(u32_to_bits(header.checksum));
    bits.extend(bytes_to_bits(envelope));
    debug_assert_eq!(bits.len(), header.frame_bits());
    Some(bits)
}
