// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from pixel buffer validation
//! through encryption, bit packing, and payload extraction.
//!
//! The decode-side integrity failures ([`StegoError::IntegrityCheckFailed`]
//! and [`StegoError::AuthenticationFailure`]) stay distinct variants so tests
//! and callers can tell them apart, but they render to the same message. A
//! user (or attacker) looking at the text cannot learn which check tripped.

use thiserror::Error;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The raw pixel data does not match `width * height * stride`.
    #[error("invalid pixel buffer: {0}")]
    InvalidPixelBuffer(&'static str),

    /// The encrypted envelope does not fit in the cover image.
    #[error("message too large for this image ({needed} bytes needed, {capacity} available)")]
    MessageTooLarge { needed: usize, capacity: usize },

    /// A write addressed a channel past the end of the pixel buffer.
    #[error("bit {bit_index} is beyond the image capacity")]
    CapacityExceeded { bit_index: usize },

    /// A read addressed a channel past the end of the pixel buffer.
    #[error("bit {bit_index} is beyond the image data")]
    OutOfRange { bit_index: usize },

    /// The header length field is zero or larger than the image can hold.
    #[error("no hidden message found in this image")]
    NoHiddenMessage,

    /// Checksum over the extracted envelope did not match the header.
    #[error("wrong password or corrupted data")]
    IntegrityCheckFailed,

    /// AES-GCM tag verification failed.
    #[error("wrong password or corrupted data")]
    AuthenticationFailure,

    /// The decrypted plaintext is not valid UTF-8.
    #[error("extracted text is not valid UTF-8")]
    InvalidUtf8,
}

impl StegoError {
    /// Returns `true` for the failures that must not be told apart at the
    /// user-facing boundary (checksum mismatch vs. AEAD rejection).
    pub fn is_decode_rejection(&self) -> bool {
        matches!(self, Self::IntegrityCheckFailed | Self::AuthenticationFailure)
    }
}
