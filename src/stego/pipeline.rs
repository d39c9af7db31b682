// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Encode/decode pipeline.
//!
//! Encode:
//! 1. Derive the key from the password and encrypt under a fresh nonce
//! 2. Check the envelope (nonce || ciphertext) against image capacity
//! 3. Build the frame (length, checksum, envelope) with `frame::frame_bits`
//! 4. Write the frame bits into the channel LSBs in one pass
//!
//! Decode runs the same steps backwards and refuses to run the AEAD until
//! the header is plausible and the checksum matches.

use log::debug;

use crate::stego::bitpack;
use crate::stego::capacity;
use crate::stego::checksum;
use crate::stego::crypto::{self, NONCE_LEN};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, CHECKSUM_OFFSET, HEADER_BITS, LENGTH_OFFSET};
use crate::stego::pixels::PixelBuffer;

/// Hide `message` in `image`, encrypted under `password`.
///
/// The buffer is modified in place; only the LSBs of R, G and B change.
/// An empty password is allowed and maps to a fixed default.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] if the envelope exceeds the image capacity.
///   The buffer is left untouched in that case.
/// - [`StegoError::CapacityExceeded`] if a bit lands past the end of the
///   buffer. Unreachable once the capacity check has passed.
pub fn encode(image: &mut PixelBuffer, message: &str, password: &str) -> Result<(), StegoError> {
    encode_with_nonce(image, message, password, &crypto::generate_nonce())
}

/// [`encode`] with a caller-supplied nonce. Tests use this to pin the output;
/// production callers must never reuse a nonce with the same password.
pub(crate) fn encode_with_nonce(
    image: &mut PixelBuffer,
    message: &str,
    password: &str,
    nonce: &[u8; NONCE_LEN],
) -> Result<(), StegoError> {
    // 1. Encrypt.
    let key = crypto::derive_key(password);
    let ciphertext = crypto::encrypt(&key, nonce, message.as_bytes());
    drop(key);
    let envelope = frame::build_envelope(nonce, &ciphertext);

    // 2. Capacity.
    let capacity = capacity::buffer_capacity_bytes(image);
    debug!(
        "encode: envelope {} bytes, capacity {} bytes ({}x{})",
        envelope.len(),
        capacity,
        image.width(),
        image.height()
    );
    if envelope.len() > capacity {
        return Err(StegoError::MessageTooLarge { needed: envelope.len(), capacity });
    }

    // 3. Checksum and header.
    let bits = frame::frame_bits(&envelope)
        .ok_or(StegoError::MessageTooLarge { needed: envelope.len(), capacity })?;

    // 4. Embed.
    bitpack::write_bits(image, &bits, LENGTH_OFFSET)?;

    debug!("encode: wrote {} bits", bits.len());
    Ok(())
}

/// Recover the message hidden in `image` with `password`.
///
/// # Errors
/// - [`StegoError::NoHiddenMessage`] if the length field is zero, exceeds the
///   image capacity, or points past the end of the buffer.
/// - [`StegoError::IntegrityCheckFailed`] if the envelope checksum mismatches.
/// - [`StegoError::AuthenticationFailure`] if the password is wrong or the
///   ciphertext was altered.
/// - [`StegoError::InvalidUtf8`] if the decrypted bytes are not UTF-8.
pub fn decode(image: &PixelBuffer, password: &str) -> Result<String, StegoError> {
    // 1. Length.
    let length = bitpack::read_u32(image, LENGTH_OFFSET).map_err(|_| StegoError::NoHiddenMessage)? as usize;
    let capacity = capacity::buffer_capacity_bytes(image);
    debug!("decode: header length {length}, capacity {capacity}");
    if length == 0 || length > capacity {
        return Err(StegoError::NoHiddenMessage);
    }

    // 2. Checksum field.
    let expected = bitpack::read_u32(image, CHECKSUM_OFFSET).map_err(|_| StegoError::NoHiddenMessage)?;

    // 3. Envelope.
    let envelope = bitpack::read_bytes(image, HEADER_BITS, length).map_err(|_| StegoError::NoHiddenMessage)?;

    // 4. Verify checksum.
    let actual = checksum::digest(&envelope);
    if actual != expected {
        debug!("decode: checksum mismatch");
        return Err(StegoError::IntegrityCheckFailed);
    }

    // 5. Decrypt. An envelope too short for a nonce cannot authenticate.
    let (nonce, ciphertext) = frame::split_envelope(&envelope).ok_or(StegoError::AuthenticationFailure)?;
    let key = crypto::derive_key(password);
    let plaintext = crypto::decrypt(&key, &nonce, ciphertext)?;

    // 6. Text.
    String::from_utf8(plaintext).map_err(|_| StegoError::InvalidUtf8)
}
