// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Steganographic encoding and decoding.
//!
//! The encrypted message is written one bit per color channel into the
//! least-significant bits of an RGB(A) raster:
//!
//! ```text
//! bits 0..31   envelope length (u32, MSB first)
//! bits 32..63  envelope checksum (u32, sum of bytes mod 0xFFFFFFFF)
//! bits 64..    envelope = nonce (12) || AES-256-GCM ciphertext + tag (16)
//! ```
//!
//! Keys come from PBKDF2-HMAC-SHA256 over the password with a fixed salt, so
//! the password is the only secret. The format only survives lossless
//! storage (PNG, BMP, ...); any lossy re-encode destroys the payload.
//!
//! Every call is self-contained: no state is kept between calls and nothing
//! here spawns threads, so independent buffers can be processed from
//! independent threads freely.

pub mod error;
pub mod pixels;
pub mod crypto;
pub mod checksum;
pub mod capacity;
pub mod frame;
pub mod bitpack;
mod pipeline;

pub use error::StegoError;
pub use pixels::{Channels, PixelBuffer};
pub use capacity::{
    buffer_capacity_bytes, capacity_bytes, capacity_info, estimate_ciphertext_bytes, CapacityInfo,
    ESTIMATE_OVERHEAD, RESERVED_PIXELS,
};
pub use crypto::{DEFAULT_PASSWORD, KDF_SALT, NONCE_LEN, PBKDF2_ITERATIONS, TAG_LEN};
pub use frame::HEADER_BITS;
pub use pipeline::{decode, encode};

