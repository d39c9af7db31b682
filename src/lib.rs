// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # whispr-core
//!
//! Hide password-encrypted text messages in the least-significant bits of
//! lossless RGB(A) images, and get them back.
//!
//! The engine works on decoded pixel buffers only. Loading and saving image
//! files is left to the caller (the `whispr` binary does it with the `image`
//! crate when the `cli` feature is enabled).
//!
//! Encryption is AES-256-GCM with a random 12-byte nonce per message; the key
//! is PBKDF2-HMAC-SHA256 (100,000 rounds, fixed salt) over the password.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use whispr_core::{decode, encode, PixelBuffer};
//!
//! let rgba = vec![128u8; 64 * 64 * 4];
//! let mut image = PixelBuffer::from_rgba(64, 64, rgba).unwrap();
//! encode(&mut image, "secret message", "passphrase").unwrap();
//! let decoded = decode(&image, "passphrase").unwrap();
//! assert_eq!(decoded, "secret message");
//! ```

pub mod stego;

pub use stego::{decode, encode, StegoError};
pub use stego::{Channels, PixelBuffer};
pub use stego::{buffer_capacity_bytes, capacity_bytes, capacity_info, estimate_ciphertext_bytes, CapacityInfo};
pub use stego::{DEFAULT_PASSWORD, HEADER_BITS, NONCE_LEN, RESERVED_PIXELS, TAG_LEN};
