// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Envelope checksum.
//!
//! A running byte sum reduced modulo `0xFFFF_FFFF` (not 2^32). It is a cheap
//! format sanity check that lets decode reject garbage before running the
//! AEAD; it carries no security weight. The modulus is part of the wire
//! format and must not be "fixed" to 2^32.

/// Checksum modulus.
pub(crate) const CHECKSUM_MODULUS: u64 = 0xFFFF_FFFF;

/// Sum of all bytes modulo `0xFFFFFFFF`.
pub fn digest(bytes: &[u8]) -> u32 {
    let sum = bytes
        .iter()
        .fold(0u64, |acc, &b| (acc + u64::from(b)) % CHECKSUM_MODULUS);
    sum as u32
}
