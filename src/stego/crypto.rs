// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Cryptographic primitives for payload encryption.
//!
//! - **Key derivation**: PBKDF2-HMAC-SHA256, fixed salt, 100,000 iterations,
//!   256-bit output. The salt is fixed so the decoder can reproduce the key
//!   from the password alone; nothing but the nonce is stored in the image.
//!
//! - **Encryption**: AES-256-GCM with a 12-byte nonce drawn fresh from the
//!   thread-local CSPRNG for every message. The nonce travels in the clear
//!   at the front of the envelope.
//!
//! Key material lives in [`Zeroizing`] buffers and is wiped when dropped.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub(crate) const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Fixed PBKDF2 salt. Not secret.
pub const KDF_SALT: &[u8] = b"whispr-salt-2024";

/// Stand-in for an empty password. Not secret; it only keeps the
/// "no password" case deterministic.
pub const DEFAULT_PASSWORD: &str = "whispr-default-key-2024";

/// 256-bit symmetric key, zeroed on drop.
pub type DerivedKey = Zeroizing<[u8; KEY_LEN]>;

/// Derive the AES-256 key from a password.
///
/// An empty password is replaced by [`DEFAULT_PASSWORD`] before stretching.
pub fn derive_key(password: &str) -> DerivedKey {
    let password = if password.is_empty() { DEFAULT_PASSWORD } else { password };
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), KDF_SALT, PBKDF2_ITERATIONS, &mut *key);
    key
}

/// Fill a fresh nonce from the thread-local CSPRNG.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}

/// Encrypt plaintext with AES-256-GCM.
///
/// Returns the ciphertext with the 16-byte tag appended, so the output is
/// always `plaintext.len() + TAG_LEN` bytes.
pub fn encrypt(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .expect("AES-GCM encrypt should not fail")
}

/// Decrypt and authenticate AES-256-GCM ciphertext (tag appended).
///
/// Returns [`StegoError::AuthenticationFailure`] for a wrong key, a wrong
/// nonce, flipped bits, or input shorter than the tag. No partial plaintext
/// is ever returned.
pub fn decrypt(key: &DerivedKey, nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, StegoError> {
    if ciphertext.len() < TAG_LEN {
        return Err(StegoError::AuthenticationFailure);
    }
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| StegoError::AuthenticationFailure)
}
