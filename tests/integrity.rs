// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Capacity boundary, tamper detection, and property tests.

use proptest::prelude::*;
use whispr_core::{
    capacity_bytes, capacity_info, decode, encode, PixelBuffer, StegoError, HEADER_BITS, NONCE_LEN, TAG_LEN,
};

fn gray_rgba(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_rgba(width, height, vec![0x80; (width * height * 4) as usize]).unwrap()
}

/// Flip the LSB addressed by absolute payload bit `bit`.
fn flip_bit(img: &PixelBuffer, bit: usize) -> PixelBuffer {
    let mut raw = img.as_raw().to_vec();
    raw[(bit / 3) * 4 + bit % 3] ^= 1;
    PixelBuffer::from_rgba(img.width(), img.height(), raw).unwrap()
}

#[test]
fn ten_by_ten_has_no_capacity() {
    assert_eq!(capacity_bytes(10, 10), 0);
    let mut img = gray_rgba(10, 10);
    let result = encode(&mut img, "x", "pw");
    assert!(matches!(result, Err(StegoError::MessageTooLarge { capacity: 0, .. })));
}

#[test]
fn sixty_four_square_takes_one_char() {
    assert_eq!(capacity_bytes(64, 64), 1498);
    let mut img = gray_rgba(64, 64);
    encode(&mut img, "x", "pw").unwrap();
    assert_eq!(decode(&img, "pw").unwrap(), "x");
}

#[test]
fn exact_capacity_boundary() {
    let capacity = capacity_bytes(64, 64);
    let largest = capacity - NONCE_LEN - TAG_LEN;

    let mut img = gray_rgba(64, 64);
    let fits = "y".repeat(largest);
    encode(&mut img, &fits, "pw").unwrap();
    assert_eq!(decode(&img, "pw").unwrap(), fits);

    let mut img = gray_rgba(64, 64);
    let too_big = "y".repeat(largest + 1);
    assert_eq!(
        encode(&mut img, &too_big, "pw"),
        Err(StegoError::MessageTooLarge { needed: capacity + 1, capacity })
    );
}

#[test]
fn estimate_is_conservative() {
    let img = gray_rgba(64, 64);
    // The estimate rejects messages that would in fact still fit.
    let message = "z".repeat(1450);
    assert!(!capacity_info(&img, &message).fits);
    let mut copy = img.clone();
    assert!(encode(&mut copy, &message, "").is_ok());
}

#[test]
fn every_single_bit_flip_is_caught() {
    let mut img = gray_rgba(48, 48);
    let message = "tamper";
    encode(&mut img, message, "pw").unwrap();
    let envelope_len = NONCE_LEN + message.len() + TAG_LEN;
    let total_bits = HEADER_BITS + envelope_len * 8;

    for bit in 0..total_bits {
        let tampered = flip_bit(&img, bit);
        match decode(&tampered, "pw") {
            Ok(text) => panic!("flip of bit {bit} decoded silently to {text:?}"),
            Err(e) if bit >= 32 => {
                assert!(e.is_decode_rejection(), "bit {bit}: unexpected {e:?}")
            }
            // Length bits can also make the header implausible.
            Err(e) => assert!(
                e.is_decode_rejection() || e == StegoError::NoHiddenMessage,
                "bit {bit}: unexpected {e:?}"
            ),
        }
    }
}

#[test]
fn checksum_and_auth_failures_look_identical() {
    let mut img = gray_rgba(48, 48);
    encode(&mut img, "hello", "pw").unwrap();

    let checksum_err = decode(&flip_bit(&img, HEADER_BITS + 5), "pw").unwrap_err();
    let auth_err = decode(&img, "not-pw").unwrap_err();
    assert_eq!(checksum_err, StegoError::IntegrityCheckFailed);
    assert_eq!(auth_err, StegoError::AuthenticationFailure);
    assert_eq!(checksum_err.to_string(), auth_err.to_string());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn roundtrip_any_message(message in "\\PC{0,200}", password in "\\PC{0,16}") {
        let mut img = gray_rgba(64, 64);
        encode(&mut img, &message, &password).unwrap();
        prop_assert_eq!(decode(&img, &password).unwrap(), message);
    }

    #[test]
    fn envelope_flip_never_decodes(bit_offset in 0usize..(12 + 16 + 4) * 8) {
        let mut img = gray_rgba(32, 32);
        encode(&mut img, "abcd", "pw").unwrap();
        let result = decode(&flip_bit(&img, HEADER_BITS + bit_offset), "pw");
        prop_assert_eq!(result, Err(StegoError::IntegrityCheckFailed));
    }
}
