// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Raw interleaved pixel buffers.
//!
//! The engine never decodes image files itself. Callers hand it a decoded
//! 8-bit RGB or RGBA raster and get the same raster back with modified LSBs.
//! Only the first three channels of each pixel are ever addressed; alpha is
//! carried along untouched.

use crate::stego::error::StegoError;

/// Channel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// 3 bytes per pixel: red, green, blue.
    Rgb,
    /// 4 bytes per pixel: red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Bytes per pixel.
    pub const fn stride(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// An owned, row-major, interleaved 8-bit raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw pixel data, checking that its length matches the dimensions.
    ///
    /// # Errors
    /// [`StegoError::InvalidPixelBuffer`] if the dimensions overflow or
    /// `data.len() != width * height * stride`.
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self, StegoError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|p| p.checked_mul(channels.stride()))
            .ok_or(StegoError::InvalidPixelBuffer("dimensions overflow"))?;
        if data.len() != expected {
            return Err(StegoError::InvalidPixelBuffer("data length does not match width * height * stride"));
        }
        Ok(Self { width, height, channels, data })
    }

    /// Wrap RGBA data (4 bytes per pixel).
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, StegoError> {
        Self::new(width, height, Channels::Rgba, data)
    }

    /// Wrap RGB data (3 bytes per pixel).
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, StegoError> {
        Self::new(width, height, Channels::Rgb, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Total number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Borrow the raw interleaved bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw interleaved bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of `channel` (0..3) in pixel `pixel`, or `None` if the
    /// pixel lies outside the raster.
    pub(crate) fn channel_offset(&self, pixel: usize, channel: usize) -> Option<usize> {
        debug_assert!(channel < 3, "only color channels are addressable");
        if pixel >= self.pixel_count() {
            return None;
        }
        Some(pixel * self.channels.stride() + channel)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
