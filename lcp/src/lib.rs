//! Reference implementation for the LCP (Lossless Compact Picture) image container.
//!
//! LCP stores uncompressed 8-bit RGB pixels behind a fixed 6-byte header. There is no
//! compression, no palette and no color-space information; the format exists so that an image
//! can be handed to a renderer without any decoding work beyond a header check.
//!
//! # Container layout
//!
//! ```plain
//! .- LCP container -------------------------------------------------.
//! | offset | size           | field  | encoding                       |
//! |--------+----------------+--------+--------------------------------|
//! |      0 |              2 | magic  | u16le, always `LCP_MAGIC`      |
//! |      2 |              2 | width  | u16le                          |
//! |      4 |              2 | height | u16le                          |
//! |      6 | width*height*3 | pixels | row-major RGB, 1 byte/channel  |
//! `-----------------------------------------------------------------`
//! ```
//!
//! - The container is always exactly `6 + width * height * 3` bytes long when written.
//! - Decoders ignore any bytes following the payload.
//! - A zero width or height is legal and yields an empty payload.
//! - Alpha is never stored. Encoding RGBA input drops the fourth byte of every pixel.
//!
//! # API layers
//!
//! - Without any features, [`decode::read_header`], [`decode::decode_into`] and
//!   [`encode::encode_into`] work on caller-provided slices.
//! - With `alloc`, [`LcpImage`], [`decode::decode`] and [`encode::encode`] own their buffers.
//! - With `std` (the default), [`encode::save`] and [`decode::open`] work on files, and
//!   [`encode::write_to`] on any [`std::io::Write`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::LcpImage;

pub mod decode;
pub mod encode;
pub mod error;
pub mod utils;

pub use error::LcpError;
pub use utils::{container_len, payload_len};

/// Width and height as read from, or written to, a container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub magic: u16,
    pub width: u16,
    pub height: u16,
}

impl HeaderInfo {
    /// Number of payload bytes this header declares, `None` if it does not fit in a `usize`.
    #[inline]
    pub const fn payload_len(&self) -> Option<usize> {
        payload_len(self.width, self.height)
    }
}

/// Layout of the pixels handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channels {
    /// 3 bytes per pixel, copied as-is.
    Rgb = 3,
    /// 4 bytes per pixel, the alpha byte is dropped.
    Rgba = 4,
}

impl Channels {
    #[inline]
    pub const fn count(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Channels {
    type Error = LcpError;

    fn try_from(channels: u8) -> Result<Self, Self::Error> {
        match channels {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => error::lcp_error::UnsupportedChannelsSnafu { channels }.fail(),
        }
    }
}

pub mod consts {
    /// Magic number embedded by every encoder, and the value decoders usually expect.
    ///
    /// Stored little-endian this is the byte pair `08 0A`.
    pub const LCP_MAGIC: u16 = 2568;

    /// Size of the fixed header: magic, width, height.
    pub const HEADER_LEN: usize = 6;

    /// Bytes per stored pixel (R, G, B).
    pub const BYTES_PER_PIXEL: usize = 3;
}
