use crate::{
    consts::{BYTES_PER_PIXEL, LCP_MAGIC},
    encode, Channels, HeaderInfo, LcpError,
};
use alloc::vec::Vec;

/// A fully decoded container: geometry plus the RGB payload.
///
/// The fields are private so that the payload length always matches `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcpImage {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl LcpImage {
    /// Builds an image from RGB or RGBA pixels. Alpha is dropped.
    pub fn from_pixels(
        width: u16,
        height: u16,
        channels: Channels,
        pixels: &[u8],
    ) -> Result<Self, LcpError> {
        encode::check_input(width, height, channels, pixels)?;

        let mut rgb = Vec::with_capacity(pixels.len() / channels.count() * BYTES_PER_PIXEL);
        for pixel in crate::utils::rgb_pixels(pixels, channels) {
            rgb.extend_from_slice(&pixel);
        }

        Ok(Self {
            width,
            height,
            pixels: rgb,
        })
    }

    /// Wraps an already validated payload.
    pub(crate) fn from_parts(width: u16, height: u16, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(crate::payload_len(width, height), Some(pixels.len()));
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row-major RGB bytes, `width * height * 3` long.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn header(&self) -> HeaderInfo {
        HeaderInfo {
            magic: LCP_MAGIC,
            width: self.width,
            height: self.height,
        }
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Serializes the image into a complete container.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::consts::HEADER_LEN + self.pixels.len());
        encode::push_container(self.width, self.height, Channels::Rgb, &self.pixels, &mut out);
        out
    }

    /// Writes the image to a new file at `path`. See [`encode::save`].
    #[cfg(feature = "std")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), LcpError> {
        encode::save(path, self.width, self.height, Channels::Rgb, &self.pixels)
    }
}
