use crate::{
    consts::{BYTES_PER_PIXEL, HEADER_LEN},
    Channels,
};

/// Number of payload bytes for an image of the given size.
///
/// Computed in `usize` so that `65535 * 65535 * 3` cannot wrap on 64-bit targets. Returns `None`
/// where it does not fit (narrow `usize` targets).
#[inline]
pub const fn payload_len(width: u16, height: u16) -> Option<usize> {
    match (width as usize).checked_mul(height as usize) {
        Some(pixels) => pixels.checked_mul(BYTES_PER_PIXEL),
        None => None,
    }
}

/// Total container size: header plus payload.
#[inline]
pub const fn container_len(width: u16, height: u16) -> Option<usize> {
    match payload_len(width, height) {
        Some(len) => len.checked_add(HEADER_LEN),
        None => None,
    }
}

/// Number of input bytes the encoder expects for the given geometry and channel layout.
#[inline]
pub const fn input_len(width: u16, height: u16, channels: Channels) -> Option<usize> {
    match (width as usize).checked_mul(height as usize) {
        Some(pixels) => pixels.checked_mul(channels.count()),
        None => None,
    }
}

/// Iterates over the RGB triples of `pixels`, dropping alpha for [`Channels::Rgba`].
///
/// A trailing partial pixel is ignored.
#[inline]
pub fn rgb_pixels(pixels: &[u8], channels: Channels) -> impl Iterator<Item = [u8; 3]> + '_ {
    pixels
        .chunks_exact(channels.count())
        .map(|p| [p[0], p[1], p[2]])
}
