use crate::{
    consts::{BYTES_PER_PIXEL, HEADER_LEN, LCP_MAGIC},
    utils::{input_len, rgb_pixels},
    error::lcp_error,
    Channels, LcpError,
};
use byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, OptionExt};

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Builds the header for an image of the given size. The magic is always [`LCP_MAGIC`].
pub fn encode_header(width: u16, height: u16) -> [u8; HEADER_LEN] {
    let mut header = [0; HEADER_LEN];
    LittleEndian::write_u16(&mut header[0..2], LCP_MAGIC);
    LittleEndian::write_u16(&mut header[2..4], width);
    LittleEndian::write_u16(&mut header[4..6], height);
    header
}

/// Checks that `pixels` holds exactly `width * height` pixels of the given layout.
pub(crate) fn check_input(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
) -> Result<(), LcpError> {
    // The input length fitting in a usize does not imply the container does.
    ensure!(
        input_len(width, height, channels) == Some(pixels.len())
            && crate::container_len(width, height).is_some(),
        lcp_error::InvalidDimensionsSnafu {
            width,
            height,
            channels: channels as u8,
            pixel_count: pixels.len(),
        }
    );

    Ok(())
}

/// Encodes a container into `output`.
///
/// Returns the number of bytes written, always `6 + width * height * 3`. Fails with
/// [`LcpError::WriteError`] if `output` is too small, in which case `output` is not modified.
pub fn encode_into(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
    output: &mut [u8],
) -> Result<usize, LcpError> {
    check_input(width, height, channels, pixels)?;

    let len = crate::container_len(width, height).context(lcp_error::WriteSnafu)?;
    ensure!(output.len() >= len, lcp_error::WriteSnafu);
    let output = &mut output[..len];

    let (header, payload) = output.split_at_mut(HEADER_LEN);
    header.copy_from_slice(&encode_header(width, height));

    if channels == Channels::Rgb {
        payload.copy_from_slice(pixels);
    } else {
        for (out, pixel) in payload
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(rgb_pixels(pixels, channels))
        {
            out.copy_from_slice(&pixel);
        }
    }

    Ok(len)
}

/// Appends header and payload to `w`. The input must already be checked.
#[cfg(feature = "alloc")]
pub(crate) fn push_container(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
    w: &mut alloc::vec::Vec<u8>,
) {
    w.extend_from_slice(&encode_header(width, height));

    if channels == Channels::Rgb {
        w.extend_from_slice(pixels);
    } else {
        for pixel in rgb_pixels(pixels, channels) {
            w.extend_from_slice(&pixel);
        }
    }
}
