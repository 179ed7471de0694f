use crate::{consts::HEADER_LEN, error::lcp_error, HeaderInfo, LcpError};
use byteorder::{ByteOrder, LittleEndian};
use snafu::ensure;

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Reads the 6-byte header without validating the magic number.
pub fn read_header(data: &[u8]) -> Result<HeaderInfo, LcpError> {
    ensure!(
        data.len() >= HEADER_LEN,
        lcp_error::ReadSnafu {
            needed: HEADER_LEN,
            available: data.len(),
        }
    );

    Ok(HeaderInfo {
        magic: LittleEndian::read_u16(&data[0..2]),
        width: LittleEndian::read_u16(&data[2..4]),
        height: LittleEndian::read_u16(&data[4..6]),
    })
}

/// Parses a container and borrows its payload.
///
/// The structure is checked before the magic number: a truncated stream is a
/// [`LcpError::ReadError`] even if its magic is wrong as well. Bytes after the payload are
/// ignored.
pub fn parse(data: &[u8], expected_magic: u16) -> Result<(HeaderInfo, &[u8]), LcpError> {
    let header = read_header(data)?;

    // No slice can be usize::MAX bytes long, so an unrepresentable size always fails here.
    let needed = crate::container_len(header.width, header.height).unwrap_or(usize::MAX);
    ensure!(
        data.len() >= needed,
        lcp_error::ReadSnafu {
            needed,
            available: data.len(),
        }
    );

    ensure!(
        header.magic == expected_magic,
        lcp_error::InvalidFormatSnafu {
            found: header.magic,
            expected: expected_magic,
            width: header.width,
            height: header.height,
        }
    );

    Ok((header, &data[HEADER_LEN..needed]))
}

/// Decodes a container into `output`, which receives exactly `width * height * 3` bytes.
///
/// Returns [`LcpError::WriteError`] if `output` is too small to hold the payload. Bytes of
/// `output` past the payload are left untouched.
pub fn decode_into(
    data: &[u8],
    expected_magic: u16,
    output: &mut [u8],
) -> Result<HeaderInfo, LcpError> {
    let (header, payload) = parse(data, expected_magic)?;

    ensure!(output.len() >= payload.len(), lcp_error::WriteSnafu);
    output[..payload.len()].copy_from_slice(payload);

    Ok(header)
}
