use crate::{decode::parse, LcpError, LcpImage};

/// Decodes a container into an owned [`LcpImage`].
///
/// Fails with [`LcpError::ReadError`] if the header or payload is truncated, and with
/// [`LcpError::InvalidFormat`] if the magic number is not `expected_magic`. Trailing bytes are
/// ignored.
pub fn decode(data: &[u8], expected_magic: u16) -> Result<LcpImage, LcpError> {
    let (header, payload) = parse(data, expected_magic)?;
    Ok(LcpImage::from_parts(
        header.width,
        header.height,
        payload.to_vec(),
    ))
}
