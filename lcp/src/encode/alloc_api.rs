use crate::{encode::check_input, encode::push_container, Channels, LcpError};
use alloc::vec::Vec;

/// Encodes an image into a new container buffer.
///
/// `pixels` must be exactly `width * height * channels` bytes. The result is always
/// `6 + width * height * 3` bytes long and carries [`LCP_MAGIC`](crate::consts::LCP_MAGIC).
pub fn encode(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
) -> Result<Vec<u8>, LcpError> {
    let mut w = Vec::new();
    encode_to_vec(width, height, channels, pixels, &mut w)?;
    Ok(w)
}

/// Appends an encoded container to `w`. `w` is left unchanged on error.
pub fn encode_to_vec(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
    w: &mut Vec<u8>,
) -> Result<(), LcpError> {
    check_input(width, height, channels, pixels)?;

    if let Some(len) = crate::container_len(width, height) {
        w.reserve(len);
    }
    push_container(width, height, channels, pixels, w);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_green_bytes() {
        assert_eq!(
            encode(2, 1, Channels::Rgb, &[255, 0, 0, 0, 255, 0]).unwrap(),
            [0x08, 0x0A, 0x02, 0x00, 0x01, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00]
        );
    }

    #[test]
    fn appends_after_existing_bytes() {
        let mut w = vec![0xAB];
        encode_to_vec(1, 1, Channels::Rgb, &[1, 2, 3], &mut w).unwrap();
        assert_eq!(w, [0xAB, 0x08, 0x0A, 1, 0, 1, 0, 1, 2, 3]);

        assert!(encode_to_vec(1, 1, Channels::Rgb, &[1, 2], &mut w).is_err());
        assert_eq!(w.len(), 10);
    }

    #[test]
    fn empty_image() {
        assert_eq!(
            encode(0, 5, Channels::Rgba, &[]).unwrap(),
            [0x08, 0x0A, 0, 0, 5, 0]
        );
    }
}
