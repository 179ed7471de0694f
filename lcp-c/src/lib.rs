//! C bindings for the LCP container codec, for renderers that upload the decoded payload as a
//! texture.
//!
//! All functions return an [`LcpStatus`]. `LCP_STATUS_NONE` (`0`) means success.

use lcp::{Channels, LcpError};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcpStatus {
    None = 0,
    FileNotFound = 1,
    InvalidFormat = 2,
    UnsupportedVersion = 3,
    ReadError = 4,
    WriteError = 5,
    AlreadyExists = 6,
    InvalidDimensions = 7,
    UnsupportedChannels = 8,
}

impl From<LcpError> for LcpStatus {
    fn from(e: LcpError) -> Self {
        match e {
            LcpError::FileNotFound => LcpStatus::FileNotFound,
            LcpError::InvalidFormat { .. } => LcpStatus::InvalidFormat,
            LcpError::UnsupportedVersion => LcpStatus::UnsupportedVersion,
            LcpError::ReadError { .. } => LcpStatus::ReadError,
            LcpError::WriteError => LcpStatus::WriteError,
            LcpError::AlreadyExists => LcpStatus::AlreadyExists,
            LcpError::InvalidDimensions { .. } => LcpStatus::InvalidDimensions,
            LcpError::UnsupportedChannels { .. } => LcpStatus::UnsupportedChannels,
        }
    }
}

impl<T> From<Result<T, LcpError>> for LcpStatus {
    fn from(result: Result<T, LcpError>) -> Self {
        match result {
            Ok(_) => LcpStatus::None,
            Err(e) => e.into(),
        }
    }
}

/// Returns the payload size in bytes of a `width` x `height` image, or `SIZE_MAX` if it does
/// not fit in a `size_t`.
#[no_mangle]
pub extern "C" fn lcp_payload_len(width: u16, height: u16) -> usize {
    lcp::payload_len(width, height).unwrap_or(usize::MAX)
}

/// Reads the geometry of a container and checks it.
///
/// - `input`: Pointer to the container bytes
/// - `input_len`: Length of the input buffer, in bytes
/// - `expected_magic`: Magic number the container must carry, usually 2568
/// - `out_width`, `out_height`: Receive the header geometry once the header could be read, even
///   if the status is not `None`. May be null.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes. `out_width` and `out_height` must each
/// be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn lcp_read_header(
    input: *const u8,
    input_len: usize,
    expected_magic: u16,
    out_width: *mut u16,
    out_height: *mut u16,
) -> LcpStatus {
    if input.is_null() {
        return LcpStatus::ReadError;
    }
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };

    let header = match lcp::decode::read_header(input) {
        Ok(header) => header,
        Err(e) => return e.into(),
    };

    if !out_width.is_null() {
        unsafe { *out_width = header.width };
    }
    if !out_height.is_null() {
        unsafe { *out_height = header.height };
    }

    lcp::decode::parse(input, expected_magic).into()
}

/// Decodes the RGB payload of a container into `output`.
///
/// - `input`: Pointer to the container bytes
/// - `input_len`: Length of the input buffer, in bytes
/// - `expected_magic`: Magic number the container must carry, usually 2568
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in bytes. Must be at least
///   [`lcp_payload_len`] of the image, otherwise `WriteError` is returned.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes, `output` for writes of `output_len`
/// bytes, and the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn lcp_decode(
    input: *const u8,
    input_len: usize,
    expected_magic: u16,
    output: *mut u8,
    output_len: usize,
) -> LcpStatus {
    if input.is_null() {
        return LcpStatus::ReadError;
    }
    if output.is_null() {
        return LcpStatus::WriteError;
    }
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    lcp::decode::decode_into(input, expected_magic, output).into()
}

/// Encodes RGB (`channels == 3`) or RGBA (`channels == 4`) pixels into a container.
///
/// - `pixels_len`: Must equal `width * height * channels`
/// - `output_len`: Must be at least `6 +` [`lcp_payload_len`]
/// - `written`: Receives the container length on success. May be null.
///
/// # Safety
///
/// `pixels` must be valid for reads of `pixels_len` bytes, `output` for writes of `output_len`
/// bytes, and the two must not overlap. `written` must be null or valid for a write.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn lcp_encode(
    width: u16,
    height: u16,
    channels: u8,
    pixels: *const u8,
    pixels_len: usize,
    output: *mut u8,
    output_len: usize,
    written: *mut usize,
) -> LcpStatus {
    let channels = match Channels::try_from(channels) {
        Ok(channels) => channels,
        Err(e) => return e.into(),
    };
    if pixels.is_null() {
        return LcpStatus::ReadError;
    }
    if output.is_null() {
        return LcpStatus::WriteError;
    }
    let pixels = unsafe { core::slice::from_raw_parts(pixels, pixels_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match lcp::encode::encode_into(width, height, channels, pixels, output) {
        Ok(len) => {
            if !written.is_null() {
                unsafe { *written = len };
            }
            LcpStatus::None
        }
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;

    const RED_GREEN: [u8; 12] = [
        0x08, 0x0A, 0x02, 0x00, 0x01, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x00,
    ];

    #[test]
    fn header_and_decode() {
        let (mut width, mut height) = (0u16, 0u16);
        let status = unsafe {
            lcp_read_header(
                RED_GREEN.as_ptr(),
                RED_GREEN.len(),
                2568,
                &mut width,
                &mut height,
            )
        };
        assert_eq!(status, LcpStatus::None);
        assert_eq!((width, height), (2, 1));
        assert_eq!(lcp_payload_len(width, height), 6);

        let mut output = [0u8; 6];
        let status = unsafe {
            lcp_decode(
                RED_GREEN.as_ptr(),
                RED_GREEN.len(),
                2568,
                output.as_mut_ptr(),
                output.len(),
            )
        };
        assert_eq!(status, LcpStatus::None);
        assert_eq!(output, [255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn wrong_magic_still_reports_geometry() {
        let (mut width, mut height) = (0u16, 0u16);
        let status = unsafe {
            lcp_read_header(RED_GREEN.as_ptr(), RED_GREEN.len(), 1, &mut width, &mut height)
        };
        assert_eq!(status, LcpStatus::InvalidFormat);
        assert_eq!((width, height), (2, 1));
    }

    #[test]
    fn short_output_buffer() {
        let mut output = [0u8; 5];
        let status = unsafe {
            lcp_decode(
                RED_GREEN.as_ptr(),
                RED_GREEN.len(),
                2568,
                output.as_mut_ptr(),
                output.len(),
            )
        };
        assert_eq!(status, LcpStatus::WriteError);
    }

    #[test]
    fn truncated_container() {
        let mut output = [0u8; 6];
        for len in [0, 5, 6, 11] {
            let status = unsafe {
                lcp_decode(RED_GREEN.as_ptr(), len, 2568, output.as_mut_ptr(), output.len())
            };
            assert_eq!(status, LcpStatus::ReadError, "{len}");
        }
        assert_eq!(output, [0; 6]);
    }

    #[test]
    fn encode_rgba() {
        let pixels = [255, 0, 0, 9, 0, 255, 0, 9];
        let mut output = [0u8; 16];
        let mut written = 0usize;
        let status = unsafe {
            lcp_encode(
                2,
                1,
                4,
                pixels.as_ptr(),
                pixels.len(),
                output.as_mut_ptr(),
                output.len(),
                &mut written,
            )
        };
        assert_eq!(status, LcpStatus::None);
        assert_eq!(&output[..written], &RED_GREEN);
    }

    #[test]
    fn null_and_bad_arguments() {
        let mut output = [0u8; 16];
        unsafe {
            assert_eq!(
                lcp_decode(ptr::null(), 0, 2568, output.as_mut_ptr(), 16),
                LcpStatus::ReadError
            );
            assert_eq!(
                lcp_encode(1, 1, 2, [0u8; 2].as_ptr(), 2, output.as_mut_ptr(), 16, ptr::null_mut()),
                LcpStatus::UnsupportedChannels
            );
            assert_eq!(
                lcp_encode(1, 1, 3, [0u8; 3].as_ptr(), 3, ptr::null_mut(), 0, ptr::null_mut()),
                LcpStatus::WriteError
            );
        }
    }
}
