use snafu::Snafu;

/// Every way encoding or decoding a container can fail.
///
/// The kinds are flat on purpose: callers at the C boundary and in the CLI map them onto plain
/// status codes via [`LcpError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(module, visibility(pub(crate)))]
pub enum LcpError {
    /// The source could not be opened or read at all.
    #[snafu(display("file not found or not readable"))]
    FileNotFound,

    /// The container is structurally complete, but its magic number is not the expected one.
    ///
    /// The parsed geometry is kept for inspection. The pixel data must not be used.
    #[snafu(display(
        "invalid format: magic number {found:#06x} does not match expected {expected:#06x}"
    ))]
    InvalidFormat {
        found: u16,
        expected: u16,
        width: u16,
        height: u16,
    },

    /// Reserved for a future versioned header. Never produced.
    #[snafu(display("unsupported container version"))]
    UnsupportedVersion,

    /// The stream ended before the header or the payload was complete.
    #[snafu(display("unexpected end of data: needed {needed} bytes, got {available}"))]
    ReadError { needed: usize, available: usize },

    /// The target could not be created or written.
    #[snafu(display("failed to write container"))]
    WriteError,

    /// The target already exists. Nothing was written.
    #[snafu(display("target already exists, refusing to overwrite"))]
    AlreadyExists,

    #[snafu(display(
        "specified image dimensions don't match the pixel buffer: {width} * {height} * {channels} bytes expected, but {pixel_count} were given"
    ))]
    InvalidDimensions {
        width: u16,
        height: u16,
        channels: u8,
        pixel_count: usize,
    },

    #[snafu(display("unsupported channel count {channels}, expected 3 (RGB) or 4 (RGBA)"))]
    UnsupportedChannels { channels: u8 },
}

impl LcpError {
    /// Stable numeric code for this error kind. `0` is reserved for success.
    pub const fn code(&self) -> u8 {
        match self {
            LcpError::FileNotFound => 1,
            LcpError::InvalidFormat { .. } => 2,
            LcpError::UnsupportedVersion => 3,
            LcpError::ReadError { .. } => 4,
            LcpError::WriteError => 5,
            LcpError::AlreadyExists => 6,
            LcpError::InvalidDimensions { .. } => 7,
            LcpError::UnsupportedChannels { .. } => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_nonzero() {
        let errors = [
            LcpError::FileNotFound,
            LcpError::InvalidFormat {
                found: 1,
                expected: 2,
                width: 0,
                height: 0,
            },
            LcpError::UnsupportedVersion,
            LcpError::ReadError {
                needed: 6,
                available: 0,
            },
            LcpError::WriteError,
            LcpError::AlreadyExists,
            LcpError::InvalidDimensions {
                width: 1,
                height: 1,
                channels: 3,
                pixel_count: 0,
            },
            LcpError::UnsupportedChannels { channels: 1 },
        ];

        let mut codes: Vec<u8> = errors.iter().map(LcpError::code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn display_mentions_magic_values() {
        let err = LcpError::InvalidFormat {
            found: 0x1234,
            expected: 2568,
            width: 2,
            height: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x1234"), "{msg}");
        assert!(msg.contains("0x0a08"), "{msg}");
    }
}
