use crate::{
    consts::LCP_MAGIC,
    encode::check_input,
    utils::rgb_pixels,
    Channels, LcpError,
};
use byteorder::{LittleEndian, WriteBytesExt};
use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

/// Encodes an image straight into `w`.
///
/// Any I/O failure is reported as [`LcpError::WriteError`]; `w` may hold a partial container
/// afterwards.
pub fn write_to<W: Write>(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
    w: W,
) -> Result<(), LcpError> {
    check_input(width, height, channels, pixels)?;
    write_unchecked(width, height, channels, pixels, w).map_err(|_| LcpError::WriteError)
}

fn write_unchecked<W: Write>(
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
    mut w: W,
) -> io::Result<()> {
    w.write_u16::<LittleEndian>(LCP_MAGIC)?;
    w.write_u16::<LittleEndian>(width)?;
    w.write_u16::<LittleEndian>(height)?;

    match channels {
        Channels::Rgb => w.write_all(pixels)?,
        Channels::Rgba => {
            for pixel in rgb_pixels(pixels, channels) {
                w.write_all(&pixel)?;
            }
        }
    }

    w.flush()
}

/// Encodes an image into a new file at `path`.
///
/// The file is created exclusively: if anything already exists at `path` this fails with
/// [`LcpError::AlreadyExists`] and leaves it untouched, even when racing another writer. If
/// writing fails after the file was created, the partial file is removed.
pub fn save(
    path: impl AsRef<Path>,
    width: u16,
    height: u16,
    channels: Channels,
    pixels: &[u8],
) -> Result<(), LcpError> {
    let path = path.as_ref();
    check_input(width, height, channels, pixels)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => LcpError::AlreadyExists,
            _ => LcpError::WriteError,
        })?;

    if write_unchecked(width, height, channels, pixels, BufWriter::new(file)).is_err() {
        let _ = fs::remove_file(path);
        return Err(LcpError::WriteError);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_to_vec() {
        let mut out = Vec::new();
        write_to(1, 2, Channels::Rgba, &[1, 2, 3, 4, 5, 6, 7, 8], &mut out).unwrap();
        assert_eq!(out, [0x08, 0x0A, 1, 0, 2, 0, 1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn write_to_failing_writer() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::WriteZero.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert_eq!(
            write_to(1, 1, Channels::Rgb, &[1, 2, 3], Full),
            Err(LcpError::WriteError)
        );
    }

    #[test]
    fn save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken.lcp");
        fs::write(&path, b"precious").unwrap();

        assert_eq!(
            save(&path, 1, 1, Channels::Rgb, &[1, 2, 3]),
            Err(LcpError::AlreadyExists)
        );
        assert_eq!(fs::read(&path).unwrap(), b"precious");
    }

    #[test]
    fn save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            save(
                dir.path().join("no/such/dir.lcp"),
                1,
                1,
                Channels::Rgb,
                &[1, 2, 3]
            ),
            Err(LcpError::WriteError)
        );
    }

    #[test]
    fn invalid_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.lcp");
        assert!(save(&path, 2, 2, Channels::Rgb, &[0; 3]).is_err());
        assert!(!path.exists());
    }
}
