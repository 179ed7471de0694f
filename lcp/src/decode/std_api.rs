use crate::{
    consts::HEADER_LEN,
    decode::{decode, read_header},
    LcpError, LcpImage,
};
use std::{fs::File, io::Read, path::Path};

/// Reads and decodes the container at `path`. See [`read_file`] for the error mapping.
pub fn open(path: impl AsRef<Path>, expected_magic: u16) -> Result<LcpImage, LcpError> {
    decode(&read_file(path)?, expected_magic)
}

/// Reads the raw bytes of the file at `path` without decoding them.
///
/// A path that cannot be opened is [`LcpError::FileNotFound`]. An I/O failure while reading is
/// reported as a [`LcpError::ReadError`] covering the bytes read so far.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LcpError> {
    let mut file = File::open(path).map_err(|_| LcpError::FileNotFound)?;

    let mut data = Vec::new();
    if file.read_to_end(&mut data).is_err() {
        let needed = read_header(&data)
            .ok()
            .and_then(|header| crate::container_len(header.width, header.height))
            .unwrap_or(HEADER_LEN);
        return Err(LcpError::ReadError {
            needed,
            available: data.len(),
        });
    }

    Ok(data)
}
