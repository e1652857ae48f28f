use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::read::DeflateDecoder;

use crate::error::{Error, Result};

/// Decodes standard base64 (with padding) into raw bytes.
///
/// Any character outside the alphabet or a bad padding length aborts the
/// decode; there is no partial output.
pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Decompresses a raw DEFLATE stream.
///
/// The HTTP-Redirect binding mandates headerless DEFLATE: no zlib 2-byte
/// header, no trailing checksum. `ZlibDecoder` would reject this data.
pub fn inflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(Error::Inflate)?;
    Ok(decompressed)
}
