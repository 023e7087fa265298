//! Decode spreadsheet exports to text
//!
//! Files saved by Excel on pt-BR Windows are usually Windows-1252. UTF-8
//! (with or without BOM) is tried first; anything that is not valid UTF-8
//! is decoded as Windows-1252 instead.

use std::fs;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use frete_types::{Error, Result};
use tracing::warn;

/// Read and decode a CSV file
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    Ok(decode_bytes(&bytes))
}

pub fn decode_bytes(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text.into_owned();
    }

    warn!("file is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}
