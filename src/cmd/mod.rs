pub mod decode;
pub mod session;
pub mod shift;

use shiftbreak::error::SbResult;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Ciphertext from `--text`, a file, or stdin, in that order of preference.
pub fn read_input(file: Option<&Path>, text: Option<&str>) -> SbResult<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        info!("📂 Reading ciphertext from {:?}", path);
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
