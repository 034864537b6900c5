//! Byte size of an encoded payload.
//!
//! The size reported for a data URL is an estimate: `floor(chars * 3 / 4)`
//! over the characters after the header, with `=` padding counted as data.
//! It overstates the real size by up to two bytes whenever padding is
//! present. Use [`exact_size`] when byte-exact accounting matters.

use crate::error::EstimateError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An encoder result in either of its transport forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedPayload<'a> {
    Binary(&'a [u8]),
    DataUrl(&'a str),
}

pub fn estimate_size(payload: EncodedPayload<'_>) -> u64 {
    match payload {
        EncodedPayload::Binary(bytes) => bytes.len() as u64,
        EncodedPayload::DataUrl(url) => {
            let encoded_chars = data_url_body(url).len() as u64;
            encoded_chars * 3 / 4
        }
    }
}

/// Decode the base64 body of a data URL and measure it.
pub fn exact_size(data_url: &str) -> Result<u64, EstimateError> {
    if !data_url.starts_with("data:") || !data_url.contains(";base64,") {
        return Err(EstimateError::NotDataUrl);
    }
    let decoded = STANDARD.decode(data_url_body(data_url))?;
    Ok(decoded.len() as u64)
}

/// Everything after the first comma; the whole string when there is no header.
fn data_url_body(url: &str) -> &str {
    match url.find(',') {
        Some(index) => &url[index + 1..],
        None => url,
    }
}
