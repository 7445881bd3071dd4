//! Text <-> hex conversion.
//!
//! Both directions are pure and total over their valid inputs: encoding
//! never fails, decoding either produces the full string or an error.
//! Empty-input handling is a UI concern, not a codec one.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("hex string has odd length")]
    OddLength,

    #[error("invalid hex digit '{c}' at position {index}")]
    InvalidDigit { c: char, index: usize },

    #[error("decoded bytes are not valid UTF-8 text")]
    InvalidUtf8,
}

/// Encode text as the lowercase hex pairs of its UTF-8 bytes.
pub fn encode_to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Decode a hex string back to text. No partial results: the whole
/// input parses and decodes as UTF-8, or the call fails.
pub fn decode_from_hex(input: &str) -> Result<String, HexError> {
    let bytes = hex::decode(input).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidDigit { c, index },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            HexError::OddLength
        }
    })?;
    String::from_utf8(bytes).map_err(|_| HexError::InvalidUtf8)
}
