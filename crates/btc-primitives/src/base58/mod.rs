//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode
//! (with a 4-byte double-SHA-256 checksum) used for WIF private keys
//! and P2PKH addresses.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Length of the Base58Check checksum suffix in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice to a Base58 string.
///
/// Uses Bitcoin's modified Base58 alphabet (excludes 0, O, I, l).
/// Leading zero bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended.
///
/// The checksum is the first 4 bytes of sha256d(data); the result is
/// `encode(data || checksum)`.
///
/// # Arguments
/// * `data` - The payload bytes to encode.
///
/// # Returns
/// A Base58Check-encoded string.
pub fn checksum_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying and stripping the checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// The payload bytes without the checksum, or `ChecksumMismatch` /
/// `InvalidBase58` on failure.
pub fn checksum_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN + 1 {
        return Err(PrimitivesError::InvalidBase58(format!(
            "decoded length {} too short for checksum",
            decoded.len()
        )));
    }

    let payload_end = decoded.len() - CHECKSUM_LEN;
    let checksum = sha256d(&decoded[..payload_end]);
    if decoded[payload_end..] != checksum[..CHECKSUM_LEN] {
        return Err(PrimitivesError::ChecksumMismatch);
    }

    Ok(decoded[..payload_end].to_vec())
}
