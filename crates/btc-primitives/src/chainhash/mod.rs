//! Chain hash type for transaction identification.
//!
//! Provides `TxHash` — a 32-byte array displayed as byte-reversed hex,
//! matching Bitcoin's convention for transaction IDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Size of a transaction hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte transaction hash.
///
/// Bytes are stored in internal (little-endian) order. When displayed as
/// a string, the bytes are reversed to match the chain's big-endian
/// display convention.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TxHash([u8; HASH_SIZE]);

impl TxHash {
    /// Create a hash from a raw 32-byte array in internal byte order.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        TxHash(bytes)
    }

    /// Create a hash from a byte slice in internal byte order.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(TxHash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(TxHash(arr))
    }

    /// Parse a hash from its display-order (byte-reversed) hex string.
    ///
    /// This is the form transaction IDs take in RPC responses and block
    /// explorers.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string in display order.
    ///
    /// # Returns
    /// `Ok(TxHash)` on success, or an error for invalid input.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.len() != HASH_SIZE * 2 {
            return Err(PrimitivesError::InvalidHash(format!(
                "hash hex must be {} characters, got {}",
                HASH_SIZE * 2,
                hex_str.len()
            )));
        }
        let decoded = hex::decode(hex_str)?;

        // Reverse display order into internal byte order.
        let mut arr = [0u8; HASH_SIZE];
        for (i, b) in decoded.iter().rev().enumerate() {
            arr[i] = *b;
        }
        Ok(TxHash(arr))
    }

    /// Compute the double-SHA-256 of arbitrary data as a hash.
    pub fn double_sha256(data: &[u8]) -> Self {
        TxHash(sha256d(data))
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

/// Display the hash as byte-reversed hex (chain convention).
impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

/// Parse a display-order hex string, equivalent to `TxHash::from_hex`.
impl FromStr for TxHash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TxHash::from_hex(s)
    }
}

/// Serialize as a display-order hex string in JSON.
impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from a display-order hex string in JSON.
impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TxHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The first-ever non-coinbase transaction (block 170).
    const TXID: &str = "f4184fc596403b9d638783cf57adfe4c75c605f6356fbc91338530e9831e9e16";

    #[test]
    fn test_from_hex_roundtrip() {
        let hash = TxHash::from_hex(TXID).unwrap();
        assert_eq!(hash.to_string(), TXID);
    }

    #[test]
    fn test_from_hex_reverses_bytes() {
        let hash = TxHash::from_hex(TXID).unwrap();
        // Display order starts f4 18 ..., internal order must end ... 18 f4.
        assert_eq!(hash.as_bytes()[31], 0xf4);
        assert_eq!(hash.as_bytes()[30], 0x18);
        assert_eq!(hash.as_bytes()[0], 0x16);
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(TxHash::from_hex("f4184f").is_err());
        assert!(TxHash::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_invalid_characters() {
        let bad = "zz184fc596403b9d638783cf57adfe4c75c605f6356fbc91338530e9831e9e16";
        assert!(TxHash::from_hex(bad).is_err());
    }

    #[test]
    fn test_from_bytes() {
        let bytes = [7u8; 32];
        let hash = TxHash::from_bytes(&bytes).unwrap();
        assert_eq!(hash.as_bytes(), &bytes);
        assert!(TxHash::from_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let hash = TxHash::from_hex(TXID).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", TXID));
        let back: TxHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
