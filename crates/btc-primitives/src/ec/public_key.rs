//! secp256k1 public key with wallet-specific functionality.
//!
//! Supports compressed/uncompressed SEC1 serialization, Hash160
//! computation for address derivation, and ECDSA verification.

use std::fmt;

use k256::ecdsa::VerifyingKey;

use crate::ec::signature::Signature;
use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32-byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + x + y coordinates).
const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey` and provides compressed serialization,
/// Hash160 for addressing, and signature verification. The invariant
/// `public_key = private_scalar * G` is guaranteed by construction.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) forms.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes do not
    /// represent a valid curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != COMPRESSED_LEN && bytes.len() != UNCOMPRESSED_LEN {
            return Err(PrimitivesError::InvalidPublicKey(format!(
                "expected {} or {} bytes, got {}",
                COMPRESSED_LEN,
                UNCOMPRESSED_LEN,
                bytes.len()
            )));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a public key from a hex-encoded SEC1 string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str).map_err(|e| PrimitivesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize as a 33-byte compressed SEC1 encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize as a 65-byte uncompressed SEC1 encoding.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize as a lowercase hex string of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Compute the Hash160 (RIPEMD-160 of SHA-256) of the compressed key.
    ///
    /// This is the 20-byte value embedded in P2PKH addresses and
    /// locking scripts.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Verify an ECDSA signature against a 32-byte message hash.
    ///
    /// # Arguments
    /// * `hash` - The 32-byte message hash that was signed.
    /// * `sig` - The signature to verify.
    ///
    /// # Returns
    /// `true` if the signature is valid for this key.
    pub fn verify(&self, hash: &[u8; 32], sig: &Signature) -> bool {
        sig.verify(hash, self)
    }

    /// Wrap a k256 `VerifyingKey`.
    pub(crate) fn from_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    /// Access the underlying k256 `VerifyingKey`.
    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    /// Display the public key as its compressed hex encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::PrivateKey;

    const COMPRESSED_HEX: &str =
        "026cf33373a9f3f6c676b75b543180703df225f7f8edbffedc417718a8ad4e89ce";

    #[test]
    fn test_from_hex_compressed() {
        let pk = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        assert_eq!(pk.to_hex(), COMPRESSED_HEX);
    }

    #[test]
    fn test_compressed_uncompressed_roundtrip() {
        let pk = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        let uncompressed = pk.to_uncompressed();
        assert_eq!(uncompressed[0], 0x04);
        let reparsed = PublicKey::from_bytes(&uncompressed).unwrap();
        assert_eq!(reparsed, pk);
    }

    #[test]
    fn test_hash160_known_vector() {
        let pk = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        assert_eq!(
            hex::encode(pk.hash160()),
            "00ac6144c4db7b5790f343cf0477a65fb8a02eb7"
        );
    }

    #[test]
    fn test_from_bytes_invalid() {
        assert!(PublicKey::from_bytes(&[]).is_err());
        assert!(PublicKey::from_bytes(&[0x02; 12]).is_err());
        // x-coordinate not on the curve
        let mut bad = [0u8; 33];
        bad[0] = 0x02;
        assert!(PublicKey::from_bytes(&bad).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let key = PrivateKey::generate().unwrap();
        let other = PrivateKey::generate().unwrap();
        let hash = crate::hash::sha256(b"message");

        let sig = key.sign(&hash).unwrap();
        assert!(key.public_key().verify(&hash, &sig));
        assert!(!other.public_key().verify(&hash, &sig));
    }
}
