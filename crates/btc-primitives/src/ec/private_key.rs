//! secp256k1 private key with wallet-specific functionality.
//!
//! Wraps a k256 signing key and adds fallible generation from the OS
//! entropy source and network-aware WIF (Wallet Import Format) encoding.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key scalar in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key for signing.
///
/// The key exists in two explicit representations: the raw 32-byte scalar
/// (used for signing) and the WIF string (used for export), with pure
/// conversion functions between them. The network's WIF prefix byte is
/// always passed in explicitly; it is never inferred from ambient state.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key from the OS entropy source.
    ///
    /// Draws 32 bytes from the CSPRNG and retries until the scalar falls
    /// in `[1, n-1]`. An entropy read failure surfaces as
    /// `RandomnessFailure` and is not retried.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or `RandomnessFailure` if the entropy
    /// source is unavailable.
    pub fn generate() -> Result<Self, PrimitivesError> {
        let mut buf = [0u8; PRIVATE_KEY_BYTES_LEN];
        loop {
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| PrimitivesError::RandomnessFailure(e.to_string()))?;

            // Rejection-sample: zero or >= curve order draws again.
            match SigningKey::from_slice(&buf) {
                Ok(signing_key) => {
                    buf.zeroize();
                    return Ok(PrivateKey { inner: signing_key });
                }
                Err(_) => continue,
            }
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on
    /// secp256k1, or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str).map_err(|e| PrimitivesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Create a private key from a WIF (Wallet Import Format) string.
    ///
    /// Decodes the Base58Check-encoded string, validates the checksum,
    /// and extracts the 32-byte private key scalar. Both compressed
    /// (34-byte payload) and uncompressed (33-byte payload) encodings
    /// are accepted.
    ///
    /// # Arguments
    /// * `wif` - A Base58Check-encoded WIF string.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the WIF is malformed
    /// or the checksum fails.
    pub fn from_wif(wif: &str) -> Result<Self, PrimitivesError> {
        let payload = base58::checksum_decode(wif)
            .map_err(|e| match e {
                PrimitivesError::ChecksumMismatch => PrimitivesError::ChecksumMismatch,
                other => PrimitivesError::InvalidWif(other.to_string()),
            })?;

        // 1 byte prefix + 32 bytes key [+ 1 byte compress flag]
        match payload.len() {
            34 => {
                if payload[33] != COMPRESS_MAGIC {
                    return Err(PrimitivesError::InvalidWif(
                        "malformed private key: invalid compression flag".to_string(),
                    ));
                }
            }
            33 => {}
            n => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "malformed private key: invalid payload length {}",
                    n
                )));
            }
        }

        Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])
    }

    /// Encode the private key as a WIF string with the given network prefix.
    ///
    /// Always encodes for compressed public key format.
    ///
    /// # Arguments
    /// * `prefix` - The network's WIF prefix byte (0x80 for mainnet,
    ///   0xef for testnet and regtest).
    ///
    /// # Returns
    /// A Base58Check-encoded WIF string.
    pub fn to_wif(&self, prefix: u8) -> String {
        let mut key_bytes = self.to_bytes();
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_BYTES_LEN + 1);
        payload.push(prefix);
        payload.extend_from_slice(&key_bytes);
        payload.push(COMPRESS_MAGIC);

        let wif = base58::checksum_encode(&payload);
        key_bytes.zeroize();
        payload.zeroize();
        wif
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }

    /// Sign a 32-byte message hash using deterministic RFC6979 nonces.
    ///
    /// Produces a low-S normalized signature per BIP-0062.
    ///
    /// # Arguments
    /// * `hash` - The 32-byte message hash to sign.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if signing fails.
    pub fn sign(&self, hash: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(hash, self)
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

/// Redacted: the scalar must never reach logs or error messages.
impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

// No Drop impl: the inner `SigningKey` zeroizes its scalar on drop.

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mainnet/testnet WIF prefix bytes for tests.
    const MAINNET_WIF: u8 = 0x80;
    const TESTNET_WIF: u8 = 0xef;

    #[test]
    fn test_generate_produces_valid_keys() {
        let key = PrivateKey::generate().unwrap();
        let bytes = key.to_bytes();
        assert_ne!(bytes, [0u8; 32]);

        let restored = PrivateKey::from_bytes(&bytes).unwrap();
        assert_eq!(key, restored);
    }

    #[test]
    fn test_public_key_matches_scalar() {
        // scalar 1 maps to the generator point G
        let mut one = [0u8; 32];
        one[31] = 1;
        let key = PrivateKey::from_bytes(&one).unwrap();
        assert_eq!(
            key.public_key().to_hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_from_bytes_rejects_invalid_scalars() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[0xffu8; 32]).is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 16]).is_err());
    }

    #[test]
    fn test_wif_roundtrip_mainnet() {
        let key = PrivateKey::generate().unwrap();
        let wif = key.to_wif(MAINNET_WIF);
        // Compressed mainnet WIF strings begin with 'K' or 'L'
        assert!(wif.starts_with('K') || wif.starts_with('L'));
        assert_eq!(PrivateKey::from_wif(&wif).unwrap(), key);
    }

    #[test]
    fn test_wif_roundtrip_testnet() {
        let key = PrivateKey::generate().unwrap();
        let wif = key.to_wif(TESTNET_WIF);
        assert!(wif.starts_with('c'));
        assert_eq!(PrivateKey::from_wif(&wif).unwrap(), key);
    }

    #[test]
    fn test_wif_known_vector() {
        // Wiki vector: uncompressed WIF for scalar
        // 0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d
        let wif = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
        let key = PrivateKey::from_wif(wif).unwrap();
        assert_eq!(
            key.to_hex(),
            "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d"
        );
    }

    #[test]
    fn test_from_invalid_wif() {
        // modified character
        assert!(PrivateKey::from_wif("L401GXuUSHauk19f9Cfpm1qfSXZuGLBUAC2VZM6vdmfMxRxAYkWq").is_err());
        // truncated
        assert!(PrivateKey::from_wif("L4o1GXuUSHauk19f9Cfpm1qfSXZuGLBUAC2VZM6vdmfMxRxAYkW").is_err());
        // empty
        assert!(PrivateKey::from_wif("").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = PrivateKey::generate().unwrap();
        let restored = PrivateKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, restored);
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("not hex").is_err());
    }

    /// Each clone owns its own copy of the scalar; dropping one must not
    /// disturb the others.
    #[test]
    fn test_clone_survives_drop_of_original() {
        let key = PrivateKey::generate().unwrap();
        let wif = key.to_wif(MAINNET_WIF);
        let clone = key.clone();
        drop(key);
        assert_eq!(clone.to_wif(MAINNET_WIF), wif);
        assert!(clone.sign(&[0x42u8; 32]).is_ok());
    }

    #[test]
    fn test_debug_redacts_scalar() {
        let key = PrivateKey::generate().unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_hex()));
        assert!(debug.contains("redacted"));
    }
}
