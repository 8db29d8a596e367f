/// Unified error type for all primitives operations.
///
/// Covers errors from key generation, EC operations, encoding, and
/// wire-format parsing.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// The OS entropy source could not supply random bytes. Fatal to key
    /// generation; never retried automatically.
    #[error("randomness source unavailable: {0}")]
    RandomnessFailure(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("unexpected end of data")]
    UnexpectedEof,
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
