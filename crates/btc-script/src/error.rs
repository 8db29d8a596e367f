/// Error types for script and address operations.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The address string could not be decoded as Base58.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The decoded address payload has the wrong length.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// The address checksum did not match.
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    /// The address version byte is not a known P2PKH version.
    #[error("unsupported address version for '{0}'")]
    UnsupportedAddress(String),

    /// The address is valid but encoded for a different network.
    #[error("address '{address}' is not valid for network {network}")]
    WrongNetwork {
        /// The offending address string.
        address: String,
        /// The network the caller asked for.
        network: String,
    },

    /// The network selector string is not one of mainnet/testnet/regtest.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Push data exceeds the maximum encodable length.
    #[error("push data too big")]
    DataTooBig,

    /// An opcode that requires push data was appended as a bare opcode.
    #[error("invalid opcode type: {0:#04x}")]
    InvalidOpcodeType(u8),

    /// An underlying primitives error.
    #[error("primitives error: {0}")]
    Primitives(#[from] btc_primitives::PrimitivesError),
}
