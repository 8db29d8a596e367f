/// Wallet engine primitives - hashing, encoding, and elliptic curve keys.
///
/// This crate provides the foundational building blocks for the wallet:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Chain hash type for transaction identification
/// - Base58 and Base58Check encoding/decoding
/// - Bitcoin wire-format reader/writer and VarInt
/// - secp256k1 keys and ECDSA signatures

pub mod hash;
pub mod chainhash;
pub mod wire;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
