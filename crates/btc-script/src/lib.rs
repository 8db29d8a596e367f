/// Script construction and addressing for the wallet engine.
///
/// Provides the Script byte-vector type with push-data encoding, the
/// opcode constants used by standard P2PKH scripts, the Network selector
/// (mainnet/testnet/regtest), and Base58Check P2PKH addresses.

pub mod script;
pub mod opcodes;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{Address, Network};
