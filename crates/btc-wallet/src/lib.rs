/// Custodial wallet facade.
///
/// Ties the lower layers together: key generation, P2PKH address
/// derivation, UTXO selection against a node, transaction assembly,
/// signing, and broadcast.

mod error;
pub use error::WalletError;

pub mod assembler;
pub mod types;
pub mod wallet;

pub use types::{KeyPair, SendCoinRequest};
pub use wallet::Wallet;
