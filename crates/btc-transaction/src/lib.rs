/// Bitcoin transaction building, signing, and serialization.
///
/// Provides the Transaction type with inputs, outputs, legacy signature
/// hash computation, P2PKH script templates, and binary/hex
/// serialization.

pub mod transaction;
pub mod input;
pub mod output;
pub mod sighash;
pub mod signer;
pub mod template;

mod error;
pub use error::TransactionError;
pub use signer::PrevOutputResolver;
pub use transaction::Transaction;
pub use input::TransactionInput;
pub use output::TransactionOutput;
