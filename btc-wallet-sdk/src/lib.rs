#![deny(missing_docs)]

//! Custodial Bitcoin wallet SDK.
//!
//! Re-exports all wallet components for convenient single-crate usage.

pub use btc_node as node;
pub use btc_primitives as primitives;
pub use btc_script as script;
pub use btc_transaction as transaction;
pub use btc_wallet as wallet;
