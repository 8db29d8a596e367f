//! Script templates for standard output types.
//!
//! Currently provides the P2PKH template for creating locking scripts
//! and signature-carrying unlocking scripts.

pub mod p2pkh;
