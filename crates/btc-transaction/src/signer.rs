//! Whole-transaction P2PKH signing.
//!
//! The signer looks up each spent output's locking script through a
//! `PrevOutputResolver`, computes the legacy sighash per input, signs
//! with RFC6979 deterministic ECDSA, and installs the unlocking
//! scripts.  Signing is all-or-nothing: no script is installed until
//! every input has been signed successfully, so a failure never leaves
//! a half-signed transaction behind.

use btc_primitives::chainhash::TxHash;
use btc_primitives::ec::PrivateKey;
use btc_script::Script;

use crate::sighash::SIGHASH_ALL;
use crate::template::p2pkh;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Source of previous-output locking scripts during signing.
///
/// Implemented over whatever store knows the spent outputs: a chain
/// node client, an in-memory map prefetched from one, or a fixture in
/// tests.  An unknown outpoint is reported as `OutputNotFound`.
pub trait PrevOutputResolver {
    /// Look up the locking script of the output `txid:vout`.
    ///
    /// # Arguments
    /// * `txid` - The previous transaction's id.
    /// * `vout` - The output index within that transaction.
    ///
    /// # Returns
    /// The locking script, or `OutputNotFound` if the outpoint is unknown.
    fn locking_script(&self, txid: &TxHash, vout: u32) -> Result<Script, TransactionError>;
}

/// Sign every input of a transaction with a single private key.
///
/// Assumes all inputs spend P2PKH outputs controlled by `private_key`.
/// For each input the previous locking script is resolved, the legacy
/// `SIGHASH_ALL` digest computed and signed, and the unlocking script
/// `<DER_sig || 0x01> <compressed_pubkey>` built.  Scripts are
/// installed only after all inputs signed without error.
///
/// # Arguments
/// * `tx` - The transaction to sign. Mutated only on success.
/// * `private_key` - The key controlling every spent output.
/// * `resolver` - Source of previous-output locking scripts.
///
/// # Returns
/// `Ok(())` with all unlocking scripts installed, or the first error
/// encountered, leaving the transaction unmodified.
pub fn sign_all(
    tx: &mut Transaction,
    private_key: &PrivateKey,
    resolver: &dyn PrevOutputResolver,
) -> Result<(), TransactionError> {
    if tx.inputs.is_empty() {
        return Err(TransactionError::InvalidTransaction(
            "transaction has no inputs to sign".to_string(),
        ));
    }

    let public_key = private_key.public_key();

    let mut unlocking_scripts = Vec::with_capacity(tx.inputs.len());
    for (i, input) in tx.inputs.iter().enumerate() {
        let txid = TxHash::new(input.source_txid);
        let prev_script = resolver.locking_script(&txid, input.source_tx_out_index)?;

        let sig_hash = tx.input_signature_hash(i, &prev_script, SIGHASH_ALL)?;
        let signature = private_key.sign(&sig_hash)?;

        unlocking_scripts.push(p2pkh::unlock(&signature, &public_key, SIGHASH_ALL as u8)?);
    }

    for (input, script) in tx.inputs.iter_mut().zip(unlocking_scripts) {
        input.unlocking_script = Some(script);
    }

    Ok(())
}
