//! Unsigned transaction assembly from selected UTXOs.
//!
//! Consumes every supplied outpoint in order and pays a single P2PKH
//! output.  No change output is created: the difference between the
//! inputs' value and the paid amount is left to the network as fee.

use btc_primitives::chainhash::TxHash;
use btc_script::Address;
use btc_transaction::template::p2pkh;
use btc_transaction::{Transaction, TransactionInput, TransactionOutput};

use crate::WalletError;

/// An outpoint selected for spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outpoint {
    /// Transaction holding the output.
    pub txid: TxHash,
    /// Output index within that transaction.
    pub vout: u32,
}

/// Assemble an unsigned transaction spending the given outpoints.
///
/// Every outpoint becomes an input, in the order supplied.  A single
/// output pays `amount` satoshis to `recipient`.  Version 1, lock time
/// 0, all sequences finalized.
///
/// # Arguments
/// * `outpoints` - The UTXOs to consume. Must be non-empty.
/// * `recipient` - Destination address for the single output.
/// * `amount` - Satoshis paid to the recipient.
///
/// # Returns
/// An unsigned `Transaction`, or an error if no outpoints were supplied
/// or the amount is zero.
pub fn assemble(
    outpoints: &[Outpoint],
    recipient: &Address,
    amount: u64,
) -> Result<Transaction, WalletError> {
    if outpoints.is_empty() {
        return Err(WalletError::NoSpendableOutputs {
            address: String::new(),
        });
    }
    if amount == 0 {
        return Err(WalletError::InvalidRequest(
            "amount must be greater than zero".to_string(),
        ));
    }

    let mut tx = Transaction::new();
    for outpoint in outpoints {
        tx.add_input(TransactionInput::from_outpoint(
            *outpoint.txid.as_bytes(),
            outpoint.vout,
        ));
    }

    tx.add_output(TransactionOutput {
        satoshis: amount,
        locking_script: p2pkh::lock(recipient),
    });

    Ok(tx)
}
