//! Signature hash computation for transaction signing.
//!
//! Computes the hash that is signed by ECDSA to authorize spending a
//! transaction input, using the pre-segwit (legacy) digest algorithm:
//! a modified serialization of the whole transaction in which the
//! signed input carries the previous output's locking script and every
//! other input carries an empty script, followed by the 4-byte
//! little-endian sighash type, all double-SHA256 hashed.

use btc_primitives::hash::sha256d;
use btc_primitives::wire::{VarInt, WireWriter};

use crate::transaction::Transaction;
use crate::TransactionError;

// -----------------------------------------------------------------------
// Sighash flag constants
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs, allowing outputs to be modified.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with another flag: only sign the current input, allowing other
/// inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u32 = 0x1f;

// -----------------------------------------------------------------------
// Legacy signature hash
// -----------------------------------------------------------------------

/// Compute the legacy signature hash for a given input.
///
/// Only `SIGHASH_ALL` is supported; other base types or the
/// ANYONECANPAY modifier are rejected.  The digest does not commit to
/// the value being spent, only to the previous output's locking script.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Index of the input being signed.
/// * `prev_output_script` - The locking script of the output being spent.
/// * `sighash_type` - The sighash flags. Must be `SIGHASH_ALL`.
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed by ECDSA.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    let preimage = calc_preimage(tx, input_index, prev_output_script, sighash_type)?;
    Ok(sha256d(&preimage))
}

/// Compute the pre-image bytes for the legacy sighash before double-hashing.
///
/// The preimage is the transaction re-serialized as:
/// 1. nVersion (4 bytes LE)
/// 2. varint input count
/// 3. each input: outpoint (32 + 4 bytes), then the previous output's
///    locking script for the signed input or an empty script for every
///    other input, then nSequence (4 bytes LE)
/// 4. varint output count
/// 5. each output: satoshis (8 bytes LE) + varint script length + script
/// 6. nLocktime (4 bytes LE)
/// 7. sighash type (4 bytes LE)
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Index of the input being signed.
/// * `prev_output_script` - The locking script of the output being spent.
/// * `sighash_type` - The sighash flags. Must be `SIGHASH_ALL`.
///
/// # Returns
/// The raw preimage bytes (not yet hashed).
pub fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    prev_output_script: &[u8],
    sighash_type: u32,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    if sighash_type & SIGHASH_MASK != SIGHASH_ALL || sighash_type & SIGHASH_ANYONECANPAY != 0 {
        return Err(TransactionError::SigningError(format!(
            "unsupported sighash type 0x{:02x}",
            sighash_type
        )));
    }

    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(tx.version);

    writer.write_varint(VarInt::from(tx.inputs.len()));
    for (i, input) in tx.inputs.iter().enumerate() {
        writer.write_bytes(&input.source_txid);
        writer.write_u32_le(input.source_tx_out_index);

        // The signed input carries the previous locking script; all
        // other inputs carry an empty script.
        if i == input_index {
            writer.write_varint(VarInt::from(prev_output_script.len()));
            writer.write_bytes(prev_output_script);
        } else {
            writer.write_varint(VarInt::from(0u64));
        }

        writer.write_u32_le(input.sequence_number);
    }

    writer.write_varint(VarInt::from(tx.outputs.len()));
    for output in &tx.outputs {
        output.write_to(&mut writer);
    }

    writer.write_u32_le(tx.lock_time);

    // Sighash type, widened to 4 bytes.
    writer.write_u32_le(sighash_type);

    Ok(writer.into_bytes())
}
