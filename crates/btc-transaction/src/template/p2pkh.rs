//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use btc_primitives::ec::{PublicKey, Signature};
use btc_script::opcodes::*;
use btc_script::{Address, Script};

use crate::TransactionError;

/// Create a P2PKH locking script from a Bitcoin address.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
///
/// # Arguments
/// * `address` - The address whose public key hash to lock to.
///
/// # Returns
/// A 25-byte P2PKH locking script.
pub fn lock(address: &Address) -> Script {
    let pkh = &address.public_key_hash;

    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(pkh);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);

    Script::from_bytes(&bytes)
}

/// Build a P2PKH unlocking script from a signature and public key.
///
/// Produces: `<DER_signature || sighash_byte> <compressed_pubkey>`
///
/// # Arguments
/// * `signature` - The ECDSA signature over the input's sighash.
/// * `public_key` - The public key matching the locked hash.
/// * `sighash_flag` - The sighash flag byte appended to the signature.
///
/// # Returns
/// `Ok(Script)` containing the unlocking script.
pub fn unlock(
    signature: &Signature,
    public_key: &PublicKey,
    sighash_flag: u8,
) -> Result<Script, TransactionError> {
    let der_sig = signature.to_der();
    let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
    sig_buf.extend_from_slice(&der_sig);
    sig_buf.push(sighash_flag);

    let mut script = Script::new();
    script.append_push_data(&sig_buf)?;
    script.append_push_data(&public_key.to_compressed())?;

    Ok(script)
}
