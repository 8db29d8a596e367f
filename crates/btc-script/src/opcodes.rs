//! Opcode constants for standard scripts.
//!
//! Only the opcodes used by P2PKH locking and unlocking scripts are
//! defined; this engine constructs scripts but does not execute them.

/// Push the next 20 bytes onto the stack (direct-length push).
pub const OP_DATA_20: u8 = 0x14;

/// Push data with a 1-byte length prefix.
pub const OP_PUSHDATA1: u8 = 0x4c;

/// Push data with a 2-byte little-endian length prefix.
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Push data with a 4-byte little-endian length prefix.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;

/// Pop, compare the top two items, and fail the script if unequal.
pub const OP_EQUALVERIFY: u8 = 0x88;

/// Hash the top stack item with RIPEMD-160(SHA-256(x)).
pub const OP_HASH160: u8 = 0xa9;

/// Verify an ECDSA signature against a public key and the tx sighash.
pub const OP_CHECKSIG: u8 = 0xac;

/// Upper bound of the direct-length push opcodes (1..=75 bytes).
pub const MAX_DIRECT_PUSH: u8 = 0x4b;
