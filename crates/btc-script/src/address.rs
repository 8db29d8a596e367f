/// P2PKH address handling.
///
/// Supports address derivation from public keys, decoding with checksum
/// and network validation, and the mainnet/testnet/regtest selector.
/// Uses Base58Check encoding with SHA-256d checksums.

use std::fmt;
use std::str::FromStr;

use btc_primitives::base58;
use btc_primitives::ec::PublicKey;
use btc_primitives::PrimitivesError;

use crate::ScriptError;

/// Mainnet P2PKH address version byte.
const MAINNET_P2PKH: u8 = 0x00;
/// Testnet and regtest P2PKH address version byte.
const TESTNET_P2PKH: u8 = 0x6f;

/// Mainnet WIF version byte.
const MAINNET_WIF: u8 = 0x80;
/// Testnet and regtest WIF version byte.
const TESTNET_WIF: u8 = 0xef;

/// Network selector governing address and private key version bytes.
///
/// Threaded explicitly through every operation that encodes or decodes
/// network-tagged data; never inferred from ambient state. A single
/// transaction never mixes networks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// The production chain (address prefix 0x00, addresses start with '1').
    Mainnet,
    /// The public test chain (address prefix 0x6f, 'm' or 'n').
    Testnet,
    /// A local regression-test chain. Shares testnet's version bytes.
    Regtest,
}

impl Network {
    /// The P2PKH address version byte for this network.
    pub fn p2pkh_prefix(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet | Network::Regtest => TESTNET_P2PKH,
        }
    }

    /// The WIF private key version byte for this network.
    pub fn wif_prefix(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF,
            Network::Testnet | Network::Regtest => TESTNET_WIF,
        }
    }
}

impl FromStr for Network {
    type Err = ScriptError;

    /// Parse a network selector string.
    ///
    /// Accepts exactly `mainnet`, `testnet`, or `regtest`; anything else
    /// is rejected before any key material is touched.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(ScriptError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        };
        write!(f, "{}", name)
    }
}

/// A P2PKH address.
///
/// Contains the 20-byte public key hash and the network it was decoded
/// or derived for. Immutable once computed; the string form is
/// `base58check(version_byte || hash160)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The network this address belongs to.
    pub network: Network,
}

impl Address {
    /// Parse a Base58Check-encoded address string for a given network.
    ///
    /// Decodes the string, validates the checksum, and requires the
    /// version byte to match the requested network: a well-formed
    /// address from the wrong network is rejected, not silently
    /// accepted.
    ///
    /// # Arguments
    /// * `addr` - The Base58Check address string.
    /// * `network` - The network the address must belong to.
    ///
    /// # Returns
    /// An `Address`, or an error if the string is malformed, the
    /// checksum fails, or the network does not match.
    pub fn from_string(addr: &str, network: Network) -> Result<Self, ScriptError> {
        let payload = base58::checksum_decode(addr).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => ScriptError::ChecksumMismatch,
            other => ScriptError::InvalidAddress(other.to_string()),
        })?;

        // version byte + 20-byte public key hash
        if payload.len() != 21 {
            return Err(ScriptError::InvalidAddressLength(addr.to_string()));
        }

        let version = payload[0];
        if version != MAINNET_P2PKH && version != TESTNET_P2PKH {
            return Err(ScriptError::UnsupportedAddress(addr.to_string()));
        }
        if version != network.p2pkh_prefix() {
            return Err(ScriptError::WrongNetwork {
                address: addr.to_string(),
                network: network.to_string(),
            });
        }

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&payload[1..21]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Create an address from a 20-byte public key hash.
    ///
    /// # Arguments
    /// * `hash` - The 20-byte hash160 of the public key.
    /// * `network` - The target network.
    ///
    /// # Returns
    /// A new `Address` with the encoded Base58Check string.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(21);
        payload.push(network.p2pkh_prefix());
        payload.extend_from_slice(hash);

        Address {
            address_string: base58::checksum_encode(&payload),
            public_key_hash: *hash,
            network,
        }
    }

    /// Derive the payment address for a public key.
    ///
    /// Computes hash160 of the compressed public key and encodes it with
    /// the network's version byte. Deterministic: the same key and
    /// network always yield the same address string.
    ///
    /// # Arguments
    /// * `public_key` - The public key to derive from.
    /// * `network` - The target network.
    pub fn from_public_key(public_key: &PublicKey, network: Network) -> Self {
        Self::from_public_key_hash(&public_key.hash160(), network)
    }
}

impl fmt::Display for Address {
    /// Display the address as its Base58Check string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}
