//! The wallet facade.
//!
//! Wires key generation, address derivation, UTXO selection, assembly,
//! signing, and broadcast into the three operations a caller uses.
//! Private key material is confined to the signing path: it never
//! appears in logs or error messages.

use std::collections::HashMap;

use btc_node::{NodeClient, NodeConfig};
use btc_primitives::chainhash::TxHash;
use btc_primitives::ec::{PrivateKey, PublicKey};
use btc_script::{Address, Network, Script};
use btc_transaction::signer::{self, PrevOutputResolver};
use btc_transaction::TransactionError;
use tracing::{debug, info};

use crate::assembler::{self, Outpoint};
use crate::types::{KeyPair, SendCoinRequest};
use crate::WalletError;

/// A custodial wallet bound to one network and one node.
#[derive(Debug, Clone)]
pub struct Wallet {
    network: Network,
    node: NodeClient,
}

impl Wallet {
    /// Create a wallet for a network, talking to the given node.
    ///
    /// # Arguments
    /// * `network` - The network all addresses and keys belong to.
    /// * `node_config` - Connection parameters for the node's RPC interface.
    ///
    /// # Returns
    /// A wallet, or an error if the node client cannot be built.
    pub fn new(network: Network, node_config: NodeConfig) -> Result<Self, WalletError> {
        let node = NodeClient::new(node_config)?;
        Ok(Wallet { network, node })
    }

    /// The network this wallet operates on.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Generate a fresh keypair from operating-system entropy.
    ///
    /// Returns the private key as a compressed WIF string together
    /// with the compressed public key and its P2PKH address for this
    /// wallet's network.  The key is handed to the caller and kept
    /// nowhere else.
    ///
    /// # Returns
    /// A [`KeyPair`], or `RandomnessFailure` if the entropy source fails.
    pub fn generate_key(&self) -> Result<KeyPair, WalletError> {
        let private_key = PrivateKey::generate()?;
        let public_key = private_key.public_key();
        let address = Address::from_public_key(&public_key, self.network);

        info!(address = %address, "generated new key");

        Ok(KeyPair {
            wif: private_key.to_wif(self.network.wif_prefix()),
            public_key_hex: public_key.to_hex(),
            address: address.address_string,
        })
    }

    /// Derive the P2PKH address for a compressed public key.
    ///
    /// Deterministic: the same key and network always produce the same
    /// address string.
    ///
    /// # Arguments
    /// * `public_key_hex` - The compressed public key as hex.
    ///
    /// # Returns
    /// The Base58Check address string.
    pub fn derive_address(&self, public_key_hex: &str) -> Result<String, WalletError> {
        let public_key = PublicKey::from_hex(public_key_hex)?;
        let address = Address::from_public_key(&public_key, self.network);
        Ok(address.address_string)
    }

    /// Send coins from the sender's address to a recipient.
    ///
    /// Selects every spendable output the node reports for the sender
    /// address, spends them all into a single output paying `amount`
    /// to the recipient, signs each input with the sender's key, and
    /// broadcasts the result.  Whatever the inputs hold beyond the
    /// paid amount is left as fee; no change output is created.
    ///
    /// # Arguments
    /// * `request` - Sender key and address, recipient, and amount.
    ///
    /// # Returns
    /// The display-order hex txid of the broadcast transaction.
    pub async fn send_coin(&self, request: &SendCoinRequest) -> Result<String, WalletError> {
        let private_key = PrivateKey::from_wif(&request.sender_wif)?;
        let sender = Address::from_string(&request.sender_address, self.network)?;
        let recipient = Address::from_string(&request.recipient_address, self.network)
            .map_err(|e| WalletError::InvalidDestination(e.to_string()))?;

        // The supplied key must control the sender address.
        let derived = Address::from_public_key(&private_key.public_key(), self.network);
        if derived.address_string != sender.address_string {
            return Err(WalletError::InvalidRequest(
                "sender key does not control the sender address".to_string(),
            ));
        }

        let outpoints = self.select_outpoints(&sender).await?;
        debug!(
            inputs = outpoints.len(),
            amount = request.amount,
            "assembling spend"
        );

        let mut tx = assembler::assemble(&outpoints, &recipient, request.amount)?;

        let resolver = self.prefetch_scripts(&outpoints).await?;
        signer::sign_all(&mut tx, &private_key, &resolver)?;

        let txid = self.node.send_raw_transaction(&tx).await?;
        info!(%txid, "spend broadcast");
        Ok(txid)
    }

    /// Select every spendable output the node holds for an address.
    async fn select_outpoints(&self, sender: &Address) -> Result<Vec<Outpoint>, WalletError> {
        let utxos = self.node.list_unspent().await?;

        let mut outpoints = Vec::new();
        for utxo in utxos {
            if utxo.address != sender.address_string || !utxo.spendable {
                continue;
            }
            outpoints.push(Outpoint {
                txid: utxo.txid.parse::<TxHash>()?,
                vout: utxo.vout,
            });
        }

        if outpoints.is_empty() {
            return Err(WalletError::NoSpendableOutputs {
                address: sender.address_string.clone(),
            });
        }
        Ok(outpoints)
    }

    /// Fetch the locking script of every selected outpoint up front, so
    /// signing itself needs no node round-trips.
    async fn prefetch_scripts(
        &self,
        outpoints: &[Outpoint],
    ) -> Result<ScriptMapResolver, WalletError> {
        let mut scripts = HashMap::with_capacity(outpoints.len());
        for outpoint in outpoints {
            let script = self
                .node
                .previous_output_script(&outpoint.txid, outpoint.vout)
                .await?;
            scripts.insert((outpoint.txid, outpoint.vout), script);
        }
        Ok(ScriptMapResolver { scripts })
    }
}

/// Resolver over prefetched locking scripts.
pub struct ScriptMapResolver {
    scripts: HashMap<(TxHash, u32), Script>,
}

impl PrevOutputResolver for ScriptMapResolver {
    fn locking_script(&self, txid: &TxHash, vout: u32) -> Result<Script, TransactionError> {
        self.scripts
            .get(&(*txid, vout))
            .cloned()
            .ok_or_else(|| TransactionError::OutputNotFound {
                txid: txid.to_string(),
                vout,
            })
    }
}
