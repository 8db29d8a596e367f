//! JSON-RPC HTTP client for a Bitcoin Core compatible node.

use btc_primitives::chainhash::TxHash;
use btc_script::Script;
use btc_transaction::Transaction;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::NodeError;
use crate::types::{NodeConfig, RpcRequest, RpcResponse, UnspentOutput};

/// RPC error code the node uses for mempool rejection.
const RPC_VERIFY_REJECTED: i64 = -26;
/// RPC error code for transactions already present or conflicting.
const RPC_VERIFY_ALREADY_IN_CHAIN: i64 = -27;

/// HTTP client for a node's JSON-RPC interface.
///
/// Every call is authenticated with HTTP basic auth and bounded by the
/// configured timeout.  The client holds no wallet state; it is a thin
/// transport for the three RPCs the wallet uses.
#[derive(Debug, Clone)]
pub struct NodeClient {
    /// Client configuration.
    config: NodeConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl NodeClient {
    /// Create a new node client with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Endpoint URL, credentials, and timeout.
    ///
    /// # Returns
    /// A configured client, or an error if the HTTP client cannot be built.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Perform a JSON-RPC call and deserialize the result.
    async fn call<T: DeserializeOwned + Default>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, NodeError> {
        debug!(method, "node rpc call");

        let request = RpcRequest {
            jsonrpc: "1.0",
            id: "btc-wallet",
            method,
            params,
        };

        let resp = self
            .client
            .post(&self.config.url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&request)
            .send()
            .await?;

        let response: RpcResponse<T> = resp.json().await?;

        if let Some(err) = response.error {
            return Err(NodeError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        response.result.ok_or(NodeError::MissingResult)
    }

    /// List the spendable outputs the node's wallet knows about.
    ///
    /// Wraps the `listunspent` RPC with its default confirmation range.
    ///
    /// # Returns
    /// All unspent outputs reported by the node, unfiltered.
    pub async fn list_unspent(&self) -> Result<Vec<UnspentOutput>, NodeError> {
        let utxos: Vec<UnspentOutput> = self.call("listunspent", serde_json::json!([])).await?;
        debug!(count = utxos.len(), "listunspent returned");
        Ok(utxos)
    }

    /// Fetch the locking script of the output `txid:vout`.
    ///
    /// Retrieves the raw previous transaction via `getrawtransaction`,
    /// parses it, and extracts the requested output's script.  An index
    /// past the end of the transaction's outputs is reported as
    /// `OutputNotFound`.
    ///
    /// # Arguments
    /// * `txid` - The previous transaction's id.
    /// * `vout` - The output index within that transaction.
    ///
    /// # Returns
    /// The locking script of the referenced output.
    pub async fn previous_output_script(
        &self,
        txid: &TxHash,
        vout: u32,
    ) -> Result<Script, NodeError> {
        let raw_hex: String = self
            .call("getrawtransaction", serde_json::json!([txid.to_string()]))
            .await
            .map_err(|e| match e {
                // Unknown txid comes back as an RPC error.
                NodeError::Rpc { .. } => NodeError::OutputNotFound {
                    txid: txid.to_string(),
                    vout,
                },
                other => other,
            })?;

        let prev_tx = Transaction::from_hex(&raw_hex)?;
        let output = prev_tx
            .outputs
            .get(vout as usize)
            .ok_or_else(|| NodeError::OutputNotFound {
                txid: txid.to_string(),
                vout,
            })?;

        Ok(output.locking_script.clone())
    }

    /// Broadcast a signed transaction to the network.
    ///
    /// A node rejection is surfaced as `Rejected` with the node's
    /// message verbatim; the call is never retried here.
    ///
    /// # Arguments
    /// * `tx` - The fully signed transaction.
    ///
    /// # Returns
    /// The display-order hex txid the node accepted.
    pub async fn send_raw_transaction(&self, tx: &Transaction) -> Result<String, NodeError> {
        let result = self
            .call::<String>("sendrawtransaction", serde_json::json!([tx.to_hex()]))
            .await;

        match result {
            Ok(txid) => {
                info!(%txid, "transaction broadcast accepted");
                Ok(txid)
            }
            Err(NodeError::Rpc { code, message })
                if code == RPC_VERIFY_REJECTED || code == RPC_VERIFY_ALREADY_IN_CHAIN =>
            {
                Err(NodeError::Rejected { message })
            }
            Err(other) => Err(other),
        }
    }
}
