//! Node client data types: configuration and RPC structures.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of satoshis in one BTC.
const SATOSHIS_PER_BTC: f64 = 100_000_000.0;

/// Configuration for a [`NodeClient`](crate::NodeClient).
#[derive(Clone)]
pub struct NodeConfig {
    /// Base URL of the node's RPC endpoint (e.g. `http://localhost:8332`).
    pub url: String,
    /// RPC username for basic authentication.
    pub username: String,
    /// RPC password for basic authentication.
    pub password: String,
    /// Timeout applied to every RPC call.
    pub timeout: Duration,
}

// The RPC password is a credential; keep it out of Debug output.
impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8332".to_string(),
            username: String::new(),
            password: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// One spendable output as reported by `listunspent`.
///
/// Amounts arrive from the node as a BTC decimal; use
/// [`amount_satoshis`](UnspentOutput::amount_satoshis) for the integer
/// value the wallet works with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    /// Display-order hex txid of the transaction holding this output.
    pub txid: String,
    /// Output index within that transaction.
    pub vout: u32,
    /// Address the output pays to.
    #[serde(default)]
    pub address: String,
    /// Hex-encoded locking script, when the node reports it.
    #[serde(default, rename = "scriptPubKey")]
    pub script_pub_key: Option<String>,
    /// Amount in BTC.
    pub amount: f64,
    /// Number of confirmations.
    #[serde(default)]
    pub confirmations: u64,
    /// Whether the node considers the output safe to spend.
    #[serde(default = "default_true")]
    pub spendable: bool,
}

fn default_true() -> bool {
    true
}

impl UnspentOutput {
    /// The output's value in satoshis, rounded to the nearest integer.
    ///
    /// The RPC interface reports BTC as a floating-point decimal;
    /// rounding absorbs the representation error for any value the
    /// node can actually hold.
    pub fn amount_satoshis(&self) -> u64 {
        (self.amount * SATOSHIS_PER_BTC).round() as u64
    }
}

/// A JSON-RPC 1.0 request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: serde_json::Value,
}

/// A JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

/// The error object of a JSON-RPC response.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}
