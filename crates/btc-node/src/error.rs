//! Error types for node RPC operations.

/// Errors that can occur when talking to a Bitcoin Core node.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// HTTP request failed (connection, timeout, or status error).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize or deserialize RPC data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The node returned a JSON-RPC error.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message from the node.
        message: String,
    },

    /// The node rejected a broadcast transaction.  Carries the node's
    /// message verbatim; the caller decides what to do next.
    #[error("transaction rejected by node: {message}")]
    Rejected {
        /// The node's rejection message.
        message: String,
    },

    /// A referenced previous output does not exist on the node.
    #[error("output not found: {txid}:{vout}")]
    OutputNotFound {
        /// Display-order hex txid of the missing transaction.
        txid: String,
        /// Output index within that transaction.
        vout: u32,
    },

    /// The RPC response carried neither a result nor an error.
    #[error("RPC response missing result")]
    MissingResult,

    /// A transaction returned by the node failed to parse.
    #[error("transaction error: {0}")]
    Transaction(#[from] btc_transaction::TransactionError),
}
