/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The sender address has no spendable outputs on the node.
    #[error("no spendable outputs for address {address}")]
    NoSpendableOutputs {
        /// The sender address that was queried.
        address: String,
    },
    /// The recipient address failed validation.
    #[error("invalid destination address: {0}")]
    InvalidDestination(String),
    /// The requested spend is malformed (e.g. zero amount).
    #[error("invalid spend request: {0}")]
    InvalidRequest(String),
    /// An underlying primitives error (forwarded from `btc-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] btc_primitives::PrimitivesError),
    /// An underlying script error (forwarded from `btc-script`).
    #[error("script error: {0}")]
    Script(#[from] btc_script::ScriptError),
    /// An underlying transaction error (forwarded from `btc-transaction`).
    #[error("transaction error: {0}")]
    Transaction(#[from] btc_transaction::TransactionError),
    /// An underlying node RPC error (forwarded from `btc-node`).
    #[error("node error: {0}")]
    Node(#[from] btc_node::NodeError),
}
