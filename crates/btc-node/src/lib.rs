#![deny(missing_docs)]

//! # btc-node
//!
//! JSON-RPC client for a Bitcoin Core compatible node.
//!
//! Provides the three calls the wallet needs: listing spendable UTXOs,
//! fetching the locking script of a previous output, and broadcasting
//! a signed transaction.
//!
//! # Example
//!
//! ```no_run
//! use btc_node::{NodeClient, NodeConfig};
//!
//! let client = NodeClient::new(NodeConfig {
//!     url: "http://localhost:8332".to_string(),
//!     username: "user".to_string(),
//!     password: "password".to_string(),
//!     ..Default::default()
//! }).unwrap();
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::NodeClient;
pub use error::NodeError;
pub use types::{NodeConfig, UnspentOutput};
