//! # Ethereum Provider Seam
//!
//! [`EthereumProvider`] is everything the contract session needs from a
//! wallet: account access, read-only calls, transaction submission and
//! receipt waiting. The browser implementation wraps the injected EIP-1193
//! object; tests use an in-memory contract.
//!
//! The trait is `?Send` because browser handles live on the single wasm thread.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::Result;

/// Transaction hash as returned by `eth_sendTransaction` (`0x`-prefixed hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Call or transaction request object (`eth_call` / `eth_sendTransaction`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    /// `0x`-prefixed call data.
    pub data: String,
}

impl CallRequest {
    pub fn new(from: Option<Address>, to: Address, data: &[u8]) -> Self {
        Self {
            from,
            to,
            data: format!("0x{}", hex::encode(data)),
        }
    }

    /// Decoded call data.
    pub fn data_bytes(&self) -> Result<Vec<u8>> {
        crate::rpc::decode_hex_data(&self.data)
    }
}

/// The fields of `eth_getTransactionReceipt` the client looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TransactionReceipt {
    /// Post-Byzantium receipts carry `0x1` / `0x0`; a missing status counts as success.
    pub fn succeeded(&self) -> bool {
        !matches!(self.status.as_deref(), Some("0x0") | Some("0x00"))
    }
}

#[async_trait(?Send)]
pub trait EthereumProvider {
    /// Prompt for account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// Read-only call against the latest block; returns raw return data.
    async fn call(&self, request: &CallRequest) -> Result<Vec<u8>>;

    /// Ask the wallet to sign and submit a transaction.
    async fn send_transaction(&self, request: &CallRequest) -> Result<TxHash>;

    /// Resolve once the transaction is mined. No timeout.
    async fn wait_for_receipt(&self, hash: &TxHash) -> Result<TransactionReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_request_serialization() {
        let to: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
        let req = CallRequest::new(None, to, &[0x41, 0x1b, 0x4a, 0xce]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "to": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "data": "0x411b4ace"
            })
        );
        assert_eq!(req.data_bytes().unwrap(), vec![0x41, 0x1b, 0x4a, 0xce]);
    }

    #[test]
    fn test_receipt_status() {
        let receipt: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0xabc",
            "status": "0x0",
            "blockNumber": "0x10"
        }))
        .unwrap();
        assert!(!receipt.succeeded());

        let ok = TransactionReceipt {
            status: Some("0x1".into()),
            ..receipt.clone()
        };
        assert!(ok.succeeded());

        let legacy = TransactionReceipt { status: None, ..receipt };
        assert!(legacy.succeeded());
    }
}
