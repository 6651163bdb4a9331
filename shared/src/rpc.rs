//! # EIP-1193 JSON-RPC Wire Helpers
//!
//! Builds `params` arrays and parses results for the four wallet methods the
//! dapp uses. The browser provider passes these JSON values through
//! `window.ethereum.request({ method, params })` unchanged.

use serde_json::{json, Value};

use crate::address::Address;
use crate::error::{HctError, Result};
use crate::provider::{CallRequest, TransactionReceipt, TxHash};

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CALL: &str = "eth_call";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED_CODE: i64 = 4001;
/// EIP-1193 "Unauthorized".
pub const UNAUTHORIZED_CODE: i64 = 4100;

pub fn call_params(request: &CallRequest) -> Value {
    json!([request, "latest"])
}

pub fn send_transaction_params(request: &CallRequest) -> Value {
    json!([request])
}

pub fn receipt_params(hash: &TxHash) -> Value {
    json!([hash.as_str()])
}

/// Decode a `0x`-prefixed hex string. `"0x"` is empty data.
pub fn decode_hex_data(data: &str) -> Result<Vec<u8>> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    Ok(hex::decode(digits)?)
}

pub fn parse_accounts(value: Value) -> Result<Vec<Address>> {
    let accounts: Vec<String> = serde_json::from_value(value)?;
    accounts.iter().map(|a| a.parse()).collect()
}

pub fn parse_call_result(value: Value) -> Result<Vec<u8>> {
    match value {
        Value::String(data) => decode_hex_data(&data),
        other => Err(HctError::Decoding(format!("eth_call returned {}", other))),
    }
}

pub fn parse_tx_hash(value: Value) -> Result<TxHash> {
    match value {
        Value::String(hash) if hash.starts_with("0x") => Ok(TxHash(hash)),
        other => Err(HctError::Transaction(format!(
            "eth_sendTransaction returned {}",
            other
        ))),
    }
}

/// `None` while the transaction is still pending.
pub fn parse_receipt(value: Value) -> Result<Option<TransactionReceipt>> {
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Map an EIP-1193 error (`{ code, message }`) onto [`HctError`].
pub fn classify_provider_error(code: Option<i64>, message: String) -> HctError {
    match code {
        Some(USER_REJECTED_CODE) | Some(UNAUTHORIZED_CODE) => HctError::Rejected(message),
        _ => HctError::Rpc(message),
    }
}
