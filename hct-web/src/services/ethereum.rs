//! Injected Ethereum Provider via wasm-bindgen
//!
//! Wraps `window.ethereum` (EIP-1193: MetaMask, Rabby, Coinbase Wallet, ...)
//! behind [`EthereumProvider`]. Every request goes through one JS shim that
//! normalises thrown errors to `{ code, message }`.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use hct_shared::config::ContractConfig;
use hct_shared::provider::{CallRequest, EthereumProvider, TransactionReceipt, TxHash};
use hct_shared::rpc::{self, classify_provider_error};
use hct_shared::{Address, HctError, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ============================================================================
// EIP-1193 BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function ethereumRequest(method, params) {
    if (typeof window.ethereum === 'undefined' || window.ethereum === null) {
        throw { code: null, message: 'Ethereum provider is not available' };
    }
    try {
        return await window.ethereum.request({ method: method, params: params });
    } catch (error) {
        // Wallets throw Error objects, plain objects or strings
        const code = error && typeof error.code === 'number' ? error.code : null;
        const message = error && error.message ? error.message : String(error);
        throw { code: code, message: message };
    }
}
")]
extern "C" {
    /// `true` when a wallet has injected `window.ethereum`
    #[wasm_bindgen(js_name = hasEthereumProvider)]
    fn has_ethereum_provider() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(catch, js_name = ethereumRequest)]
    async fn ethereum_request(method: &str, params: JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Error shape thrown by the shim
#[derive(Debug, Deserialize)]
struct ProviderErrorPayload {
    code: Option<i64>,
    message: String,
}

fn provider_error(err: JsValue) -> HctError {
    match serde_wasm_bindgen::from_value::<ProviderErrorPayload>(err.clone()) {
        Ok(payload) => classify_provider_error(payload.code, payload.message),
        Err(_) => HctError::Rpc(err.as_string().unwrap_or_else(|| format!("{:?}", err))),
    }
}

// ============================================================================
// BROWSER PROVIDER
// ============================================================================

/// Handle on the injected wallet. Holds no JS state, so it is `Send + Sync`
/// and can live inside Leptos signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserProvider {
    poll_interval_ms: u32,
}

impl BrowserProvider {
    /// `None` when no wallet is installed; the session reports that case.
    pub fn detect(config: &ContractConfig) -> Option<Self> {
        has_ethereum_provider().then_some(Self {
            poll_interval_ms: config.receipt_poll_interval_ms,
        })
    }

    async fn request(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        let js_params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| HctError::Rpc(format!("{}: cannot encode params: {}", method, e)))?;

        log::debug!("{} {}", method, params);
        let result = ethereum_request(method, js_params)
            .await
            .map_err(provider_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| HctError::Decoding(format!("{}: unexpected result: {}", method, e)))
    }
}

#[async_trait(?Send)]
impl EthereumProvider for BrowserProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        let accounts = self
            .request(rpc::ETH_REQUEST_ACCOUNTS, serde_json::Value::Array(vec![]))
            .await?;
        rpc::parse_accounts(accounts)
    }

    async fn call(&self, request: &CallRequest) -> Result<Vec<u8>> {
        let data = self.request(rpc::ETH_CALL, rpc::call_params(request)).await?;
        rpc::parse_call_result(data)
    }

    async fn send_transaction(&self, request: &CallRequest) -> Result<TxHash> {
        let hash = self
            .request(rpc::ETH_SEND_TRANSACTION, rpc::send_transaction_params(request))
            .await?;
        rpc::parse_tx_hash(hash)
    }

    async fn wait_for_receipt(&self, hash: &TxHash) -> Result<TransactionReceipt> {
        loop {
            let raw = self
                .request(rpc::ETH_GET_TRANSACTION_RECEIPT, rpc::receipt_params(hash))
                .await?;
            if let Some(receipt) = rpc::parse_receipt(raw)? {
                return Ok(receipt);
            }
            TimeoutFuture::new(self.poll_interval_ms).await;
        }
    }
}
