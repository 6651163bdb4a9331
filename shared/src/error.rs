//! # Error Handling
//!
//! [`HctError`] is the single error type used by the contract session, the
//! wallet session and the view models. Every failure ends at the call site:
//! it is logged and turned into an alert or a default value, never retried.
//!
//! ## Error Categories
//!
//! The UI only distinguishes two outcomes:
//!
//! 1. **Connection failures** ([`HctError::is_connection_failure`])
//!    - [`ProviderUnavailable`](HctError::ProviderUnavailable) - no injected wallet
//!    - [`Rejected`](HctError::Rejected) - the user declined the wallet prompt
//!    - [`NotConnected`](HctError::NotConnected) - action attempted without a session
//!
//! 2. **Operation failures** - everything else
//!    - [`Rpc`](HctError::Rpc) - the provider returned an error
//!    - [`Transaction`](HctError::Transaction) / [`Reverted`](HctError::Reverted)
//!    - [`Decoding`](HctError::Decoding) - malformed contract or RPC data
//!    - [`InvalidInput`](HctError::InvalidInput) - rejected client-side, no call made
//!    - [`Config`](HctError::Config)

use thiserror::Error;

/// Convenience alias for `Result<T, HctError>`.
pub type Result<T> = std::result::Result<T, HctError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HctError {
    /// No EIP-1193 provider was injected into the page.
    #[error("Ethereum provider is not available")]
    ProviderUnavailable,

    /// The wallet refused the request (EIP-1193 code 4001) or returned no account.
    #[error("Request rejected by wallet: {0}")]
    Rejected(String),

    /// An operation needed a connected account but the session has none.
    #[error("Wallet is not connected")]
    NotConnected,

    /// The provider answered a JSON-RPC request with an error.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Building or submitting a transaction failed.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// The transaction was mined with status `0x0`.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Return data, hex or JSON did not have the expected shape.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Form input rejected before any external call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HctError {
    /// `true` for the "connection failed" half of the taxonomy.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            HctError::ProviderUnavailable | HctError::Rejected(_) | HctError::NotConnected
        )
    }

    /// Text suitable for a blocking alert.
    ///
    /// Input errors carry their own message; provider and contract details
    /// stay in the console log.
    pub fn user_message(&self) -> String {
        match self {
            HctError::InvalidInput(msg) => msg.clone(),
            HctError::ProviderUnavailable => {
                "No wallet detected. Please install a browser wallet such as MetaMask.".to_string()
            }
            HctError::Rejected(_) => "The wallet request was rejected.".to_string(),
            HctError::NotConnected => "Please connect your wallet first.".to_string(),
            HctError::Rpc(_)
            | HctError::Transaction(_)
            | HctError::Reverted(_)
            | HctError::Decoding(_)
            | HctError::Config(_) => "Operation failed. See console for details.".to_string(),
        }
    }
}

impl From<serde_json::Error> for HctError {
    fn from(err: serde_json::Error) -> Self {
        HctError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<hex::FromHexError> for HctError {
    fn from(err: hex::FromHexError) -> Self {
        HctError::Decoding(format!("hex error: {}", err))
    }
}
