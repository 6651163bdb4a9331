//! Wallet session state and the connect step.

use log::{error, info, warn};

use crate::address::Address;
use crate::error::{HctError, Result};
use crate::provider::EthereumProvider;

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connecting,
    Connected { account: Address },
    Error(String),
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }

    pub fn account(&self) -> Option<Address> {
        match self {
            SessionState::Connected { account } => Some(*account),
            _ => None,
        }
    }

    /// The connected address, or "Not Connected".
    pub fn account_label(&self) -> String {
        self.account()
            .map(|a| a.to_string())
            .unwrap_or_else(|| NOT_CONNECTED.to_string())
    }
}

pub const NOT_CONNECTED: &str = "Not Connected";

/// Ask the wallet for account access and return the first account.
pub async fn connect<P: EthereumProvider>(provider: &P) -> Result<Address> {
    let accounts = provider.request_accounts().await?;
    match accounts.first() {
        Some(account) => {
            info!("Connected account {}", account);
            Ok(*account)
        }
        None => {
            warn!("Wallet returned no accounts");
            Err(HctError::Rejected("wallet returned no accounts".into()))
        }
    }
}

/// [`connect`], folded into a [`SessionState`]. `None` means no provider was injected.
pub async fn establish<P: EthereumProvider>(provider: Option<&P>) -> SessionState {
    let Some(provider) = provider else {
        error!("{}", HctError::ProviderUnavailable);
        return SessionState::Error(HctError::ProviderUnavailable.to_string());
    };

    match connect(provider).await {
        Ok(account) => SessionState::Connected { account },
        Err(e) => {
            error!("Error initializing: {}", e);
            SessionState::Error(e.to_string())
        }
    }
}
