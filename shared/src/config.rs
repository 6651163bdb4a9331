//! # Contract Configuration
//!
//! The dapp is a static wasm bundle, so configuration is baked in at build
//! time from environment variables (read with `option_env!`) and validated on
//! startup.
//!
//! | variable | default |
//! |----------|---------|
//! | `HCT_CONTRACT_ADDRESS` | [`DEFAULT_CONTRACT_ADDRESS`] |
//! | `HCT_TOKEN_SYMBOL` | `HCT` |
//! | `HCT_RECEIPT_POLL_MS` | `1500` |
//!
//! ```rust,no_run
//! use hct_shared::config::{contract_config, init_config};
//!
//! init_config().expect("invalid build configuration");
//! let config = contract_config().unwrap();
//! println!("contract at {}", config.contract_address);
//! ```

use std::sync::OnceLock;

use crate::address::Address;
use crate::error::{HctError, Result};
use crate::units::ETHER_DECIMALS;

/// First contract deployed by the default Hardhat account on a local node.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const DEFAULT_TOKEN_SYMBOL: &str = "HCT";
pub const DEFAULT_RECEIPT_POLL_MS: u32 = 1500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    /// Address of the deployed healthcare contract.
    pub contract_address: Address,

    /// Shown next to the balance.
    pub token_symbol: String,

    pub token_decimals: u32,

    /// Delay between `eth_getTransactionReceipt` polls.
    /// Valid range: 100-60000 ms
    pub receipt_poll_interval_ms: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS
                .parse()
                .unwrap_or(Address::ZERO),
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            token_decimals: ETHER_DECIMALS,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_MS,
        }
    }
}

impl ContractConfig {
    /// Load from the build environment.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            option_env!("HCT_CONTRACT_ADDRESS"),
            option_env!("HCT_TOKEN_SYMBOL"),
            option_env!("HCT_RECEIPT_POLL_MS"),
        )
    }

    /// Build from optional raw values, falling back to defaults.
    pub fn from_values(
        contract_address: Option<&str>,
        token_symbol: Option<&str>,
        receipt_poll_ms: Option<&str>,
    ) -> Result<Self> {
        let contract_address = contract_address
            .unwrap_or(DEFAULT_CONTRACT_ADDRESS)
            .parse()
            .map_err(|e| HctError::Config(format!("HCT_CONTRACT_ADDRESS: {}", e)))?;

        let token_symbol = token_symbol.unwrap_or(DEFAULT_TOKEN_SYMBOL).to_string();

        let receipt_poll_interval_ms = match receipt_poll_ms {
            Some(raw) => raw.parse().map_err(|e| {
                HctError::Config(format!("HCT_RECEIPT_POLL_MS must be a valid number: {}", e))
            })?,
            None => DEFAULT_RECEIPT_POLL_MS,
        };

        Ok(Self {
            contract_address,
            token_symbol,
            token_decimals: ETHER_DECIMALS,
            receipt_poll_interval_ms,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.contract_address.is_zero() {
            return Err(HctError::Config("HCT_CONTRACT_ADDRESS must not be the zero address".into()));
        }

        if self.token_symbol.trim().is_empty() {
            return Err(HctError::Config("HCT_TOKEN_SYMBOL must not be empty".into()));
        }

        if !(100..=60_000).contains(&self.receipt_poll_interval_ms) {
            return Err(HctError::Config(
                "HCT_RECEIPT_POLL_MS must be between 100 and 60000".into(),
            ));
        }

        Ok(())
    }
}

static CONFIG: OnceLock<ContractConfig> = OnceLock::new();

/// Load, validate and install the global configuration. Call once at startup.
pub fn init_config() -> Result<()> {
    let config = ContractConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| HctError::Config("Config has already been initialized".to_string()))
}

/// The global configuration installed by [`init_config`].
pub fn contract_config() -> Result<&'static ContractConfig> {
    CONFIG
        .get()
        .ok_or_else(|| HctError::Config("Config must be initialized with init_config() before use".into()))
}
