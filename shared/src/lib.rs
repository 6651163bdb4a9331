//! # Healthcare Token Client Core
//!
//! Everything the dapp does that does not touch the DOM: the contract data
//! model, the Solidity ABI codec, the contract session, the appointment
//! listing and the page view models. The browser crate supplies an
//! [`provider::EthereumProvider`] backed by the injected wallet; tests supply
//! an in-memory one.
//!
//! ## Structure
//!
//! - **[`session`]**: wallet session state and the connect step
//! - **[`contract`]**: [`contract::HealthcareContract`], one method per contract function
//! - **[`listing`]**: count-then-scan appointment loading
//! - **[`view_model`]**: landing and appointment page state and actions
//! - **[`model`]**: profiles, appointments, form validation
//! - **[`abi`]**, **[`rpc`]**: wire formats
//! - **[`units`]**, **[`time`]**, **[`utils`]**: display helpers
//! - **[`config`]**, **[`error`]**
//!
//! ## Flow
//!
//! ```text
//! connect ──► fetch profile ──► fetch balance          (landing)
//!         └─► fetch profile ──► count ──► get(0..n)     (appointments)
//! register / book ──► eth_sendTransaction ──► receipt ──► refresh
//! ```

pub mod abi;
pub mod address;
pub mod config;
pub mod contract;
pub mod error;
pub mod listing;
pub mod model;
pub mod provider;
pub mod rpc;
pub mod session;
pub mod time;
pub mod units;
pub mod utils;
pub mod view_model;

pub use address::Address;
pub use error::{HctError, Result};

#[cfg(test)]
mod tests;
