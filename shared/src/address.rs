//! 20-byte EVM account addresses.
//!
//! A newtype over ethers' [`H160`] so the whole client shares one
//! string form: parsing accepts any case, display is the EIP-55 checksum
//! that ethers' `getAddress` produces. Two spellings of the same account
//! compare equal.

use std::fmt;
use std::str::FromStr;

use ethers_core::types::H160;
use ethers_core::utils::to_checksum;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HctError;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(H160);

impl Address {
    pub const ZERO: Address = Address(H160([0u8; 20]));

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(H160(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        self.0.as_fixed_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<H160> for Address {
    fn from(inner: H160) -> Self {
        Address(inner)
    }
}

impl From<Address> for H160 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl FromStr for Address {
    type Err = HctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 40 {
            return Err(HctError::InvalidInput(format!(
                "Address must be 40 hex characters, got {}",
                digits.len()
            )));
        }

        digits
            .parse::<H160>()
            .map(Address)
            .map_err(|e| HctError::InvalidInput(format!("Invalid address {}: {}", trimmed, e)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_checksum(&self.0, None))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let checksummed: Address = "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse().unwrap();
        let lower: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
        assert_eq!(checksummed, lower);
    }

    #[test]
    fn test_display_is_checksummed() {
        let lower: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();
        assert_eq!(lower.to_string(), "0x5FbDB2315678afecb367f032d93F642f64180aa3");

        let upper: Address = "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266".parse().unwrap();
        assert_eq!(upper.to_string(), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr: Address = "70997970c51812dc3a010c7d01b50e0d17dc79c8".parse().unwrap();
        assert_eq!(addr.as_bytes()[0], 0x70);
        assert_eq!(H160::from(addr), H160::from_slice(addr.as_bytes()));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
        assert!("0xzz997970c51812dc3a010c7d01b50e0d17dc79c8".parse::<Address>().is_err());
    }

    #[test]
    fn test_serde_as_checksummed_string() {
        let addr: Address = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x70997970C51812dc3A010C7d01b50e0d17dc79C8\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
