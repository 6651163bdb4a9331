//! # Contract ABI helpers
//!
//! Thin glue over `ethers_core::abi`: selectors are derived from the Solidity
//! signature, arguments go in as [`Token`]s, return data comes back as
//! [`Token`]s and is narrowed to the client's types here. `uint256` values
//! are narrowed to `u128`; anything wider is a decoding error.
//!
//! ```rust
//! use hct_shared::abi::{self, ParamType};
//!
//! let data = abi::encode(&[abi::uint(7), abi::Token::Bool(true)]);
//! assert_eq!(data.len(), 64);
//! let mut values = abi::decode(&[ParamType::Uint(256), ParamType::Bool], &data)
//!     .unwrap()
//!     .into_iter();
//! assert_eq!(abi::into_u128(values.next().unwrap()).unwrap(), 7);
//! ```

use ethers_core::abi as ethabi;
use ethers_core::types::U256;
use ethers_core::utils::id;

pub use ethers_core::abi::{ParamType, Token};

use crate::address::Address;
use crate::error::{HctError, Result};

pub const WORD: usize = 32;

/// First four bytes of the keccak-256 of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    id(signature)
}

/// Selector followed by the encoded arguments.
pub fn encode_call(signature: &str, args: &[Token]) -> Vec<u8> {
    let encoded = ethabi::encode(args);
    let mut out = Vec::with_capacity(4 + encoded.len());
    out.extend_from_slice(&selector(signature));
    out.extend_from_slice(&encoded);
    out
}

/// Encode `args` as a tuple.
pub fn encode(args: &[Token]) -> Vec<u8> {
    ethabi::encode(args)
}

/// Decode a tuple of `types` from return data.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>> {
    ethabi::decode(types, data).map_err(|e| HctError::Decoding(format!("abi: {}", e)))
}

pub fn uint(value: u128) -> Token {
    Token::Uint(U256::from(value))
}

pub fn address(value: Address) -> Token {
    Token::Address(value.into())
}

pub fn into_address(token: Token) -> Result<Address> {
    match token {
        Token::Address(a) => Ok(Address::from(a)),
        other => Err(unexpected("address", &other)),
    }
}

pub fn into_u128(token: Token) -> Result<u128> {
    match token {
        Token::Uint(v) if v.bits() <= 128 => Ok(v.as_u128()),
        Token::Uint(v) => Err(HctError::Decoding(format!(
            "uint256 value {} does not fit in 128 bits",
            v
        ))),
        other => Err(unexpected("uint256", &other)),
    }
}

pub fn into_u64(token: Token, what: &str) -> Result<u64> {
    let value = into_u128(token)?;
    u64::try_from(value).map_err(|_| HctError::Decoding(format!("{} {} too large", what, value)))
}

pub fn into_bool(token: Token) -> Result<bool> {
    match token {
        Token::Bool(b) => Ok(b),
        other => Err(unexpected("bool", &other)),
    }
}

pub fn into_string(token: Token) -> Result<String> {
    match token {
        Token::String(s) => Ok(s),
        other => Err(unexpected("string", &other)),
    }
}

fn unexpected(expected: &str, got: &Token) -> HctError {
    HctError::Decoding(format!("expected {}, got {:?}", expected, got))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_signature() {
        assert_eq!(hex::encode(selector("balanceOf(address)")), "70a08231");
        assert_eq!(hex::encode(selector("bookAppointment(address,uint256)")), "eef28996");
    }

    #[test]
    fn test_encode_static_args() {
        let doctor: Address = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".parse().unwrap();
        let data = encode_call(
            "bookAppointment(address,uint256)",
            &[address(doctor), uint(1_700_000_000)],
        );
        assert_eq!(data.len(), 4 + 2 * WORD);
        assert_eq!(&data[..4], &[0xee, 0xf2, 0x89, 0x96]);
        assert_eq!(
            hex::encode(&data[4..36]),
            "00000000000000000000000070997970c51812dc3a010c7d01b50e0d17dc79c8"
        );
        assert_eq!(&data[36..68], encode(&[uint(1_700_000_000)]).as_slice());
    }

    #[test]
    fn test_encode_strings_layout() {
        // (string "Alice", uint 30, string "F", bool true)
        let data = encode(&[
            Token::String("Alice".into()),
            uint(30),
            Token::String("F".into()),
            Token::Bool(true),
        ]);
        // 4 head words + 2 * (length word + one padded data word)
        assert_eq!(data.len(), 8 * WORD);
        assert_eq!(data[31], 0x80);
        assert_eq!(data[95], 0xc0);
        assert_eq!(data[159], 5);
        assert_eq!(&data[160..165], b"Alice");
        assert!(data[165..192].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_decode_into_client_types() {
        let data = encode(&[
            Token::String("Dr. Grey".into()),
            uint(41),
            Token::String("female".into()),
            Token::Bool(true),
        ]);
        let mut values = decode(
            &[ParamType::String, ParamType::Uint(256), ParamType::String, ParamType::Bool],
            &data,
        )
        .unwrap()
        .into_iter();
        assert_eq!(into_string(values.next().unwrap()).unwrap(), "Dr. Grey");
        assert_eq!(into_u64(values.next().unwrap(), "age").unwrap(), 41);
        assert_eq!(into_string(values.next().unwrap()).unwrap(), "female");
        assert!(into_bool(values.next().unwrap()).unwrap());
    }

    #[test]
    fn test_decode_rejects_short_data() {
        let err = decode(&[ParamType::Uint(256), ParamType::Bool], &[0u8; 40]).unwrap_err();
        assert!(matches!(err, HctError::Decoding(_)));
    }

    #[test]
    fn test_rejects_oversized_uint() {
        assert!(into_u128(Token::Uint(U256::MAX)).is_err());
        assert_eq!(into_u128(uint(u128::MAX)).unwrap(), u128::MAX);
        assert!(into_u64(uint(u128::from(u64::MAX) + 1), "count").is_err());
    }

    #[test]
    fn test_wrong_token_kind() {
        assert!(into_bool(uint(1)).is_err());
        assert!(into_address(Token::Bool(true)).is_err());
    }
}
