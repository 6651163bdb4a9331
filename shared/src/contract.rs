//! # Healthcare Contract Session
//!
//! [`HealthcareContract`] binds a provider and the connected account to the
//! deployed contract and exposes one method per contract function. Reads are
//! `eth_call`s; writes submit a transaction and wait for its receipt before
//! returning.
//!
//! ## Interface
//!
//! | method | Solidity signature |
//! |--------|--------------------|
//! | [`fetch_profile`](HealthcareContract::fetch_profile) | `getUserProfile(address)` |
//! | [`fetch_balance`](HealthcareContract::fetch_balance) | `balanceOf(address)` |
//! | [`register`](HealthcareContract::register) | `registerUser(string,uint256,string,bool)` |
//! | [`fetch_appointment_count`](HealthcareContract::fetch_appointment_count) | `getAppointmentsCount()` |
//! | [`fetch_appointment`](HealthcareContract::fetch_appointment) | `getAppointment(uint256)` |
//! | [`book_appointment`](HealthcareContract::book_appointment) | `bookAppointment(address,uint256)` |
//!
//! Writes are not queued or retried. A failed or reverted transaction is
//! returned as an error and nothing local changes.

use log::{debug, info, warn};

use crate::abi::{self, ParamType, Token, WORD};
use crate::address::Address;
use crate::error::{HctError, Result};
use crate::model::{Appointment, Booking, Registration, UserProfile};
use crate::provider::{CallRequest, EthereumProvider, TransactionReceipt};

/// Solidity signatures of the contract functions the client calls. Selectors
/// are derived from these with [`abi::selector`].
pub mod signatures {
    pub const GET_USER_PROFILE: &str = "getUserProfile(address)";
    pub const BALANCE_OF: &str = "balanceOf(address)";
    pub const REGISTER_USER: &str = "registerUser(string,uint256,string,bool)";
    pub const GET_APPOINTMENTS_COUNT: &str = "getAppointmentsCount()";
    pub const GET_APPOINTMENT: &str = "getAppointment(uint256)";
    pub const BOOK_APPOINTMENT: &str = "bookAppointment(address,uint256)";

    pub const ALL: [&str; 6] = [
        GET_USER_PROFILE,
        BALANCE_OF,
        REGISTER_USER,
        GET_APPOINTMENTS_COUNT,
        GET_APPOINTMENT,
        BOOK_APPOINTMENT,
    ];
}

fn profile_types() -> Vec<ParamType> {
    vec![ParamType::String, ParamType::Uint(256), ParamType::String, ParamType::Bool]
}

fn appointment_types() -> Vec<ParamType> {
    vec![ParamType::Address, ParamType::Address, ParamType::Uint(256), ParamType::Bool]
}

#[derive(Clone, Debug)]
pub struct HealthcareContract<P> {
    provider: P,
    address: Address,
    signer: Address,
}

impl<P: EthereumProvider> HealthcareContract<P> {
    pub fn new(provider: P, address: Address, signer: Address) -> Self {
        Self {
            provider,
            address,
            signer,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The connected account that signs writes.
    pub fn signer(&self) -> Address {
        self.signer
    }

    /// `None` when the account has never registered.
    pub async fn fetch_profile(&self, account: &Address) -> Result<Option<UserProfile>> {
        let data = self
            .read(signatures::GET_USER_PROFILE, &[abi::address(*account)])
            .await?;
        let profile = decode_profile(&data)?;
        Ok(Some(profile).filter(UserProfile::is_registered))
    }

    /// Raw token balance in base units.
    pub async fn fetch_balance(&self, account: &Address) -> Result<u128> {
        let data = self
            .read(signatures::BALANCE_OF, &[abi::address(*account)])
            .await?;
        abi::into_u128(single(abi::decode(&[ParamType::Uint(256)], &data)?)?)
    }

    pub async fn register(&self, registration: &Registration) -> Result<TransactionReceipt> {
        self.transact(
            signatures::REGISTER_USER,
            &[
                Token::String(registration.name.clone()),
                abi::uint(u128::from(registration.age)),
                Token::String(registration.gender.clone()),
                Token::Bool(registration.is_doctor),
            ],
        )
        .await
    }

    pub async fn fetch_appointment_count(&self) -> Result<u64> {
        let data = self.read(signatures::GET_APPOINTMENTS_COUNT, &[]).await?;
        abi::into_u64(single(abi::decode(&[ParamType::Uint(256)], &data)?)?, "appointment count")
    }

    pub async fn fetch_appointment(&self, index: u64) -> Result<Appointment> {
        let data = self
            .read(signatures::GET_APPOINTMENT, &[abi::uint(u128::from(index))])
            .await?;
        decode_appointment(&data)
    }

    pub async fn book_appointment(&self, booking: &Booking) -> Result<TransactionReceipt> {
        self.transact(
            signatures::BOOK_APPOINTMENT,
            &[
                abi::address(booking.doctor),
                abi::uint(u128::from(booking.timestamp)),
            ],
        )
        .await
    }

    async fn read(&self, signature: &str, args: &[Token]) -> Result<Vec<u8>> {
        let request = CallRequest::new(None, self.address, &abi::encode_call(signature, args));
        debug!("eth_call {} {} data={}", self.address, signature, request.data);
        let data = self.provider.call(&request).await?;
        if data.is_empty() {
            return Err(HctError::Decoding(format!(
                "empty return data from {} (is the contract deployed on this network?)",
                self.address
            )));
        }
        Ok(data)
    }

    async fn transact(&self, signature: &str, args: &[Token]) -> Result<TransactionReceipt> {
        let request = CallRequest::new(
            Some(self.signer),
            self.address,
            &abi::encode_call(signature, args),
        );
        let hash = self.provider.send_transaction(&request).await?;
        info!("Submitted {} as {}", signature, hash.as_str());

        let receipt = self.provider.wait_for_receipt(&hash).await?;
        if !receipt.succeeded() {
            warn!("Transaction {} reverted", hash.as_str());
            return Err(HctError::Reverted(hash.0));
        }
        info!(
            "Transaction {} confirmed in block {}",
            hash.as_str(),
            receipt.block_number.as_deref().unwrap_or("?")
        );
        Ok(receipt)
    }
}

fn single(mut values: Vec<Token>) -> Result<Token> {
    values
        .pop()
        .filter(|_| values.is_empty())
        .ok_or_else(|| HctError::Decoding("expected exactly one return value".into()))
}

/// Accepts both a flat `(string,uint256,string,bool)` return and the same
/// tuple returned as a struct, which starts with an offset word of 0x20.
fn decode_profile(data: &[u8]) -> Result<UserProfile> {
    let is_struct = data
        .get(..WORD)
        .is_some_and(|word| word[..WORD - 1].iter().all(|b| *b == 0) && word[WORD - 1] == 0x20);

    let values = if is_struct {
        match single(abi::decode(&[ParamType::Tuple(profile_types())], data)?)? {
            Token::Tuple(fields) => fields,
            other => return Err(HctError::Decoding(format!("expected profile tuple, got {:?}", other))),
        }
    } else {
        abi::decode(&profile_types(), data)?
    };

    let mut values = values.into_iter();
    let mut next = || {
        values
            .next()
            .ok_or_else(|| HctError::Decoding("profile tuple too short".into()))
    };

    Ok(UserProfile {
        name: abi::into_string(next()?)?,
        age: abi::into_u64(next()?, "age")?,
        gender: abi::into_string(next()?)?,
        is_doctor: abi::into_bool(next()?)?,
    })
}

fn decode_appointment(data: &[u8]) -> Result<Appointment> {
    let mut values = abi::decode(&appointment_types(), data)?.into_iter();
    let mut next = || {
        values
            .next()
            .ok_or_else(|| HctError::Decoding("appointment tuple too short".into()))
    };

    Ok(Appointment {
        patient: abi::into_address(next()?)?,
        doctor: abi::into_address(next()?)?,
        timestamp: abi::into_u64(next()?, "timestamp")?,
        is_confirmed: abi::into_bool(next()?)?,
    })
}
