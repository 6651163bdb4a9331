//! Appointment listing.
//!
//! The contract keeps one global appointment array. Loading reads the count,
//! then every record in index order, keeping the ones that name the account
//! as patient or doctor. That is one `eth_call` per record on every load.

use log::debug;

use crate::address::Address;
use crate::contract::HealthcareContract;
use crate::error::Result;
use crate::model::Appointment;
use crate::provider::EthereumProvider;

pub async fn load_appointments<P: EthereumProvider>(
    contract: &HealthcareContract<P>,
    account: &Address,
) -> Result<Vec<Appointment>> {
    let count = contract.fetch_appointment_count().await?;
    debug!("Scanning {} appointments for {}", count, account);

    let mut all = Vec::with_capacity(count.min(1024) as usize);
    for index in 0..count {
        all.push(contract.fetch_appointment(index).await?);
    }
    Ok(filter_for_account(all, account))
}

/// Keep only the appointments that involve `account`, preserving order.
pub fn filter_for_account<I>(appointments: I, account: &Address) -> Vec<Appointment>
where
    I: IntoIterator<Item = Appointment>,
{
    appointments
        .into_iter()
        .filter(|a| a.involves(account))
        .collect()
}
