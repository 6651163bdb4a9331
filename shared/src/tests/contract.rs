use super::mock::{addr, MockProvider, DOCTOR, PATIENT, STRANGER};
use crate::config::ContractConfig;
use crate::contract::{signatures, HealthcareContract};
use crate::error::HctError;
use crate::listing::load_appointments;
use crate::model::{Appointment, Booking, Registration, UserProfile};
use crate::session::{self, SessionState};

fn contract_for(provider: &MockProvider, signer: u8) -> HealthcareContract<MockProvider> {
    HealthcareContract::new(
        provider.clone(),
        ContractConfig::default().contract_address,
        addr(signer),
    )
}

fn appointment(patient: u8, doctor: u8, timestamp: u64) -> Appointment {
    Appointment {
        patient: addr(patient),
        doctor: addr(doctor),
        timestamp,
        is_confirmed: false,
    }
}

#[tokio::test]
async fn test_connect_returns_first_account() {
    let provider = MockProvider::with_account(addr(PATIENT));
    provider.state.borrow_mut().accounts.push(addr(DOCTOR));
    assert_eq!(session::connect(&provider).await.unwrap(), addr(PATIENT));
}

#[tokio::test]
async fn test_connect_without_accounts_is_rejected() {
    let provider = MockProvider::default();
    let err = session::connect(&provider).await.unwrap_err();
    assert!(err.is_connection_failure());
}

#[tokio::test]
async fn test_establish_without_provider() {
    let state = session::establish::<MockProvider>(None).await;
    assert_eq!(state.account(), None);
    assert_eq!(state.account_label(), "Not Connected");
    assert!(matches!(state, SessionState::Error(_)));
}

#[tokio::test]
async fn test_establish_user_declines() {
    let provider = MockProvider::with_account(addr(PATIENT));
    provider.state.borrow_mut().reject_accounts = true;
    let state = session::establish(Some(&provider)).await;
    assert!(!state.is_connected());
}

#[tokio::test]
async fn test_unregistered_profile_is_none() {
    let provider = MockProvider::with_account(addr(PATIENT));
    let contract = contract_for(&provider, PATIENT);
    assert_eq!(contract.fetch_profile(&addr(PATIENT)).await.unwrap(), None);
    assert_eq!(provider.calls(), vec![signatures::GET_USER_PROFILE]);
}

#[tokio::test]
async fn test_register_then_fetch_profile() {
    let provider = MockProvider::with_account(addr(DOCTOR));
    let contract = contract_for(&provider, DOCTOR);
    let registration = Registration {
        name: "Dr. Yang".into(),
        age: 45,
        gender: "female".into(),
        is_doctor: true,
    };

    let receipt = contract.register(&registration).await.unwrap();
    assert!(receipt.succeeded());

    let profile = contract.fetch_profile(&addr(DOCTOR)).await.unwrap();
    assert_eq!(
        profile,
        Some(UserProfile {
            name: "Dr. Yang".into(),
            age: 45,
            gender: "female".into(),
            is_doctor: true,
        })
    );
}

#[tokio::test]
async fn test_reverted_transaction_is_an_error() {
    let provider = MockProvider::with_account(addr(PATIENT));
    provider.state.borrow_mut().revert = true;
    let contract = contract_for(&provider, PATIENT);

    let err = contract
        .book_appointment(&Booking {
            doctor: addr(DOCTOR),
            timestamp: 1_700_000_000,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, HctError::Reverted(_)));
    assert!(provider.state.borrow().appointments.is_empty());
}

#[tokio::test]
async fn test_fetch_balance() {
    let provider = MockProvider::with_account(addr(PATIENT));
    provider
        .state
        .borrow_mut()
        .balances
        .insert(addr(PATIENT), 42_000_000_000_000_000_000);
    let contract = contract_for(&provider, PATIENT);
    assert_eq!(
        contract.fetch_balance(&addr(PATIENT)).await.unwrap(),
        42_000_000_000_000_000_000
    );
}

#[tokio::test]
async fn test_listing_keeps_only_own_appointments() {
    let provider = MockProvider::with_account(addr(PATIENT));
    provider.state.borrow_mut().appointments = vec![
        appointment(PATIENT, DOCTOR, 100),
        appointment(STRANGER, DOCTOR, 200),
        appointment(DOCTOR, PATIENT, 300),
        appointment(STRANGER, STRANGER, 400),
    ];
    let contract = contract_for(&provider, PATIENT);

    let mine = load_appointments(&contract, &addr(PATIENT)).await.unwrap();
    let stamps: Vec<u64> = mine.iter().map(|a| a.timestamp).collect();
    assert_eq!(stamps, vec![100, 300]);

    let doctors = load_appointments(&contract, &addr(DOCTOR)).await.unwrap();
    assert_eq!(doctors.len(), 3);

    // count + one read per record, per load
    assert_eq!(provider.calls().len(), 2 * 5);
}

#[tokio::test]
async fn test_listing_empty_contract() {
    let provider = MockProvider::with_account(addr(PATIENT));
    let contract = contract_for(&provider, PATIENT);
    assert!(load_appointments(&contract, &addr(PATIENT)).await.unwrap().is_empty());
    assert_eq!(provider.calls(), vec![signatures::GET_APPOINTMENTS_COUNT]);
}
