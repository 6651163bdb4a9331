use super::mock::{addr, MockProvider, DOCTOR, PATIENT, STRANGER};
use crate::config::ContractConfig;
use crate::contract::signatures;
use crate::model::{Appointment, BookingForm, UserProfile};
use crate::view_model::appointments::{AppointmentsModel, BOOKING_FAILED, BOOKING_SUCCEEDED};

fn model() -> AppointmentsModel<MockProvider> {
    AppointmentsModel::new(&ContractConfig::default())
}

fn profile(name: &str, is_doctor: bool) -> UserProfile {
    UserProfile {
        name: name.into(),
        age: 40,
        gender: "x".into(),
        is_doctor,
    }
}

fn seeded(account: u8) -> MockProvider {
    let provider = MockProvider::with_account(addr(account));
    {
        let mut state = provider.state.borrow_mut();
        state.profiles.insert(addr(PATIENT), profile("Pat", false));
        state.profiles.insert(addr(DOCTOR), profile("Doc", true));
        state.appointments = vec![
            Appointment {
                patient: addr(PATIENT),
                doctor: addr(DOCTOR),
                timestamp: 1_709_647_620,
                is_confirmed: true,
            },
            Appointment {
                patient: addr(STRANGER),
                doctor: addr(STRANGER),
                timestamp: 1_709_647_680,
                is_confirmed: false,
            },
        ];
    }
    provider
}

fn booking_form() -> BookingForm {
    BookingForm {
        doctor_address: addr(DOCTOR).to_string(),
        appointment_time: "2024-03-06T09:30".into(),
    }
}

#[tokio::test]
async fn test_init_lists_only_own_appointments() {
    let mut page = model();
    page.init(Some(seeded(PATIENT))).await;

    assert!(!page.loading);
    assert_eq!(page.account(), Some(addr(PATIENT)));
    assert_eq!(page.appointments.len(), 1);
    assert!(page.appointments.iter().all(|a| a.involves(&addr(PATIENT))));
    assert!(page.can_book());
}

#[tokio::test]
async fn test_doctor_cannot_book() {
    let mut page = model();
    page.init(Some(seeded(DOCTOR))).await;
    assert_eq!(page.appointments.len(), 1);
    assert!(!page.can_book());
}

#[tokio::test]
async fn test_unregistered_cannot_book() {
    let mut page = model();
    page.init(Some(seeded(STRANGER))).await;
    assert_eq!(page.profile, None);
    assert!(!page.can_book());
}

#[tokio::test]
async fn test_no_provider() {
    let mut page = model();
    page.init(None).await;
    assert!(!page.loading);
    assert_eq!(page.account(), None);
    assert!(page.appointments.is_empty());
}

#[tokio::test]
async fn test_listing_failure_falls_back_to_empty() {
    let provider = seeded(PATIENT);
    provider
        .state
        .borrow_mut()
        .failing_reads
        .push(signatures::GET_APPOINTMENT);

    let mut page = model();
    page.init(Some(provider)).await;
    assert!(page.appointments.is_empty());
    assert!(page.can_book());
}

#[tokio::test]
async fn test_book_reloads_list() {
    let provider = seeded(PATIENT);
    let mut page = model();
    page.init(Some(provider.clone())).await;

    page.form = booking_form();
    let notice = page.book(0).await;

    assert_eq!(notice.message, BOOKING_SUCCEEDED);
    assert_eq!(page.appointments.len(), 2);
    let booked = &page.appointments[1];
    assert_eq!(booked.doctor, addr(DOCTOR));
    assert_eq!(booked.patient, addr(PATIENT));
    assert_eq!(booked.timestamp, 1_709_717_400);
    assert!(!booked.is_confirmed);
}

#[tokio::test]
async fn test_book_invalid_form_makes_no_call() {
    let provider = seeded(PATIENT);
    let mut page = model();
    page.init(Some(provider.clone())).await;

    page.form = BookingForm {
        doctor_address: "0x1234".into(),
        ..booking_form()
    };
    let notice = page.book(0).await;

    assert!(!notice.is_success());
    assert_eq!(provider.sent_count(), 0);
}

#[tokio::test]
async fn test_book_revert_keeps_list() {
    let provider = seeded(PATIENT);
    let mut page = model();
    page.init(Some(provider.clone())).await;
    let before = page.appointments.clone();

    provider.state.borrow_mut().revert = true;
    page.form = booking_form();
    let notice = page.book(0).await;

    assert_eq!(notice.message, BOOKING_FAILED);
    assert_eq!(page.appointments, before);
}

#[tokio::test]
async fn test_form_edits_during_booking_survive() {
    let provider = seeded(PATIENT);
    let mut page = model();
    page.init(Some(provider.clone())).await;
    page.form = booking_form();

    let task = page.booking_task(0).unwrap();
    page.form.doctor_address = addr(STRANGER).to_string();
    let outcome = task.run().await;
    let notice = page.apply_booking(outcome);

    assert_eq!(notice.message, BOOKING_SUCCEEDED);
    assert_eq!(page.form.doctor_address, addr(STRANGER).to_string());
    assert_eq!(page.appointments.len(), 2);
    assert_eq!(page.appointments[1].doctor, addr(DOCTOR));
}

#[tokio::test]
async fn test_failed_booking_leaves_list_untouched() {
    let provider = seeded(PATIENT);
    let mut page = model();
    page.init(Some(provider.clone())).await;
    page.form = booking_form();
    provider.state.borrow_mut().reject_send = true;

    let outcome = page.booking_task(0).unwrap().run().await;
    assert_eq!(outcome.appointments, None);
    assert_eq!(page.apply_booking(outcome).message, BOOKING_FAILED);
    assert_eq!(page.appointments.len(), 1);
}
