//! Appointments page: the account's appointments and, for patients, booking.

use log::error;

use crate::address::Address;
use crate::config::ContractConfig;
use crate::contract::HealthcareContract;
use crate::error::HctError;
use crate::listing::load_appointments;
use crate::model::{Appointment, Booking, BookingForm, UserProfile};
use crate::provider::EthereumProvider;
use crate::session::{self, SessionState};
use crate::view_model::Notice;

pub const BOOKING_SUCCEEDED: &str = "Appointment booked successfully!";
pub const BOOKING_FAILED: &str = "Booking failed. See console for details.";

#[derive(Clone, Debug)]
pub struct AppointmentsModel<P> {
    contract_address: Address,
    contract: Option<HealthcareContract<P>>,
    pub session: SessionState,
    pub profile: Option<UserProfile>,
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub form: BookingForm,
}

impl<P: EthereumProvider + Clone> AppointmentsModel<P> {
    pub fn new(config: &ContractConfig) -> Self {
        Self {
            contract_address: config.contract_address,
            contract: None,
            session: SessionState::Disconnected,
            profile: None,
            appointments: Vec::new(),
            loading: true,
            form: BookingForm::default(),
        }
    }

    /// Connect, fetch the profile, then load the appointment list.
    pub async fn init(&mut self, provider: Option<P>) {
        self.session = SessionState::Connecting;
        self.session = session::establish(provider.as_ref()).await;

        if let (Some(account), Some(provider)) = (self.session.account(), provider) {
            self.contract = Some(HealthcareContract::new(provider, self.contract_address, account));

            if let Some(contract) = &self.contract {
                match contract.fetch_profile(&account).await {
                    Ok(profile) => self.profile = profile,
                    Err(e) => error!("Error fetching user profile: {}", e),
                }
            }
            self.reload_appointments().await;
        }

        self.loading = false;
    }

    /// Replace the list with a fresh scan. Falls back to an empty list on error.
    pub async fn reload_appointments(&mut self) {
        if let Some(contract) = &self.contract {
            self.appointments = scan_or_empty(contract).await;
        }
    }

    /// Only registered patients get the booking form.
    pub fn can_book(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| !p.is_doctor)
    }

    /// Submit `bookAppointment` from the form. `utc_offset_minutes` is the
    /// browser's offset for the chosen local time.
    pub async fn book(&mut self, utc_offset_minutes: i32) -> Notice {
        match self.booking_task(utc_offset_minutes) {
            Ok(task) => {
                let outcome = task.run().await;
                self.apply_booking(outcome)
            }
            Err(notice) => notice,
        }
    }

    /// Validated booking and the contract to send it with, detached from the
    /// model so the page can await the wallet without holding it.
    pub fn booking_task(&self, utc_offset_minutes: i32) -> std::result::Result<BookingTask<P>, Notice> {
        let booking = self
            .form
            .validate(utc_offset_minutes)
            .map_err(|e| Notice::failure(e.user_message()))?;
        let contract = self
            .contract
            .clone()
            .ok_or_else(|| Notice::failure(HctError::NotConnected.user_message()))?;
        Ok(BookingTask { contract, booking })
    }

    /// Store what a finished [`BookingTask`] produced. Only the list changes.
    pub fn apply_booking(&mut self, outcome: BookingOutcome) -> Notice {
        if let Some(appointments) = outcome.appointments {
            self.appointments = appointments;
        }
        outcome.notice
    }

    /// Take the state a finished [`init`](Self::init) produced, keeping the
    /// form input currently on screen.
    pub fn adopt_loaded(&mut self, loaded: Self) {
        let form = std::mem::take(&mut self.form);
        *self = loaded;
        self.form = form;
    }

    pub fn account(&self) -> Option<Address> {
        self.session.account()
    }
}

async fn scan_or_empty<P: EthereumProvider>(contract: &HealthcareContract<P>) -> Vec<Appointment> {
    match load_appointments(contract, &contract.signer()).await {
        Ok(appointments) => appointments,
        Err(e) => {
            error!("Error fetching appointments: {}", e);
            Vec::new()
        }
    }
}

/// A booking ready to submit, detached from the page model.
#[derive(Clone, Debug)]
pub struct BookingTask<P> {
    contract: HealthcareContract<P>,
    booking: Booking,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingOutcome {
    pub notice: Notice,
    /// Reloaded list; `None` when the transaction failed.
    pub appointments: Option<Vec<Appointment>>,
}

impl<P: EthereumProvider> BookingTask<P> {
    pub async fn run(self) -> BookingOutcome {
        match self.contract.book_appointment(&self.booking).await {
            Ok(_) => BookingOutcome {
                notice: Notice::success(BOOKING_SUCCEEDED),
                appointments: Some(scan_or_empty(&self.contract).await),
            },
            Err(e) => {
                error!("Error booking appointment: {}", e);
                BookingOutcome {
                    notice: Notice::failure(BOOKING_FAILED),
                    appointments: None,
                }
            }
        }
    }
}
