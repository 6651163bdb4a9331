//! Form state and client-side validation.
//!
//! Validation runs before any wallet prompt; a rejected form never reaches
//! the contract.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{HctError, Result};
use crate::time::parse_datetime_local;

pub const MISSING_FIELDS: &str = "Please fill all the fields";

/// Raw registration input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub is_doctor: bool,
}

/// Validated arguments for `registerUser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub age: u64,
    pub gender: String,
    pub is_doctor: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration> {
        let name = self.name.trim();
        let age = self.age.trim();
        let gender = self.gender.trim();

        if name.is_empty() || age.is_empty() || gender.is_empty() {
            return Err(HctError::InvalidInput(MISSING_FIELDS.to_string()));
        }

        let age = age
            .parse::<u64>()
            .map_err(|_| HctError::InvalidInput("Age must be a whole number".to_string()))?;

        Ok(Registration {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            is_doctor: self.is_doctor,
        })
    }
}

/// Raw booking input: doctor address and a `datetime-local` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub doctor_address: String,
    pub appointment_time: String,
}

/// Validated arguments for `bookAppointment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub doctor: Address,
    pub timestamp: u64,
}

impl BookingForm {
    pub fn validate(&self, utc_offset_minutes: i32) -> Result<Booking> {
        if self.doctor_address.trim().is_empty() {
            return Err(HctError::InvalidInput("Please enter the doctor's address".to_string()));
        }
        let doctor: Address = self.doctor_address.parse()?;
        let timestamp = parse_datetime_local(&self.appointment_time, utc_offset_minutes)?;
        Ok(Booking { doctor, timestamp })
    }
}
