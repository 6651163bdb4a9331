use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient: Address,
    pub doctor: Address,
    /// Unix seconds.
    pub timestamp: u64,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl Appointment {
    /// `true` if `account` is the patient or the doctor.
    pub fn involves(&self, account: &Address) -> bool {
        self.patient == *account || self.doctor == *account
    }

    pub fn status(&self) -> AppointmentStatus {
        if self.is_confirmed {
            AppointmentStatus::Confirmed
        } else {
            AppointmentStatus::Pending
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => f.write_str("Confirmed"),
            AppointmentStatus::Pending => f.write_str("Pending"),
        }
    }
}
