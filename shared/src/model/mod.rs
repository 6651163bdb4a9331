//! # Contract Data Model
//!
//! Local mirrors of the records the healthcare contract owns, plus the form
//! state the pages collect before calling it.
//!
//! - [`profile`] - [`UserProfile`] as returned by `getUserProfile`
//! - [`appointment`] - [`Appointment`] as returned by `getAppointment`
//! - [`forms`] - registration and booking input with client-side validation
//!
//! Nothing here enforces contract invariants. Whatever the contract returns is
//! taken as authoritative.

pub mod appointment;
pub mod forms;
pub mod profile;

pub use appointment::*;
pub use forms::*;
pub use profile::*;
