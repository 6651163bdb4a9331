//! # Page View Models
//!
//! Each page owns one model. A model holds what the page shows (session,
//! profile, balance, appointments, form input) and runs the contract call
//! chains for mount and for user actions. Failures are logged and leave the
//! previous or default value in place; user actions return a [`Notice`] the
//! page shows as a blocking alert.

pub mod appointments;
pub mod landing;

pub use appointments::AppointmentsModel;
pub use landing::LandingModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Outcome of a user action, shown via `window.alert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}
