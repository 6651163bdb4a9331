//! Page modules

pub mod appointments;
pub mod landing;
pub mod register;

pub use appointments::AppointmentsPage;
pub use landing::LandingPage;
pub use register::RegisterPage;
