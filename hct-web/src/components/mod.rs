//! UI Components

pub mod footer;
pub mod navbar;
pub mod profile;
pub mod ui;

pub use footer::Footer;
pub use navbar::Navbar;
pub use profile::{ProfileCard, ProfileDetails, RegistrationFields};
