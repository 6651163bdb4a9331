//! Browser helpers

pub mod browser;
