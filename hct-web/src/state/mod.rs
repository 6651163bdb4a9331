//! Shared application state (Leptos contexts)

pub mod session;
