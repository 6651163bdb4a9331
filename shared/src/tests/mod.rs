//! Session, listing and view-model tests against an in-memory contract.


mod appointments;
mod contract;
