//! Service layer: event distribution.

pub mod status_bus;

pub use status_bus::StatusBus;
