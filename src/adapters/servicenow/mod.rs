//! ServiceNow change-request integration.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::ServiceNowAdapter;
pub use client::ServiceNowClient;
