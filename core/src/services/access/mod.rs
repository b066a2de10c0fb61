//! One-time access code broker
//!
//! Patients are issued short-lived six digit codes that hospital staff
//! redeem once to open the patient's records.

mod broker;
mod config;
mod sweeper;

#[cfg(test)]
mod tests;

pub use broker::OtpAccessBroker;
pub use config::{OtpBrokerConfig, OtpSweeperConfig};
pub use sweeper::OtpSweeper;
