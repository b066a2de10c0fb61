//! # MedPortal API
//!
//! actix-web server exposing one-time access sharing, medical records and
//! document categorization.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
