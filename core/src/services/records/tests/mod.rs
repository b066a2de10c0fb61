//! Tests for the record service

#[cfg(test)]
mod service_tests;
