//! Tests for the access code broker

#[cfg(test)]
mod sweeper_tests;
