//! Tests for the access sharing service
