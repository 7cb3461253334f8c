//! Helpers that read CI-facing environment overrides.

pub mod property_test_profile;
