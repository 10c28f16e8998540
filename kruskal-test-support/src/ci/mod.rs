//! Environment-driven knobs for running the test suites in CI.

pub mod property_test_profile;
