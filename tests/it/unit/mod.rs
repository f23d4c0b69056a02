//! Component-level tests that need only the public API.

mod config_tests;
mod registry_tests;
