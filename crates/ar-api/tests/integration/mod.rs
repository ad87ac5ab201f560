//! Integration test modules.

pub mod assets_tests;
pub mod common;
pub mod settings_tests;
pub mod web_tests;
