//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Date normalization tests
//! - Catalog tests
//! - Store operation tests
//! - Export-gate validation tests
//! - Variant configuration tests
//! - Type tests (ModuleKind, Prompt, etc.)

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod dates_tests;
#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;
#[cfg(test)]
mod variant_tests;
