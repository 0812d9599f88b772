//! Render module tests
//!
//! Contains test suites for the dual renderer:
//! - Preview rendering tests
//! - Export document rendering tests
//! - Preview/export consistency tests (the core contract)

#[cfg(test)]
mod preview_tests;
