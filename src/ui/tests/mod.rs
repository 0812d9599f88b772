//! UI module tests
//!
//! Controller tests run without a display server; the GTK widget layer is
//! exercised manually.

#[cfg(test)]
mod controller_tests;
