//! Export module tests
//!
//! Filename sanitization and the validate-render-write pipeline, exercised
//! against a temp directory.
