//! UI building functions
//!
//! Functions that assemble the main window: header bar, layout, and the
//! cross-component event wiring.

pub mod handlers;
pub mod header;
pub mod layout;
