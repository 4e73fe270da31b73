//! Cross-module tests for the cell-state core.
//!
//! Per-module unit tests live next to the code they cover; this directory
//! holds the tests that exercise several modules together:
//! - `integration.rs`: full render-pass scenarios over a small board
//! - `properties.rs`: purity, totality, and order-stability properties
//! - `helpers.rs`: factory functions shared by the above

mod helpers;

pub use helpers::*;
