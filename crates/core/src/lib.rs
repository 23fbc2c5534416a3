//! Shared domain building blocks for the HarPalJob admin workspace.
//!
//! Holds the pieces that have no I/O: identifiers, the local validation
//! error type, and the free-text search matcher used by every list screen.

pub mod error;
pub mod search;
pub mod types;
pub mod validation;
