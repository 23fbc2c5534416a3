//! Terminal front end for the HarPalJob admin dashboard.

pub mod commands;
pub mod config;
pub mod console;
pub mod render;
