//! UI-agnostic controllers for the HarPalJob admin dashboard.
//!
//! A front end drives a [`shell::Shell`], which mounts one screen at a time.
//! CRUD screens pair a generic [`list::ListController`] with a generic
//! [`form::FormController`]; the settings screens use the form controller
//! alone in update-in-place mode. Failures are logged, reported through a
//! [`notify::Notifier`], and returned to the caller for inspection.

pub mod error;
pub mod form;
pub mod list;
pub mod notify;
pub mod resource;
pub mod screens;
pub mod shell;

pub use error::{DashboardError, DashboardResult};
