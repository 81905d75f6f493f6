//! paydesk-core - Core library for Paydesk
//!
//! This crate contains the salary models, the REST data service, and the
//! framework-neutral list view state shared by every Paydesk interface
//! (desktop, CLI).

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod screen;
pub mod util;

pub use api::{SalariesClient, SalaryApi};
pub use controller::ScreenController;
pub use error::{Error, Result};
pub use models::{Link, SalaryDraft, SalaryEnvelope, SalaryId, SalaryRecord};
