//! # calc_core - Bolted Tension Member Design Checks
//!
//! `calc_core` holds everything the Cleat front ends share: the catalogue of
//! input fields, validation, the four pass/fail checks, the preview text and
//! PDF export. It has no UI dependencies.
//!
//! ## Design Philosophy
//!
//! - **Stateless checks**: Pure functions from form values to results
//! - **JSON-First**: Forms, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::form::FieldId;
//! use calc_core::session::DesignSession;
//!
//! let mut session = DesignSession::new();
//! session.form.set(FieldId::BoltDiameter, "12");
//! session.form.set(FieldId::NumberOfBolts, "3");
//! session.form.set(FieldId::Length, "2400");
//! session.form.set(FieldId::YieldStrength, "350");
//!
//! session.run_checks().unwrap();
//! println!("{}", session.preview_text());
//! ```
//!
//! ## Modules
//!
//! - [`form`] - Field catalogue and raw form values
//! - [`checks`] - Input parsing and the four checks
//! - [`session`] - Form plus latest results
//! - [`preview`] - Preview text shown before export
//! - [`pdf`] - Typst-based PDF rendering
//! - [`file_io`] - PDF file writes and JSON form input
//! - [`errors`] - Structured error types

pub mod checks;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod pdf;
pub mod preview;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use checks::{check_design, CheckKind, CheckOutcome, DesignCheckResult, DesignInput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{export_pdf, load_form, pdf_path_for, write_pdf};
pub use form::{DesignForm, FieldId, FieldKind, FormSection};
pub use session::DesignSession;
