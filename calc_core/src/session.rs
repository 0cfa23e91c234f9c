//! # Design Session
//!
//! The form together with the outcome of the last successful check. Both
//! front ends drive one of these; nothing outlives the process.
//!
//! ```rust
//! use calc_core::form::FieldId;
//! use calc_core::session::DesignSession;
//!
//! let mut session = DesignSession::new();
//! assert_eq!(session.results_text(), "Haven't been checked yet");
//!
//! session.form.set(FieldId::BoltDiameter, "8");
//! session.form.set(FieldId::NumberOfBolts, "2");
//! session.form.set(FieldId::Length, "2000");
//! session.form.set(FieldId::YieldStrength, "250");
//! session.run_checks().unwrap();
//! assert!(session.is_checked());
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checks::{check_design, DesignCheckResult};
use crate::errors::CalcResult;
use crate::form::DesignForm;
use crate::preview::{build_preview, NOT_CHECKED};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSession {
    pub form: DesignForm,
    /// Latest successful check, `None` until one succeeds
    pub results: Option<DesignCheckResult>,
}

impl DesignSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-filled form
    pub fn with_form(form: DesignForm) -> Self {
        DesignSession { form, results: None }
    }

    pub fn is_checked(&self) -> bool {
        self.results.is_some()
    }

    /// Validate the form and run the checks.
    ///
    /// On success the results replace any earlier ones. On a validation
    /// error the earlier results are kept.
    pub fn run_checks(&mut self) -> CalcResult<&DesignCheckResult> {
        let result = check_design(&self.form)?;
        info!(passes = result.passes(), "design checked");
        Ok(&*self.results.insert(result))
    }

    /// Summary of the latest results, or the not-checked notice
    pub fn results_text(&self) -> String {
        match &self.results {
            Some(results) => results.summary_text(),
            None => NOT_CHECKED.to_string(),
        }
    }

    pub fn preview_text(&self) -> String {
        build_preview(&self.form, self.results.as_ref())
    }

    /// Clear the form and forget any results
    pub fn reset(&mut self) {
        self.form.clear();
        self.results = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;

    fn valid_session() -> DesignSession {
        let mut session = DesignSession::new();
        session.form.set(FieldId::BoltDiameter, "8");
        session.form.set(FieldId::NumberOfBolts, "2");
        session.form.set(FieldId::Length, "2000");
        session.form.set(FieldId::YieldStrength, "250");
        session
    }

    #[test]
    fn test_failed_check_keeps_previous_results() {
        let mut session = valid_session();
        session.run_checks().unwrap();
        let before = session.results.clone();

        session.form.set(FieldId::Length, "long");
        assert!(session.run_checks().is_err());
        assert_eq!(session.results, before);
        assert!(session.is_checked());
    }

    #[test]
    fn test_failed_first_check_leaves_unchecked() {
        let mut session = DesignSession::new();
        assert!(session.run_checks().is_err());
        assert!(!session.is_checked());
        assert!(session.preview_text().ends_with(NOT_CHECKED));
    }

    #[test]
    fn test_results_text() {
        let mut session = valid_session();
        assert_eq!(session.results_text(), NOT_CHECKED);
        session.run_checks().unwrap();
        assert!(session.results_text().starts_with("Edge Distance Check: Pass"));
    }

    #[test]
    fn test_reset() {
        let mut session = valid_session();
        session.run_checks().unwrap();
        session.reset();
        assert!(!session.is_checked());
        assert!(session.form.is_empty());
    }
}
