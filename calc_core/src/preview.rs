//! # Preview Text
//!
//! Builds the plain-text summary shown before export and laid out in the PDF:
//!
//! ```text
//! Selected Design Parameters:
//! Length (mm): 2000
//! Bolt Diameter (mm): 12
//!
//! Design Check Results:
//! Edge Distance Check: Fail
//! ...
//! ```

use crate::checks::DesignCheckResult;
use crate::form::DesignForm;

pub const PARAMETERS_HEADING: &str = "Selected Design Parameters:";
pub const RESULTS_HEADING: &str = "Design Check Results:";

/// Shown in place of results until the checks have run successfully
pub const NOT_CHECKED: &str = "Haven't been checked yet";

/// Question appended to the preview in the confirmation dialog
pub const EXPORT_PROMPT: &str = "Do you want to generate a PDF?";

/// How a preview line is typeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
}

/// Classify a preview line. Any line mentioning one of the two section
/// headings is a heading.
pub fn line_style(line: &str) -> LineStyle {
    if line.contains(PARAMETERS_HEADING) || line.contains(RESULTS_HEADING) {
        LineStyle::Heading
    } else {
        LineStyle::Body
    }
}

/// Build the preview text from the form and the latest results, if any.
pub fn build_preview(form: &DesignForm, results: Option<&DesignCheckResult>) -> String {
    let mut text = format!("{}\n", PARAMETERS_HEADING);
    for (field, value) in form.selected_entries() {
        text.push_str(&format!("{}: {}\n", field.label(), value));
    }

    text.push('\n');
    text.push_str(RESULTS_HEADING);
    text.push('\n');
    match results {
        Some(results) => text.push_str(&results.summary_text()),
        None => text.push_str(NOT_CHECKED),
    }

    text
}

/// Preview text followed by the export question, as shown in the dialog.
pub fn confirmation_text(preview: &str) -> String {
    format!("{}\n\n{}", preview, EXPORT_PROMPT)
}
