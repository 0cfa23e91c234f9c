//! Interactive prompt session
//!
//! Walks the form section by section, then runs the checks, shows the
//! preview and offers a PDF export.

use std::io::{self, BufRead, Write};
use std::path::Path;

use calc_core::errors::INPUT_ERROR_MESSAGE;
use calc_core::file_io::{export_pdf, pdf_path_for};
use calc_core::form::{FieldKind, FormSection};
use calc_core::preview::EXPORT_PROMPT;
use calc_core::{CalcError, CalcResult, DesignSession};

fn write_err(e: io::Error) -> CalcError {
    CalcError::file_error("write", "stdout", e.to_string())
}

/// Print a prompt and read one trimmed line. End of input reads as blank.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> CalcResult<String> {
    write!(out, "{}", text).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
    Ok(line.trim().to_string())
}

fn field_prompt(label: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::FreeText { hint } => format!("{} ({}): ", label, hint),
        FieldKind::Choice { options } => format!("{} [{}]: ", label, options.join("/")),
    }
}

/// Run the whole session against the given input and output streams.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W, dir: &Path) -> CalcResult<()> {
    let mut session = DesignSession::new();

    writeln!(out, "Cleat - Bolted Tension Member Check").map_err(write_err)?;
    writeln!(out, "Leave a field blank to skip it.").map_err(write_err)?;

    for section in FormSection::ALL {
        writeln!(out).map_err(write_err)?;
        writeln!(out, "{}", section.title().trim_end()).map_err(write_err)?;

        for field in section.fields() {
            let text = field_prompt(field.label(), field.kind());
            loop {
                let value = prompt(&mut input, &mut out, &text)?;
                match session.form.set_by_label(field.label(), &value) {
                    Ok(_) => break,
                    Err(e) => writeln!(out, "  {}", e).map_err(write_err)?,
                }
            }
        }
    }

    writeln!(out).map_err(write_err)?;
    match session.run_checks() {
        Ok(result) => {
            writeln!(out, "Design Check Results:").map_err(write_err)?;
            writeln!(out, "{}", result.summary_text()).map_err(write_err)?;
        }
        Err(e) if e.is_input_error() => {
            writeln!(out, "Input Error: {}", INPUT_ERROR_MESSAGE).map_err(write_err)?;
        }
        Err(e) => return Err(e),
    }

    writeln!(out).map_err(write_err)?;
    writeln!(out, "{}", session.preview_text()).map_err(write_err)?;
    writeln!(out).map_err(write_err)?;

    let answer = prompt(&mut input, &mut out, &format!("{} [y/N]: ", EXPORT_PROMPT))?;
    if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
        return Ok(());
    }

    let name = prompt(&mut input, &mut out, "Enter a filename (without .pdf): ")?;
    match pdf_path_for(&name, dir) {
        Some(path) => {
            export_pdf(&session, &path)?;
            writeln!(out, "PDF saved as {}", path.display()).map_err(write_err)?;
        }
        None => writeln!(out, "PDF generation was canceled.").map_err(write_err)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// One answer per field in display order, then the export answers
    fn answers(fields: [&str; 16], tail: &[&str]) -> Cursor<Vec<u8>> {
        let mut text = fields.join("\n");
        for line in tail {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        Cursor::new(text.into_bytes())
    }

    const VALID: [&str; 16] = [
        "120", "2000", "Angles", "", "E 250", "", "250", "2", "8", "", "", "", "", "", "", "",
    ];

    #[test]
    fn test_session_without_export() {
        let mut out = Vec::new();
        run(answers(VALID, &["n"]), &mut out, Path::new(".")).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Edge Distance Check: Pass"));
        assert!(out.contains("Spacing Check: Fail"));
        assert!(out.contains("Section Profiles: Angles"));
        assert!(!out.contains("PDF saved"));
    }

    #[test]
    fn test_invalid_choice_is_reprompted() {
        let mut fields = VALID;
        fields[8] = "9";
        // "9" is rejected, the next line answers the same prompt again
        let mut text = fields[..9].join("\n");
        text.push_str("\n8\n");
        text.push_str(&fields[9..].join("\n"));
        text.push_str("\nn\n");

        let mut out = Vec::new();
        run(Cursor::new(text.into_bytes()), &mut out, Path::new(".")).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid input for 'Bolt Diameter (mm)'"));
        assert!(out.contains("Bolt Diameter (mm): 8"));
    }

    #[test]
    fn test_input_error_still_previews() {
        let mut fields = VALID;
        fields[1] = "";
        let mut out = Vec::new();
        run(answers(fields, &["n"]), &mut out, Path::new(".")).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(INPUT_ERROR_MESSAGE));
        assert!(out.contains("Haven't been checked yet"));
    }

    #[test]
    fn test_blank_filename_cancels() {
        let mut out = Vec::new();
        run(answers(VALID, &["y", "  "]), &mut out, Path::new(".")).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("PDF generation was canceled."));
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        run(answers(VALID, &["yes", "member"]), &mut out, dir.path()).unwrap();

        let path = dir.path().join("member.pdf");
        assert!(path.exists());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("PDF saved as"));
    }
}
