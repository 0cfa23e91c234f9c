//! # File I/O Module
//!
//! The only files this crate touches:
//! - **PDF export**: atomic write of rendered report bytes
//! - **Form input**: a JSON object keyed by field label, read by the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{export_pdf, pdf_path_for};
//! use calc_core::session::DesignSession;
//! use std::path::Path;
//!
//! let session = DesignSession::new();
//! if let Some(path) = pdf_path_for("tension-member", Path::new(".")) {
//!     export_pdf(&session, &path)?;
//! }
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{CalcError, CalcResult};
use crate::form::DesignForm;
use crate::pdf::render_design_pdf;
use crate::session::DesignSession;

/// Resolve the PDF path for a user-supplied file name.
///
/// The name is trimmed. A blank name means the export was cancelled and
/// yields `None`. `.pdf` is appended unless the name already ends with it
/// (any case).
///
/// ```rust
/// use calc_core::file_io::pdf_path_for;
/// use std::path::Path;
///
/// let dir = Path::new("out");
/// assert_eq!(pdf_path_for(" report ", dir), Some(dir.join("report.pdf")));
/// assert_eq!(pdf_path_for("report.PDF", dir), Some(dir.join("report.PDF")));
/// assert_eq!(pdf_path_for("   ", dir), None);
/// ```
pub fn pdf_path_for(name: &str, dir: &Path) -> Option<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if name.to_ascii_lowercase().ends_with(".pdf") {
        Some(dir.join(name))
    } else {
        Some(dir.join(format!("{}.pdf", name)))
    }
}

/// Write bytes to a file with atomic write semantics.
///
/// The write process:
/// 1. Write to a temporary file next to the target (`.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
///
/// An interrupted export never leaves a truncated PDF behind.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Render the session's preview and write it to `path`.
pub fn export_pdf(session: &DesignSession, path: &Path) -> CalcResult<()> {
    let bytes = render_design_pdf(session)?;
    write_pdf(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "exported design PDF");
    Ok(())
}

/// Load form values from a JSON file keyed by field label.
///
/// ```json
/// {
///   "Number of Bolts": "2",
///   "Bolt Diameter (mm)": "8",
///   "Length (mm)": "2000",
///   "Yield Strength, Fy (MPa)": "250"
/// }
/// ```
pub fn load_form(path: &Path) -> CalcResult<DesignForm> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    parse_form_json(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), reason),
        },
        other => other,
    })
}

/// Parse form values from JSON text.
///
/// Unknown labels and choice values that are not among a field's options
/// are reported as input errors rather than JSON errors.
pub fn parse_form_json(json: &str) -> CalcResult<DesignForm> {
    let map: std::collections::BTreeMap<String, String> = serde_json::from_str(json)?;
    DesignForm::try_from(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;
    use tempfile::TempDir;

    #[test]
    fn test_pdf_path_for() {
        let dir = Path::new("/tmp/reports");
        assert_eq!(pdf_path_for("design", dir), Some(dir.join("design.pdf")));
        assert_eq!(pdf_path_for("  design  ", dir), Some(dir.join("design.pdf")));
        assert_eq!(pdf_path_for("design.pdf", dir), Some(dir.join("design.pdf")));
        assert_eq!(pdf_path_for("design.v2", dir), Some(dir.join("design.v2.pdf")));
        assert_eq!(pdf_path_for("", dir), None);
        assert_eq!(pdf_path_for(" \t ", dir), None);
    }

    #[test]
    fn test_write_pdf_replaces_atomically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.pdf");

        write_pdf(&path, b"%PDF-first").unwrap();
        write_pdf(&path, b"%PDF-second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"%PDF-second");
        assert!(!dir.path().join("out.pdf.tmp").exists());
    }

    #[test]
    fn test_write_pdf_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.pdf");

        let err = write_pdf(&path, b"%PDF").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_export_pdf() {
        let dir = TempDir::new().unwrap();
        let path = pdf_path_for("report", dir.path()).unwrap();

        let mut session = DesignSession::new();
        session.form.set(FieldId::Length, "1200");
        export_pdf(&session, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_load_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.json");
        fs::write(
            &path,
            r#"{ "Number of Bolts": "4", "Hole Type": "Oversized" }"#,
        )
        .unwrap();

        let form = load_form(&path).unwrap();
        assert_eq!(form.get(FieldId::NumberOfBolts), "4");
        assert_eq!(form.get(FieldId::HoleType), "Oversized");
    }

    #[test]
    fn test_load_form_errors() {
        let dir = TempDir::new().unwrap();

        let err = load_form(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_form(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = parse_form_json(r#"{ "Bolt Colour": "Red" }"#).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }
}
