//! # PDF Generation Module
//!
//! Lays the preview text out on A4 pages using Typst.
//!
//! ## Architecture
//!
//! - Each preview line becomes one fixed-height Typst block
//! - Headings are bold 14pt, everything else 12pt
//! - Lines are inserted as string literals, so user text is never parsed as markup
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::pdf::render_design_pdf;
//! use calc_core::session::DesignSession;
//!
//! let session = DesignSession::new();
//! let pdf_bytes = render_design_pdf(&session).unwrap();
//! std::fs::write("design.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Local;
use once_cell::sync::Lazy;
use tracing::{debug, info};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{CalcError, CalcResult};
use crate::preview::{line_style, LineStyle};
use crate::session::DesignSession;

/// Left margin, in points
const LEFT_MARGIN_PT: f64 = 50.0;
/// Distance from the page top to the first line (A4 is 841.89pt tall,
/// the first baseline sits 800pt above the bottom edge)
const TOP_MARGIN_PT: f64 = 30.0;
const BOTTOM_MARGIN_PT: f64 = 40.0;
/// Vertical advance per line
const LINE_ADVANCE_PT: f64 = 20.0;
/// Extra gap after a heading
const HEADING_GAP_PT: f64 = 5.0;
const HEADING_SIZE_PT: f64 = 14.0;
const BODY_SIZE_PT: f64 = 12.0;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Bundled fonts, loaded once per process
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    let mut fonts = Vec::new();
    for font_bytes in typst_assets::fonts() {
        let buffer = Bytes::new(font_bytes.to_vec());
        for font in Font::iter(buffer) {
            fonts.push(font);
        }
    }
    debug!(count = fonts.len(), "loaded bundled fonts");
    fonts
});

static FONT_BOOK: Lazy<LazyHash<FontBook>> =
    Lazy::new(|| LazyHash::new(FontBook::from_fonts(FONTS.iter())));

/// A minimal Typst world for compiling a single in-memory document.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        PdfWorld {
            main: Source::detached(source),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONT_BOOK
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Local::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Typst Source
// ============================================================================

/// Quote text as a Typst string literal
fn typst_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' | '\n' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Build the Typst document for a block of preview text.
pub fn preview_typst_source(text: &str) -> String {
    let mut source = format!(
        r##"#set document(title: "Design Check Report")
#set page(
  paper: "a4",
  margin: (left: {left}pt, right: {left}pt, top: {top}pt, bottom: {bottom}pt),
)
#set text(font: "Libertinus Serif")
"##,
        left = LEFT_MARGIN_PT,
        top = TOP_MARGIN_PT,
        bottom = BOTTOM_MARGIN_PT,
    );

    for line in text.split('\n') {
        let line = line.trim();
        let (height, size, weight) = match line_style(line) {
            LineStyle::Heading => (LINE_ADVANCE_PT + HEADING_GAP_PT, HEADING_SIZE_PT, "bold"),
            LineStyle::Body => (LINE_ADVANCE_PT, BODY_SIZE_PT, "regular"),
        };

        if line.is_empty() {
            source.push_str(&format!(
                "#block(height: {}pt, above: 0pt, below: 0pt)\n",
                height
            ));
        } else {
            source.push_str(&format!(
                "#block(height: {}pt, above: 0pt, below: 0pt)[#text(size: {}pt, weight: \"{}\")[#{}]]\n",
                height,
                size,
                weight,
                typst_string(line),
            ));
        }
    }

    source
}

// ============================================================================
// PDF Rendering Functions
// ============================================================================

fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("typst compile", error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::render_failed("pdf export", error_msgs.join("; "))
    })?;

    Ok(pdf_bytes)
}

/// Render preview text to PDF.
///
/// # Arguments
///
/// * `text` - Preview text as produced by [`crate::preview::build_preview`]
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::RenderFailed)` - If Typst compilation or PDF export fails
pub fn render_preview_pdf(text: &str) -> CalcResult<Vec<u8>> {
    let source = preview_typst_source(text);
    let pdf_bytes = compile_pdf(source)?;
    info!(bytes = pdf_bytes.len(), "rendered design report");
    Ok(pdf_bytes)
}

/// Render the session's current preview (form entries plus results) to PDF.
pub fn render_design_pdf(session: &DesignSession) -> CalcResult<Vec<u8>> {
    render_preview_pdf(&session.preview_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;

    #[test]
    fn test_typst_string_escapes() {
        assert_eq!(typst_string("plain"), "\"plain\"");
        assert_eq!(typst_string("a \"b\" \\c"), "\"a \\\"b\\\" \\\\c\"");
        assert_eq!(typst_string("#set $x$ *y*"), "\"#set $x$ *y*\"");
    }

    #[test]
    fn test_source_styles_headings() {
        let source = preview_typst_source("Selected Design Parameters:\nLength (mm): 2000\n\nDesign Check Results:");
        let blocks: Vec<&str> = source.lines().filter(|l| l.starts_with("#block")).collect();
        assert_eq!(blocks.len(), 4);
        assert!(blocks[0].contains("height: 25pt"));
        assert!(blocks[0].contains("size: 14pt, weight: \"bold\""));
        assert!(blocks[1].contains("height: 20pt"));
        assert!(blocks[1].contains("size: 12pt, weight: \"regular\""));
        assert!(blocks[1].contains("\"Length (mm): 2000\""));
        // Blank line still advances
        assert_eq!(blocks[2], "#block(height: 20pt, above: 0pt, below: 0pt)");
        assert!(blocks[3].contains("weight: \"bold\""));
    }

    #[test]
    fn test_source_trims_lines() {
        let source = preview_typst_source("   Spacing Check: Fail   ");
        assert!(source.contains("[#\"Spacing Check: Fail\"]"));
    }

    #[test]
    fn test_pdf_generation() {
        let mut session = DesignSession::new();
        session.form.set(FieldId::BoltDiameter, "8");
        session.form.set(FieldId::NumberOfBolts, "2");
        session.form.set(FieldId::Length, "2000");
        session.form.set(FieldId::YieldStrength, "250");
        session.form.set(FieldId::BoltType, "Friction Grip Bolt");
        session.run_checks().unwrap();

        let pdf = render_design_pdf(&session);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_markup_characters_survive() {
        let pdf = render_preview_pdf("Selected Design Parameters:\nNote: *bold* #hash $math$ [x] // y");
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
    }

    #[test]
    fn test_long_preview_flows_to_more_pages() {
        let text = (0..80)
            .map(|i| format!("Line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let pdf = render_preview_pdf(&text).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
