//! # Cleat GUI Application
//!
//! Desktop form for the bolted tension member checks. Built with Iced.
//!
//! The window shows the four field groups, a results panel, and two
//! actions: "Check Design" runs the checks and reports them in a dialog,
//! "Preview" shows the preview text and offers a PDF export.

mod ui;

use std::path::PathBuf;

use iced::widget::{column, row, stack, Space};
use iced::{Element, Length, Task, Theme};
use tracing::{info, warn};

use calc_core::errors::INPUT_ERROR_MESSAGE;
use calc_core::file_io::{export_pdf, pdf_path_for};
use calc_core::form::FieldId;
use calc_core::preview::confirmation_text;
use calc_core::DesignSession;

use ui::modal::ModalType;

/// Environment variable naming the directory PDFs are written into
const OUTPUT_DIR_ENV: &str = "CLEAT_OUTPUT_DIR";

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1000.0, 820.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Form
    FieldChanged(FieldId, String),
    ResetForm,

    // Actions
    CheckDesign,
    ShowPreview,

    // Dialogs
    ExportAnswered(bool),
    PdfNameChanged(String),
    PdfNameSubmitted,
    PdfNameCanceled,
    ModalDismiss,

    // Settings
    ToggleDarkMode,
}

pub struct App {
    pub session: DesignSession,
    /// Open dialog, if any
    pub modal: Option<ModalType>,
    /// File name typed into the save prompt
    pub pdf_name: String,
    /// PDFs are written relative to this directory
    pub output_dir: PathBuf,
    pub dark_mode: bool,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            session: DesignSession::new(),
            modal: None,
            pdf_name: String::new(),
            output_dir: std::env::var_os(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_default(),
            dark_mode: false,
            status: "Ready".to_string(),
        }
    }
}

impl App {
    fn new() -> Self {
        Self::default()
    }

    fn title(&self) -> String {
        "Cleat - Bolted Tension Member Check".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.session.form.set(field, value);
            }
            Message::ResetForm => {
                self.session.reset();
                self.status = "Form cleared".to_string();
            }
            Message::CheckDesign => self.check_design(),
            Message::ShowPreview => {
                let preview = self.session.preview_text();
                self.modal = Some(ModalType::ExportConfirm {
                    text: confirmation_text(&preview),
                });
            }
            Message::ExportAnswered(true) => {
                self.pdf_name.clear();
                self.modal = Some(ModalType::PdfNamePrompt);
            }
            Message::ExportAnswered(false) | Message::ModalDismiss => {
                self.modal = None;
            }
            Message::PdfNameChanged(name) => {
                self.pdf_name = name;
            }
            Message::PdfNameSubmitted => self.export_pdf(),
            Message::PdfNameCanceled => self.export_canceled(),
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn check_design(&mut self) {
        match self.session.run_checks() {
            Ok(result) => {
                let summary = result.summary_text();
                self.status = if result.passes() {
                    "All checks pass".to_string()
                } else {
                    format!("{} check(s) failing", result.failing().len())
                };
                self.modal = Some(ModalType::notice("Design Check Results", summary));
            }
            Err(e) if e.is_input_error() => {
                warn!(error = %e, "check rejected");
                self.status = e.to_string();
                self.modal = Some(ModalType::notice("Input Error", INPUT_ERROR_MESSAGE));
            }
            Err(e) => {
                self.status = e.to_string();
                self.modal = Some(ModalType::notice("Error", e.to_string()));
            }
        }
    }

    fn export_pdf(&mut self) {
        let Some(path) = pdf_path_for(&self.pdf_name, &self.output_dir) else {
            self.export_canceled();
            return;
        };

        match export_pdf(&self.session, &path) {
            Ok(()) => {
                info!(path = %path.display(), "PDF exported from GUI");
                self.status = format!("Exported {}", path.display());
                self.modal = Some(ModalType::notice(
                    "PDF Generated",
                    format!("PDF saved as {}", path.display()),
                ));
            }
            Err(e) => {
                warn!(error = %e, "PDF export failed");
                self.status = "Export failed".to_string();
                self.modal = Some(ModalType::notice("Export Failed", e.to_string()));
            }
        }
    }

    fn export_canceled(&mut self) {
        self.status = "Export canceled".to_string();
        self.modal = Some(ModalType::notice("Canceled", "PDF generation was canceled."));
    }

    fn view(&self) -> Element<'_, Message> {
        let body = row![
            ui::input_panel::view_input_panel(&self.session.form),
            Space::new().width(12),
            ui::results_panel::view_results_panel(&self.session),
        ]
        .height(Length::Fill);

        let main = column![
            ui::toolbar::view_header_owned(self.title()),
            ui::toolbar::view_toolbar(self.dark_mode),
            body,
            ui::status_bar::view_status_bar(&self.status, self.session.is_checked()),
        ]
        .spacing(6)
        .padding(12);

        match &self.modal {
            Some(modal) => stack![
                main,
                ui::modal::view_backdrop(modal.dismiss_message()),
                ui::modal::view_modal(modal, &self.pdf_name),
            ]
            .into(),
            None => main.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_valid_inputs() -> App {
        let mut app = App::default();
        for (field, value) in [
            (FieldId::BoltDiameter, "8"),
            (FieldId::NumberOfBolts, "2"),
            (FieldId::Length, "2000"),
            (FieldId::YieldStrength, "250"),
        ] {
            let _ = app.update(Message::FieldChanged(field, value.to_string()));
        }
        app
    }

    fn notice(app: &App) -> Option<(&str, &str)> {
        match &app.modal {
            Some(ModalType::Notice { title, body }) => Some((title.as_str(), body.as_str())),
            _ => None,
        }
    }

    #[test]
    fn test_check_design_shows_results() {
        let mut app = app_with_valid_inputs();
        let _ = app.update(Message::CheckDesign);

        let (title, body) = notice(&app).unwrap();
        assert_eq!(title, "Design Check Results");
        assert!(body.contains("Edge Distance Check: Pass"));
        assert!(app.session.is_checked());
    }

    #[test]
    fn test_check_design_input_error() {
        let mut app = App::default();
        let _ = app.update(Message::CheckDesign);

        let (title, body) = notice(&app).unwrap();
        assert_eq!(title, "Input Error");
        assert_eq!(body, INPUT_ERROR_MESSAGE);
        assert!(!app.session.is_checked());
    }

    #[test]
    fn test_preview_flow_declined() {
        let mut app = app_with_valid_inputs();
        let _ = app.update(Message::ShowPreview);
        match &app.modal {
            Some(ModalType::ExportConfirm { text }) => {
                assert!(text.starts_with("Selected Design Parameters:"));
                assert!(text.ends_with("Do you want to generate a PDF?"));
            }
            other => panic!("unexpected modal: {:?}", other),
        }

        let _ = app.update(Message::ExportAnswered(false));
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_blank_name_cancels_export() {
        let mut app = app_with_valid_inputs();
        let _ = app.update(Message::ShowPreview);
        let _ = app.update(Message::ExportAnswered(true));
        assert!(matches!(app.modal, Some(ModalType::PdfNamePrompt)));

        let _ = app.update(Message::PdfNameChanged("   ".to_string()));
        let _ = app.update(Message::PdfNameSubmitted);
        assert_eq!(notice(&app), Some(("Canceled", "PDF generation was canceled.")));
    }

    #[test]
    fn test_cancel_button_cancels_export() {
        let mut app = app_with_valid_inputs();
        let _ = app.update(Message::ExportAnswered(true));
        let _ = app.update(Message::PdfNameCanceled);
        assert_eq!(notice(&app).map(|(t, _)| t), Some("Canceled"));
    }

    fn submit_pdf_name(app: &mut App, name: &str) {
        let _ = app.update(Message::ShowPreview);
        let _ = app.update(Message::ExportAnswered(true));
        let _ = app.update(Message::PdfNameChanged(name.to_string()));
        let _ = app.update(Message::PdfNameSubmitted);
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = app_with_valid_inputs();
        app.output_dir = dir.path().to_path_buf();
        let _ = app.update(Message::CheckDesign);

        submit_pdf_name(&mut app, "cleat_report");

        let expected = dir.path().join("cleat_report.pdf");
        let (title, body) = notice(&app).unwrap();
        assert_eq!(title, "PDF Generated");
        assert_eq!(body, format!("PDF saved as {}", expected.display()));
        assert!(std::fs::read(&expected).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = app_with_valid_inputs();
        app.output_dir = dir.path().join("does_not_exist");

        submit_pdf_name(&mut app, "cleat_report");

        assert_eq!(notice(&app).map(|(t, _)| t), Some("Export Failed"));
        assert_eq!(app.status, "Export failed");
        assert!(!app.output_dir.exists());
    }

    #[test]
    fn test_reset_clears_results() {
        let mut app = app_with_valid_inputs();
        let _ = app.update(Message::CheckDesign);
        let _ = app.update(Message::ResetForm);
        assert!(!app.session.is_checked());
        assert!(app.session.form.is_empty());
    }
}
