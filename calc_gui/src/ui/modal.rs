//! Modal dialog component
//!
//! Overlay dialogs for check results, the preview/export question, the PDF
//! file name prompt, and export outcome notices.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Types of modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalType {
    /// Titled message with a single OK button
    Notice { title: String, body: String },
    /// Preview text followed by the "generate a PDF?" question
    ExportConfirm { text: String },
    /// "Save PDF" file name prompt
    PdfNamePrompt,
}

impl ModalType {
    pub fn notice(title: impl Into<String>, body: impl Into<String>) -> Self {
        ModalType::Notice {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Message sent when the user clicks outside the dialog
    pub fn dismiss_message(&self) -> Message {
        match self {
            ModalType::Notice { .. } => Message::ModalDismiss,
            ModalType::ExportConfirm { .. } => Message::ExportAnswered(false),
            ModalType::PdfNamePrompt => Message::PdfNameCanceled,
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop(on_press: Message) -> Element<'static, Message> {
    button(Space::new())
        .on_press(on_press)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render a modal dialog based on its type
pub fn view_modal<'a>(modal_type: &'a ModalType, pdf_name: &'a str) -> Element<'a, Message> {
    match modal_type {
        ModalType::Notice { title, body } => view_notice_modal(title, body),
        ModalType::ExportConfirm { text } => view_export_confirm_modal(text),
        ModalType::PdfNamePrompt => view_pdf_name_modal(pdf_name),
    }
}

fn dialog_button(label: &str, message: Message, primary: bool) -> Element<'_, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([6, 16]))
        .style(if primary { button::primary } else { button::secondary })
        .into()
}

/// Center a dialog body in the window
fn centered<'a>(content: impl Into<Element<'a, Message>>, width: f32) -> Element<'a, Message> {
    let modal_box = container(container(content).width(Length::Fixed(width)))
        .padding(20)
        .style(container::bordered_box);

    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn view_notice_modal<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    let content = column![
        text(title).size(18),
        Space::new().height(12),
        text(body).size(12),
        Space::new().height(20),
        container(dialog_button("OK", Message::ModalDismiss, true))
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ];

    centered(content, 400.0)
}

fn view_export_confirm_modal(preview: &str) -> Element<'_, Message> {
    let buttons = row![
        dialog_button("No", Message::ExportAnswered(false), false),
        Space::new().width(8),
        dialog_button("Yes", Message::ExportAnswered(true), true),
    ]
    .align_y(Alignment::Center);

    let content = column![
        text("Preview").size(18),
        Space::new().height(12),
        scrollable(text(preview).size(12)).height(Length::Fixed(360.0)),
        Space::new().height(20),
        container(buttons)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ];

    centered(content, 460.0)
}

fn view_pdf_name_modal(pdf_name: &str) -> Element<'_, Message> {
    let buttons = row![
        dialog_button("Cancel", Message::PdfNameCanceled, false),
        Space::new().width(8),
        dialog_button("OK", Message::PdfNameSubmitted, true),
    ]
    .align_y(Alignment::Center);

    let content = column![
        text("Save PDF").size(18),
        Space::new().height(12),
        text("Enter a filename (without .pdf):").size(12),
        Space::new().height(6),
        text_input("", pdf_name)
            .on_input(Message::PdfNameChanged)
            .on_submit(Message::PdfNameSubmitted)
            .padding(4)
            .size(12),
        Space::new().height(20),
        container(buttons)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ];

    centered(content, 360.0)
}
