//! Input Panel (Left)
//!
//! One titled group per form section. Free-text fields are text inputs with
//! the typical range as placeholder; choice fields are pick lists that start
//! on "Select". The Check Design and Preview buttons sit at the bottom.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::form::{DesignForm, FieldId, FieldKind, FormSection, UNSELECTED};

use crate::Message;

const LABEL_WIDTH: f32 = 200.0;

/// Title above the action buttons
const PREVIEW_TITLE: &str = "Preview of Selected Parameters: ";

/// Render the input panel
pub fn view_input_panel(form: &DesignForm) -> Element<'_, Message> {
    let mut panel: Column<'_, Message> = column![].spacing(6);

    for section in FormSection::ALL {
        panel = panel
            .push(text(section.title()).size(14))
            .push(Space::new().height(2));
        for field in section.fields() {
            panel = panel.push(view_field(form, field));
        }
        panel = panel.push(Space::new().height(10));
    }

    let actions = column![
        text(PREVIEW_TITLE).size(14),
        Space::new().height(4),
        button(text("Check Design").size(12))
            .on_press(Message::CheckDesign)
            .padding(Padding::from([6, 16]))
            .width(Length::Fill)
            .style(button::primary),
        button(text("Preview").size(12))
            .on_press(Message::ShowPreview)
            .padding(Padding::from([6, 16]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(6);

    container(scrollable(panel.push(actions).padding(8)))
        .width(Length::FillPortion(60))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_field(form: &DesignForm, field: FieldId) -> Element<'_, Message> {
    let label = format!("{}:", field.label());
    let value = form.get(field);

    match field.kind() {
        FieldKind::FreeText { hint } => labeled_input(
            label,
            hint,
            value,
            move |s| Message::FieldChanged(field, s),
        ),
        FieldKind::Choice { options } => {
            let selected = options.iter().copied().find(|o| *o == value.trim());
            row![
                text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
                pick_list(options, selected, move |choice: &'static str| {
                    Message::FieldChanged(field, choice.to_string())
                })
                .placeholder(UNSELECTED)
                .width(Length::Fill)
                .text_size(11),
            ]
            .align_y(Alignment::Center)
            .into()
        }
    }
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: String,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
