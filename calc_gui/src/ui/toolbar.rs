//! Toolbar component
//!
//! Contains the form reset and the light/dark theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title (owned)
pub fn view_header_owned(window_title: String) -> Element<'static, Message> {
    row![
        text("Cleat").size(28),
        Space::new().width(Length::Fill),
        text(window_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar
pub fn view_toolbar(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        button(text("Reset Form").size(11))
            .on_press(Message::ResetForm)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
