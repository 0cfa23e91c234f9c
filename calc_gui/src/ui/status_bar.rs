//! Status Bar (Bottom)
//!
//! Displays whether the design has been checked and the last status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str, checked: bool) -> Element<'_, Message> {
    let checked_info = if checked { "Checked" } else { "Not checked" };

    row![
        text(checked_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
