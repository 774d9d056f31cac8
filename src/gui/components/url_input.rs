//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Create the URL input row with paste/clear buttons and an optional
/// message line.
///
/// `flagged` draws the error border even when there is no message text;
/// syntactically invalid input is indicated, never explained.
pub fn url_input(
    value: &str,
    on_change: impl Fn(String) -> Message + 'static,
    on_paste: Message,
    on_clear: Message,
    flagged: bool,
    message: Option<&str>,
) -> Element<'static, Message> {
    let error_border = flagged || message.is_some();

    let input_row = row![
        text_input("Paste a post URL here...", value)
            .on_input(on_change)
            .padding(15)
            .width(Length::Fill)
            .style(if error_border {
                iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
            } else {
                iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
            }),
        tooltip(
            button(text("Paste").size(14))
                .on_press(on_paste)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(on_clear)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    if let Some(message) = message {
        column![
            input_row,
            text(message.to_string())
                .size(14)
                .style(iced::theme::Text::Color(theme::DANGER)),
        ]
        .spacing(8)
        .into()
    } else {
        input_row.into()
    }
}
