//! Main view implementation

use crate::gui::app::Message;
use crate::gui::components::{media_card, url_input};
use crate::gui::theme;
use crate::platform::Platform;
use crate::session::{SessionPhase, SessionState};
use iced::widget::{column, container, text, Space};
use iced::{Element, Length};

/// Create the main view from the current session state.
pub fn main_view(state: &SessionState, notice: Option<&str>) -> Element<'static, Message> {
    let phase = state.phase();

    let input = url_input(
        &state.raw_input,
        Message::UrlInputChanged,
        Message::PasteFromClipboard,
        Message::ClearUrlInput,
        phase == SessionPhase::Invalid,
        state.error.as_deref(),
    );

    let status: Element<'static, Message> = match phase {
        SessionPhase::Idle => text(format!(
            "Paste a link from {} to get started.",
            Platform::supported_names().join(", ")
        ))
        .size(14)
        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY))
        .into(),

        SessionPhase::Pending => text("Processing link...")
            .size(14)
            .style(iced::theme::Text::Color(theme::ACCENT))
            .into(),

        SessionPhase::Ready => match &state.result {
            Some(media) => media_card(media),
            None => Space::with_height(0).into(),
        },

        // Invalid shows only the input border; Unsupported and Failed
        // already surface their message under the input.
        SessionPhase::Invalid | SessionPhase::Unsupported | SessionPhase::Failed => {
            Space::with_height(0).into()
        }
    };

    let mut content = column![
        text("Snapgrab")
            .size(30)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        text("Save posts from your favorite platforms")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        Space::with_height(12),
        input,
        status,
    ]
    .spacing(16)
    .max_width(640);

    if let Some(notice) = notice {
        content = content.push(
            text(notice.to_string())
                .size(12)
                .style(iced::theme::Text::Color(theme::DANGER)),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .padding(40)
        .into()
}
