//! Fetched-media preview card

use crate::extractor::{MediaDescriptor, MediaKind};
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Theme};

/// Render a preview card for a fetched piece of media, with the
/// download action.
pub fn media_card(media: &MediaDescriptor) -> Element<'static, Message> {
    let kind_glyph = match media.kind {
        MediaKind::Video => "▶",
        MediaKind::Image => "◻",
        MediaKind::Carousel => "❏",
    };

    let title_row = row![
        text(kind_glyph).size(20).style(iced::theme::Text::Color(theme::ACCENT)),
        text(media.title.clone())
            .size(16)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        Space::with_width(Length::Fill),
        container(
            text(media.resolution.clone())
                .size(12)
                .style(iced::theme::Text::Color(theme::TEXT_SECONDARY))
        )
        .padding([4, 10])
        .style(iced::theme::Container::Custom(Box::new(TagStyle))),
    ]
    .spacing(12)
    .align_items(Alignment::Center);

    let meta_text = match &media.duration {
        Some(duration) => format!("{} • {}", media.kind.label(), duration),
        None => media.kind.label().to_string(),
    };

    let source_row = row![
        text(meta_text)
            .size(12)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        Space::with_width(Length::Fill),
        text(media.source_url.clone())
            .size(12)
            .style(iced::theme::Text::Color(theme::GRAY_400)),
    ]
    .align_items(Alignment::Center);

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("Download").size(14))
            .on_press(Message::DownloadPressed)
            .padding([10, 24])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ];

    let content = column![title_row, source_row, actions]
        .spacing(12)
        .width(Length::Fill);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::GlassContainer,
        )))
        .into()
}

struct TagStyle;

impl iced::widget::container::StyleSheet for TagStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            text_color: Some(theme::TEXT_SECONDARY),
            background: Some(Background::Color(theme::GRAY_100)),
            border: Border {
                color: theme::GRAY_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}
