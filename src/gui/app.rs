//! Main GUI application
//!
//! The iced message loop drives the session machine: every keystroke
//! re-runs the derived pipeline via [`Session::set_input`], fetches ride
//! [`Command::perform`], and completions are applied through
//! [`Session::resolve_fetch`], which drops anything superseded.

use crate::download;
use crate::extractor::{MediaDescriptor, MediaExtractor, MockExtractor};
use crate::gui::clipboard;
use crate::gui::theme;
use crate::gui::views::main_view;
use crate::session::Session;
use crate::utils::AppSettings;
use chrono::Utc;
use iced::widget::container;
use iced::{Application, Command, Element, Length, Theme};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main application state
pub struct SnapgrabApp {
    session: Session,
    extractor: Arc<dyn MediaExtractor>,
    /// Transient host-side notices (clipboard/browser errors)
    notice: Option<String>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Fetch events
    FetchResolved(u64, Result<MediaDescriptor, String>),

    // Result actions
    DownloadPressed,
}

impl Application for SnapgrabApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        let settings = AppSettings::default();

        let app = Self {
            session: Session::new(),
            extractor: Arc::new(MockExtractor::new(settings.simulator)),
            notice: None,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Snapgrab - Social Media Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(raw) => {
                self.notice = None;

                if let Some(request) = self.session.set_input(raw) {
                    let extractor = Arc::clone(&self.extractor);
                    let token = request.token;
                    debug!(token, platform = request.platform.name(), "starting fetch");

                    return Command::perform(
                        async move {
                            extractor
                                .extract(&request.url, request.platform)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        move |outcome| Message::FetchResolved(token, outcome),
                    );
                }
                Command::none()
            }

            Message::PasteFromClipboard => match clipboard::get_clipboard_content() {
                // Pasted text runs through the same pipeline as typing.
                Ok(content) => self.update(Message::UrlInputChanged(content)),
                Err(e) => {
                    self.notice = Some(e);
                    Command::none()
                }
            },

            Message::ClearUrlInput => {
                self.session.reset();
                self.notice = None;
                Command::none()
            }

            Message::FetchResolved(token, outcome) => {
                if !self.session.resolve_fetch(token, outcome) {
                    debug!(token, "ignoring result from a superseded fetch");
                }
                Command::none()
            }

            Message::DownloadPressed => {
                let state = self.session.state();
                let handoff = match (state.result.as_ref(), state.platform) {
                    (Some(media), Some(platform)) => {
                        Some(download::download_request(media, platform, Utc::now()))
                    }
                    _ => None,
                };

                if let Some(request) = handoff {
                    info!(filename = %request.filename, "handing media off to the browser");
                    if let Err(e) = open::that(&request.target_url) {
                        warn!("failed to open browser: {}", e);
                        self.notice = Some(format!("Failed to open the link: {}", e));
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = main_view(self.session.state(), self.notice.as_deref());

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}
