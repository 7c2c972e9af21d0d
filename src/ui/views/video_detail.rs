use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::task::JoinHandle;

use crate::{
    event::events::Event,
    http::models::VideoDetails,
    ui::{
        components::{failure::FailureNotice, spinner::Spinner},
        context::AppContext,
        state::{ApiStatus, AppState, Route},
        traits::{Action, View},
    },
};

pub struct VideoDetail {
    id: String,
    details: Option<VideoDetails>,
    status: ApiStatus,
    is_liked: bool,
    is_disliked: bool,
    fetch_handle: Option<JoinHandle<()>>,
}

impl VideoDetail {
    pub fn new(id: String) -> Self {
        Self {
            id,
            details: None,
            status: ApiStatus::Initial,
            is_liked: false,
            is_disliked: false,
            fetch_handle: None,
        }
    }

    fn begin_fetch(&mut self, ctx: &AppContext) {
        self.status = ApiStatus::InProgress;

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let id = self.id.clone();

        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.fetch_handle = Some(tokio::spawn(async move {
            match api.fetch_video_details(&id).await {
                Ok(details) => {
                    let _ = tx.send(Event::VideoDetailsFetched(details));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        }));
    }
}

impl Drop for VideoDetail {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for VideoDetail {
    fn route(&self) -> Route {
        Route::VideoDetail(self.id.clone())
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.begin_fetch(ctx);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::VideoDetailsFetched(details) => {
                if self.status == ApiStatus::InProgress && details.id == self.id {
                    self.details = Some(details.clone());
                    self.status = ApiStatus::Success;
                }
            }
            Event::FetchError(_) => {
                if self.status == ApiStatus::InProgress {
                    self.status = ApiStatus::Failure;
                }
            }
            _ => {}
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = state.theme;

        match self.status {
            ApiStatus::Initial | ApiStatus::InProgress => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(theme.primary()))
                    .with_label("Loading video...");
                f.render_widget(spinner, area);
                return;
            }
            ApiStatus::Failure => {
                f.render_widget(FailureNotice::new(theme), area);
                return;
            }
            ApiStatus::Success => {}
        }

        let Some(details) = &self.details else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let title_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()));
        f.render_widget(
            Paragraph::new(Span::styled(
                details.title.clone(),
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ))
            .block(title_block),
            chunks[0],
        );

        f.render_widget(
            Paragraph::new(Line::styled(
                format!("{} views · {}", details.view_count, details.published_at),
                Style::default().fg(theme.muted()),
            )),
            chunks[1],
        );

        let button = |label: &str, active: bool| {
            Span::styled(
                format!("[{label}]  "),
                if active {
                    Style::default()
                        .fg(theme.primary())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted())
                },
            )
        };
        let is_saved = state.saved.contains(&self.id);
        let actions = Line::from(vec![
            button("l Like", self.is_liked),
            button("d Dislike", self.is_disliked),
            button(if is_saved { "s Saved" } else { "s Save" }, is_saved),
        ]);
        f.render_widget(Paragraph::new(actions), chunks[2]);

        let subscribers = details
            .channel
            .subscriber_count
            .clone()
            .unwrap_or_else(|| "?".to_string());
        let channel_block = Block::default()
            .borders(Borders::ALL)
            .title("Channel")
            .border_style(Style::default().fg(theme.border()));
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    details.channel.name.clone(),
                    Style::default().fg(theme.text()),
                ),
                Span::styled(
                    format!("  ·  {subscribers} subscribers"),
                    Style::default().fg(theme.muted()),
                ),
            ]))
            .block(channel_block),
            chunks[3],
        );

        f.render_widget(
            Paragraph::new(details.description.clone())
                .style(Style::default().fg(theme.text()))
                .wrap(Wrap { trim: true }),
            chunks[4],
        );

        f.render_widget(
            Paragraph::new(Line::styled(
                format!("watch: {}", details.video_url),
                Style::default().fg(theme.muted()),
            )),
            chunks[5],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Char('r') if self.status == ApiStatus::Failure => {
                self.begin_fetch(ctx);
                Some(Action::None)
            }
            KeyCode::Char('l') if self.details.is_some() => {
                self.is_liked = true;
                self.is_disliked = false;
                Some(Action::None)
            }
            KeyCode::Char('d') if self.details.is_some() => {
                self.is_disliked = true;
                self.is_liked = false;
                Some(Action::None)
            }
            KeyCode::Char('s') => self
                .details
                .clone()
                .map(|details| Action::ToggleSave(Box::new(details))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Channel;
    use crate::ui::views::test_support::offline_ctx;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn details(id: &str) -> VideoDetails {
        VideoDetails {
            id: id.to_string(),
            title: "title".to_string(),
            thumbnail_url: String::new(),
            video_url: "https://example.com/watch".to_string(),
            description: "description".to_string(),
            view_count: "1K".to_string(),
            published_at: "Jan 1, 2021".to_string(),
            channel: Channel {
                name: "channel".to_string(),
                profile_image_url: String::new(),
                subscriber_count: Some("1M".to_string()),
            },
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[tokio::test]
    async fn only_matching_ids_settle_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut view = VideoDetail::new("abc".to_string());
        view.on_mount(&ctx).await;
        assert_eq!(view.status, ApiStatus::InProgress);

        view.on_event(&Event::VideoDetailsFetched(details("other")), &ctx)
            .await;
        assert_eq!(view.status, ApiStatus::InProgress);

        view.on_event(&Event::VideoDetailsFetched(details("abc")), &ctx)
            .await;
        assert_eq!(view.status, ApiStatus::Success);
    }

    #[tokio::test]
    async fn like_and_dislike_are_mutually_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());
        let state = AppState::default();

        let mut view = VideoDetail::new("abc".to_string());
        view.details = Some(details("abc"));
        view.status = ApiStatus::Success;

        view.handle_input(key(KeyCode::Char('l')), &state, &ctx).await;
        assert!(view.is_liked && !view.is_disliked);

        view.handle_input(key(KeyCode::Char('d')), &state, &ctx).await;
        assert!(view.is_disliked && !view.is_liked);
    }

    #[tokio::test]
    async fn save_key_hands_the_record_to_the_shared_list() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());
        let state = AppState::default();

        let mut view = VideoDetail::new("abc".to_string());
        view.details = Some(details("abc"));
        view.status = ApiStatus::Success;

        let action = view.handle_input(key(KeyCode::Char('s')), &state, &ctx).await;
        match action {
            Some(Action::ToggleSave(saved)) => assert_eq!(saved.id, "abc"),
            other => panic!("expected ToggleSave, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_before_details_arrive_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());
        let state = AppState::default();

        let mut view = VideoDetail::new("abc".to_string());
        let action = view.handle_input(key(KeyCode::Char('s')), &state, &ctx).await;
        assert_eq!(action, None);
    }
}
