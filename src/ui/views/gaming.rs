use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};
use tokio::task::JoinHandle;

use crate::{
    event::events::Event,
    http::models::VideoSummary,
    ui::{
        components::{failure::FailureNotice, spinner::Spinner},
        context::AppContext,
        state::{ApiStatus, AppState, Route},
        traits::{Action, View},
        util::truncate_to_width,
    },
};

pub struct Gaming {
    videos: Vec<VideoSummary>,
    status: ApiStatus,
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Gaming {
    fn default() -> Self {
        Self {
            videos: vec![],
            status: ApiStatus::Initial,
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }
}

impl Drop for Gaming {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

impl Gaming {
    fn begin_fetch(&mut self, ctx: &AppContext) {
        self.status = ApiStatus::InProgress;

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();

        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.fetch_handle = Some(tokio::spawn(async move {
            match api.fetch_gaming_videos().await {
                Ok(videos) => {
                    let _ = tx.send(Event::GamingVideosFetched(videos));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        }));
    }
}

#[async_trait]
impl View for Gaming {
    fn route(&self) -> Route {
        Route::Gaming
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.begin_fetch(ctx);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::GamingVideosFetched(videos) => {
                if self.status == ApiStatus::InProgress {
                    self.videos = videos.clone();
                    self.status = ApiStatus::Success;
                    self.list_state
                        .select((!self.videos.is_empty()).then_some(0));
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
                    .with_label("Loading gaming videos...");
                f.render_widget(spinner, area);
            }
            ApiStatus::Failure => f.render_widget(FailureNotice::new(theme), area),
            ApiStatus::Success => {
                // gaming entries carry no channel or date, just watchers
                let title_width = (area.width as usize).saturating_sub(24).max(20);
                let items: Vec<ListItem> = self
                    .videos
                    .iter()
                    .map(|video| {
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                truncate_to_width(&video.title, title_width),
                                Style::default().fg(theme.text()),
                            ),
                            Span::styled(
                                format!("  ·  {} watching worldwide", video.view_count),
                                Style::default().fg(theme.muted()),
                            ),
                        ]))
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .fg(theme.primary())
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
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
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.videos.is_empty() {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i + 1 < self.videos.len() {
                        self.list_state.select(Some(i + 1));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.videos.is_empty() {
                    let i = self.list_state.selected().unwrap_or(0);
                    if i > 0 {
                        self.list_state.select(Some(i - 1));
                    }
                }
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| self.videos.get(i))
                .map(|video| Action::Navigate(Route::VideoDetail(video.id.clone()))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::offline_ctx;

    #[tokio::test]
    async fn only_gaming_events_settle_this_view() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut gaming = Gaming::default();
        gaming.on_mount(&ctx).await;
        assert_eq!(gaming.status, ApiStatus::InProgress);

        gaming.on_event(&Event::HomeVideosFetched(vec![]), &ctx).await;
        gaming
            .on_event(&Event::TrendingVideosFetched(vec![]), &ctx)
            .await;
        assert_eq!(gaming.status, ApiStatus::InProgress);

        gaming
            .on_event(&Event::GamingVideosFetched(vec![]), &ctx)
            .await;
        assert_eq!(gaming.status, ApiStatus::Success);
    }

    #[tokio::test]
    async fn retry_after_failure_re_enters_in_progress() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut gaming = Gaming::default();
        gaming.on_mount(&ctx).await;
        gaming.on_event(&Event::FetchError("boom".into()), &ctx).await;
        assert_eq!(gaming.status, ApiStatus::Failure);

        gaming.begin_fetch(&ctx);
        assert_eq!(gaming.status, ApiStatus::InProgress);

        gaming
            .on_event(&Event::GamingVideosFetched(vec![]), &ctx)
            .await;
        assert_eq!(gaming.status, ApiStatus::Success);
    }
}
