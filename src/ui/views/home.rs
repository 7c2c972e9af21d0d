use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
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
        util::summary_line,
    },
};

pub struct Home {
    videos: Vec<VideoSummary>,
    search: String,
    is_editing: bool,
    show_banner: bool,
    status: ApiStatus,
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            videos: vec![],
            search: String::new(),
            is_editing: false,
            show_banner: true,
            status: ApiStatus::Initial,
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }
}

impl Drop for Home {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

impl Home {
    fn begin_fetch(&mut self, ctx: &AppContext) {
        self.status = ApiStatus::InProgress;

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let search = self.search.clone();

        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.fetch_handle = Some(tokio::spawn(async move {
            match api.fetch_home_videos(&search).await {
                Ok(videos) => {
                    let _ = tx.send(Event::HomeVideosFetched(videos));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        }));
    }
}

#[async_trait]
impl View for Home {
    fn route(&self) -> Route {
        Route::Home
    }

    async fn on_mount(&mut self, ctx: &AppContext) {
        self.begin_fetch(ctx);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::HomeVideosFetched(videos) => {
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

        let (banner_area, search_area, body_area) = if self.show_banner {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(1),
                ])
                .split(area);
            (Some(chunks[0]), chunks[1], chunks[2])
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(area);
            (None, chunks[0], chunks[1])
        };

        if let Some(banner_area) = banner_area {
            let banner_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary()));
            f.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(
                        "Buy tuitube Premium prepaid plans with UPI",
                        Style::default()
                            .fg(theme.text())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("   x dismiss", Style::default().fg(theme.muted())),
                ]))
                .block(banner_block),
                banner_area,
            );
        }

        let search_style = if self.is_editing {
            Style::default().fg(theme.primary())
        } else {
            Style::default().fg(theme.border())
        };
        let search_block = Block::default()
            .borders(Borders::ALL)
            .title("Search  (/)")
            .border_style(search_style);
        f.render_widget(
            Paragraph::new(self.search.clone())
                .style(Style::default().fg(theme.text()))
                .block(search_block),
            search_area,
        );

        match self.status {
            ApiStatus::Initial | ApiStatus::InProgress => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(theme.primary()))
                    .with_label("Loading videos...");
                f.render_widget(spinner, body_area);
            }
            ApiStatus::Failure => {
                f.render_widget(FailureNotice::new(theme), body_area);
            }
            ApiStatus::Success => {
                if self.videos.is_empty() {
                    let notice = Paragraph::new(vec![
                        Line::styled(
                            "No search results found",
                            Style::default()
                                .fg(theme.text())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Line::styled(
                            "Try different keywords or remove the search filter",
                            Style::default().fg(theme.muted()),
                        ),
                    ]);
                    f.render_widget(notice, body_area);
                    return;
                }

                let title_width = (body_area.width as usize).saturating_sub(40).max(20);
                let items: Vec<ListItem> = self
                    .videos
                    .iter()
                    .map(|video| ListItem::new(summary_line(video, theme, title_width)))
                    .collect();

                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .fg(theme.primary())
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                f.render_stateful_widget(list, body_area, &mut self.list_state);
            }
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            return match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Enter => {
                    self.is_editing = false;
                    self.begin_fetch(ctx);
                    Some(Action::None)
                }
                KeyCode::Esc => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    self.search.pop();
                    Some(Action::None)
                }
                _ => Some(Action::None),
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.is_editing = true;
                Some(Action::None)
            }
            KeyCode::Char('x') if self.show_banner => {
                self.show_banner = false;
                Some(Action::None)
            }
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
            KeyCode::Enter => {
                let selected = self
                    .list_state
                    .selected()
                    .and_then(|i| self.videos.get(i))
                    .map(|video| video.id.clone());
                selected.map(|id| Action::Navigate(Route::VideoDetail(id)))
            }
            _ => None,
        }
    }
}
