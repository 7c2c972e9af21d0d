use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::task::JoinHandle;

use crate::{
    event::events::Event,
    ui::{
        components::spinner::Spinner,
        context::AppContext,
        state::{ApiStatus, AppState, Route},
        traits::{Action, View},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Password,
}

pub struct Login {
    username: String,
    password: String,
    focus: Field,
    status: ApiStatus,
    error: Option<String>,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for Login {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: Field::Username,
            status: ApiStatus::Initial,
            error: None,
            fetch_handle: None,
        }
    }
}

impl Drop for Login {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

impl Login {
    fn submit(&mut self, ctx: &AppContext) {
        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return;
        }

        self.status = ApiStatus::InProgress;
        self.error = None;

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();
        let username = self.username.clone();
        let password = self.password.clone();

        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
        self.fetch_handle = Some(tokio::spawn(async move {
            match api.login(&username, &password).await {
                Ok(token) => {
                    let _ = tx.send(Event::LoggedIn(token));
                }
                Err(e) => {
                    let _ = tx.send(Event::LoginFailed(e.to_string()));
                }
            }
        }));
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}

#[async_trait]
impl View for Login {
    fn route(&self) -> Route {
        Route::Login
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::LoginFailed(message) => {
                if self.status == ApiStatus::InProgress {
                    self.status = ApiStatus::Failure;
                    self.error = Some(message.clone());
                }
            }
            Event::LoggedIn(_) => {
                if self.status == ApiStatus::InProgress {
                    self.status = ApiStatus::Success;
                }
            }
            _ => {}
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, _ctx: &AppContext) {
        let theme = state.theme;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(13),
                Constraint::Min(0),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(52),
                Constraint::Min(0),
            ])
            .split(rows[1]);
        let form = columns[1];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
            ])
            .split(form);

        f.render_widget(
            Paragraph::new(Line::styled(
                "▶ tuitube",
                Style::default()
                    .fg(theme.danger())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let field_style = |active: bool| {
            if active {
                Style::default().fg(theme.primary())
            } else {
                Style::default().fg(theme.border())
            }
        };

        let username_block = Block::default()
            .borders(Borders::ALL)
            .title("Username")
            .border_style(field_style(self.focus == Field::Username));
        f.render_widget(
            Paragraph::new(self.username.clone())
                .style(Style::default().fg(theme.text()))
                .block(username_block),
            chunks[1],
        );

        let masked = "•".repeat(self.password.chars().count());
        let password_block = Block::default()
            .borders(Borders::ALL)
            .title("Password")
            .border_style(field_style(self.focus == Field::Password));
        f.render_widget(
            Paragraph::new(masked)
                .style(Style::default().fg(theme.text()))
                .block(password_block),
            chunks[2],
        );

        if self.status == ApiStatus::InProgress {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(theme.primary()))
                .with_label("Signing in...");
            f.render_widget(spinner, chunks[3]);
        } else if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(Line::styled(
                    format!("*{error}"),
                    Style::default().fg(theme.danger()),
                ))
                .alignment(Alignment::Center),
                chunks[3],
            );
        }

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Tab switch field · Enter sign in · Ctrl-C quit",
                Style::default().fg(theme.muted()),
            )))
            .alignment(Alignment::Center),
            chunks[4],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        // a submit in flight ignores everything but Ctrl-C (handled upstream)
        if self.status == ApiStatus::InProgress {
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Field::Username => Field::Password,
                    Field::Password => Field::Username,
                };
            }
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Char(c) => self.field_mut().push(c),
            KeyCode::Backspace => {
                self.field_mut().pop();
            }
            _ => {}
        }
        Some(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::offline_ctx;

    #[tokio::test]
    async fn submit_requires_both_fields_without_leaving_initial() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut login = Login::default();
        login.username = "rahul".to_string();
        login.submit(&ctx);

        assert_eq!(login.status, ApiStatus::Initial);
        assert!(login.error.is_some());
    }

    #[tokio::test]
    async fn failed_login_surfaces_the_api_message() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut login = Login::default();
        login.username = "rahul".to_string();
        login.password = "rahul@2021".to_string();
        login.submit(&ctx);
        assert_eq!(login.status, ApiStatus::InProgress);

        login
            .on_event(&Event::LoginFailed("Username is not found".into()), &ctx)
            .await;
        assert_eq!(login.status, ApiStatus::Failure);
        assert_eq!(login.error.as_deref(), Some("Username is not found"));
    }

    #[tokio::test]
    async fn stale_failure_does_not_touch_a_settled_form() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _rx) = offline_ctx(dir.path());

        let mut login = Login::default();
        login
            .on_event(&Event::LoginFailed("late error".into()), &ctx)
            .await;
        assert_eq!(login.status, ApiStatus::Initial);
        assert!(login.error.is_none());
    }
}
