use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::Route,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => {
                app.has_focus = false;
                return Ok(false);
            }
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            _ => {}
        }

        Ok(true)
    }

    pub async fn handle_app_event(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::LoggedIn(token) => {
                if let Err(e) = app.ctx.session.save(&token) {
                    warn!("failed to persist session: {e}");
                }
                app.update(AppMessage::NavigateTo(Route::Home)).await;
            }
            Event::FetchError(message) => {
                info!("request failed: {message}");
            }
            _ => {}
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl-C quits even while a view is swallowing keys for text entry
        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;
        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(message) = InputHandler::handle_key(evt) {
            app.update(message).await;
        }
    }

    async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Back => app.update(AppMessage::GoBack).await,
            Action::Navigate(route) => app.update(AppMessage::NavigateTo(route)).await,
            Action::ToggleTheme => app.update(AppMessage::ToggleTheme).await,
            Action::ToggleSave(video) => app.update(AppMessage::ToggleSave(video)).await,
            Action::Logout => app.update(AppMessage::Logout).await,
            Action::None => {}
        }
    }
}
