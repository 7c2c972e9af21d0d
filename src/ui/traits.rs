use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    http::models::VideoDetails,
    ui::{
        context::AppContext,
        state::{AppState, Route},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Back,
    Navigate(Route),
    ToggleTheme,
    ToggleSave(Box<VideoDetails>),
    Logout,
    None,
}

/// One routed screen. Views own their fetched data and request status;
/// cross-view values live in `AppState` and arrive by reference.
#[async_trait]
pub trait View: Send {
    fn route(&self) -> Route;

    /// Called once when the view enters the router; fetching views kick off
    /// their request here.
    async fn on_mount(&mut self, _ctx: &AppContext) {}

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    /// `Some` consumes the key (possibly with an action for the app);
    /// `None` lets the global key map have it.
    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;
}
