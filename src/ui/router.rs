use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::{AppState, Route};
use crate::ui::traits::{Action, View};
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Decide what actually gets shown for a navigation target. Protected
/// routes bounce to the login screen without a session; a logged-in user
/// asking for login lands on home instead.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    match route {
        Route::Login if authenticated => Route::Home,
        route if route.is_protected() && !authenticated => Route::Login,
        route => route,
    }
}

pub struct Router {
    stack: Vec<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            stack: vec![initial_view],
        }
    }

    pub fn push(&mut self, view: Box<dyn View>) {
        self.stack.push(view);
    }

    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Drop everything and start over from `view`; sidebar navigation uses
    /// this so Esc never walks back through old tabs.
    pub fn reset(&mut self, view: Box<dyn View>) {
        self.stack.clear();
        self.stack.push(view);
    }

    pub fn active_view(&mut self) -> Option<&mut Box<dyn View>> {
        self.stack.last_mut()
    }

    pub fn active_route(&self) -> Route {
        self.stack
            .last()
            .map(|view| view.route())
            .unwrap_or(Route::NotFound)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        if let Some(view) = self.stack.last_mut() {
            view.handle_input(key, state, ctx).await
        } else {
            None
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for view in &mut self.stack {
            view.on_event(event, ctx).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_require_a_session() {
        for route in [
            Route::Home,
            Route::Trending,
            Route::Gaming,
            Route::SavedVideos,
            Route::VideoDetail("abc".into()),
        ] {
            assert_eq!(resolve(route, false), Route::Login);
        }
    }

    #[test]
    fn protected_routes_pass_through_with_a_session() {
        assert_eq!(resolve(Route::Trending, true), Route::Trending);
        assert_eq!(
            resolve(Route::VideoDetail("abc".into()), true),
            Route::VideoDetail("abc".into())
        );
    }

    #[test]
    fn login_redirects_home_when_already_authenticated() {
        assert_eq!(resolve(Route::Login, true), Route::Home);
        assert_eq!(resolve(Route::Login, false), Route::Login);
    }

    #[test]
    fn not_found_is_reachable_either_way() {
        assert_eq!(resolve(Route::NotFound, false), Route::NotFound);
        assert_eq!(resolve(Route::NotFound, true), Route::NotFound);
    }
}
