use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;

use crate::{
    auth::session::SessionStore,
    config::Config,
    event::events::Event,
    http::ApiService,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::AppMessage,
        router::{self, Router},
        state::{AppState, Route, SIDEBAR_ROUTES},
        tui::Tui,
        util::handler::EventHandler,
        views,
    },
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
    config: Config,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let config = Config::from_env();
        let (event_tx, event_rx) = flume::unbounded();

        let session = SessionStore::open()?;
        let api = Arc::new(ApiService::new(&config, session.clone())?);
        let ctx = AppContext {
            api,
            event_tx: event_tx.clone(),
            session: session.clone(),
        };

        let initial = router::resolve(Route::Home, session.is_authenticated());
        let router = Router::new(views::view_for(&initial));
        let mut state = AppState::default();
        state.ui.current_route = initial;

        Ok(Self {
            event_rx,
            event_tx,
            ctx,
            state,
            router,
            has_focus: true,
            should_quit: false,
            config,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(self.config.tick_rate)?;
        tui.enter()?;

        if let Some(view) = self.router.active_view() {
            view.on_mount(&self.ctx).await;
        }

        tui.draw(|f| {
            self.ui(f);
        })?;

        while !self.should_quit {
            if EventHandler::handle_events(self, &mut tui).await? {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub async fn update(&mut self, message: AppMessage) {
        match message {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ToggleTheme => self.state.theme.toggle(),
            AppMessage::ToggleSave(video) => {
                self.state.saved.toggle(*video);
            }
            AppMessage::Logout => {
                self.ctx.session.clear();
                self.navigate(Route::Login).await;
            }
            AppMessage::NavigateTo(route) => self.navigate(route).await,
            AppMessage::GoBack => {
                self.router.pop();
                self.sync_route();
            }
            AppMessage::NextSidebarItem => {
                let index = (self.state.ui.sidebar_index + 1) % SIDEBAR_ROUTES.len();
                self.navigate(SIDEBAR_ROUTES[index].clone()).await;
            }
            AppMessage::PreviousSidebarItem => {
                let len = SIDEBAR_ROUTES.len();
                let index = (self.state.ui.sidebar_index + len - 1) % len;
                self.navigate(SIDEBAR_ROUTES[index].clone()).await;
            }
            AppMessage::SetSidebarIndex(index) => {
                if let Some(route) = SIDEBAR_ROUTES.get(index) {
                    self.navigate(route.clone()).await;
                }
            }
        }
    }

    async fn navigate(&mut self, route: Route) {
        let resolved = router::resolve(route, self.ctx.session.is_authenticated());
        let mut view = views::view_for(&resolved);
        view.on_mount(&self.ctx).await;

        // detail screens stack on top so Esc returns to the listing;
        // everything else starts a fresh stack
        if matches!(resolved, Route::VideoDetail(_)) {
            self.router.push(view);
        } else {
            self.router.reset(view);
        }
        self.sync_route();
    }

    fn sync_route(&mut self) {
        let route = self.router.active_route();
        if let Some(index) = route.sidebar_index() {
            self.state.ui.sidebar_index = index;
        }
        self.state.ui.current_route = route;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::views::test_support::offline_ctx;

    fn test_app(dir: &std::path::Path) -> App {
        let (ctx, event_rx) = offline_ctx(dir);
        let event_tx = ctx.event_tx.clone();
        let mut state = AppState::default();
        state.ui.current_route = Route::NotFound;

        App {
            event_rx,
            event_tx,
            ctx,
            state,
            router: Router::new(views::view_for(&Route::NotFound)),
            has_focus: true,
            should_quit: false,
            config: Config::default(),
        }
    }

    fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn losing_focus_pauses_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        assert!(rendered_text(&terminal).contains("tuitube"));

        app.has_focus = false;
        let mut paused = Terminal::new(TestBackend::new(60, 12)).unwrap();
        paused.draw(|f| app.ui(f)).unwrap();
        assert!(rendered_text(&paused).trim().is_empty());
    }
}
