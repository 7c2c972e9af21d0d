use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::ui::{
    app::App,
    components::{header::Header, sidebar::Sidebar},
    state::Route,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let theme = self.app.state.theme;
        f.buffer_mut()
            .set_style(area, Style::new().bg(theme.background()).fg(theme.text()));

        // login stands alone, no chrome
        if self.app.state.ui.current_route == Route::Login {
            self.app
                .router
                .render(f, area, &self.app.state, &self.app.ctx);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let header_area = chunks[0];
        let main_area = chunks[1];

        f.render_widget(
            Header::new(theme, self.app.state.ui.current_route.title()),
            header_area,
        );

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(1)])
            .split(main_area);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(theme.border()))
            .title(" tuitube ")
            .title_alignment(Alignment::Center);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(theme.border()));

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        f.render_widget(
            Sidebar::new(self.app.state.ui.sidebar_index, theme),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);
    }
}
