use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::ui::{state::SIDEBAR_ROUTES, theme::Theme};

pub struct Sidebar {
    selected_index: usize,
    theme: Theme,
}

impl Sidebar {
    pub fn new(selected_index: usize, theme: Theme) -> Self {
        Self {
            selected_index,
            theme,
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = SIDEBAR_ROUTES
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let (prefix, style) = if i == self.selected_index {
                    (
                        "› ",
                        Style::default()
                            .fg(self.theme.primary())
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default().fg(self.theme.muted()))
                };
                ListItem::new(format!("{prefix}{}", route.title())).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
