use crate::{http::models::VideoDetails, ui::state::Route};

#[derive(Debug, Clone)]
pub enum AppMessage {
    // User input
    Quit,
    ToggleTheme,
    ToggleSave(Box<VideoDetails>),
    Logout,

    // Navigation
    NavigateTo(Route),
    GoBack,
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),
}
