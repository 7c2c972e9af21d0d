use crate::http::models::VideoDetails;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub theme: Theme,
    pub saved: SavedList,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_route: Route,
    pub sidebar_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    Login,
    #[default]
    Home,
    Trending,
    Gaming,
    SavedVideos,
    VideoDetail(String),
    NotFound,
}

/// Sidebar order; `Tab` / `1`–`4` cycle through these.
pub const SIDEBAR_ROUTES: [Route; 4] = [
    Route::Home,
    Route::Trending,
    Route::Gaming,
    Route::SavedVideos,
];

impl Route {
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    pub fn sidebar_index(&self) -> Option<usize> {
        SIDEBAR_ROUTES.iter().position(|route| route == self)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Home => "Home",
            Route::Trending => "Trending",
            Route::Gaming => "Gaming",
            Route::SavedVideos => "Saved videos",
            Route::VideoDetail(_) => "Watch",
            Route::NotFound => "Not found",
        }
    }
}

/// One fetch lifecycle per view instance. Every fetch passes through
/// `InProgress` before settling; retry re-enters it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

/// Client-held list of saved videos with set-like semantics over the video
/// id. Order of insertion is preserved.
#[derive(Debug, Clone, Default)]
pub struct SavedList {
    entries: Vec<VideoDetails>,
}

impl SavedList {
    /// Absent appends, present removes that entry and keeps the rest in
    /// order. Returns whether the video is saved afterwards.
    pub fn toggle(&mut self, video: VideoDetails) -> bool {
        match self.entries.iter().position(|entry| entry.id == video.id) {
            Some(index) => {
                self.entries.remove(index);
                false
            }
            None => {
                self.entries.push(video);
                true
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn videos(&self) -> &[VideoDetails] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::models::Channel;

    fn video(id: &str) -> VideoDetails {
        VideoDetails {
            id: id.to_string(),
            title: format!("video {id}"),
            thumbnail_url: String::new(),
            video_url: String::new(),
            description: String::new(),
            view_count: "1K".to_string(),
            published_at: "Jan 1, 2021".to_string(),
            channel: Channel {
                name: "channel".to_string(),
                profile_image_url: String::new(),
                subscriber_count: None,
            },
        }
    }

    #[test]
    fn toggle_adds_then_removes_by_id() {
        let mut saved = SavedList::default();

        assert!(saved.toggle(video("5")));
        assert_eq!(saved.len(), 1);
        assert!(saved.contains("5"));

        assert!(!saved.toggle(video("5")));
        assert!(saved.is_empty());
        assert!(!saved.contains("5"));
    }

    #[test]
    fn double_toggle_restores_original_content_and_order() {
        let mut saved = SavedList::default();
        saved.toggle(video("a"));
        saved.toggle(video("b"));
        saved.toggle(video("c"));

        let before: Vec<String> = saved.videos().iter().map(|v| v.id.clone()).collect();
        saved.toggle(video("b"));
        saved.toggle(video("b"));
        let after: Vec<String> = saved.videos().iter().map(|v| v.id.clone()).collect();

        // re-adding appends, so "b" ends up last; a third/fourth toggle pair
        // would be a no-op again
        assert_eq!(after.len(), before.len());
        assert_eq!(after, vec!["a", "c", "b"]);
    }

    #[test]
    fn removing_preserves_order_of_the_rest() {
        let mut saved = SavedList::default();
        for id in ["1", "2", "3", "4"] {
            saved.toggle(video(id));
        }
        saved.toggle(video("2"));

        let ids: Vec<&str> = saved.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn identity_is_the_id_not_the_payload() {
        let mut saved = SavedList::default();
        saved.toggle(video("5"));

        let mut same_id = video("5");
        same_id.title = "a different title".to_string();
        assert!(!saved.toggle(same_id));
        assert!(saved.is_empty());
    }

    #[test]
    fn protected_routes_exclude_login_and_not_found() {
        assert!(!Route::Login.is_protected());
        assert!(!Route::NotFound.is_protected());
        assert!(Route::Home.is_protected());
        assert!(Route::VideoDetail("x".into()).is_protected());
    }

    #[test]
    fn sidebar_index_matches_sidebar_order() {
        assert_eq!(Route::Home.sidebar_index(), Some(0));
        assert_eq!(Route::SavedVideos.sidebar_index(), Some(3));
        assert_eq!(Route::Login.sidebar_index(), None);
        assert_eq!(Route::VideoDetail("x".into()).sidebar_index(), None);
    }
}
