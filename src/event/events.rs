use crate::http::models::{VideoDetails, VideoSummary};

/// Events flowing from background fetch tasks back into the UI loop.
#[derive(Debug, Clone)]
pub enum Event {
    LoggedIn(String),
    LoginFailed(String),
    HomeVideosFetched(Vec<VideoSummary>),
    TrendingVideosFetched(Vec<VideoSummary>),
    GamingVideosFetched(Vec<VideoSummary>),
    VideoDetailsFetched(VideoDetails),
    FetchError(String),
}
