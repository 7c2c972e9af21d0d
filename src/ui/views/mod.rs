pub mod gaming;
pub mod home;
pub mod login;
pub mod not_found;
pub mod saved_videos;
pub mod trending;
pub mod video_detail;

pub use gaming::Gaming;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use saved_videos::SavedVideos;
pub use trending::Trending;
pub use video_detail::VideoDetail;

use crate::ui::{state::Route, traits::View};

pub fn view_for(route: &Route) -> Box<dyn View> {
    match route {
        Route::Login => Box::new(Login::default()),
        Route::Home => Box::new(Home::default()),
        Route::Trending => Box::new(Trending::default()),
        Route::Gaming => Box::new(Gaming::default()),
        Route::SavedVideos => Box::new(SavedVideos::default()),
        Route::VideoDetail(id) => Box::new(VideoDetail::new(id.clone())),
        Route::NotFound => Box::new(NotFound),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use flume::Receiver;

    use crate::{
        auth::session::SessionStore, config::Config, event::events::Event, http::ApiService,
        ui::context::AppContext,
    };

    /// Context wired to an unroutable address so spawned fetches fail fast
    /// without touching the network.
    pub(crate) fn offline_ctx(dir: &std::path::Path) -> (AppContext, Receiver<Event>) {
        let config = Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };

        let session = SessionStore::at_path(dir.join("session"));
        session.save("test-token").unwrap();

        let api = Arc::new(ApiService::new(&config, session.clone()).unwrap());
        let (event_tx, event_rx) = flume::unbounded();

        (
            AppContext {
                api,
                event_tx,
                session,
            },
            event_rx,
        )
    }
}
