use std::sync::Arc;

use flume::Sender;

use crate::{auth::session::SessionStore, event::events::Event, http::ApiService};

/// Shared handles every view receives: the API client, the channel fetch
/// tasks report back on, and the session store.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
    pub session: SessionStore,
}
