//! Shortener core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    is_submittable_url, AppState, HistoryEntry, HistoryState, RedirectState, RequestId, Route,
    ShortenState, Tab, TabKind,
};
pub use update::update;
pub use view_model::{
    truncate_for_display, AppViewModel, HistoryRowView, HistoryView, RedirectView, ShortenView,
    TabView, CLIPBOARD_FAILED_MESSAGE, HISTORY_EMPTY_PLACEHOLDER, HISTORY_FAILED_MESSAGE,
    ORIGINAL_URL_DISPLAY_CHARS, REDIRECT_FAILED_MESSAGE, SHORTEN_FAILED_MESSAGE,
};
