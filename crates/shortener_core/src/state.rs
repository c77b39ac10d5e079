use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// One short-URL-to-original-URL mapping as shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub short_url: String,
    pub original_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabKind {
    #[default]
    Shorten,
    History,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShortenState {
    pub(crate) input: String,
    pub(crate) short_url: Option<String>,
    pub(crate) failed: bool,
    pub(crate) clipboard_failed: bool,
    pub(crate) pending: Option<RequestId>,
}

impl ShortenState {
    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryState {
    Loading { request: RequestId },
    Loaded(Vec<HistoryEntry>),
    Failed,
}

/// Redirect handler state. A successful resolve navigates away, so there is
/// no success variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    Pending {
        short_code: String,
        request: Option<RequestId>,
    },
    Error,
}

/// Per-tab state lives inside the variant; replacing the variant drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tab {
    Shorten(ShortenState),
    History(HistoryState),
}

impl Tab {
    pub fn kind(&self) -> TabKind {
        match self {
            Tab::Shorten(_) => TabKind::Shorten,
            Tab::History(_) => TabKind::History,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Shell(Tab),
    Redirect(RedirectState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    route: Route,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Shell(Tab::Shorten(ShortenState::default())),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the root screen from the browser path: `/` is the shell, any
    /// other path is `/<short code>`.
    pub fn for_path(path: &str) -> Self {
        if path == "/" {
            return Self::new();
        }
        let short_code = path.strip_prefix('/').unwrap_or(path).to_string();
        Self {
            route: Route::Redirect(RedirectState::Pending {
                short_code,
                request: None,
            }),
            ..Self::default()
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_route(&self.route)
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn allocate_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(crate) fn route_mut(&mut self) -> &mut Route {
        &mut self.route
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = route;
        self.mark_dirty();
    }

    pub(crate) fn shorten_mut(&mut self) -> Option<&mut ShortenState> {
        match &mut self.route {
            Route::Shell(Tab::Shorten(shorten)) => Some(shorten),
            _ => None,
        }
    }

    pub(crate) fn history_mut(&mut self) -> Option<&mut HistoryState> {
        match &mut self.route {
            Route::Shell(Tab::History(history)) => Some(history),
            _ => None,
        }
    }
}

/// Mirrors the browser's `type="url"` check: trimmed, non-empty, absolute.
pub fn is_submittable_url(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && url::Url::parse(trimmed).is_ok()
}
