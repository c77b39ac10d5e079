use shortener_logging::shortener_debug;

use crate::{
    is_submittable_url, AppState, Effect, HistoryState, Msg, RedirectState, RequestId, Route,
    ShortenState, Tab, TabKind,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => start_redirect(&mut state),
        Msg::TabSelected(kind) => select_tab(&mut state, kind),
        Msg::InputChanged(text) => {
            if let Some(shorten) = state.shorten_mut() {
                if shorten.input != text {
                    shorten.input = text;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::ShortenSubmitted => submit_shorten(&mut state),
        Msg::ShortenSucceeded { request, short_url } => {
            if let Some(shorten) = pending_shorten(&mut state, request) {
                shorten.pending = None;
                shorten.short_url = Some(short_url);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ShortenFailed { request } => {
            if let Some(shorten) = pending_shorten(&mut state, request) {
                shorten.pending = None;
                shorten.short_url = None;
                shorten.failed = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.shorten_mut() {
            Some(ShortenState {
                short_url: Some(short_url),
                clipboard_failed,
                ..
            }) => {
                let text = short_url.clone();
                if std::mem::take(clipboard_failed) {
                    state.mark_dirty();
                }
                vec![Effect::CopyToClipboard { text }]
            }
            _ => Vec::new(),
        },
        Msg::ClipboardFailed => {
            if let Some(shorten) = state.shorten_mut() {
                shorten.clipboard_failed = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HistoryLoaded { request, entries } => {
            finish_history(&mut state, request, HistoryState::Loaded(entries));
            Vec::new()
        }
        Msg::HistoryFailed { request } => {
            finish_history(&mut state, request, HistoryState::Failed);
            Vec::new()
        }
        Msg::RecoverSucceeded {
            request,
            original_url,
        } => match state.route_mut() {
            Route::Redirect(RedirectState::Pending {
                request: pending, ..
            }) if *pending == Some(request) => {
                // Stays pending: the page is about to be replaced.
                *pending = None;
                vec![Effect::Navigate { url: original_url }]
            }
            _ => {
                shortener_debug!("Ignoring stale recover result request={}", request);
                Vec::new()
            }
        },
        Msg::RecoverFailed { request } => {
            let matches = matches!(
                state.route(),
                Route::Redirect(RedirectState::Pending { request: Some(pending), .. })
                    if *pending == request
            );
            if matches {
                state.set_route(Route::Redirect(RedirectState::Error));
            } else {
                shortener_debug!("Ignoring stale recover failure request={}", request);
            }
            Vec::new()
        }
        Msg::NavigationFailed => {
            if matches!(state.route(), Route::Redirect(RedirectState::Pending { .. })) {
                state.set_route(Route::Redirect(RedirectState::Error));
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn start_redirect(state: &mut AppState) -> Vec<Effect> {
    let short_code = match state.route() {
        Route::Redirect(RedirectState::Pending {
            short_code,
            request: None,
        }) => short_code.clone(),
        _ => return Vec::new(),
    };
    // An empty code stays pending forever without a request.
    if short_code.is_empty() {
        return Vec::new();
    }

    let id = state.allocate_request();
    if let Route::Redirect(RedirectState::Pending { request, .. }) = state.route_mut() {
        *request = Some(id);
    }
    vec![Effect::RecoverUrl {
        request: id,
        short_code,
    }]
}

fn select_tab(state: &mut AppState, kind: TabKind) -> Vec<Effect> {
    let active = match state.route() {
        Route::Shell(tab) => tab.kind(),
        Route::Redirect(_) => return Vec::new(),
    };
    if active == kind {
        return Vec::new();
    }

    match kind {
        TabKind::Shorten => {
            state.set_route(Route::Shell(Tab::Shorten(ShortenState::default())));
            Vec::new()
        }
        TabKind::History => {
            let request = state.allocate_request();
            state.set_route(Route::Shell(Tab::History(HistoryState::Loading { request })));
            vec![Effect::FetchHistory { request }]
        }
    }
}

fn submit_shorten(state: &mut AppState) -> Vec<Effect> {
    let url = match state.shorten_mut() {
        Some(shorten) if !shorten.in_flight() && is_submittable_url(&shorten.input) => {
            shorten.input.trim().to_string()
        }
        Some(shorten) => {
            shortener_debug!(
                "Ignoring shorten submission in_flight={} input_len={}",
                shorten.in_flight(),
                shorten.input.len()
            );
            return Vec::new();
        }
        None => return Vec::new(),
    };

    let request = state.allocate_request();
    if let Some(shorten) = state.shorten_mut() {
        shorten.failed = false;
        shorten.clipboard_failed = false;
        shorten.pending = Some(request);
    }
    state.mark_dirty();
    vec![Effect::ShortenUrl { request, url }]
}

fn pending_shorten(state: &mut AppState, request: RequestId) -> Option<&mut ShortenState> {
    match state.shorten_mut() {
        Some(shorten) if shorten.pending == Some(request) => Some(shorten),
        _ => {
            shortener_debug!("Ignoring stale shorten result request={}", request);
            None
        }
    }
}

fn finish_history(state: &mut AppState, request: RequestId, next: HistoryState) {
    match state.history_mut() {
        Some(history) if *history == HistoryState::Loading { request } => {
            *history = next;
            state.mark_dirty();
        }
        _ => {
            shortener_debug!("Ignoring stale history result request={}", request);
        }
    }
}
