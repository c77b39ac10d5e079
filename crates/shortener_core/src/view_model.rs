use crate::{HistoryEntry, HistoryState, RedirectState, Route, ShortenState, Tab, TabKind};

pub const SHORTEN_FAILED_MESSAGE: &str = "Failed to shorten URL. Please try again.";
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Failed to copy to clipboard";
pub const HISTORY_FAILED_MESSAGE: &str = "Failed to load URL history";
pub const HISTORY_EMPTY_PLACEHOLDER: &str = "No shortened URLs yet";
pub const REDIRECT_FAILED_MESSAGE: &str = "Failed to redirect to the original URL";

/// Original URLs longer than this are shortened for display.
pub const ORIGINAL_URL_DISPLAY_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppViewModel {
    Shell { active_tab: TabKind, body: TabView },
    Redirect(RedirectView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabView {
    Shorten(ShortenView),
    History(HistoryView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShortenView {
    pub input: String,
    pub submit_enabled: bool,
    pub short_url: Option<String>,
    pub error: Option<&'static str>,
    pub clipboard_error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Loading,
    Failed { message: &'static str },
    Empty { placeholder: &'static str },
    Entries(Vec<HistoryRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub short_url: String,
    pub original_url: String,
    /// `original_url` cut to [`ORIGINAL_URL_DISPLAY_CHARS`].
    pub original_display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectView {
    Pending,
    Error { message: &'static str },
}

impl AppViewModel {
    pub(crate) fn from_route(route: &Route) -> Self {
        match route {
            Route::Shell(tab) => AppViewModel::Shell {
                active_tab: tab.kind(),
                body: match tab {
                    Tab::Shorten(shorten) => TabView::Shorten(shorten_view(shorten)),
                    Tab::History(history) => TabView::History(history_view(history)),
                },
            },
            Route::Redirect(RedirectState::Pending { .. }) => {
                AppViewModel::Redirect(RedirectView::Pending)
            }
            Route::Redirect(RedirectState::Error) => AppViewModel::Redirect(RedirectView::Error {
                message: REDIRECT_FAILED_MESSAGE,
            }),
        }
    }
}

fn shorten_view(state: &ShortenState) -> ShortenView {
    ShortenView {
        input: state.input.clone(),
        submit_enabled: !state.in_flight(),
        short_url: state.short_url.clone(),
        error: state.failed.then_some(SHORTEN_FAILED_MESSAGE),
        clipboard_error: state.clipboard_failed.then_some(CLIPBOARD_FAILED_MESSAGE),
    }
}

fn history_view(state: &HistoryState) -> HistoryView {
    match state {
        HistoryState::Loading { .. } => HistoryView::Loading,
        HistoryState::Failed => HistoryView::Failed {
            message: HISTORY_FAILED_MESSAGE,
        },
        HistoryState::Loaded(entries) if entries.is_empty() => HistoryView::Empty {
            placeholder: HISTORY_EMPTY_PLACEHOLDER,
        },
        HistoryState::Loaded(entries) => {
            HistoryView::Entries(entries.iter().map(history_row).collect())
        }
    }
}

fn history_row(entry: &HistoryEntry) -> HistoryRowView {
    HistoryRowView {
        short_url: entry.short_url.clone(),
        original_url: entry.original_url.clone(),
        original_display: truncate_for_display(&entry.original_url, ORIGINAL_URL_DISPLAY_CHARS),
    }
}

/// Cuts `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_for_display("https://a.io", 60), "https://a.io");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "https://example.com/ünïcødé/päth";
        let cut = truncate_for_display(text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert_eq!(cut, "https://e…");
    }
}
