use crate::{HistoryEntry, RequestId, TabKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The root view was mounted into the page.
    Mounted,
    /// User clicked one of the shell tabs.
    TabSelected(TabKind),
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the shorten form.
    ShortenSubmitted,
    ShortenSucceeded {
        request: RequestId,
        short_url: String,
    },
    ShortenFailed { request: RequestId },
    /// User clicked the copy-to-clipboard button.
    CopyClicked,
    ClipboardFailed,
    HistoryLoaded {
        request: RequestId,
        entries: Vec<HistoryEntry>,
    },
    HistoryFailed { request: RequestId },
    RecoverSucceeded {
        request: RequestId,
        original_url: String,
    },
    RecoverFailed { request: RequestId },
    /// The browser refused to load the recovered URL.
    NavigationFailed,
}
