use crate::RequestId;

/// Side effects requested by [`crate::update`]; the platform executes them and
/// reports back with the matching completion [`crate::Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShortenUrl { request: RequestId, url: String },
    FetchHistory { request: RequestId },
    RecoverUrl { request: RequestId, short_code: String },
    CopyToClipboard { text: String },
    /// Full page load, not an in-app transition.
    Navigate { url: String },
}
