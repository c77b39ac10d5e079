//! Shortener API: thin async client for the shortening backend.
mod client;
mod settings;
mod types;

pub use client::{MaybeSendSync, ReqwestApiClient, ShortenerApi};
pub use settings::ApiSettings;
pub use types::{ApiError, FailureKind, ShortUrlRecord};
