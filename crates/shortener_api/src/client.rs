use std::collections::BTreeMap;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shortener_logging::{shortener_debug, shortener_warn};

use crate::{ApiError, ApiSettings, FailureKind, ShortUrlRecord};

/// `Send + Sync` natively; nothing on `wasm32`, where futures are polled by
/// the browser event loop and never cross threads.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSendSync for T {}

/// The three backend calls. Each is single-shot: no retry, no timeout.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ShortenerApi: MaybeSendSync {
    /// Returns the fully-qualified short URL for `url`.
    async fn shorten_url(&self, url: &str) -> Result<String, ApiError>;

    async fn get_url_history(&self) -> Result<Vec<ShortUrlRecord>, ApiError>;

    /// Returns the original URL behind `short_code`.
    async fn recover_url(&self, short_code: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    short_url: String,
}

#[derive(Debug, Deserialize)]
struct RecoverResponse {
    original_url: String,
}

/// History entries arrive as single-key objects `{ "<code>": "<original>" }`.
/// Keys are held sorted, so an extra-key record yields its lowest key.
type WireRecord = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl ReqwestApiClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, FailureKind> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureKind::HttpStatus(status.as_u16()));
        }

        response.json::<T>().await.map_err(|err| {
            shortener_debug!("Response body did not decode: {}", err);
            FailureKind::Decode
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl ShortenerApi for ReqwestApiClient {
    async fn shorten_url(&self, url: &str) -> Result<String, ApiError> {
        let endpoint = self.settings.endpoint("short_it");
        shortener_debug!("POST {} url_len={}", endpoint, url.len());

        let request = self.client.post(endpoint).json(&ShortenRequest { url });
        let body: ShortenResponse = self
            .fetch_json(request)
            .await
            .map_err(ApiError::Shorten)?;
        Ok(self.settings.short_url(&body.short_url))
    }

    async fn get_url_history(&self) -> Result<Vec<ShortUrlRecord>, ApiError> {
        let endpoint = self.settings.endpoint("records");
        shortener_debug!("GET {}", endpoint);

        let wire: Vec<WireRecord> = self
            .fetch_json(self.client.get(endpoint))
            .await
            .map_err(ApiError::History)?;
        records_from_wire(&self.settings, wire).map_err(ApiError::History)
    }

    async fn recover_url(&self, short_code: &str) -> Result<String, ApiError> {
        let endpoint = self.settings.endpoint("recover_it");
        shortener_debug!("GET {} short_code={}", endpoint, short_code);

        let request = self
            .client
            .get(endpoint)
            .query(&[("short_url", short_code)]);
        let body: RecoverResponse = self
            .fetch_json(request)
            .await
            .map_err(ApiError::Recover)?;
        Ok(body.original_url)
    }
}

fn records_from_wire(
    settings: &ApiSettings,
    wire: Vec<WireRecord>,
) -> Result<Vec<ShortUrlRecord>, FailureKind> {
    wire.into_iter()
        .map(|record| -> Result<ShortUrlRecord, FailureKind> {
            if record.len() > 1 {
                shortener_warn!(
                    "History record has {} keys, using the lowest",
                    record.len()
                );
            }
            let (short_code, original_url) =
                record.into_iter().next().ok_or(FailureKind::MalformedRecord)?;
            Ok(ShortUrlRecord {
                short_url: settings.short_url(&short_code),
                original_url,
            })
        })
        .collect()
}

fn map_reqwest_error(err: reqwest::Error) -> FailureKind {
    if err.is_decode() {
        return FailureKind::Decode;
    }
    shortener_debug!("Request failed: {}", err);
    FailureKind::Network
}
