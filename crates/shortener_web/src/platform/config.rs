use shortener_api::ApiSettings;
use shortener_logging::shortener_info;

use super::browser;

/// Name of the `<meta>` tag that overrides the compiled-in backend host.
const API_HOST_META: &str = "shortener-api-host";

/// Backend host: the page's `<meta name="shortener-api-host">` when set,
/// else the `SHORTENER_API_HOST` value baked in at compile time, else the
/// page origin.
pub fn api_settings() -> ApiSettings {
    let page_host = browser::meta_content(API_HOST_META);
    let settings = ApiSettings::resolve(
        page_host.as_deref(),
        &ApiSettings::default().host,
        browser::origin(),
    );
    shortener_info!(
        "API settings host={:?} origin={:?}",
        settings.host,
        settings.origin
    );
    settings
}
