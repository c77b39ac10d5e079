use leptos::task::spawn_local;
use shortener_api::{ReqwestApiClient, ShortenerApi};
use shortener_core::{Effect, Msg};
use shortener_logging::{shortener_error, shortener_info, shortener_warn};

use super::app::Dispatcher;
use super::browser;
use crate::bridge;

/// Executes core effects. Network and clipboard work runs on the browser
/// event loop; completions are dispatched back as messages.
#[derive(Debug, Clone)]
pub struct EffectRunner {
    api: ReqwestApiClient,
}

impl EffectRunner {
    pub fn new(api: ReqwestApiClient) -> Self {
        Self { api }
    }

    pub fn run(&self, effects: Vec<Effect>, dispatcher: Dispatcher) {
        for effect in effects {
            match effect {
                Effect::ShortenUrl { request, url } => {
                    shortener_info!("ShortenUrl request={} url_len={}", request, url.len());
                    let api = self.api.clone();
                    spawn_local(async move {
                        let result = api.shorten_url(&url).await;
                        dispatcher.dispatch(bridge::shorten_msg(request, result));
                    });
                }
                Effect::FetchHistory { request } => {
                    shortener_info!("FetchHistory request={}", request);
                    let api = self.api.clone();
                    spawn_local(async move {
                        let result = api.get_url_history().await;
                        dispatcher.dispatch(bridge::history_msg(request, result));
                    });
                }
                Effect::RecoverUrl {
                    request,
                    short_code,
                } => {
                    shortener_info!("RecoverUrl request={} short_code={}", request, short_code);
                    let api = self.api.clone();
                    spawn_local(async move {
                        let result = api.recover_url(&short_code).await;
                        dispatcher.dispatch(bridge::recover_msg(request, result));
                    });
                }
                Effect::CopyToClipboard { text } => {
                    spawn_local(async move {
                        if let Err(err) = browser::write_clipboard(&text).await {
                            shortener_warn!("Clipboard write failed: {:?}", err);
                            dispatcher.dispatch(Msg::ClipboardFailed);
                        }
                    });
                }
                Effect::Navigate { url } => {
                    shortener_info!("Navigate url={}", url);
                    if let Err(err) = browser::navigate(&url) {
                        shortener_error!("Navigation to {} failed: {:?}", url, err);
                        // Dispatched from a task: the caller still holds the runner.
                        spawn_local(async move { dispatcher.dispatch(Msg::NavigationFailed) });
                    }
                }
            }
        }
    }
}
