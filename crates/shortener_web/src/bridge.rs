//! Maps API results onto core messages. Failure detail is logged here and
//! never reaches the view.

use shortener_api::{ApiError, ShortUrlRecord};
use shortener_core::{HistoryEntry, Msg, RequestId};
use shortener_logging::shortener_warn;

pub(crate) fn shorten_msg(request: RequestId, result: Result<String, ApiError>) -> Msg {
    match result {
        Ok(short_url) => Msg::ShortenSucceeded { request, short_url },
        Err(err) => {
            shortener_warn!("Shorten request={} failed: {}", request, err);
            Msg::ShortenFailed { request }
        }
    }
}

pub(crate) fn history_msg(request: RequestId, result: Result<Vec<ShortUrlRecord>, ApiError>) -> Msg {
    match result {
        Ok(records) => Msg::HistoryLoaded {
            request,
            entries: records.into_iter().map(history_entry).collect(),
        },
        Err(err) => {
            shortener_warn!("History request={} failed: {}", request, err);
            Msg::HistoryFailed { request }
        }
    }
}

pub(crate) fn recover_msg(request: RequestId, result: Result<String, ApiError>) -> Msg {
    match result {
        Ok(original_url) => Msg::RecoverSucceeded {
            request,
            original_url,
        },
        Err(err) => {
            shortener_warn!("Recover request={} failed: {}", request, err);
            Msg::RecoverFailed { request }
        }
    }
}

fn history_entry(record: ShortUrlRecord) -> HistoryEntry {
    HistoryEntry {
        short_url: record.short_url,
        original_url: record.original_url,
    }
}
