use leptos::prelude::*;
use shortener_core::{
    AppViewModel, HistoryRowView, HistoryView, Msg, RedirectView, ShortenView, TabKind, TabView,
};

use super::constants::*;
use crate::platform::app::Dispatcher;

/// Root-path screen: title, tab strip and the active tab's panel.
#[component]
pub fn Shell(view_model: Memo<AppViewModel>, dispatcher: Dispatcher) -> impl IntoView {
    let active_tab = Memo::new(move |_| {
        view_model.with(|current| match current {
            AppViewModel::Shell { active_tab, .. } => *active_tab,
            AppViewModel::Redirect(_) => TabKind::Shorten,
        })
    });

    view! {
        <div class="app">
            <h1 class="app-title">{APP_TITLE}</h1>
            <div class="card">
                <nav class="tabs">
                    <TabButton kind=TabKind::Shorten label=TAB_SHORTEN_LABEL active_tab dispatcher />
                    <TabButton kind=TabKind::History label=TAB_HISTORY_LABEL active_tab dispatcher />
                </nav>
                <div class="tab-body">
                    // Rebuilt only when the tab changes, so the input keeps focus while typing.
                    {move || match active_tab.get() {
                        TabKind::Shorten => view! { <ShortenPanel view_model dispatcher /> }.into_any(),
                        TabKind::History => view! { <HistoryPanel view_model /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    kind: TabKind,
    label: &'static str,
    active_tab: Memo<TabKind>,
    dispatcher: Dispatcher,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="tab"
            class:active=move || active_tab.get() == kind
            on:click=move |_| dispatcher.dispatch(Msg::TabSelected(kind))
        >
            {label}
        </button>
    }
}

#[component]
fn ShortenPanel(view_model: Memo<AppViewModel>, dispatcher: Dispatcher) -> impl IntoView {
    let shorten = Memo::new(move |_| {
        view_model.with(|current| match current {
            AppViewModel::Shell {
                body: TabView::Shorten(shorten),
                ..
            } => shorten.clone(),
            _ => ShortenView::default(),
        })
    });
    let short_url = Memo::new(move |_| shorten.with(|current| current.short_url.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Msg::ShortenSubmitted);
    };

    view! {
        <div class="shorten">
            <form class="shorten-form" on:submit=on_submit>
                <input
                    type="url"
                    required=true
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || shorten.with(|current| current.input.clone())
                    on:input=move |ev| {
                        dispatcher.dispatch(Msg::InputChanged(event_target_value(&ev)))
                    }
                />
                <button
                    type="submit"
                    disabled=move || shorten.with(|current| !current.submit_enabled)
                >
                    {SUBMIT_LABEL}
                </button>
            </form>
            {move || {
                shorten
                    .with(|current| current.error)
                    .map(|message| view! { <div class="error">{message}</div> })
            }}
            {move || {
                shorten
                    .with(|current| current.clipboard_error)
                    .map(|message| view! { <div class="error">{message}</div> })
            }}
            {move || short_url.get().map(|url| view! { <ShortLinkResult url dispatcher /> })}
        </div>
    }
}

#[component]
fn ShortLinkResult(url: String, dispatcher: Dispatcher) -> impl IntoView {
    let href = url.clone();
    view! {
        <div class="result">
            <a class="short-link" href=href target="_blank" rel="noopener noreferrer">
                {url}
            </a>
            <button
                type="button"
                class="copy"
                title=COPY_TITLE
                on:click=move |_| dispatcher.dispatch(Msg::CopyClicked)
            >
                {COPY_LABEL}
            </button>
        </div>
    }
}

#[component]
fn HistoryPanel(view_model: Memo<AppViewModel>) -> impl IntoView {
    let history = Memo::new(move |_| {
        view_model.with(|current| match current {
            AppViewModel::Shell {
                body: TabView::History(history),
                ..
            } => history.clone(),
            _ => HistoryView::Loading,
        })
    });

    move || match history.get() {
        HistoryView::Loading => view! { <div class="loading">{LOADING_TEXT}</div> }.into_any(),
        HistoryView::Failed { message } => view! { <div class="error">{message}</div> }.into_any(),
        HistoryView::Empty { placeholder } => {
            view! { <div class="placeholder">{placeholder}</div> }.into_any()
        }
        HistoryView::Entries(rows) => view! {
            <ul class="history">
                {rows.into_iter().map(|row| view! { <HistoryRow row /> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[component]
fn HistoryRow(row: HistoryRowView) -> impl IntoView {
    let HistoryRowView {
        short_url,
        original_url,
        original_display,
    } = row;
    let link_href = short_url.clone();
    let open_href = short_url.clone();

    view! {
        <li class="history-item">
            <div class="history-text">
                <a class="short-link" href=link_href target="_blank" rel="noopener noreferrer">
                    {short_url}
                </a>
                <p class="original-url" title=original_url>
                    {original_display}
                </p>
            </div>
            <a
                class="open-link"
                href=open_href
                target="_blank"
                rel="noopener noreferrer"
                title=OPEN_LINK_TITLE
            >
                "↗"
            </a>
        </li>
    }
}

/// Non-root path screen. Success navigates away, so only pending and error
/// are ever drawn.
#[component]
pub fn RedirectScreen(view_model: Memo<AppViewModel>) -> impl IntoView {
    let redirect = Memo::new(move |_| {
        view_model.with(|current| match current {
            AppViewModel::Redirect(redirect) => *redirect,
            AppViewModel::Shell { .. } => RedirectView::Pending,
        })
    });

    move || match redirect.get() {
        RedirectView::Pending => view! {
            <div class="redirect">
                <div class="card">
                    <h1>{REDIRECT_PENDING_TITLE}</h1>
                    <p>{REDIRECT_PENDING_TEXT}</p>
                </div>
            </div>
        }
        .into_any(),
        RedirectView::Error { message } => view! {
            <div class="redirect">
                <div class="card">
                    <h1 class="error-title">{REDIRECT_ERROR_TITLE}</h1>
                    <p>{message}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}
