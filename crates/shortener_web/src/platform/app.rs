use leptos::prelude::*;
use shortener_api::ReqwestApiClient;
use shortener_core::{update, AppState, AppViewModel, Msg};
use shortener_logging::shortener_info;

use super::effects::EffectRunner;
use super::ui::render::{RedirectScreen, Shell};
use super::{browser, config, logging};

pub fn run_app() {
    logging::initialize();

    let path = browser::pathname();
    let runner = EffectRunner::new(ReqwestApiClient::new(config::api_settings()));
    shortener_info!("Starting shortener_web path={}", path);

    mount_to_body(move || {
        let dispatcher = Dispatcher::new(AppState::for_path(&path), runner);
        view! { <App dispatcher /> }
    });
}

/// Owns the app state signal and feeds every message through the pure
/// `update`, then hands the returned effects to the runner.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
    runner: StoredValue<EffectRunner>,
}

impl Dispatcher {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state: RwSignal::new(state),
            runner: StoredValue::new(runner),
        }
    }

    pub fn dispatch(self, msg: Msg) {
        let effects = self
            .state
            .try_maybe_update(|state| {
                let (mut next, effects) = update(std::mem::take(state), msg);
                let dirty = next.consume_dirty();
                *state = next;
                (dirty, effects)
            })
            .unwrap_or_default();

        if !effects.is_empty() {
            self.runner.with_value(|runner| runner.run(effects, self));
        }
    }

    pub fn view_model(self) -> Memo<AppViewModel> {
        let state = self.state;
        Memo::new(move |_| state.with(AppState::view))
    }
}

#[component]
fn App(dispatcher: Dispatcher) -> impl IntoView {
    let view_model = dispatcher.view_model();

    // Kick off the redirect lookup once the root is in the page.
    Effect::new(move |_| dispatcher.dispatch(Msg::Mounted));

    let is_redirect = Memo::new(move |_| {
        view_model.with(|view| matches!(view, AppViewModel::Redirect(_)))
    });

    move || {
        if is_redirect.get() {
            view! { <RedirectScreen view_model /> }.into_any()
        } else {
            view! { <Shell view_model dispatcher /> }.into_any()
        }
    }
}
