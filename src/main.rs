//! Main module for the N-hour clock using Yew.
//! Wires the reducer, the one-second scheduler and the view components.

use log::{info, warn, LevelFilter};
use n_clock::{
    i18n::Language,
    scheduler::Scheduler,
    state::{ClockApp, Mode, Msg},
    time_source::millis_since_midnight,
    view::PanelView,
};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{ClockPanel, NavBar, PlaceholderPanel, SettingsPanel};
use config::*;
use utils::parse_day_length;

// ──────────────────────────────────────────────────────────────────────────────

/// Lets Yew own the controller; every message is stamped with the current
/// time of day before it reaches the reducer.
#[derive(Clone, PartialEq)]
struct AppModel(ClockApp);

impl Reducible for AppModel {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.update(action, millis_since_midnight()) {
            Rc::new(AppModel(next))
        } else {
            self
        }
    }
}

/// Keep `<html lang>` in step with the selected language.
fn set_document_language(language: Language) {
    let Some(root) = gloo_utils::document().document_element() else {
        return;
    };
    if let Err(err) = root.set_attribute("lang", language.code()) {
        warn!("Could not set document language: {:?}", err);
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, the scheduler and UI elements.
#[function_component]
pub fn App() -> Html {
    let model = use_reducer(|| AppModel(ClockApp::new(millis_since_midnight())));

    // One tick per second for the lifetime of the app
    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            let scheduler = Scheduler::start(TICK_INTERVAL_MS, move || {
                dispatcher.dispatch(Msg::Tick);
            });
            move || drop(scheduler)
        });
    }

    {
        let language = model.0.state().language;
        use_effect_with(language, move |language| {
            set_document_language(*language);
            || ()
        });
    }

    let on_select_mode = {
        let dispatcher = model.dispatcher();
        Callback::from(move |mode: Mode| dispatcher.dispatch(Msg::ModeSelected(mode)))
    };

    let on_day_length_input = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_day_length(&input.value()) {
                Ok(hours) => dispatcher.dispatch(Msg::DayLengthChanged(hours)),
                Err(err) => warn!("Ignoring day length input: {}", err),
            }
        })
    };

    let on_seconds_change = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(Msg::SecondsToggled(input.checked()));
        })
    };

    let on_language = {
        let dispatcher = model.dispatcher();
        Callback::from(move |language: Language| {
            dispatcher.dispatch(Msg::LanguageSelected(language))
        })
    };

    let panel = match model.0.panel() {
        PanelView::Clock(view) => html! {
            <ClockPanel view={view.clone()} oninput={on_day_length_input} />
        },
        PanelView::Placeholder(view) => html! {
            <PlaceholderPanel view={view.clone()} />
        },
        PanelView::Settings(view) => html! {
            <SettingsPanel
                view={view.clone()}
                onseconds={on_seconds_change}
                onlanguage={on_language}
            />
        },
    };

    html! {
        <div class="app-container">
            <main id={CONTENT_AREA_ID} class="content-area">
                { panel }
            </main>
            <NavBar nav={model.0.nav().clone()} onselect={on_select_mode} />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    log::set_max_level(LevelFilter::Info);
    info!("Starting N-hour clock");
    yew::Renderer::<App>::new().render();
}
