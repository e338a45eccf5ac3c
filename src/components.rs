//! Pure Yew view components for the N-hour clock.
//!
//! Each component renders one view-model from `n_clock::view` and reports
//! user input through callbacks; none of them hold state of their own.

use crate::config::*;
use n_clock::i18n::Language;
use n_clock::state::Mode;
use n_clock::view::{ClockView, NavView, PlaceholderView, SettingsView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClockPanelProps {
    pub view: ClockView,
    pub oninput: Callback<InputEvent>,
}

/// Live clock display with the day-length slider underneath.
#[function_component(ClockPanel)]
pub fn clock_panel(props: &ClockPanelProps) -> Html {
    let view = &props.view;
    html! {
        <>
            <div class="mode-title">{ view.title }</div>
            <div id={CLOCK_DISPLAY_ID} class="clock-display">{ view.display.clone() }</div>

            <div class="control-panel">
                <label for={DAY_LENGTH_SLIDER_ID}>{ view.control_caption }</label>
                <input type="range"
                    id={DAY_LENGTH_SLIDER_ID}
                    min={view.min.to_string()}
                    max={view.max.to_string()}
                    step="1"
                    value={view.day_length.to_string()}
                    oninput={props.oninput.clone()}
                />
                <div id={DAY_LENGTH_DISPLAY_ID} class="n-value-display">
                    { view.day_length_label.clone() }
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaceholderPanelProps {
    pub view: PlaceholderView,
}

#[function_component(PlaceholderPanel)]
pub fn placeholder_panel(props: &PlaceholderPanelProps) -> Html {
    html! {
        <>
            <div class="mode-title">{ props.view.title }</div>
            <p class="placeholder-notice">{ props.view.notice }</p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub view: SettingsView,
    pub onseconds: Callback<Event>,
    pub onlanguage: Callback<Language>,
}

/// Seconds toggle and the two-way language segmented control.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let view = &props.view;
    html! {
        <>
            <div class="mode-title">{ view.title }</div>
            <ul class="settings-list">
                <li>
                    <span>{ view.seconds_caption }</span>
                    <label class="toggle-switch">
                        <input type="checkbox"
                            id={SECONDS_TOGGLE_ID}
                            checked={view.seconds_visible}
                            onchange={props.onseconds.clone()}
                        />
                        <span class="slider"></span>
                    </label>
                </li>
                <li>
                    <span>{ view.language_caption }</span>
                    <div class="segmented-control" id={LANGUAGE_CONTROL_ID}>
                        { view.options.iter().map(|option| {
                            let language = option.language;
                            html! {
                                <button
                                    data-lang={language.code()}
                                    class={classes!("segment-button", option.active.then_some("active"))}
                                    onclick={props.onlanguage.reform(move |_: MouseEvent| language)}
                                >
                                    { option.label }
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>
                </li>
            </ul>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub nav: NavView,
    pub onselect: Callback<Mode>,
}

/// Bottom navigation; exactly one tab carries the `active` class.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="tab-bar">
            { props.nav.tabs.iter().map(|tab| {
                let mode = tab.mode;
                html! {
                    <button
                        id={tab.id}
                        class={classes!("tab-item", tab.active.then_some("active"))}
                        onclick={props.onselect.reform(move |_: MouseEvent| mode)}
                    >
                        { tab.label }
                    </button>
                }
            }).collect::<Html>() }
        </nav>
    }
}
