//! View-models for each panel and the navigation bar.
//!
//! Rendering is a pure function of [`AppState`]; the Yew components in the
//! binary only turn these values into markup. A rendered panel is also the
//! surface the clock refresh writes into: a write only happens when the
//! panel actually owns the target element.

use crate::i18n::{Label, Language};
use crate::state::{AppState, Mode};
use crate::{format_clock, format_day_length_label, scale, DayLength};

/// Shown in the clock display until the first refresh.
pub const DISPLAY_PLACEHOLDER: &str = "--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    pub title: &'static str,
    pub display: String,
    pub control_caption: &'static str,
    pub min: u32,
    pub max: u32,
    pub day_length: u32,
    pub day_length_label: String,
}

/// Stopwatch and alarm panels are notices only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderView {
    pub title: &'static str,
    pub notice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub title: &'static str,
    pub seconds_caption: &'static str,
    pub seconds_visible: bool,
    pub language_caption: &'static str,
    pub options: Vec<LanguageOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Clock(ClockView),
    Placeholder(PlaceholderView),
    Settings(SettingsView),
}

impl PanelView {
    pub fn clock_mut(&mut self) -> Option<&mut ClockView> {
        match self {
            PanelView::Clock(clock) => Some(clock),
            _ => None,
        }
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsView> {
        match self {
            PanelView::Settings(settings) => Some(settings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub mode: Mode,
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub tabs: Vec<TabView>,
}

/// Build the full panel for the active mode.
pub fn render_panel(state: &AppState) -> PanelView {
    let lang = state.language;
    let title = state.active_mode.title().text(lang);

    match state.active_mode {
        Mode::Clock => PanelView::Clock(ClockView {
            title,
            display: DISPLAY_PLACEHOLDER.to_string(),
            control_caption: Label::DayLengthCaption.text(lang),
            min: DayLength::MIN.hours(),
            max: DayLength::MAX.hours(),
            day_length: state.day_length.hours(),
            day_length_label: format_day_length_label(state.day_length, lang),
        }),
        Mode::Stopwatch => PanelView::Placeholder(PlaceholderView {
            title,
            notice: Label::StopwatchNotice.text(lang),
        }),
        Mode::Alarm => PanelView::Placeholder(PlaceholderView {
            title,
            notice: Label::AlarmNotice.text(lang),
        }),
        Mode::Settings => PanelView::Settings(SettingsView {
            title,
            seconds_caption: Label::ShowSeconds.text(lang),
            seconds_visible: state.seconds_visible,
            language_caption: Label::LanguageCaption.text(lang),
            options: Language::ALL
                .into_iter()
                .map(|language| LanguageOption {
                    language,
                    label: language.option_label().text(lang),
                    active: language == lang,
                })
                .collect(),
        }),
    }
}

pub fn render_nav(state: &AppState) -> NavView {
    NavView {
        tabs: Mode::ALL
            .into_iter()
            .map(|mode| TabView {
                mode,
                id: mode.nav_id(),
                label: mode.title().text(state.language),
                active: mode == state.active_mode,
            })
            .collect(),
    }
}

/// Write the current scaled time and day-length label into the clock panel.
///
/// Returns `true` if any displayed text changed. Panels without a clock
/// display are left untouched.
pub fn refresh_panel(panel: &mut PanelView, state: &AppState, real_millis: u64) -> bool {
    let Some(clock) = panel.clock_mut() else {
        return false;
    };

    let display = format_clock(scale(real_millis, state.day_length), state.seconds_visible);
    let label = format_day_length_label(state.day_length, state.language);

    let changed = clock.display != display || clock.day_length_label != label;
    clock.display = display;
    clock.day_length_label = label;
    changed
}
