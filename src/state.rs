//! Application state and the single reducer that mutates it.
//!
//! [`ClockApp`] owns the [`AppState`] together with the currently rendered
//! panel and navigation bar. Every timer tick and user input is a [`Msg`]
//! applied through [`ClockApp::update`], so a state change and the render it
//! causes always happen in the same call.

use log::{debug, info};

use crate::defaults;
use crate::i18n::{Label, Language};
use crate::view::{refresh_panel, render_nav, render_panel, NavView, PanelView};
use crate::DayLength;

/// Selectable panels, in navigation-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Clock,
    Stopwatch,
    Alarm,
    Settings,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Clock, Mode::Stopwatch, Mode::Alarm, Mode::Settings];

    pub fn title(self) -> Label {
        match self {
            Mode::Clock => Label::ClockTitle,
            Mode::Stopwatch => Label::StopwatchTitle,
            Mode::Alarm => Label::AlarmTitle,
            Mode::Settings => Label::SettingsTitle,
        }
    }

    /// Element id of this mode's navigation tab.
    pub fn nav_id(self) -> &'static str {
        match self {
            Mode::Clock => "nav-clock",
            Mode::Stopwatch => "nav-stopwatch",
            Mode::Alarm => "nav-alarm",
            Mode::Settings => "nav-settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub day_length: DayLength,
    pub seconds_visible: bool,
    pub language: Language,
    pub active_mode: Mode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            day_length: DayLength::default(),
            seconds_visible: defaults::SECONDS_VISIBLE,
            language: Language::default(),
            active_mode: Mode::default(),
        }
    }
}

/// Input events understood by [`ClockApp::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Scheduler tick: refresh the visible clock.
    Tick,
    /// Day-length slider moved. Out-of-range values are clamped.
    DayLengthChanged(u32),
    /// Seconds checkbox changed to the given checked state.
    SecondsToggled(bool),
    LanguageSelected(Language),
    ModeSelected(Mode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockApp {
    state: AppState,
    panel: PanelView,
    nav: NavView,
}

impl ClockApp {
    /// Start in the default state with the clock panel rendered and filled in.
    pub fn new(real_millis: u64) -> Self {
        Self::with_state(AppState::default(), real_millis)
    }

    pub fn with_state(state: AppState, real_millis: u64) -> Self {
        let mut app = Self {
            panel: render_panel(&state),
            nav: render_nav(&state),
            state,
        };
        app.refresh_clock(real_millis);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn panel(&self) -> &PanelView {
        &self.panel
    }

    pub fn nav(&self) -> &NavView {
        &self.nav
    }

    /// Apply one message. Returns `true` if the state or anything visible
    /// changed, `false` if the message was a no-op.
    pub fn update(&mut self, msg: Msg, real_millis: u64) -> bool {
        let before = self.state;

        let view_changed = match msg {
            Msg::Tick => self.refresh_clock(real_millis),
            Msg::DayLengthChanged(hours) => {
                self.state.day_length = DayLength::clamped(hours);
                debug!("Day length set to {} hours", self.state.day_length);
                let slider_moved = self.sync_day_length_control();
                self.refresh_clock(real_millis) || slider_moved
            }
            Msg::SecondsToggled(visible) => {
                self.state.seconds_visible = visible;
                debug!("Seconds display {}", if visible { "on" } else { "off" });
                let toggle_moved = self.sync_seconds_toggle();
                self.refresh_clock(real_millis) || toggle_moved
            }
            Msg::LanguageSelected(language) => {
                self.state.language = language;
                info!("Language switched to {}", language.code());
                self.render_active_mode();
                self.refresh_clock(real_millis);
                true
            }
            Msg::ModeSelected(mode) => {
                self.state.active_mode = mode;
                info!("Switched to {:?} mode", mode);
                self.render_active_mode();
                self.refresh_clock(real_millis);
                true
            }
        };

        view_changed || self.state != before
    }

    /// Recompute the scaled time and write it into the clock panel, if shown.
    pub fn refresh_clock(&mut self, real_millis: u64) -> bool {
        refresh_panel(&mut self.panel, &self.state, real_millis)
    }

    fn render_active_mode(&mut self) {
        self.panel = render_panel(&self.state);
        self.nav = render_nav(&self.state);
    }

    fn sync_day_length_control(&mut self) -> bool {
        let hours = self.state.day_length.hours();
        match self.panel.clock_mut() {
            Some(clock) if clock.day_length != hours => {
                clock.day_length = hours;
                true
            }
            _ => false,
        }
    }

    fn sync_seconds_toggle(&mut self) -> bool {
        let visible = self.state.seconds_visible;
        match self.panel.settings_mut() {
            Some(settings) if settings.seconds_visible != visible => {
                settings.seconds_visible = visible;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DISPLAY_PLACEHOLDER;

    // 01:02:03 real time
    const T: u64 = 3_723_000;

    fn clock_display(app: &ClockApp) -> &str {
        match app.panel() {
            PanelView::Clock(clock) => clock.display.as_str(),
            other => panic!("expected clock panel, got {:?}", other),
        }
    }

    fn fresh_panel(state: &AppState, real_millis: u64) -> PanelView {
        let mut panel = render_panel(state);
        refresh_panel(&mut panel, state, real_millis);
        panel
    }

    #[test]
    fn test_starts_on_clock_with_defaults() {
        let app = ClockApp::new(T);
        assert_eq!(*app.state(), AppState::default());
        assert_eq!(app.state().day_length.hours(), 24);
        assert!(app.state().seconds_visible);
        assert_eq!(app.state().language, Language::Japanese);
        assert_eq!(app.state().active_mode, Mode::Clock);
        assert_eq!(clock_display(&app), "01:02:03");
        assert_ne!(clock_display(&app), DISPLAY_PLACEHOLDER);
    }

    #[test]
    fn test_tick_refreshes_clock() {
        let mut app = ClockApp::new(T);
        assert!(app.update(Msg::Tick, T + 1_000));
        assert_eq!(clock_display(&app), "01:02:04");
        assert!(!app.update(Msg::Tick, T + 1_400));
    }

    #[test]
    fn test_settings_then_clock_matches_fresh_render() {
        let mut app = ClockApp::new(T);
        app.update(Msg::DayLengthChanged(12), T);
        app.update(Msg::ModeSelected(Mode::Settings), T);
        app.update(Msg::SecondsToggled(false), T);
        app.update(Msg::ModeSelected(Mode::Clock), T + 5_000);

        assert_eq!(app.state().active_mode, Mode::Clock);
        assert_eq!(*app.panel(), fresh_panel(app.state(), T + 5_000));
        assert_eq!(*app.nav(), render_nav(app.state()));
        // 01:02:08 real at double speed
        assert_eq!(clock_display(&app), "02:04");
    }

    #[test]
    fn test_language_switch_in_settings() {
        let mut app = ClockApp::new(T);
        app.update(Msg::DayLengthChanged(36), T);
        app.update(Msg::ModeSelected(Mode::Settings), T);
        app.update(Msg::SecondsToggled(false), T);

        assert!(app.update(Msg::LanguageSelected(Language::English), T));

        let state = *app.state();
        assert_eq!(state.language, Language::English);
        assert_eq!(state.day_length.hours(), 36);
        assert!(!state.seconds_visible);
        assert_eq!(state.active_mode, Mode::Settings);

        let PanelView::Settings(settings) = app.panel() else {
            panic!("expected settings panel");
        };
        assert_eq!(settings.title, "Settings");
        assert_eq!(settings.seconds_caption, "Show Seconds");
        assert_eq!(settings.language_caption, "Language");
        assert!(!settings.seconds_visible);
        let labels: Vec<_> = settings.options.iter().map(|o| (o.label, o.active)).collect();
        assert_eq!(labels, vec![("Japanese", false), ("English", true)]);

        let tab_labels: Vec<_> = app.nav().tabs.iter().map(|tab| tab.label).collect();
        assert_eq!(tab_labels, vec!["Clock", "Stopwatch", "Alarm", "Settings"]);
    }

    #[test]
    fn test_refresh_is_noop_outside_clock() {
        for mode in [Mode::Stopwatch, Mode::Alarm, Mode::Settings] {
            let mut app = ClockApp::new(T);
            app.update(Msg::ModeSelected(mode), T);
            let before = app.clone();

            assert!(!app.update(Msg::Tick, T + 60_000));
            assert!(!app.refresh_clock(T + 120_000));
            assert_eq!(app, before);
        }
    }

    #[test]
    fn test_day_length_change_refreshes_without_rerender() {
        let mut app = ClockApp::new(T);
        assert!(app.update(Msg::DayLengthChanged(48), T));
        assert_eq!(clock_display(&app), "00:31:01");

        let PanelView::Clock(clock) = app.panel() else {
            panic!("expected clock panel");
        };
        assert_eq!(clock.day_length, 48);
        assert_eq!(clock.day_length_label, "N = 48 時間");
    }

    #[test]
    fn test_day_length_is_clamped() {
        let mut app = ClockApp::new(T);
        app.update(Msg::DayLengthChanged(3), T);
        assert_eq!(app.state().day_length, DayLength::MIN);
        app.update(Msg::DayLengthChanged(100), T);
        assert_eq!(app.state().day_length, DayLength::MAX);
        assert!(!app.update(Msg::DayLengthChanged(100), T));
    }

    #[test]
    fn test_seconds_toggle_changes_format() {
        let mut app = ClockApp::new(T);
        assert!(app.update(Msg::SecondsToggled(false), T));
        assert_eq!(clock_display(&app), "01:02");
        assert!(app.update(Msg::SecondsToggled(true), T));
        assert_eq!(clock_display(&app), "01:02:03");
    }

    #[test]
    fn test_seconds_toggle_in_settings_updates_checkbox() {
        let mut app = ClockApp::new(T);
        app.update(Msg::ModeSelected(Mode::Settings), T);
        assert!(app.update(Msg::SecondsToggled(false), T));
        assert!(!app.state().seconds_visible);
        assert_eq!(*app.panel(), render_panel(app.state()));
    }

    #[test]
    fn test_mode_selection_updates_nav() {
        let mut app = ClockApp::new(T);
        for mode in Mode::ALL {
            assert!(app.update(Msg::ModeSelected(mode), T));
            let active: Vec<_> = app
                .nav()
                .tabs
                .iter()
                .filter(|tab| tab.active)
                .map(|tab| tab.id)
                .collect();
            assert_eq!(active, vec![mode.nav_id()]);
        }
    }

    #[test]
    fn test_language_switch_on_clock_relabels_display() {
        let mut app = ClockApp::new(T);
        app.update(Msg::LanguageSelected(Language::English), T);
        let PanelView::Clock(clock) = app.panel() else {
            panic!("expected clock panel");
        };
        assert_eq!(clock.title, "Clock");
        assert_eq!(clock.control_caption, "Day Length (N)");
        assert_eq!(clock.day_length_label, "N = 24 Hours");
        assert_eq!(clock.display, "01:02:03");
    }
}
