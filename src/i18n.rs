//! Display language and the fixed label table.
//!
//! Every piece of text the panels show is looked up here, so switching the
//! language only needs a re-render.

/// UI language. Japanese is the primary language and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    /// Order of the options in the language segmented control.
    pub const ALL: [Language; 2] = [Language::Japanese, Language::English];

    /// BCP 47 tag, also used as the `data-lang` value of the language buttons.
    pub fn code(self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Name of this language as shown in the segmented control.
    pub fn option_label(self) -> Label {
        match self {
            Language::Japanese => Label::JapaneseOption,
            Language::English => Label::EnglishOption,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    ClockTitle,
    StopwatchTitle,
    AlarmTitle,
    SettingsTitle,
    StopwatchNotice,
    AlarmNotice,
    DayLengthCaption,
    HoursUnit,
    ShowSeconds,
    LanguageCaption,
    JapaneseOption,
    EnglishOption,
}

impl Label {
    pub const ALL: [Label; 12] = [
        Label::ClockTitle,
        Label::StopwatchTitle,
        Label::AlarmTitle,
        Label::SettingsTitle,
        Label::StopwatchNotice,
        Label::AlarmNotice,
        Label::DayLengthCaption,
        Label::HoursUnit,
        Label::ShowSeconds,
        Label::LanguageCaption,
        Label::JapaneseOption,
        Label::EnglishOption,
    ];

    pub fn text(self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.japanese(),
            Language::English => self.english(),
        }
    }

    fn japanese(self) -> &'static str {
        match self {
            Label::ClockTitle => "時計",
            Label::StopwatchTitle => "ストップウォッチ",
            Label::AlarmTitle => "アラーム",
            Label::SettingsTitle => "設定",
            Label::StopwatchNotice => "ストップウォッチの機能はこれから実装します。",
            Label::AlarmNotice => "アラームの機能はこれから実装します。",
            Label::DayLengthCaption => "1日の時間 (N)",
            Label::HoursUnit => "時間",
            Label::ShowSeconds => "秒数表示",
            Label::LanguageCaption => "言語表示",
            Label::JapaneseOption => "日本語",
            Label::EnglishOption => "英語",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Label::ClockTitle => "Clock",
            Label::StopwatchTitle => "Stopwatch",
            Label::AlarmTitle => "Alarm",
            Label::SettingsTitle => "Settings",
            Label::StopwatchNotice => "The stopwatch is not implemented yet.",
            Label::AlarmNotice => "The alarm is not implemented yet.",
            Label::DayLengthCaption => "Day Length (N)",
            Label::HoursUnit => "Hours",
            Label::ShowSeconds => "Show Seconds",
            Label::LanguageCaption => "Language",
            Label::JapaneseOption => "Japanese",
            Label::EnglishOption => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_is_translated() {
        for label in Label::ALL {
            let ja = label.text(Language::Japanese);
            let en = label.text(Language::English);
            assert!(!ja.is_empty(), "{:?} has no Japanese text", label);
            assert!(!en.is_empty(), "{:?} has no English text", label);
            assert_ne!(ja, en, "{:?} is not translated", label);
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::Japanese);
        let codes: Vec<_> = Language::ALL.iter().map(|lang| lang.code()).collect();
        assert_eq!(codes, vec!["ja", "en"]);
    }

    #[test]
    fn test_option_labels_follow_display_language() {
        assert_eq!(
            Language::English.option_label().text(Language::Japanese),
            "英語"
        );
        assert_eq!(
            Language::Japanese.option_label().text(Language::English),
            "Japanese"
        );
    }
}
