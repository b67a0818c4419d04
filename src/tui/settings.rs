use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Work,
    ShortBreak,
    LongBreak,
    Cycles,
    AutoStart,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::Work,
        SettingsField::ShortBreak,
        SettingsField::LongBreak,
        SettingsField::Cycles,
        SettingsField::AutoStart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Work => "Work (min)",
            SettingsField::ShortBreak => "Short Break (min)",
            SettingsField::LongBreak => "Long Break (min)",
            SettingsField::Cycles => "Cycles before long break",
            SettingsField::AutoStart => "Auto-start next session",
        }
    }

    /// Key understood by `config::validate::apply_setting`.
    pub fn key(&self) -> &'static str {
        match self {
            SettingsField::Work => "work",
            SettingsField::ShortBreak => "short",
            SettingsField::LongBreak => "long",
            SettingsField::Cycles => "cycles",
            SettingsField::AutoStart => "auto_start",
        }
    }

    pub fn value(&self, cfg: &Config) -> String {
        match self {
            SettingsField::Work => cfg.work_minutes.to_string(),
            SettingsField::ShortBreak => cfg.short_break_minutes.to_string(),
            SettingsField::LongBreak => cfg.long_break_minutes.to_string(),
            SettingsField::Cycles => cfg.cycles_before_long.to_string(),
            SettingsField::AutoStart => (if cfg.auto_start { "on" } else { "off" }).to_string(),
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, SettingsField::AutoStart)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Selection and edit buffer of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub selected: SettingsField,
    pub editing: bool,
    pub input: String,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self {
            selected: SettingsField::Work,
            editing: false,
            input: String::new(),
        }
    }
}

impl SettingsPanel {
    pub fn start_editing(&mut self, cfg: &Config) {
        self.input = self.selected.value(cfg);
        self.editing = true;
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.input.clear();
    }
}
