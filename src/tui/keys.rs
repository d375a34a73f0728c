use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application key mappings
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit application
    pub quit: KeyBinding,
    pub quit_alt: KeyBinding,

    /// Page navigation
    pub prev_page: KeyBinding,
    pub next_page: KeyBinding,
    pub first_page: KeyBinding,

    /// Re-fetch the current page, bypassing the cache
    pub refresh: KeyBinding,

    /// Vertical scrolling through the card grid
    pub scroll_up: KeyBinding,
    pub scroll_down: KeyBinding,

    /// Show/hide the help footer
    pub help: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE, "Quit"),
            quit_alt: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit"),
            prev_page: KeyBinding::new(KeyCode::Left, KeyModifiers::NONE, "Previous page"),
            next_page: KeyBinding::new(KeyCode::Right, KeyModifiers::NONE, "Next page"),
            first_page: KeyBinding::new(KeyCode::Char('g'), KeyModifiers::NONE, "First page"),
            refresh: KeyBinding::new(KeyCode::Char('r'), KeyModifiers::NONE, "Refresh page"),
            scroll_up: KeyBinding::new(KeyCode::Up, KeyModifiers::NONE, "Scroll up"),
            scroll_down: KeyBinding::new(KeyCode::Down, KeyModifiers::NONE, "Scroll down"),
            help: KeyBinding::new(KeyCode::Char('?'), KeyModifiers::NONE, "Toggle help"),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event) || self.quit_alt.matches(event)
    }

    /// Help footer entries as (key, description) pairs
    pub fn help_entries(&self) -> Vec<(String, &str)> {
        [
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.refresh,
            &self.scroll_up,
            &self.scroll_down,
            &self.help,
            &self.quit,
        ]
        .into_iter()
        .map(|binding| (format_key(binding), binding.description.as_str()))
        .collect()
    }
}

fn format_key(binding: &KeyBinding) -> String {
    let key = match binding.key {
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other),
    };

    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("ctrl+{}", key)
    } else {
        key
    }
}
