//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! The active theme is owned by one `ThemeState` value rather than read back
//! from the document. `set` persists through a `PreferenceStore` and then
//! notifies subscribers, which is how the browser layer updates `data-theme`
//! and the toggle icon.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Document attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Icon classes to add and remove for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSwap {
    pub show: &'static str,
    pub hide: &'static str,
}

impl Theme {
    /// Stored and attribute representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Dark mode shows the sun (switch to light); light mode shows the moon.
    #[must_use]
    pub fn icon_classes(self) -> IconSwap {
        match self {
            Self::Dark => IconSwap { show: "fa-sun", hide: "fa-moon" },
            Self::Light => IconSwap { show: "fa-moon", hide: "fa-sun" },
        }
    }
}

/// Resolve the theme to apply at startup.
///
/// A valid stored preference wins, then the OS dark-mode hint. `None` means
/// nothing is applied and the page renders with its default (light) styling.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Option<Theme> {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return Some(theme);
    }
    prefers_dark.then_some(Theme::Dark)
}

/// Key-value slot for the persisted preference.
///
/// Implementations swallow storage failures: an unavailable store reads as
/// "no preference" and writes are best-effort.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory store for hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

type Listener = Box<dyn Fn(Theme)>;

/// Owner of the active theme.
pub struct ThemeState<S> {
    store: S,
    key: String,
    current: Option<Theme>,
    /// `current` came from the store or a user `set`, not the OS hint.
    explicit: bool,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Load the stored preference under `key` and resolve the initial theme.
    pub fn new(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = store.load(&key);
        let explicit = stored.as_deref().and_then(Theme::parse).is_some();
        let current = resolve_initial(stored.as_deref(), prefers_dark);
        Self { store, key, current, explicit, listeners: Vec::new() }
    }

    /// Active theme; an unresolved start counts as light.
    pub fn get(&self) -> Theme {
        self.current.unwrap_or_default()
    }

    /// Theme resolved at startup or set since, if any.
    pub fn resolved(&self) -> Option<Theme> {
        self.current
    }

    /// Whether the active theme is a persisted user choice.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Make `theme` active, persist it, and notify subscribers.
    pub fn set(&mut self, theme: Theme) {
        self.current = Some(theme);
        self.explicit = true;
        self.store.save(&self.key, theme.as_str());
        for listener in &self.listeners {
            listener(theme);
        }
    }

    /// Flip the active theme and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Register a listener called after every `set`.
    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
