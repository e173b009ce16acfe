//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::session::{SessionStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle button: shows the theme you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Theme preference bound to a session store.
pub struct ThemePreference<'a> {
    store: &'a mut SessionStore,
}

impl<'a> ThemePreference<'a> {
    pub fn new(store: &'a mut SessionStore) -> Self {
        Self { store }
    }

    /// Stored theme; missing or unrecognised values fall back to light.
    pub fn current(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str());
        self.store.save()
    }

    /// Flips the theme and persists it. Returns the new theme.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current().toggled();
        self.set(next)?;
        tracing::debug!("Theme switched to {}", next);
        Ok(next)
    }
}
