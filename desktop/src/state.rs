use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::controller::SidebarController;
use crate::store::CurrentSchema;

/// The sidebar controller as used by the desktop app
pub type KeyspaceSidebar = SidebarController<CurrentSchema>;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub sidebar: Signal<KeyspaceSidebar>,
    pub selected_keyspace: Signal<Option<String>>,
    pub theme: Signal<Theme>,
    pub config: Signal<AppConfig>,
    /// Message from a failed seed-schema load, shown in the status bar.
    pub load_error: Signal<Option<String>>,
}

impl AppState {
    /// Create a new application state with an empty schema
    pub fn new(config: AppConfig) -> Self {
        Self {
            sidebar: Signal::new(SidebarController::new(CurrentSchema::default())),
            selected_keyspace: Signal::new(None),
            theme: Signal::new(Theme::from_name(&config.preferences.theme)),
            config: Signal::new(config),
            load_error: Signal::new(None),
        }
    }

    /// Switch theme and remember the choice in the user preferences
    pub fn toggle_theme(mut theme: Signal<Theme>, mut config: Signal<AppConfig>) {
        let new_theme = theme.read().toggled();
        *theme.write() = new_theme;

        config.write().preferences.theme = new_theme.name().to_string();
        if let Err(e) = config.read().save() {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }
}

/// Application theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme name from the preferences, defaulting to dark
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button, naming the theme it switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    /// Get CSS class name for the theme
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}
