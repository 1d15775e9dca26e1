use dioxus::prelude::*;

use vschema_editor::components;
use vschema_editor::config::AppConfig;
use vschema_editor::schema::load_seed_schema;
use vschema_editor::state::AppState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize logging
    init_logger();

    tracing::info!("Starting VSchema Editor");

    // Launch the desktop application
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize shared application state
    let app_state = use_context_provider(|| Signal::new(AppState::new(load_config())));
    let theme = app_state.read().theme;

    // Read the seed schema once, if one is configured
    use_hook(move || {
        let seed = app_state.read().config.peek().seed_schema.clone();
        let Some(path) = seed else {
            return;
        };
        let mut sidebar = app_state.read().sidebar;
        let mut load_error = app_state.read().load_error;
        spawn(async move {
            match load_seed_schema(&path).await {
                Ok(vschema) => {
                    if let Err(e) = sidebar.write().store_mut().load(vschema) {
                        load_error.set(Some(e.user_message()));
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to load seed schema {:?}: {}", path, e);
                    load_error.set(Some(e.user_message()));
                }
            }
        });
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-container {theme.read().class_name()}",

            // Main layout with sidebar and content area
            div {
                class: "main-layout",

                // Keyspace list and editor
                components::sidebar::Sidebar {}

                // Definition of the selected keyspace
                div {
                    class: "content-area",
                    components::schema_viewer::SchemaViewer {}
                }
            }

            // Status bar at the bottom
            components::statusbar::StatusBar {}
        }
    }
}

fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{}; using default configuration", e);
        AppConfig::default()
    })
}

/// Initialize the application logger with environment-based configuration
fn init_logger() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vschema_editor=debug,warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}
