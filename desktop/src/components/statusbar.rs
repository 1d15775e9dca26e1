use dioxus::prelude::*;

use crate::state::AppState;
use crate::store::SchemaStore;

#[component]
pub fn StatusBar() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let sidebar = app_state.read().sidebar;
    let load_error = app_state.read().load_error;
    let theme_icon = app_state.read().theme.read().toggle_icon();

    let (keyspace_count, original_count, modified) = {
        let controller = sidebar.read();
        let store = controller.store();
        (
            store.keyspaces().len(),
            store.original().keyspaces.len(),
            store.is_modified(),
        )
    };

    rsx! {
        div {
            class: "status-bar",

            div {
                class: "status-left",
                span {
                    class: "status-item",
                    if modified { "Modified" } else { "Ready" }
                }
            }

            div {
                class: "status-center",
                span {
                    class: "status-item",
                    "{keyspace_count} keyspaces"
                }

                if modified {
                    span {
                        class: "status-item",
                        " ({original_count} in original)"
                    }
                }

                if let Some(err) = load_error.read().as_ref() {
                    span {
                        class: "status-item status-error",
                        "{err}"
                    }
                }
            }

            div {
                class: "status-right",
                button {
                    class: "status-button",
                    onclick: move |_| {
                        let theme = app_state.read().theme;
                        let config = app_state.read().config;
                        AppState::toggle_theme(theme, config);
                    },
                    "{theme_icon}"
                }
            }
        }
    }
}
