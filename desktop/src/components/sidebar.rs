use dioxus::prelude::*;

use crate::state::AppState;
use crate::store::SchemaStore;

#[component]
pub fn Sidebar() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let mut sidebar = app_state.read().sidebar;
    let mut selected_keyspace = app_state.read().selected_keyspace;
    let mut load_error = app_state.read().load_error;
    let mut keyspace_name = use_signal(String::new);
    let mut sharded = use_signal(|| false);

    let (keyspaces, err) = {
        let controller = sidebar.read();
        let keyspaces: Vec<(String, &'static str)> = controller
            .store()
            .keyspaces()
            .iter()
            .map(|(name, keyspace)| (name.clone(), keyspace.kind_label()))
            .collect();
        (keyspaces, controller.keyspace_editor().err.clone())
    };

    rsx! {
        div {
            class: "sidebar",

            // Header with title and reset button
            div {
                class: "sidebar-header",

                h3 {
                    class: "sidebar-title",
                    "Keyspaces"
                }

                button {
                    class: "btn-small btn-danger",
                    title: "Discard all edits",
                    onclick: move |_| {
                        sidebar.write().reset();
                        selected_keyspace.set(None);
                        load_error.set(None);
                    },
                    "Reset"
                }
            }

            // Keyspace list
            div {
                class: "keyspace-list",

                if keyspaces.is_empty() {
                    div {
                        class: "empty-tables",
                        "No keyspaces defined"
                    }
                } else {
                    for (name, kind) in keyspaces.into_iter() {
                        div {
                            key: "{name}",
                            class: if selected_keyspace.read().as_deref() == Some(name.as_str()) {
                                "keyspace-item selected"
                            } else {
                                "keyspace-item"
                            },
                            onclick: {
                                let name = name.clone();
                                move |_| selected_keyspace.set(Some(name.clone()))
                            },

                            span {
                                class: "keyspace-name",
                                "{name}"
                            }

                            span {
                                class: "keyspace-kind",
                                "{kind}"
                            }
                        }
                    }
                }
            }

            // Add keyspace form
            div {
                class: "keyspace-editor",

                div {
                    class: "form-group",
                    label { "New keyspace" }
                    input {
                        r#type: "text",
                        value: "{keyspace_name.read()}",
                        oninput: move |e| keyspace_name.set(e.value()),
                        placeholder: "keyspace name"
                    }
                }

                div {
                    class: "form-row",
                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: *sharded.read(),
                            onchange: move |e| sharded.set(e.checked())
                        }
                        "Sharded"
                    }

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let name = keyspace_name.read().clone();
                            sidebar.write().add_keyspace(&name, *sharded.read());
                            if !sidebar.read().has_error() {
                                keyspace_name.set(String::new());
                                selected_keyspace.set(Some(name));
                            }
                        },
                        "Add"
                    }
                }

                if !err.is_empty() {
                    div {
                        class: "keyspace-error",

                        span { "{err}" }

                        button {
                            class: "btn-close",
                            title: "Dismiss",
                            onclick: move |_| sidebar.write().clear_keyspace_error(),
                            "×"
                        }
                    }
                }
            }
        }
    }
}
