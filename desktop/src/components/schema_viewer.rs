use dioxus::prelude::*;

use crate::schema::Keyspace;
use crate::state::AppState;
use crate::store::SchemaStore;

#[component]
pub fn SchemaViewer() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let sidebar = app_state.read().sidebar;
    let selected_keyspace = app_state.read().selected_keyspace;
    let show_json = app_state.read().config.read().preferences.show_schema_json;

    let selected = selected_keyspace.read().clone();
    let keyspace = selected
        .as_ref()
        .and_then(|name| sidebar.read().store().keyspaces().get(name).cloned());

    let json = if show_json {
        match sidebar.read().store().current().to_json_pretty() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to render schema JSON: {}", e);
                e.user_message()
            }
        }
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "schema-viewer",

            if let (Some(name), Some(keyspace)) = (selected, keyspace) {
                KeyspaceDetails { name, keyspace }
            } else {
                div { class: "empty-state", "Select a keyspace to view its definition" }
            }

            if show_json {
                pre {
                    class: "schema-json",
                    "{json}"
                }
            }
        }
    }
}

#[component]
fn KeyspaceDetails(name: String, keyspace: Keyspace) -> Element {
    let kind = keyspace.kind_label();

    rsx! {
        div {
            class: "schema-header",
            h2 { "{name}" }
            span { class: "keyspace-kind", "{kind}" }
        }

        if keyspace.sharded {
            h4 { "Vindexes" }
            if keyspace.vindexes.is_empty() {
                div { class: "empty-state", "No vindexes" }
            } else {
                table {
                    class: "results-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            th { "Owner" }
                        }
                    }
                    tbody {
                        for (vindex_name, vindex) in keyspace.vindexes.iter() {
                            tr {
                                key: "{vindex_name}",
                                td { span { class: "column-name", "{vindex_name}" } }
                                td { span { class: "column-type", "{vindex.vindex_type}" } }
                                td { "{vindex.owner}" }
                            }
                        }
                    }
                }
            }
        }

        h4 { "Tables" }
        if keyspace.tables.is_empty() {
            div { class: "empty-state", "No tables" }
        } else {
            table {
                class: "results-table",
                thead {
                    tr {
                        th { "Table" }
                        th { "Class" }
                    }
                }
                tbody {
                    for (table_name, class) in keyspace.tables.iter() {
                        tr {
                            key: "{table_name}",
                            td { span { class: "column-name", "{table_name}" } }
                            td { "{class}" }
                        }
                    }
                }
            }
        }
    }
}
