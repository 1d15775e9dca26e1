pub mod config;
pub mod controller;
pub mod error;
pub mod schema;
pub mod state;
pub mod store;
pub mod components {
    pub mod schema_viewer;
    pub mod sidebar;
    pub mod statusbar;
}
