use anyhow::Context;
use std::path::PathBuf;

use vschema_editor::schema::load_seed_schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: check_schema <vschema.json>")?;

    println!("Checking VSchema at {}", path.display());

    let vschema = load_seed_schema(&path)
        .await
        .with_context(|| format!("failed to load {}", path.display()))?;

    println!("Keyspaces: {}", vschema.keyspaces.len());
    for (name, keyspace) in &vschema.keyspaces {
        println!(
            "  {} ({}): {} tables, {} vindexes",
            name,
            keyspace.kind_label(),
            keyspace.tables.len(),
            keyspace.vindexes.len()
        );
    }

    Ok(())
}
