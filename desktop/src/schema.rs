use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EditorError, Result};

/// A vindex definition inside a sharded keyspace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vindex {
    #[serde(rename = "Type")]
    pub vindex_type: String,
    #[serde(rename = "Owner", default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(rename = "Params", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// A keyspace in the VSchema. Tables map a table name to its vindex class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Keyspace {
    #[serde(rename = "Sharded", default)]
    pub sharded: bool,
    #[serde(rename = "Vindexes", default)]
    pub vindexes: BTreeMap<String, Vindex>,
    #[serde(rename = "Tables", default)]
    pub tables: BTreeMap<String, String>,
}

impl Keyspace {
    /// Create an empty keyspace
    pub fn new(sharded: bool) -> Self {
        Self {
            sharded,
            vindexes: BTreeMap::new(),
            tables: BTreeMap::new(),
        }
    }

    /// Short label shown next to the keyspace in the sidebar
    pub fn kind_label(&self) -> &'static str {
        if self.sharded {
            "sharded"
        } else {
            "unsharded"
        }
    }
}

/// `Vindexes` is written for every sharded keyspace, even when empty, and
/// never for unsharded ones.
impl Serialize for Keyspace {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.sharded { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Keyspace", len)?;
        state.serialize_field("Sharded", &self.sharded)?;
        if self.sharded {
            state.serialize_field("Vindexes", &self.vindexes)?;
        } else {
            state.skip_field("Vindexes")?;
        }
        state.serialize_field("Tables", &self.tables)?;
        state.end()
    }
}

/// The full keyspace layout being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VSchema {
    #[serde(rename = "Keyspaces", default)]
    pub keyspaces: BTreeMap<String, Keyspace>,
}

impl VSchema {
    /// Parse a VSchema from its JSON form
    pub fn from_json(content: &str) -> Result<Self> {
        let vschema: Self = serde_json::from_str(content)?;
        vschema.validate()?;
        Ok(vschema)
    }

    /// Render the VSchema as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Unsharded keyspaces cannot carry vindexes.
    fn validate(&self) -> Result<()> {
        for (name, keyspace) in &self.keyspaces {
            if !keyspace.sharded && !keyspace.vindexes.is_empty() {
                return Err(EditorError::schema(format!(
                    "keyspace '{}' is unsharded but defines vindexes",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Insert a new, empty keyspace into the mapping.
///
/// The caller is responsible for checking that `name` is not already present;
/// an existing entry is overwritten.
pub fn add_keyspace(keyspaces: &mut BTreeMap<String, Keyspace>, name: &str, sharded: bool) {
    debug!("Adding keyspace '{}' (sharded: {})", name, sharded);
    keyspaces.insert(name.to_string(), Keyspace::new(sharded));
}

/// Read a seed VSchema from disk
pub async fn load_seed_schema(path: &Path) -> Result<VSchema> {
    let content = tokio::fs::read_to_string(path).await?;
    let vschema = VSchema::from_json(&content)?;
    info!(
        "Loaded seed schema with {} keyspaces from {:?}",
        vschema.keyspaces.len(),
        path
    );
    Ok(vschema)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Keyspaces": {
            "user": {
                "Sharded": true,
                "Vindexes": {
                    "user_index": { "Type": "hash_autoinc", "Owner": "user", "Params": { "Table": "user_idx" } }
                },
                "Tables": { "user": "user_class" }
            },
            "lookup": { "Sharded": false, "Tables": { "user_idx": "" } }
        }
    }"#;

    #[test]
    fn test_add_keyspace_shapes() {
        let mut keyspaces = BTreeMap::new();
        add_keyspace(&mut keyspaces, "main", false);
        add_keyspace(&mut keyspaces, "user", true);

        assert_eq!(keyspaces["main"], Keyspace::new(false));
        assert!(keyspaces["user"].sharded);
        assert!(keyspaces["user"].tables.is_empty());
        assert_eq!(keyspaces["user"].kind_label(), "sharded");
    }

    #[test]
    fn test_parse_sample_schema() {
        let vschema = VSchema::from_json(SAMPLE).unwrap();
        assert_eq!(vschema.keyspaces.len(), 2);

        let user = &vschema.keyspaces["user"];
        assert!(user.sharded);
        assert_eq!(user.vindexes["user_index"].vindex_type, "hash_autoinc");
        assert_eq!(user.vindexes["user_index"].params["Table"], "user_idx");
        assert!(!vschema.keyspaces["lookup"].sharded);
    }

    #[test]
    fn test_unsharded_json_omits_vindexes() {
        let mut vschema = VSchema::default();
        add_keyspace(&mut vschema.keyspaces, "main", false);

        let json = vschema.to_json_pretty().unwrap();
        assert!(json.contains("\"Sharded\": false"));
        assert!(!json.contains("Vindexes"));
    }

    #[test]
    fn test_new_sharded_keyspace_keeps_empty_vindexes() {
        let mut vschema = VSchema::default();
        add_keyspace(&mut vschema.keyspaces, "user", true);

        let json = vschema.to_json_pretty().unwrap();
        assert!(json.contains("\"Vindexes\": {}"));
        assert!(json.contains("\"Tables\": {}"));

        let parsed = VSchema::from_json(&json).unwrap();
        assert_eq!(parsed, vschema);
    }

    #[test]
    fn test_unsharded_keyspace_with_vindexes_is_rejected() {
        let json = r#"{"Keyspaces": {"main": {"Sharded": false, "Vindexes": {"v": {"Type": "hash"}}}}}"#;
        let err = VSchema::from_json(json).unwrap_err();
        assert!(matches!(err, EditorError::SchemaError(_)));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = VSchema::from_json("{not json").unwrap_err();
        assert!(matches!(err, EditorError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_load_seed_schema() {
        let path = std::env::temp_dir().join(format!("vschema-seed-{}.json", std::process::id()));
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let vschema = load_seed_schema(&path).await.unwrap();
        assert!(vschema.keyspaces.contains_key("user"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_seed_schema() {
        let path = std::env::temp_dir().join("vschema-seed-does-not-exist.json");
        let err = load_seed_schema(&path).await.unwrap_err();
        assert!(matches!(err, EditorError::IoError(_)));
    }
}
