use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level document-generation configuration loaded from `.oasdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Sort tag buckets alphabetically instead of first-seen order.
    pub sort_tags: bool,
    /// Which schema layout the renderer produces.
    pub schema_style: SchemaStyle,
    /// Left-margin points added per nesting level in table layout.
    pub indent_unit: u32,
    pub labels: LabelTable,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            sort_tags: false,
            schema_style: SchemaStyle::Tree,
            indent_unit: 10,
            labels: LabelTable::default(),
        }
    }
}

/// How a schema is laid out in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaStyle {
    /// Nested, bracketed object tree.
    #[default]
    Tree,
    /// One flat table with indentation levels.
    Table,
}

/// Display strings threaded through the renderer. Swap the fields to
/// localize the generated document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelTable {
    pub default: String,
    pub allowed: String,
    pub pattern: String,
    pub deprecated: String,
    pub array_of_object: String,
    pub option: String,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self {
            default: "DEFAULT".to_string(),
            allowed: "ALLOWED".to_string(),
            pattern: "PATTERN".to_string(),
            deprecated: "DEPRECATED".to_string(),
            array_of_object: "Array of object:".to_string(),
            option: "OPTION".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oasdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<DocConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: DocConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}
