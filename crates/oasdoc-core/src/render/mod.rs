pub mod table;
pub mod tree;

pub use table::{TableRow, render_table};
pub use tree::render_tree;

use crate::config::{DocConfig, LabelTable, SchemaStyle};
use crate::ir::{NormalizedNode, ReadWrite, TypeDescriptor};

/// One node of the layout tree handed to the document engine. Every variant
/// is independently renderable; nothing points back into the original
/// schema.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Leaf {
        name: String,
        type_text: String,
        description_lines: Vec<String>,
    },
    Branch {
        name: String,
        /// Header text next to the opening decoration.
        description: String,
        opening: &'static str,
        rows: Vec<RenderNode>,
        closing: &'static str,
        is_array: bool,
    },
    OptionGroup {
        name: String,
        /// `"ANY OF"` / `"ONE OF"`.
        label: String,
        options: Vec<RenderNode>,
    },
}

/// Output of `render_schema`, shaped by the configured `SchemaStyle`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaRender {
    Tree(RenderNode),
    Table(Vec<TableRow>),
}

/// Render a normalized schema with the strategy the configuration selects.
pub fn render_schema(node: &NormalizedNode, name: &str, config: &DocConfig) -> SchemaRender {
    match config.schema_style {
        SchemaStyle::Tree => SchemaRender::Tree(tree::render_tree(node, name, &config.labels)),
        SchemaStyle::Table => SchemaRender::Table(table::render_table(node, name, &config.labels)),
    }
}

/// Assemble a leaf's description column. Both strategies share this so the
/// line ordering is identical: read/write flag, deprecated flag, constraint,
/// labeled default, labeled allowed values, labeled pattern, free text.
pub(crate) fn description_lines(descriptor: &TypeDescriptor, labels: &LabelTable) -> Vec<String> {
    let mut lines = Vec::new();
    if descriptor.read_write != ReadWrite::None {
        lines.push(descriptor.read_write.as_str().to_string());
    }
    if descriptor.deprecated {
        lines.push(labels.deprecated.clone());
    }
    if !descriptor.constraint.is_empty() {
        lines.push(descriptor.constraint.clone());
    }
    if !descriptor.default_value.is_empty() {
        lines.push(format!("{}: {}", labels.default, descriptor.default_value));
    }
    if !descriptor.allowed_values.is_empty() {
        lines.push(format!(
            "{}: {}",
            labels.allowed,
            descriptor.allowed_values.join(", ")
        ));
    }
    if !descriptor.pattern.is_empty() {
        lines.push(format!("{}: {}", labels.pattern, descriptor.pattern));
    }
    if !descriptor.description.is_empty() {
        lines.push(descriptor.description.clone());
    }
    lines
}

/// `[type]` when the leaf sits directly inside an array.
pub(crate) fn bracket(type_text: String, in_array: bool) -> String {
    if in_array {
        format!("[{type_text}]")
    } else {
        type_text
    }
}

/// Required children carry a `*` suffix on their name.
pub(crate) fn required_name(name: &str, required: bool) -> String {
    if required {
        format!("{name}*")
    } else {
        name.to_string()
    }
}
