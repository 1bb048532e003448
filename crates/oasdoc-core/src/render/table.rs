use crate::config::LabelTable;
use crate::ir::{NormalizedNode, ObjectNode};

use super::{bracket, description_lines, required_name};

/// One row of the flat-table layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Nesting depth; multiply by the configured unit for the left margin.
    pub level: u32,
    pub name: String,
    pub type_text: String,
    pub description_lines: Vec<String>,
}

impl TableRow {
    pub fn left_margin(&self, unit: u32) -> u32 {
        self.level * unit
    }
}

/// Render a normalized node as one flat sequence of indented rows.
///
/// Same dispatch as the tree strategy, but children are appended to the
/// running sequence at `level + 1` instead of nesting. Leaf description
/// lines and required-name marking are shared with the tree renderer.
pub fn render_table(node: &NormalizedNode, name: &str, labels: &LabelTable) -> Vec<TableRow> {
    let mut rows = Vec::new();
    match node {
        // The root object contributes no row of its own; its children start
        // the table at level zero.
        NormalizedNode::Object(object) => push_children(object, 0, labels, &mut rows),
        other => push_rows(other, name, 0, false, labels, &mut rows),
    }
    rows
}

fn push_children(object: &ObjectNode, level: u32, labels: &LabelTable, rows: &mut Vec<TableRow>) {
    for (child_name, prop) in &object.children {
        push_rows(
            &prop.node,
            &required_name(child_name, prop.required),
            level,
            false,
            labels,
            rows,
        );
    }
}

fn push_rows(
    node: &NormalizedNode,
    name: &str,
    level: u32,
    in_array: bool,
    labels: &LabelTable,
    rows: &mut Vec<TableRow>,
) {
    match node {
        NormalizedNode::Primitive(descriptor) => rows.push(TableRow {
            level,
            name: name.to_string(),
            type_text: bracket(descriptor.base_type.clone(), in_array),
            description_lines: description_lines(descriptor, labels),
        }),
        NormalizedNode::RecursiveRef(target) => rows.push(TableRow {
            level,
            name: name.to_string(),
            type_text: bracket(format!("{{{target}}}"), in_array),
            description_lines: Vec::new(),
        }),
        NormalizedNode::Object(object) => {
            rows.push(TableRow {
                level,
                name: name.to_string(),
                type_text: "object".to_string(),
                description_lines: Vec::new(),
            });
            push_children(object, level + 1, labels, rows);
        }
        NormalizedNode::Array(array) => {
            rows.push(TableRow {
                level,
                name: name.to_string(),
                type_text: "array".to_string(),
                description_lines: Vec::new(),
            });
            match array.element.as_ref() {
                NormalizedNode::Object(object) => push_children(object, level + 1, labels, rows),
                other => push_rows(other, "", level + 1, true, labels, rows),
            }
        }
        NormalizedNode::Composition(composition) => {
            rows.push(TableRow {
                level,
                name: name.to_string(),
                type_text: composition.kind.label().to_string(),
                description_lines: Vec::new(),
            });
            for (i, variant) in composition.variants.iter().enumerate() {
                let option_name = variant
                    .synthetic_name
                    .clone()
                    .unwrap_or_else(|| format!("{} {}", labels.option, i + 1));
                push_rows(&variant.node, &option_name, level + 1, false, labels, rows);
            }
        }
    }
}
