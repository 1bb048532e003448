use crate::config::LabelTable;
use crate::ir::{ArrayNode, CompositionNode, NormalizedNode, ObjectNode};

use super::{RenderNode, bracket, description_lines, required_name};

/// Render a normalized node as a nested, bracketed tree.
///
/// Objects open with `{` and close with `}`, arrays of objects with `[{` and
/// `}]`; anyOf/oneOf become option groups. Rendering never fails — a
/// malformed node (say, an object with no children) still produces a valid
/// branch with empty rows.
pub fn render_tree(node: &NormalizedNode, name: &str, labels: &LabelTable) -> RenderNode {
    render_node(node, name, false, labels)
}

fn render_node(node: &NormalizedNode, name: &str, in_array: bool, labels: &LabelTable) -> RenderNode {
    match node {
        NormalizedNode::Primitive(descriptor) => RenderNode::Leaf {
            name: name.to_string(),
            type_text: bracket(descriptor.base_type.clone(), in_array),
            description_lines: description_lines(descriptor, labels),
        },
        NormalizedNode::RecursiveRef(target) => RenderNode::Leaf {
            name: name.to_string(),
            type_text: bracket(format!("{{{target}}}"), in_array),
            description_lines: Vec::new(),
        },
        NormalizedNode::Object(object) => render_object(object, name, false, labels),
        NormalizedNode::Array(array) => render_array(array, name, labels),
        NormalizedNode::Composition(composition) => {
            render_composition(composition, name, labels)
        }
    }
}

fn render_object(
    object: &ObjectNode,
    name: &str,
    is_array: bool,
    labels: &LabelTable,
) -> RenderNode {
    let rows = object
        .children
        .iter()
        .map(|(child_name, prop)| {
            render_node(
                &prop.node,
                &required_name(child_name, prop.required),
                false,
                labels,
            )
        })
        .collect();

    let description = if is_array {
        format!("{} {}", labels.array_of_object, object.description)
            .trim_end()
            .to_string()
    } else {
        object.description.clone()
    };

    RenderNode::Branch {
        name: name.to_string(),
        description,
        opening: if is_array { "[{" } else { "{" },
        rows,
        closing: if is_array { "}]" } else { "}" },
        is_array,
    }
}

fn render_array(array: &ArrayNode, name: &str, labels: &LabelTable) -> RenderNode {
    match array.element.as_ref() {
        NormalizedNode::Object(object) => {
            // The branch header prefers the element's own description and
            // falls back to the array node's.
            let mut element = object.clone();
            if element.description.is_empty() {
                element.description = array.description.clone();
            }
            render_object(&element, name, true, labels)
        }
        other => render_node(other, name, true, labels),
    }
}

fn render_composition(
    composition: &CompositionNode,
    name: &str,
    labels: &LabelTable,
) -> RenderNode {
    let options = composition
        .variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let option_name = variant
                .synthetic_name
                .clone()
                .unwrap_or_else(|| format!("{} {}", labels.option, i + 1));
            render_node(&variant.node, &option_name, false, labels)
        })
        .collect();

    RenderNode::OptionGroup {
        name: name.to_string(),
        label: composition.kind.label().to_string(),
        options,
    }
}
