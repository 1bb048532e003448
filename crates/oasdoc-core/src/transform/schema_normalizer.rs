use indexmap::IndexMap;
use log::debug;

use crate::ir::{
    ArrayNode, CompositionKind, CompositionNode, CompositionVariant, NormalizedNode, ObjectNode,
    ObjectProperty,
};
use crate::parse::schema::{Schema, SchemaOrRef};

use super::type_info::{describe, describe_schema};

/// Convert a raw schema node into its normalized form.
///
/// Dispatch precedence: reference pointer, object shape, array items, allOf,
/// anyOf/oneOf, primitive. An absent schema — or a leaf that carries neither
/// a type nor a format — yields `None`, and that absence propagates upward
/// without ever raising.
pub fn normalize(schema: Option<&SchemaOrRef>) -> Option<NormalizedNode> {
    match schema? {
        r @ SchemaOrRef::Ref { .. } => Some(NormalizedNode::RecursiveRef(
            r.ref_target().unwrap_or_default().to_string(),
        )),
        SchemaOrRef::Schema(s) => normalize_schema(s),
    }
}

fn normalize_schema(schema: &Schema) -> Option<NormalizedNode> {
    if schema.is_object_shaped() {
        Some(normalize_object(schema))
    } else if schema.items.is_some() {
        let element = normalize(schema.items.as_deref())?;
        Some(NormalizedNode::Array(ArrayNode {
            description: schema.description.clone().unwrap_or_default(),
            element: Box::new(element),
        }))
    } else if !schema.all_of.is_empty() {
        normalize_all_of(schema)
    } else if !schema.any_of.is_empty() || !schema.one_of.is_empty() {
        Some(normalize_any_one_of(schema))
    } else {
        let descriptor = describe_schema(schema);
        if descriptor.is_untyped() {
            None
        } else {
            Some(NormalizedNode::Primitive(descriptor))
        }
    }
}

fn normalize_object(schema: &Schema) -> NormalizedNode {
    let mut children = IndexMap::new();
    for (name, prop) in &schema.properties {
        if let Some(node) = normalize(Some(prop)) {
            children.insert(
                name.clone(),
                ObjectProperty {
                    node,
                    required: schema.required.contains(name),
                },
            );
        }
    }
    NormalizedNode::Object(ObjectNode {
        description: schema.description.clone().unwrap_or_default(),
        children,
    })
}

fn normalize_all_of(schema: &Schema) -> Option<NormalizedNode> {
    // A lone non-object, non-array member is a pass-through: the wrapping
    // allOf is elided and the member's descriptor stands alone.
    if schema.all_of.len() == 1 {
        let member = &schema.all_of[0];
        let shaped = member
            .as_schema()
            .map(|s| !s.properties.is_empty() || s.items.is_some())
            .unwrap_or(false);
        if !shaped {
            return Some(NormalizedNode::Primitive(describe(member)));
        }
    }

    // Multi-member allOf: every member's keys land in one merged object.
    // Later members overwrite earlier ones on name collision; the colliding
    // key keeps its original position.
    let mut children: IndexMap<String, ObjectProperty> = IndexMap::new();
    for member in &schema.all_of {
        match member {
            SchemaOrRef::Ref { .. } => {
                let name = format!("prop{}", children.len());
                children.insert(
                    name,
                    ObjectProperty {
                        node: NormalizedNode::Primitive(describe(member)),
                        required: false,
                    },
                );
            }
            SchemaOrRef::Schema(s) if s.is_object_shaped() || s.is_composite() => {
                match normalize_schema(s) {
                    Some(NormalizedNode::Object(merged)) => {
                        for (name, prop) in merged.children {
                            children.insert(name, prop);
                        }
                    }
                    Some(node @ NormalizedNode::Composition(_)) => {
                        let kind = match &node {
                            NormalizedNode::Composition(c) => c.kind,
                            _ => unreachable!(),
                        };
                        children.insert(
                            kind.label().to_string(),
                            ObjectProperty {
                                node,
                                required: false,
                            },
                        );
                    }
                    Some(node) => {
                        let name = format!("prop{}", children.len());
                        children.insert(
                            name,
                            ObjectProperty {
                                node,
                                required: false,
                            },
                        );
                    }
                    None => {}
                }
            }
            SchemaOrRef::Schema(s) if s.is_array_shaped() => {
                // Array members fold into the merged object space instead of
                // surviving as a true array; successive array members
                // overwrite each other. Deliberate, see DESIGN.md.
                debug!("allOf array member folded into object merge");
                if let Some(node) = normalize_schema(s) {
                    children.insert(
                        "0".to_string(),
                        ObjectProperty {
                            node,
                            required: false,
                        },
                    );
                }
            }
            SchemaOrRef::Schema(s) if s.schema_type.is_some() => {
                let name = format!("prop{}", children.len());
                children.insert(
                    name,
                    ObjectProperty {
                        node: NormalizedNode::Primitive(describe_schema(s)),
                        required: false,
                    },
                );
            }
            SchemaOrRef::Schema(_) => {} // shapeless member, nothing to merge
        }
    }

    Some(NormalizedNode::Object(ObjectNode {
        description: schema.description.clone().unwrap_or_default(),
        children,
    }))
}

fn normalize_any_one_of(schema: &Schema) -> NormalizedNode {
    let (kind, members) = if !schema.any_of.is_empty() {
        (CompositionKind::AnyOf, &schema.any_of)
    } else {
        (CompositionKind::OneOf, &schema.one_of)
    };

    let mut variants = Vec::with_capacity(members.len());
    for member in members {
        let variant = match member {
            SchemaOrRef::Ref { .. } => CompositionVariant {
                synthetic_name: Some(format!("prop{}", variants.len())),
                node: NormalizedNode::RecursiveRef(
                    member.ref_target().unwrap_or_default().to_string(),
                ),
            },
            SchemaOrRef::Schema(s) => {
                if s.is_object_shaped() || s.is_composite() || s.is_array_shaped() {
                    match normalize_schema(s) {
                        Some(node) => CompositionVariant {
                            synthetic_name: None,
                            node,
                        },
                        None => continue,
                    }
                } else {
                    CompositionVariant {
                        synthetic_name: Some(format!("prop{}", variants.len())),
                        node: NormalizedNode::Primitive(describe_schema(s)),
                    }
                }
            }
        };
        variants.push(variant);
    }

    NormalizedNode::Composition(CompositionNode { kind, variants })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(v: serde_json::Value) -> SchemaOrRef {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_absent_schema_yields_nothing() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_ref_always_short_circuits() {
        let n = normalize(Some(&node(
            serde_json::json!({ "$ref": "#/components/schemas/Node" }),
        )));
        assert_eq!(n, Some(NormalizedNode::RecursiveRef("Node".to_string())));
    }

    #[test]
    fn test_nested_ref_never_expanded() {
        let n = normalize(Some(&node(serde_json::json!({
            "type": "object",
            "properties": {
                "children": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Node" }
                }
            }
        }))))
        .unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        let NormalizedNode::Array(arr) = &obj.children["children"].node else {
            panic!("expected array")
        };
        assert_eq!(
            *arr.element,
            NormalizedNode::RecursiveRef("Node".to_string())
        );
    }

    #[test]
    fn test_object_children_and_required() {
        let n = normalize(Some(&node(serde_json::json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" }
            }
        }))))
        .unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        assert_eq!(obj.children.len(), 2);
        assert!(obj.children["id"].required);
        assert!(!obj.children["name"].required);
    }

    #[test]
    fn test_items_win_without_declared_type() {
        let n = normalize(Some(&node(serde_json::json!({
            "items": { "type": "string" }
        }))))
        .unwrap();
        assert!(matches!(n, NormalizedNode::Array(_)));
    }

    #[test]
    fn test_all_of_single_scalar_collapses() {
        let n = normalize(Some(&node(serde_json::json!({
            "allOf": [ { "type": "string", "format": "uuid" } ]
        }))))
        .unwrap();
        let NormalizedNode::Primitive(d) = n else {
            panic!("expected primitive")
        };
        assert_eq!(d.base_type, "uuid");
    }

    #[test]
    fn test_all_of_merges_objects_later_wins() {
        let n = normalize(Some(&node(serde_json::json!({
            "allOf": [
                { "type": "object", "properties": {
                    "a": { "type": "string", "description": "first" },
                    "b": { "type": "integer" }
                }},
                { "type": "object", "properties": {
                    "a": { "type": "string", "description": "second" }
                }}
            ]
        }))))
        .unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        assert_eq!(obj.children.len(), 2);
        // Collision keeps the first position but takes the later value
        assert_eq!(obj.children.get_index(0).unwrap().0, "a");
        let NormalizedNode::Primitive(d) = &obj.children["a"].node else {
            panic!("expected primitive")
        };
        assert_eq!(d.description, "second");
    }

    #[test]
    fn test_all_of_scalar_members_get_synthetic_names() {
        let n = normalize(Some(&node(serde_json::json!({
            "allOf": [
                { "type": "object", "properties": { "a": { "type": "string" } } },
                { "type": "integer" }
            ]
        }))))
        .unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        assert!(obj.children.contains_key("prop1"));
    }

    #[test]
    fn test_all_of_array_member_folds_into_merge() {
        let n = normalize(Some(&node(serde_json::json!({
            "allOf": [
                { "type": "object", "properties": { "a": { "type": "string" } } },
                { "type": "array", "items": { "type": "string" } }
            ]
        }))))
        .unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        assert!(matches!(
            obj.children["0"].node,
            NormalizedNode::Array(_)
        ));
    }

    #[test]
    fn test_any_of_variants_in_order() {
        let n = normalize(Some(&node(serde_json::json!({
            "anyOf": [
                { "type": "object", "properties": { "a": { "type": "string" } } },
                { "type": "integer" }
            ]
        }))))
        .unwrap();
        let NormalizedNode::Composition(c) = n else {
            panic!("expected composition")
        };
        assert_eq!(c.kind, CompositionKind::AnyOf);
        assert_eq!(c.variants.len(), 2);
        assert!(c.variants[0].synthetic_name.is_none());
        assert_eq!(c.variants[1].synthetic_name.as_deref(), Some("prop1"));
    }

    #[test]
    fn test_one_of_kind() {
        let n = normalize(Some(&node(serde_json::json!({
            "oneOf": [ { "type": "string" }, { "type": "integer" } ]
        }))))
        .unwrap();
        let NormalizedNode::Composition(c) = n else {
            panic!("expected composition")
        };
        assert_eq!(c.kind, CompositionKind::OneOf);
    }

    #[test]
    fn test_untyped_leaf_is_empty_marker() {
        let n = normalize(Some(&node(serde_json::json!({ "description": "free text" }))));
        assert_eq!(n, None);
    }

    #[test]
    fn test_empty_object_still_an_object() {
        let n = normalize(Some(&node(serde_json::json!({ "type": "object" })))).unwrap();
        let NormalizedNode::Object(obj) = n else {
            panic!("expected object")
        };
        assert!(obj.children.is_empty());
    }
}
