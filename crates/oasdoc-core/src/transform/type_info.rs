use crate::ir::{ReadWrite, TypeDescriptor};
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

/// Derive a render-oriented `TypeDescriptor` from one schema node.
///
/// Pure function of the node: a reference pointer yields the `{recursive}`
/// marker with the pointer's target name as description, everything else is
/// read straight off the schema's own fields.
pub fn describe(schema_or_ref: &SchemaOrRef) -> TypeDescriptor {
    match schema_or_ref {
        SchemaOrRef::Ref { .. } => TypeDescriptor {
            base_type: "{recursive}".to_string(),
            description: schema_or_ref.ref_target().unwrap_or_default().to_string(),
            ..TypeDescriptor::default()
        },
        SchemaOrRef::Schema(schema) => describe_schema(schema),
    }
}

/// `describe` for an already-unwrapped inline schema.
pub fn describe_schema(schema: &Schema) -> TypeDescriptor {
    let mut info = TypeDescriptor {
        base_type: base_type(schema),
        format: schema.format.clone().unwrap_or_default(),
        pattern: if schema.enum_values.is_empty() {
            schema.pattern.clone().unwrap_or_default()
        } else {
            String::new()
        },
        read_write: read_write(schema),
        deprecated: schema.deprecated.unwrap_or(false),
        default_value: schema
            .default_value
            .as_ref()
            .map(default_text)
            .unwrap_or_default(),
        description: schema.description.clone().unwrap_or_default(),
        allowed_values: literal_texts(&schema.enum_values),
        constraint: String::new(),
        array_element_type: None,
    };

    if schema.is_array_shaped() {
        let owner = schema
            .schema_type
            .map(|t| t.as_str())
            .unwrap_or("array");
        info.array_element_type = Some(format!("{} of {}", owner, item_type_text(schema)));
        if let Some(item) = schema.items.as_deref().and_then(SchemaOrRef::as_schema) {
            if info.default_value.is_empty() {
                info.default_value = item
                    .default_value
                    .as_ref()
                    .map(default_text)
                    .unwrap_or_default();
            }
            if info.allowed_values.is_empty() {
                info.allowed_values = literal_texts(&item.enum_values);
            }
        }
    } else if matches!(
        schema.schema_type,
        Some(SchemaType::Integer) | Some(SchemaType::Number)
    ) {
        info.constraint = numeric_constraint(schema);
    } else if schema.schema_type == Some(SchemaType::String) {
        info.constraint = length_constraint(schema);
    }

    info
}

fn base_type(schema: &Schema) -> String {
    if !schema.enum_values.is_empty() {
        "enum".to_string()
    } else if let Some(ref format) = schema.format {
        format.clone()
    } else if let Some(t) = schema.schema_type {
        t.as_str().to_string()
    } else {
        String::new()
    }
}

fn read_write(schema: &Schema) -> ReadWrite {
    if schema.read_only.unwrap_or(false) {
        ReadWrite::ReadOnly
    } else if schema.write_only.unwrap_or(false) {
        ReadWrite::WriteOnly
    } else {
        ReadWrite::None
    }
}

fn item_type_text(schema: &Schema) -> String {
    match schema.items.as_deref() {
        Some(SchemaOrRef::Schema(item)) => item
            .schema_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        Some(r @ SchemaOrRef::Ref { .. }) => r.ref_target().unwrap_or_default().to_string(),
        None => String::new(),
    }
}

/// `multipleOf` text overrides any min/max bound text.
fn numeric_constraint(schema: &Schema) -> String {
    if let Some(n) = schema.multiple_of {
        return format!("multiple of {}", fmt_number(n));
    }
    let excl_min = schema.exclusive_minimum.unwrap_or(false);
    let excl_max = schema.exclusive_maximum.unwrap_or(false);
    match (schema.minimum, schema.maximum) {
        (Some(min), Some(max)) => {
            let lower = if excl_min { ">" } else { "between " };
            let upper = if excl_max { "<" } else { "" };
            format!("{}{} and {} {}", lower, fmt_number(min), upper, fmt_number(max))
        }
        (Some(min), None) => {
            format!("{}{}", if excl_min { ">" } else { ">=" }, fmt_number(min))
        }
        (None, Some(max)) => {
            format!("{}{}", if excl_max { "<" } else { "<=" }, fmt_number(max))
        }
        (None, None) => String::new(),
    }
}

fn length_constraint(schema: &Schema) -> String {
    match (schema.min_length, schema.max_length) {
        (Some(min), Some(max)) => format!("{min} to {max} chars"),
        (Some(min), None) => format!("min:{min} chars"),
        (None, Some(max)) => format!("max:{max} chars"),
        (None, None) => String::new(),
    }
}

fn fmt_number(n: f64) -> String {
    // f64 Display already prints integral values without a trailing ".0"
    format!("{n}")
}

fn default_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        // `false` is swallowed the way the pre-existing documents expect;
        // zero stays visible.
        serde_json::Value::Bool(b) => {
            if *b {
                "true".to_string()
            } else {
                String::new()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn literal_texts(values: &[serde_json::Value]) -> Vec<String> {
    values
        .iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(v: serde_json::Value) -> Schema {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_enum_wins_over_type_and_format() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "string",
            "format": "uuid",
            "enum": ["a", "b"]
        })));
        assert_eq!(d.base_type, "enum");
        assert_eq!(d.allowed_values, vec!["a", "b"]);
        assert_eq!(d.format, "uuid");
    }

    #[test]
    fn test_format_wins_over_type() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "string",
            "format": "date-time"
        })));
        assert_eq!(d.base_type, "date-time");
    }

    #[test]
    fn test_ref_is_recursive_marker() {
        let r: SchemaOrRef =
            serde_json::from_value(serde_json::json!({ "$ref": "#/components/schemas/Pet" }))
                .unwrap();
        let d = describe(&r);
        assert_eq!(d.base_type, "{recursive}");
        assert_eq!(d.description, "Pet");
    }

    #[test]
    fn test_numeric_both_bounds_inclusive() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "integer",
            "minimum": 1,
            "maximum": 10
        })));
        assert_eq!(d.constraint, "between 1 and  10");
    }

    #[test]
    fn test_numeric_exclusive_lower_bound() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "integer",
            "minimum": 1,
            "maximum": 10,
            "exclusiveMinimum": true
        })));
        assert_eq!(d.constraint, ">1 and  10");
    }

    #[test]
    fn test_numeric_single_bounds() {
        let lower = describe_schema(&schema(serde_json::json!({
            "type": "number",
            "minimum": 0.5
        })));
        assert_eq!(lower.constraint, ">=0.5");

        let upper = describe_schema(&schema(serde_json::json!({
            "type": "number",
            "maximum": 99,
            "exclusiveMaximum": true
        })));
        assert_eq!(upper.constraint, "<99");
    }

    #[test]
    fn test_multiple_of_overrides_bounds() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "integer",
            "minimum": 0,
            "maximum": 100,
            "multipleOf": 5
        })));
        assert_eq!(d.constraint, "multiple of 5");
    }

    #[test]
    fn test_string_length_text() {
        let both = describe_schema(&schema(serde_json::json!({
            "type": "string", "minLength": 2, "maxLength": 8
        })));
        assert_eq!(both.constraint, "2 to 8 chars");

        let min = describe_schema(&schema(serde_json::json!({
            "type": "string", "minLength": 2
        })));
        assert_eq!(min.constraint, "min:2 chars");

        let max = describe_schema(&schema(serde_json::json!({
            "type": "string", "maxLength": 8
        })));
        assert_eq!(max.constraint, "max:8 chars");
    }

    #[test]
    fn test_array_element_type_and_fallbacks() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "array",
            "items": { "type": "string", "enum": ["x", "y"], "default": "x" }
        })));
        assert_eq!(d.array_element_type.as_deref(), Some("array of string"));
        assert_eq!(d.allowed_values, vec!["x", "y"]);
        assert_eq!(d.default_value, "x");
        // Arrays never carry range text
        assert!(d.constraint.is_empty());
    }

    #[test]
    fn test_zero_default_stays_visible() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "integer", "default": 0
        })));
        assert_eq!(d.default_value, "0");
    }

    #[test]
    fn test_read_only_wins_over_write_only() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "string", "readOnly": true, "writeOnly": true
        })));
        assert_eq!(d.read_write, ReadWrite::ReadOnly);
    }

    #[test]
    fn test_pattern_suppressed_by_enum() {
        let d = describe_schema(&schema(serde_json::json!({
            "type": "string", "pattern": "^a+$", "enum": ["aa"]
        })));
        assert!(d.pattern.is_empty());
    }

    #[test]
    fn test_untyped_leaf_is_empty() {
        let d = describe_schema(&schema(serde_json::json!({ "description": "anything" })));
        assert!(d.is_untyped());
    }
}
