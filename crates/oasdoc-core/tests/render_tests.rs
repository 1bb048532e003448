use oasdoc_core::config::{DocConfig, LabelTable, SchemaStyle};
use oasdoc_core::parse;
use oasdoc_core::parse::schema::SchemaOrRef;
use oasdoc_core::render::{RenderNode, SchemaRender, render_schema, render_tree};
use oasdoc_core::transform::normalize;

const SCHEMAS: &str = include_str!("fixtures/schemas.yaml");

fn normalized(name: &str) -> oasdoc_core::ir::NormalizedNode {
    let spec = parse::from_yaml(SCHEMAS).unwrap();
    let schema: SchemaOrRef = spec
        .components
        .expect("fixture has components")
        .schemas
        .get(name)
        .unwrap_or_else(|| panic!("fixture has schema {name}"))
        .clone();
    normalize(Some(&schema)).unwrap_or_else(|| panic!("{name} normalizes"))
}

#[test]
fn object_branch_carries_braces_and_required_marks() {
    let labels = LabelTable::default();
    let rendered = render_tree(&normalized("Pet"), "Pet", &labels);
    let RenderNode::Branch {
        name,
        opening,
        closing,
        rows,
        is_array,
        ..
    } = &rendered
    else {
        panic!("expected branch, got {rendered:?}");
    };
    assert_eq!(name, "Pet");
    assert_eq!(*opening, "{");
    assert_eq!(*closing, "}");
    assert!(!is_array);
    assert!(rows.iter().any(|row| matches!(
        row,
        RenderNode::Leaf { name, .. } if name == "name*"
    )));
}

#[test]
fn array_of_primitive_renders_bracketed_leaf() {
    let labels = LabelTable::default();
    let rendered = render_tree(&normalized("Pet"), "Pet", &labels);
    let RenderNode::Branch { rows, .. } = &rendered else {
        panic!("expected branch");
    };
    // tags is an array of strings, rendered as a bracketed leaf
    let tags = rows
        .iter()
        .find_map(|row| match row {
            RenderNode::Leaf {
                name, type_text, ..
            } if name == "tags" => Some(type_text.clone()),
            _ => None,
        })
        .expect("tags leaf present");
    assert_eq!(tags, "[string]");
}

#[test]
fn any_of_renders_numbered_options() {
    let labels = LabelTable::default();
    let contact = normalized("Contact");
    let rendered = render_tree(&contact, "Contact", &labels);
    let RenderNode::OptionGroup { label, options, .. } = &rendered else {
        panic!("expected option group, got {rendered:?}");
    };
    assert_eq!(label, "ANY OF");
    assert_eq!(options.len(), 2);

    let oasdoc_core::ir::NormalizedNode::Composition(composition) = &contact else {
        panic!("expected composition");
    };
    // Each option matches what rendering the variant alone would produce
    for (i, option) in options.iter().enumerate() {
        let name = format!("OPTION {}", i + 1);
        let alone = render_tree(&composition.variants[i].node, &name, &labels);
        assert_eq!(*option, alone);
    }
}

#[test]
fn rendering_is_idempotent() {
    let labels = LabelTable::default();
    let pet = normalized("Pet");
    assert_eq!(
        render_tree(&pet, "Pet", &labels),
        render_tree(&pet, "Pet", &labels)
    );
}

#[test]
fn both_strategies_agree_on_leaf_description_lines() {
    let pet = normalized("Pet");
    let config = DocConfig::default();

    let SchemaRender::Tree(tree) = render_schema(&pet, "Pet", &config) else {
        panic!("default style is the tree");
    };
    let table_config = DocConfig {
        schema_style: SchemaStyle::Table,
        ..DocConfig::default()
    };
    let SchemaRender::Table(rows) = render_schema(&pet, "Pet", &table_config) else {
        panic!("table style requested");
    };

    let RenderNode::Branch { rows: tree_rows, .. } = &tree else {
        panic!("expected branch root");
    };
    let tree_status = tree_rows
        .iter()
        .find_map(|row| match row {
            RenderNode::Leaf {
                name,
                description_lines,
                ..
            } if name == "status" => Some(description_lines.clone()),
            _ => None,
        })
        .expect("tree has a status leaf");
    let table_status = rows
        .iter()
        .find(|row| row.name == "status")
        .expect("table has a status row");

    assert_eq!(tree_status, table_status.description_lines);
    assert!(
        tree_status.contains(&"DEFAULT: available".to_string()),
        "labeled default line present: {tree_status:?}"
    );
    assert!(tree_status.contains(&"ALLOWED: available, pending, sold".to_string()));
}
