use indexmap::IndexMap;

use super::descriptor::TypeDescriptor;

/// The normalized, cycle-safe form of one schema fragment.
///
/// Built fresh per document-generation request, immutable once built, and
/// discarded after rendering. A `$ref` anywhere in the input always becomes
/// `RecursiveRef` — references are treated as non-expanding pointers whether
/// or not they are actually cyclic, which bounds both recursion depth and
/// output size.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedNode {
    Primitive(TypeDescriptor),
    Object(ObjectNode),
    Array(ArrayNode),
    Composition(CompositionNode),
    /// Terminal pointer to a named definition; never expanded further.
    RecursiveRef(String),
}

/// One property of an `ObjectNode`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub node: NormalizedNode,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    pub description: String,
    /// Property name → child, in declaration order.
    pub children: IndexMap<String, ObjectProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode {
    pub description: String,
    pub element: Box<NormalizedNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionKind {
    AllOf,
    AnyOf,
    OneOf,
}

impl CompositionKind {
    pub fn label(&self) -> &'static str {
        match self {
            CompositionKind::AllOf => "ALL OF",
            CompositionKind::AnyOf => "ANY OF",
            CompositionKind::OneOf => "ONE OF",
        }
    }
}

/// One variant of an `anyOf`/`oneOf` composition.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionVariant {
    /// Synthetic `propN` name assigned to scalar variants; object and array
    /// variants are labeled positionally by the renderer instead.
    pub synthetic_name: Option<String>,
    pub node: NormalizedNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionNode {
    pub kind: CompositionKind,
    /// Variants in declaration order.
    pub variants: Vec<CompositionVariant>,
}
