/// Read-only / write-only marker derived from a schema's flags. Read-only
/// wins when a schema (invalidly) sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadWrite {
    #[default]
    None,
    ReadOnly,
    WriteOnly,
}

impl ReadWrite {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadWrite::None => "",
            ReadWrite::ReadOnly => "read-only",
            ReadWrite::WriteOnly => "write-only",
        }
    }
}

/// A flat, render-oriented description of one schema node: its displayable
/// type name plus every piece of constraint and annotation text a document
/// row may need.
///
/// `base_type` is the primitive type keyword, a format name, `"enum"`, or
/// the `{recursive}` marker for reference pointers. Exactly one of those
/// sources determines it, in that reverse order of precedence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeDescriptor {
    pub base_type: String,
    pub format: String,
    pub pattern: String,
    /// Human-readable range/length text, empty when unconstrained.
    pub constraint: String,
    pub default_value: String,
    /// Enum literals in declared order; non-empty iff `base_type == "enum"`
    /// or the owning array's element schema is an enum.
    pub allowed_values: Vec<String>,
    pub read_write: ReadWrite,
    pub deprecated: bool,
    pub description: String,
    /// `"<type> of <items.type>"`, set only when the owning schema is an
    /// array.
    pub array_element_type: Option<String>,
}

impl TypeDescriptor {
    /// True when the node carried neither a type nor a format — the
    /// normalizer turns such leaves into an empty result instead of a node.
    pub fn is_untyped(&self) -> bool {
        self.base_type.is_empty() && self.format.is_empty()
    }
}
