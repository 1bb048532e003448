/// One block from the external CommonMark-subset tokenizer. The tokenizer
/// itself lives upstream; this is the shape of its output stream.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockToken {
    Paragraph { text: String },
    Heading { depth: u8, text: String },
    Space,
    Code { text: String },
    ListStart { ordered: bool, start: u64 },
    Text { text: String },
    ListEnd,
}

/// Inline style flags. `code` and `bold`/`italic` are mutually exclusive in
/// practice: the three-level delimiter precedence never nests code inside a
/// styled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

/// A run of text carrying one set of style flags.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineSpan {
    pub text: String,
    pub style: StyleFlags,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan {
            text: text.into(),
            style: StyleFlags::default(),
        }
    }
}

/// A styled block ready for document assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkdownBlock {
    Paragraph(Vec<InlineSpan>),
    Heading { level: u8, spans: Vec<InlineSpan> },
    CodeBlock(String),
    List {
        ordered: bool,
        start: u64,
        items: Vec<Vec<InlineSpan>>,
    },
}

impl MarkdownBlock {
    /// Depth-5 and depth-6 headings are laid out as emphasized body text
    /// rather than an actual heading size.
    pub fn reduced_emphasis(&self) -> bool {
        matches!(self, MarkdownBlock::Heading { level, .. } if *level >= 5)
    }
}
