//! Restricted Markdown dialect: paragraphs, headings, fenced code blocks,
//! flat lists, and bold/italic/code inline styling. The block tokenizer is
//! an external collaborator; this module consumes its token stream.

use crate::ir::{BlockToken, InlineSpan, MarkdownBlock, StyleFlags};

/// Fold a block-token stream into styled blocks. List items accumulate into
/// the open list until its end token; text outside a list is dropped, as is
/// blank space between blocks.
pub fn to_blocks(tokens: &[BlockToken]) -> Vec<MarkdownBlock> {
    let mut blocks = Vec::new();
    let mut open_list: Option<(bool, u64, Vec<Vec<InlineSpan>>)> = None;

    for token in tokens {
        match token {
            BlockToken::Paragraph { text } => {
                blocks.push(MarkdownBlock::Paragraph(parse_inline(text)));
            }
            BlockToken::Heading { depth, text } => {
                blocks.push(MarkdownBlock::Heading {
                    level: *depth,
                    spans: vec![InlineSpan::plain(text.clone())],
                });
            }
            BlockToken::Space => {}
            BlockToken::Code { text } => {
                blocks.push(MarkdownBlock::CodeBlock(text.clone()));
            }
            BlockToken::ListStart { ordered, start } => {
                open_list = Some((*ordered, *start, Vec::new()));
            }
            BlockToken::Text { text } => {
                if let Some((_, _, items)) = open_list.as_mut() {
                    items.push(parse_inline(text));
                }
            }
            BlockToken::ListEnd => {
                if let Some((ordered, start, items)) = open_list.take() {
                    blocks.push(MarkdownBlock::List {
                        ordered,
                        start,
                        items,
                    });
                }
            }
        }
    }
    blocks
}

/// Parse inline styling with three-level delimiter precedence: `***`/`___`
/// (bold italic), then `**`/`__` (bold) inside the unstyled remainder, then
/// backticks (code) inside that. A single `*` or `_` is plain text in this
/// dialect. Empty segments are dropped.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return spans;
    }
    for (styled, segment) in split_any(text, &["***", "___"]) {
        if styled {
            push_span(&mut spans, segment, StyleFlags {
                bold: true,
                italic: true,
                code: false,
            });
            continue;
        }
        for (styled, segment) in split_any(segment, &["**", "__"]) {
            if styled {
                push_span(&mut spans, segment, StyleFlags {
                    bold: true,
                    italic: false,
                    code: false,
                });
                continue;
            }
            for (styled, segment) in split_any(segment, &["`"]) {
                let style = StyleFlags {
                    bold: false,
                    italic: false,
                    code: styled,
                };
                push_span(&mut spans, segment, style);
            }
        }
    }
    spans
}

fn push_span(spans: &mut Vec<InlineSpan>, text: &str, style: StyleFlags) {
    if !text.is_empty() {
        spans.push(InlineSpan {
            text: text.to_string(),
            style,
        });
    }
}

/// Split on every occurrence of any listed delimiter, alternating the
/// styled flag with each crossing. The parity matters even for empty
/// segments, so they are kept here and filtered at emission.
fn split_any<'a>(text: &'a str, delimiters: &[&str]) -> Vec<(bool, &'a str)> {
    let mut segments = Vec::new();
    let mut styled = false;
    let mut rest = text;
    loop {
        let next = delimiters
            .iter()
            .filter_map(|d| rest.find(d).map(|i| (i, d.len())))
            .min();
        match next {
            Some((i, len)) => {
                segments.push((styled, &rest[..i]));
                styled = !styled;
                rest = &rest[i + len..];
            }
            None => {
                segments.push((styled, rest));
                return segments;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, bold: bool, italic: bool, code: bool) -> InlineSpan {
        InlineSpan {
            text: text.to_string(),
            style: StyleFlags { bold, italic, code },
        }
    }

    #[test]
    fn single_star_is_not_a_delimiter() {
        let spans = parse_inline("**bold** and *not-italic-here* `code`");
        assert_eq!(
            spans,
            vec![
                span("bold", true, false, false),
                span(" and *not-italic-here* ", false, false, false),
                span("code", false, false, true),
            ]
        );
    }

    #[test]
    fn triple_delimiters_take_precedence() {
        let spans = parse_inline("***both*** then **bold**");
        assert_eq!(
            spans,
            vec![
                span("both", true, true, false),
                span(" then ", false, false, false),
                span("bold", true, false, false),
            ]
        );
    }

    #[test]
    fn underscore_variants_match_star_variants() {
        assert_eq!(parse_inline("___x___"), parse_inline("***x***"));
        assert_eq!(parse_inline("__x__"), parse_inline("**x**"));
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(parse_inline(""), vec![]);
        assert_eq!(
            parse_inline("`code`"),
            vec![span("code", false, false, true)]
        );
    }

    #[test]
    fn list_items_accumulate_until_list_end() {
        let tokens = vec![
            BlockToken::ListStart {
                ordered: true,
                start: 3,
            },
            BlockToken::Text {
                text: "first".to_string(),
            },
            BlockToken::Text {
                text: "**second**".to_string(),
            },
            BlockToken::ListEnd,
        ];
        let blocks = to_blocks(&tokens);
        assert_eq!(
            blocks,
            vec![MarkdownBlock::List {
                ordered: true,
                start: 3,
                items: vec![
                    vec![span("first", false, false, false)],
                    vec![span("second", true, false, false)],
                ],
            }]
        );
    }

    #[test]
    fn text_outside_a_list_is_dropped() {
        let tokens = vec![
            BlockToken::Text {
                text: "stray".to_string(),
            },
            BlockToken::Space,
            BlockToken::Paragraph {
                text: "kept".to_string(),
            },
        ];
        let blocks = to_blocks(&tokens);
        assert_eq!(
            blocks,
            vec![MarkdownBlock::Paragraph(vec![span(
                "kept", false, false, false
            )])]
        );
    }

    #[test]
    fn deep_headings_get_reduced_emphasis() {
        let tokens = vec![
            BlockToken::Heading {
                depth: 2,
                text: "Overview".to_string(),
            },
            BlockToken::Heading {
                depth: 5,
                text: "Fine print".to_string(),
            },
        ];
        let blocks = to_blocks(&tokens);
        assert!(!blocks[0].reduced_emphasis());
        assert!(blocks[1].reduced_emphasis());
    }
}
