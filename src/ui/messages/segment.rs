//! Message content segmentation: fenced code blocks vs. prose.
//!
//! Assistant replies interleave markdown prose with fenced code blocks
//! (```` ```lang ... ``` ````). Before rendering, a message body is split
//! into an ordered list of [`Segment`]s: text runs go to the markdown
//! renderer, code blocks go to the syntax highlighter with a copy action.
//!
//! Segmentation is pure and total: every input string produces a
//! well-defined segment list, and malformed fences degrade to plain text.

/// Syntax grammar used for SRL code blocks.
///
/// No highlighter grammar exists for Blaze Advisor's rule language, so the
/// Java grammar is used as the closest procedural approximation. The user
/// still sees "SRL" as the block label.
pub const SRL_FALLBACK_LANGUAGE: &str = "java";

/// Label shown on code blocks tagged `srl`, `plaintext`, or left untagged.
pub const SRL_DISPLAY_LABEL: &str = "SRL";

/// One unit of a decomposed message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of prose to be rendered as markdown.
    Text { raw: String },
    /// A fenced code block to be rendered with syntax highlighting.
    ///
    /// `language` is the highlighter grammar key; `display_label` is what
    /// the user sees in the block header. They differ for SRL blocks.
    Code {
        language: String,
        display_label: String,
        code: String,
    },
}

/// A sub-unit of a text run, produced by [`format_inline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineUnit {
    Plain(String),
    Code(String),
}

/// Find `pat` in `haystack` at or after byte position `from`.
fn find_from(haystack: &str, from: usize, pat: &str) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..].find(pat).map(|i| i + from)
}

/// Map a fence language tag to a (grammar key, display label) pair.
///
/// `srl`, `plaintext`, and the empty tag all mean SRL: highlight with the
/// Java grammar but label the block "SRL". Any other tag passes through
/// unchanged as both key and label.
fn normalize_language(tag: &str) -> (String, String) {
    match tag {
        "srl" | "plaintext" | "" => (
            SRL_FALLBACK_LANGUAGE.to_string(),
            SRL_DISPLAY_LABEL.to_string(),
        ),
        other => (other.to_string(), other.to_string()),
    }
}

/// Split a message body into ordered text and code segments.
///
/// A fence opens with three backticks, an optional lowercase language tag,
/// and a newline; its body runs to the *nearest* following triple backtick.
/// The scanner walks the string left to right with an explicit cursor:
///
/// 1. Find the next `` ``` `` at or after the cursor.
/// 2. If it is not followed by `[a-z]*\n`, or no closing `` ``` `` exists,
///    it is not a fence; advance one byte and keep looking.
/// 3. Otherwise emit the gap since the previous match (if non-empty) as
///    [`Segment::Text`], then the block as [`Segment::Code`], and continue
///    after the closing backticks.
///
/// Input with no complete fence (including the empty string) yields a
/// single `Text` segment wrapping the whole input. Back-to-back fences
/// produce no empty `Text` segment between them.
pub fn segment(content: &str) -> Vec<Segment> {
    let bytes = content.as_bytes();
    let mut segments = Vec::new();
    let mut last_end = 0; // end of the previous fence match
    let mut scan = 0; // current search position

    while let Some(open) = find_from(content, scan, "```") {
        // Language tag: lowercase ASCII letters immediately after the
        // backticks, terminated by a newline. Anything else (a space, a
        // fourth backtick, end of input) means this is not a fence open.
        let tag_start = open + 3;
        let mut tag_end = tag_start;
        while tag_end < bytes.len() && bytes[tag_end].is_ascii_lowercase() {
            tag_end += 1;
        }
        if tag_end >= bytes.len() || bytes[tag_end] != b'\n' {
            scan = open + 1;
            continue;
        }

        // Closing fence: the nearest triple backtick after the body start.
        // An unterminated fence is not a match; its backticks end up in
        // the surrounding text verbatim.
        let body_start = tag_end + 1;
        let Some(close) = find_from(content, body_start, "```") else {
            scan = open + 1;
            continue;
        };

        if open > last_end {
            segments.push(Segment::Text {
                raw: content[last_end..open].to_string(),
            });
        }

        let (language, display_label) = normalize_language(&content[tag_start..tag_end]);
        segments.push(Segment::Code {
            language,
            display_label,
            code: content[body_start..close].to_string(),
        });

        last_end = close + 3;
        scan = last_end;
    }

    if last_end < content.len() {
        segments.push(Segment::Text {
            raw: content[last_end..].to_string(),
        });
    }

    // No fence matched anywhere: the whole input is one text run. This
    // also covers the empty string.
    if segments.is_empty() && last_end == 0 {
        segments.push(Segment::Text {
            raw: content.to_string(),
        });
    }

    segments
}

/// Split a text run into plain text and single-backtick inline code spans.
///
/// An inline span is an opening backtick, one or more non-backtick
/// characters, and a closing backtick. Text around spans is emitted as
/// [`InlineUnit::Plain`] in order; input with no spans comes back as a
/// single `Plain` unit.
///
/// Available for callers that pre-process text runs themselves; the
/// default render path leaves inline code to the markdown renderer.
pub fn format_inline(text: &str) -> Vec<InlineUnit> {
    let mut units = Vec::new();
    let mut last_end = 0;
    let mut scan = 0;

    while let Some(open) = find_from(text, scan, "`") {
        let interior_start = open + 1;
        let Some(close) = find_from(text, interior_start, "`") else {
            break;
        };
        if close == interior_start {
            // Empty interior (``) is not a span; retry past the opener.
            scan = open + 1;
            continue;
        }

        if open > last_end {
            units.push(InlineUnit::Plain(text[last_end..open].to_string()));
        }
        units.push(InlineUnit::Code(text[interior_start..close].to_string()));

        last_end = close + 1;
        scan = last_end;
    }

    if last_end < text.len() {
        units.push(InlineUnit::Plain(text[last_end..].to_string()));
    }

    if units.is_empty() && last_end == 0 {
        units.push(InlineUnit::Plain(text.to_string()));
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reassemble the original input from a segment list, re-inserting the
    /// fence syntax consumed by the scanner.
    fn reassemble(segments: &[Segment]) -> String {
        let mut out = String::new();
        for seg in segments {
            match seg {
                Segment::Text { raw } => out.push_str(raw),
                Segment::Code {
                    display_label,
                    code,
                    ..
                } => {
                    out.push_str("```");
                    // The SRL label covers three source tags; reassembly
                    // tests below only use pass-through tags.
                    if display_label != SRL_DISPLAY_LABEL {
                        out.push_str(display_label);
                    }
                    out.push('\n');
                    out.push_str(code);
                    out.push_str("```");
                }
            }
        }
        out
    }

    #[test]
    fn test_no_fence_identity() {
        for s in [
            "",
            "hello world",
            "some `inline` code",
            "text with ``two`` ticks",
            "trailing backticks ```",
        ] {
            let segs = segment(s);
            assert_eq!(segs, vec![Segment::Text { raw: s.to_string() }], "input: {:?}", s);
        }
    }

    #[test]
    fn test_single_well_formed_block() {
        let segs = segment("```python\nprint(1)\n```");
        assert_eq!(
            segs,
            vec![Segment::Code {
                language: "python".into(),
                display_label: "python".into(),
                code: "print(1)\n".into(),
            }]
        );
    }

    #[test]
    fn test_srl_aliasing() {
        let segs = segment("```srl\nRULE x\n```");
        assert_eq!(
            segs,
            vec![Segment::Code {
                language: "java".into(),
                display_label: "SRL".into(),
                code: "RULE x\n".into(),
            }]
        );
    }

    #[test]
    fn test_empty_tag_fence_is_srl() {
        let segs = segment("```\nhello\n```");
        assert_eq!(
            segs,
            vec![Segment::Code {
                language: "java".into(),
                display_label: "SRL".into(),
                code: "hello\n".into(),
            }]
        );
    }

    #[test]
    fn test_plaintext_tag_is_srl() {
        let segs = segment("```plaintext\nx\n```");
        match &segs[0] {
            Segment::Code {
                language,
                display_label,
                ..
            } => {
                assert_eq!(language, "java");
                assert_eq!(display_label, "SRL");
            }
            other => panic!("expected code segment, got {:?}", other),
        }
    }

    #[test]
    fn test_interleaving_order() {
        let segs = segment("a\n```js\nx()\n```\nb");
        assert_eq!(
            segs,
            vec![
                Segment::Text { raw: "a\n".into() },
                Segment::Code {
                    language: "js".into(),
                    display_label: "js".into(),
                    code: "x()\n".into(),
                },
                Segment::Text { raw: "\nb".into() },
            ]
        );
    }

    #[test]
    fn test_adjacent_fences_no_empty_text() {
        let segs = segment("```js\n1\n``````js\n2\n```");
        assert_eq!(
            segs,
            vec![
                Segment::Code {
                    language: "js".into(),
                    display_label: "js".into(),
                    code: "1\n".into(),
                },
                Segment::Code {
                    language: "js".into(),
                    display_label: "js".into(),
                    code: "2\n".into(),
                },
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_is_plain_text() {
        let s = "look at this:\n```rust\nfn main() {}\n";
        assert_eq!(segment(s), vec![Segment::Text { raw: s.to_string() }]);
    }

    #[test]
    fn test_fence_with_uppercase_tag_is_not_a_fence() {
        // The tag grammar is lowercase-only; "```Rust\n...\n```" cannot
        // open a fence, and the trailing backticks alone cannot either.
        let s = "```Rust\ncode\n```";
        assert_eq!(segment(s), vec![Segment::Text { raw: s.to_string() }]);
    }

    #[test]
    fn test_nested_backticks_stay_in_body() {
        // A single backtick inside the body does not close the fence.
        let segs = segment("```srl\nuse `amount` here\n```");
        match &segs[0] {
            Segment::Code { code, .. } => assert_eq!(code, "use `amount` here\n"),
            other => panic!("expected code segment, got {:?}", other),
        }
    }

    #[test]
    fn test_closing_fence_is_nearest() {
        // Non-greedy: the first block closes at the first triple backtick,
        // even when more fences follow.
        let segs = segment("```js\na\n```mid```js\nb\n```");
        assert_eq!(segs.len(), 3);
        assert_eq!(
            segs[0],
            Segment::Code {
                language: "js".into(),
                display_label: "js".into(),
                code: "a\n".into(),
            }
        );
        assert_eq!(segs[1], Segment::Text { raw: "mid".into() });
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "plain prose only",
            "a\n```js\nx()\n```\nb",
            "```python\nprint(1)\n```",
            "```js\n1\n``````js\n2\n```",
            "before\n```rust\nlet x = `1`;\n```\nafter\n```go\nf()\n```",
        ];
        for s in inputs {
            assert_eq!(reassemble(&segment(s)), s, "input: {:?}", s);
        }
    }

    #[test]
    fn test_idempotent() {
        let s = "a\n```srl\nRULE r\n```\nmid\n```python\npass\n```";
        assert_eq!(segment(s), segment(s));
    }

    #[test]
    fn test_format_inline_no_spans() {
        assert_eq!(
            format_inline("no code here"),
            vec![InlineUnit::Plain("no code here".into())]
        );
        assert_eq!(format_inline(""), vec![InlineUnit::Plain("".into())]);
    }

    #[test]
    fn test_format_inline_basic() {
        assert_eq!(
            format_inline("use `ruleset` to group rules"),
            vec![
                InlineUnit::Plain("use ".into()),
                InlineUnit::Code("ruleset".into()),
                InlineUnit::Plain(" to group rules".into()),
            ]
        );
    }

    #[test]
    fn test_format_inline_leading_and_trailing_spans() {
        assert_eq!(
            format_inline("`a` then `b`"),
            vec![
                InlineUnit::Code("a".into()),
                InlineUnit::Plain(" then ".into()),
                InlineUnit::Code("b".into()),
            ]
        );
    }

    #[test]
    fn test_format_inline_empty_span_is_plain() {
        assert_eq!(
            format_inline("weird `` ticks"),
            vec![InlineUnit::Plain("weird `` ticks".into())]
        );
    }

    #[test]
    fn test_format_inline_unclosed_backtick() {
        assert_eq!(
            format_inline("dangling ` tick and `code`"),
            vec![
                InlineUnit::Plain("dangling ".into()),
                InlineUnit::Code(" tick and ".into()),
                InlineUnit::Plain("code`".into()),
            ]
        );
    }
}
