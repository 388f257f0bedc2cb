//! Syntax highlighting for code segments.
//!
//! Wraps syntect with lazily loaded shared assets and produces egui
//! [`LayoutJob`]s. The grammar is selected by the segment's language key;
//! SRL blocks arrive here already aliased to the Java grammar by the
//! segmenter. Unknown keys fall back to unstyled monospace.

use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Color32, FontId};
use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Default foreground for unhighlighted code.
const PLAIN_CODE_COLOR: Color32 = Color32::from_rgb(220, 223, 228);

/// Lazy-initialized syntect highlighting assets, shared by every block.
struct HighlightAssets {
    syntaxes: SyntaxSet,
    theme: Theme,
}

static ASSETS: Lazy<HighlightAssets> = Lazy::new(|| {
    let syntaxes = SyntaxSet::load_defaults_newlines();
    let mut themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .remove("base16-ocean.dark")
        .or_else(|| themes.themes.into_values().next())
        .expect("syntect ships with at least one theme");
    HighlightAssets { syntaxes, theme }
});

fn code_format(color: Color32) -> TextFormat {
    TextFormat {
        font_id: FontId::monospace(13.0),
        color,
        ..Default::default()
    }
}

/// True when a grammar exists for the given language key.
pub fn has_grammar(language: &str) -> bool {
    ASSETS.syntaxes.find_syntax_by_token(language).is_some()
}

/// Highlight a code block into a layout job.
///
/// The job's concatenated text always equals `code` exactly; only
/// colors vary. Highlighting errors on a line degrade that line to
/// plain monospace rather than dropping it.
pub fn highlight_code(code: &str, language: &str) -> LayoutJob {
    let assets = &*ASSETS;
    let mut job = LayoutJob::default();

    let Some(syntax) = assets.syntaxes.find_syntax_by_token(language) else {
        job.append(code, 0.0, code_format(PLAIN_CODE_COLOR));
        return job;
    };

    let mut highlighter = HighlightLines::new(syntax, &assets.theme);
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &assets.syntaxes) {
            Ok(regions) => {
                for (style, text) in regions {
                    let fg = style.foreground;
                    job.append(text, 0.0, code_format(Color32::from_rgb(fg.r, fg.g, fg.b)));
                }
            }
            Err(_) => {
                job.append(line, 0.0, code_format(PLAIN_CODE_COLOR));
            }
        }
    }

    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::messages::segment::SRL_FALLBACK_LANGUAGE;

    #[test]
    fn test_srl_fallback_grammar_exists() {
        // The segmenter aliases SRL blocks to this key; it must resolve.
        assert!(has_grammar(SRL_FALLBACK_LANGUAGE));
    }

    #[test]
    fn test_common_grammars_exist() {
        assert!(has_grammar("python"));
        assert!(has_grammar("js"));
    }

    #[test]
    fn test_unknown_grammar_falls_back() {
        assert!(!has_grammar("srl"));
        let job = highlight_code("RULE x IS priority = 1", "srl");
        assert_eq!(job.text, "RULE x IS priority = 1");
    }

    #[test]
    fn test_highlight_preserves_text_exactly() {
        let code = "public class Rule {\n    int priority = 1;\n}\n";
        let job = highlight_code(code, "java");
        assert_eq!(job.text, code);
        assert!(job.sections.len() > 1, "expected multiple styled regions");
    }
}
