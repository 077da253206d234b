//! Furigana annotation engine.
//!
//! Text such as `在留(ざいりゅう)カード` carries readings in ASCII brackets right
//! after a kanji run. The engine recognizes those spans and converts between
//! the bracket form, `<ruby>` markup, plain text, and a list of
//! `(base, reading)` pairs.
//!
//! ```
//! use yasashii::FuriganaEngine;
//!
//! let engine = FuriganaEngine::new();
//! assert_eq!(
//!     engine.to_ruby("在留(ざいりゅう)カード"),
//!     "<ruby>在留<rt>ざいりゅう</rt></ruby>カード"
//! );
//! assert_eq!(engine.strip("在留(ざいりゅう)カード"), "在留カード");
//! ```
//!
//! Every operation is total: malformed brackets are left as literal text.

use serde::Serialize;

pub mod ast;
pub mod error;
pub mod parser;
pub mod render;

pub use ast::{AnnotatedDocument, AnnotatedSpan, FuriganaPair, Segment};
pub use error::{EngineError, EngineResult};
pub use parser::{CharClasses, FuriganaPattern, HIRAGANA_CLASS, KANJI_CLASS, Parser};
pub use render::{DEFAULT_LINE_HEIGHT, DisplayStyle, DocumentTemplate};

/// Which bracket groups [`FuriganaEngine::strip_with`] removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StripPolicy {
    /// Remove every `(hiragana)` group, whatever precedes it. This is how
    /// bracket text has always been stripped and stays the default.
    #[default]
    AnyReading,
    /// Remove only the readings of spans the matcher recognizes, so the
    /// stripper agrees with [`FuriganaEngine::to_ruby`] and
    /// [`FuriganaEngine::pairs`].
    SpansOnly,
}

/// All renderings of one bracket text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Renditions {
    pub bracket: String,
    pub ruby: String,
    pub plain: String,
    pub pairs: Vec<FuriganaPair>,
    pub display: String,
}

/// Compiled pattern plus rendering configuration.
///
/// Build once and share; all methods take `&self` and hold no state between
/// calls.
#[derive(Debug, Clone)]
pub struct FuriganaEngine {
    pattern: FuriganaPattern,
    display_style: DisplayStyle,
    document_template: DocumentTemplate,
    line_height: f64,
}

impl Default for FuriganaEngine {
    fn default() -> Self {
        FuriganaEngine::new()
    }
}

impl FuriganaEngine {
    pub fn new() -> Self {
        FuriganaEngine::with_pattern(FuriganaPattern::default())
    }

    pub fn with_pattern(pattern: FuriganaPattern) -> Self {
        FuriganaEngine {
            pattern,
            display_style: DisplayStyle::default(),
            document_template: DocumentTemplate::default(),
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Engine with custom character classes.
    pub fn with_classes(classes: CharClasses) -> EngineResult<Self> {
        Ok(FuriganaEngine::with_pattern(FuriganaPattern::new(classes)?))
    }

    pub fn with_display_style(&mut self, style: DisplayStyle) -> &mut Self {
        self.display_style = style;
        self
    }

    pub fn with_document_template(&mut self, template: DocumentTemplate) -> &mut Self {
        self.document_template = template;
        self
    }

    /// Line height used by [`FuriganaEngine::display`].
    pub fn with_line_height(&mut self, line_height: f64) -> &mut Self {
        self.line_height = line_height;
        self
    }

    pub fn pattern(&self) -> &FuriganaPattern {
        &self.pattern
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn document_template(&self) -> &DocumentTemplate {
        &self.document_template
    }

    pub fn parse<'a>(&self, text: &'a str) -> AnnotatedDocument<'a> {
        Parser::new(&self.pattern).parse(text)
    }

    /// Rewrite each span as `<ruby>base<rt>reading</rt></ruby>`, copying
    /// everything else verbatim. The output contains no bracket spans, so a
    /// second pass changes nothing.
    pub fn to_ruby(&self, text: &str) -> String {
        let document = self.parse(text);
        let mut out = String::with_capacity(text.len() + document.len() * 24);
        for segment in &document {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Annotated(span) => span.write_ruby(&mut out),
            }
        }
        out
    }

    /// Strip readings using [`StripPolicy::AnyReading`].
    pub fn strip(&self, text: &str) -> String {
        self.strip_with(text, StripPolicy::AnyReading)
    }

    pub fn strip_with(&self, text: &str, policy: StripPolicy) -> String {
        match policy {
            StripPolicy::AnyReading => self
                .pattern
                .reading_regex()
                .replace_all(text, "")
                .into_owned(),
            StripPolicy::SpansOnly => {
                let document = self.parse(text);
                let mut out = String::with_capacity(text.len());
                for segment in &document {
                    match segment {
                        Segment::Literal(literal) => out.push_str(literal),
                        Segment::Annotated(span) => out.push_str(span.base),
                    }
                }
                out
            }
        }
    }

    /// Every recognized span as a pair, in order of appearance. Repeats are kept.
    pub fn pairs(&self, text: &str) -> Vec<FuriganaPair> {
        self.parse(text).spans().map(AnnotatedSpan::to_pair).collect()
    }

    /// Styled inline block at the engine's configured line height.
    pub fn display(&self, text: &str) -> String {
        self.display_with_line_height(text, self.line_height)
    }

    pub fn display_with_line_height(&self, text: &str, line_height: f64) -> String {
        render::format_display(&self.to_ruby(text), line_height, &self.display_style)
    }

    /// Self-contained HTML page for download.
    pub fn document(&self, text: &str) -> String {
        render::render_document(&self.to_ruby(text), &self.document_template)
    }

    pub fn renditions(&self, text: &str) -> Renditions {
        Renditions {
            bracket: text.to_string(),
            ruby: self.to_ruby(text),
            plain: self.strip(text),
            pairs: self.pairs(text),
            display: self.display(text),
        }
    }
}
