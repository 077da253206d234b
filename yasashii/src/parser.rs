use regex::Regex;

use crate::ast::{AnnotatedDocument, AnnotatedSpan, Segment};
use crate::error::{EngineError, EngineResult};

/// CJK ideographs `一`..`龠` plus the iteration mark, the shime sign, and the
/// small place-name kana.
pub const KANJI_CLASS: &str = "一-龠々〆ヵヶ";

/// Hiragana `ぁ`..`ん`.
pub const HIRAGANA_CLASS: &str = "ぁ-ん";

/// Character classes for the base run and the reading, written as the body of
/// a regex bracket expression (`一-龠々`, not `[一-龠々]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClasses {
    pub base: String,
    pub reading: String,
}

impl Default for CharClasses {
    fn default() -> Self {
        CharClasses {
            base: KANJI_CLASS.to_string(),
            reading: HIRAGANA_CLASS.to_string(),
        }
    }
}

impl CharClasses {
    fn validate(&self) -> EngineResult<()> {
        for (name, class) in [("base", &self.base), ("reading", &self.reading)] {
            if class.is_empty() {
                return Err(EngineError::InvalidClasses(format!(
                    "{} class is empty",
                    name
                )));
            }
            if class.contains(['(', ')', '[', ']']) {
                return Err(EngineError::InvalidClasses(format!(
                    "{} class must not contain brackets or parentheses: {}",
                    name, class
                )));
            }
        }
        Ok(())
    }
}

/// Compiled annotation patterns, built once from [`CharClasses`].
///
/// `span` recognizes `base(reading)`; `reading` recognizes a bare
/// `(reading)` group with no requirement on what precedes it.
#[derive(Debug, Clone)]
pub struct FuriganaPattern {
    classes: CharClasses,
    span: Regex,
    reading: Regex,
}

impl FuriganaPattern {
    pub fn new(classes: CharClasses) -> EngineResult<Self> {
        classes.validate()?;
        let span = Regex::new(&format!(
            r"([{}]+)\(([{}]+)\)",
            classes.base, classes.reading
        ))?;
        let reading = Regex::new(&format!(r"\([{}]+\)", classes.reading))?;
        Ok(FuriganaPattern {
            classes,
            span,
            reading,
        })
    }

    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    pub fn span_regex(&self) -> &Regex {
        &self.span
    }

    pub fn reading_regex(&self) -> &Regex {
        &self.reading
    }
}

impl Default for FuriganaPattern {
    fn default() -> Self {
        FuriganaPattern::new(CharClasses::default()).expect("built-in character classes compile")
    }
}

/// Splits annotated text into literal runs and annotated spans.
pub struct Parser<'p> {
    pattern: &'p FuriganaPattern,
}

impl<'p> Parser<'p> {
    pub fn new(pattern: &'p FuriganaPattern) -> Self {
        Parser { pattern }
    }

    /// Leftmost, non-overlapping scan. Text between spans becomes a single
    /// literal run; malformed brackets are never an error, they stay literal.
    pub fn parse<'a>(&self, source: &'a str) -> AnnotatedDocument<'a> {
        let mut document = AnnotatedDocument::new();
        let mut cursor = 0;

        for captures in self.pattern.span.captures_iter(source) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            if whole.start() > cursor {
                document.push(Segment::Literal(&source[cursor..whole.start()]));
            }
            match (captures.get(1), captures.get(2)) {
                (Some(base), Some(reading)) => document.push(Segment::Annotated(
                    AnnotatedSpan::new(base.as_str(), reading.as_str()),
                )),
                _ => document.push(Segment::Literal(whole.as_str())),
            }
            cursor = whole.end();
        }

        if cursor < source.len() {
            document.push(Segment::Literal(&source[cursor..]));
        }

        document
    }
}
