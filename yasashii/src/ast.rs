use serde::{Deserialize, Serialize};

/// A base run immediately followed by its parenthesized reading, e.g. `在留(ざいりゅう)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedSpan<'a> {
    pub base: &'a str,
    pub reading: &'a str,
}

impl<'a> AnnotatedSpan<'a> {
    pub fn new(base: &'a str, reading: &'a str) -> Self {
        AnnotatedSpan { base, reading }
    }

    /// Append `<ruby>base<rt>reading</rt></ruby>` to `out`.
    pub fn write_ruby(&self, out: &mut String) {
        out.push_str("<ruby>");
        out.push_str(self.base);
        out.push_str("<rt>");
        out.push_str(self.reading);
        out.push_str("</rt></ruby>");
    }

    pub fn to_ruby(&self) -> String {
        let mut out = String::new();
        self.write_ruby(&mut out);
        out
    }

    pub fn to_pair(&self) -> FuriganaPair {
        FuriganaPair::new(self.base, self.reading)
    }
}

impl std::fmt::Display for AnnotatedSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.base, self.reading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any span, kept verbatim
    Literal(&'a str),
    Annotated(AnnotatedSpan<'a>),
}

impl std::fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Annotated(span) => span.fmt(f),
        }
    }
}

/// The matcher's view of one input string.
///
/// Concatenating the segments (spans as `base(reading)`) gives back the input
/// exactly, so `document.to_string() == source` always holds. Borrows from the
/// input and lives only as long as the call that built it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument<'a>(pub Vec<Segment<'a>>);

impl<'a> AnnotatedDocument<'a> {
    pub fn new() -> Self {
        AnnotatedDocument(Vec::new())
    }

    pub fn push(&mut self, segment: Segment<'a>) {
        self.0.push(segment);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment<'a>> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'a>> {
        self.0.iter()
    }

    /// Annotated spans in left-to-right order
    pub fn spans(&self) -> impl Iterator<Item = &AnnotatedSpan<'a>> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Annotated(span) => Some(span),
            Segment::Literal(_) => None,
        })
    }

    pub fn span_count(&self) -> usize {
        self.spans().count()
    }
}

impl std::fmt::Display for AnnotatedDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.0 {
            segment.fmt(f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for AnnotatedDocument<'a> {
    type Item = Segment<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'d, 'a> IntoIterator for &'d AnnotatedDocument<'a> {
    type Item = &'d Segment<'a>;
    type IntoIter = std::slice::Iter<'d, Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An owned `(base, reading)` pair, as handed to downstream tooling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuriganaPair {
    pub base: String,
    pub reading: String,
}

impl FuriganaPair {
    pub fn new(base: impl Into<String>, reading: impl Into<String>) -> Self {
        FuriganaPair {
            base: base.into(),
            reading: reading.into(),
        }
    }
}

impl std::fmt::Display for FuriganaPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.base, self.reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display_restores_brackets() {
        let span = AnnotatedSpan::new("在留", "ざいりゅう");
        assert_eq!(span.to_string(), "在留(ざいりゅう)");
    }

    #[test]
    fn test_span_to_ruby() {
        let span = AnnotatedSpan::new("市役所", "しやくしょ");
        assert_eq!(span.to_ruby(), "<ruby>市役所<rt>しやくしょ</rt></ruby>");
    }

    #[test]
    fn test_document_display_concatenates_segments() {
        let mut document = AnnotatedDocument::new();
        document.push(Segment::Annotated(AnnotatedSpan::new("在留", "ざいりゅう")));
        document.push(Segment::Literal("カード\n"));
        assert_eq!(document.to_string(), "在留(ざいりゅう)カード\n");
        assert_eq!(document.len(), 2);
        assert_eq!(document.span_count(), 1);
    }

    #[test]
    fn test_spans_skip_literals() {
        let document = AnnotatedDocument(vec![
            Segment::Literal("a"),
            Segment::Annotated(AnnotatedSpan::new("漢", "かん")),
            Segment::Literal("b"),
            Segment::Annotated(AnnotatedSpan::new("字", "じ")),
        ]);
        let bases: Vec<&str> = document.spans().map(|span| span.base).collect();
        assert_eq!(bases, vec!["漢", "字"]);
    }

    #[test]
    fn test_pair_display_and_json() {
        let pair = FuriganaPair::new("在留", "ざいりゅう");
        assert_eq!(pair.to_string(), "在留 → ざいりゅう");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"base":"在留","reading":"ざいりゅう"}"#);
    }
}
