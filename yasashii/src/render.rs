//! HTML wrappers around ruby markup: the inline display block and the
//! standalone downloadable document.

pub const DEFAULT_LINE_HEIGHT: f64 = 2.0;

/// Inline styles of the display container.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStyle {
    pub font_size: String,
    pub padding: String,
    pub background_color: String,
    pub border_radius: String,
    pub accent_border: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        DisplayStyle {
            font_size: "1.1rem".to_string(),
            padding: "1rem".to_string(),
            background_color: "#f8f9fa".to_string(),
            border_radius: "8px".to_string(),
            accent_border: "4px solid #1E88E5".to_string(),
        }
    }
}

/// Shell of the self-contained HTML download.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTemplate {
    pub title: String,
    pub font_family: String,
    pub line_height: f64,
    pub reading_font_size: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        DocumentTemplate {
            title: "やさしい日本語".to_string(),
            font_family: "'Noto Sans JP', sans-serif".to_string(),
            line_height: DEFAULT_LINE_HEIGHT,
            reading_font_size: "0.6em".to_string(),
        }
    }
}

/// Replace every `\n` with `<br>`. Other line terminators are left alone.
pub fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// CSS number for a line height: `2` renders as `2.0`, `1.75` as `1.75`.
/// Non-finite values fall back to [`DEFAULT_LINE_HEIGHT`].
pub fn format_line_height(line_height: f64) -> String {
    let value = if line_height.is_finite() {
        line_height
    } else {
        DEFAULT_LINE_HEIGHT
    };
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Wrap already-converted ruby markup in the styled display container.
pub fn format_display(ruby: &str, line_height: f64, style: &DisplayStyle) -> String {
    format!(
        r#"
<div style="
    font-size: {font_size};
    line-height: {line_height};
    padding: {padding};
    background-color: {background};
    border-radius: {radius};
    border-left: {border};
">
{content}
</div>
"#,
        font_size = style.font_size,
        line_height = format_line_height(line_height),
        padding = style.padding,
        background = style.background_color,
        radius = style.border_radius,
        border = style.accent_border,
        content = line_breaks(ruby),
    )
}

/// Build the downloadable HTML page around already-converted ruby markup.
/// No external resources are referenced.
pub fn render_document(ruby: &str, template: &DocumentTemplate) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: {font_family};
            line-height: {line_height};
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        ruby {{
            ruby-position: over;
        }}
        rt {{
            font-size: {reading_font_size};
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>{content}</p>
</body>
</html>"#,
        title = template.title,
        font_family = template.font_family,
        line_height = format_line_height(template.line_height),
        reading_font_size = template.reading_font_size,
        content = line_breaks(ruby),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks() {
        assert_eq!(line_breaks("A\nB"), "A<br>B");
        assert_eq!(line_breaks("A\r\nB"), "A\r<br>B");
        assert_eq!(line_breaks(""), "");
    }

    #[test]
    fn test_format_line_height() {
        assert_eq!(format_line_height(2.0), "2.0");
        assert_eq!(format_line_height(1.5), "1.5");
        assert_eq!(format_line_height(3.0), "3.0");
        assert_eq!(format_line_height(f64::NAN), "2.0");
        assert_eq!(format_line_height(f64::INFINITY), "2.0");
    }

    #[test]
    fn test_display_container_styles() {
        let html = format_display("A\nB", 2.0, &DisplayStyle::default());
        assert!(html.starts_with("\n<div style=\""));
        assert!(html.ends_with("</div>\n"));
        assert!(html.contains("\nA<br>B\n"));
        assert!(html.contains("font-size: 1.1rem;"));
        assert!(html.contains("line-height: 2.0;"));
        assert!(html.contains("padding: 1rem;"));
        assert!(html.contains("background-color: #f8f9fa;"));
        assert!(html.contains("border-radius: 8px;"));
        assert!(html.contains("border-left: 4px solid #1E88E5;"));
        assert!(!html.contains("A\nB"));
    }

    #[test]
    fn test_display_custom_line_height() {
        let html = format_display("x", 1.8, &DisplayStyle::default());
        assert!(html.contains("line-height: 1.8;"));
    }

    #[test]
    fn test_display_is_deterministic() {
        let style = DisplayStyle::default();
        assert_eq!(
            format_display("在留", 2.0, &style),
            format_display("在留", 2.0, &style)
        );
    }

    #[test]
    fn test_document_shell() {
        let html = render_document(
            "<ruby>在留<rt>ざいりゅう</rt></ruby>\nカード",
            &DocumentTemplate::default(),
        );
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>やさしい日本語</title>"));
        assert!(html.contains("<h1>やさしい日本語</h1>"));
        assert!(html.contains("font-family: 'Noto Sans JP', sans-serif;"));
        assert!(html.contains("line-height: 2.0;"));
        assert!(html.contains("ruby-position: over;"));
        assert!(html.contains("font-size: 0.6em;"));
        assert!(html.contains("<p><ruby>在留<rt>ざいりゅう</rt></ruby><br>カード</p>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_document_has_no_external_resources() {
        let html = render_document("text", &DocumentTemplate::default());
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_document_custom_title() {
        let template = DocumentTemplate {
            title: "お知らせ".to_string(),
            ..DocumentTemplate::default()
        };
        let html = render_document("", &template);
        assert!(html.contains("<title>お知らせ</title>"));
        assert!(html.contains("<h1>お知らせ</h1>"));
        assert!(html.contains("<p></p>"));
    }
}
