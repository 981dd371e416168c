//! Rich-text rendering into styled markup.

use crate::model::{HorizontalAlignment, RichText, RunStyle, TextRun, VerticalAlignment};

/// Render a rich-text block into a flex container honoring alignment and
/// per-run character styling.
pub fn render_rich_text(text: &RichText) -> String {
    let justify = match text.vertical {
        VerticalAlignment::Top => "flex-start",
        VerticalAlignment::Center => "center",
        VerticalAlignment::Bottom => "flex-end",
    };

    let mut out = format!(
        "<div style=\"display: flex; flex-direction: column; justify-content: {justify}; height: 100%;\">"
    );
    for line in &text.lines {
        let align = match line.alignment {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
        };
        out.push_str(&format!(
            "<div style=\"text-align: {align}; line-height: 1.2;\">"
        ));
        for run in &line.runs {
            render_run(&mut out, run);
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

/// Render one run; an empty run produces no markup node at all.
fn render_run(out: &mut String, run: &TextRun) {
    if run.is_empty() {
        return;
    }

    let style = run_style(&run.style);
    if style.is_empty() {
        out.push_str(&format!("<span>{}</span>", escape_html(&run.text)));
    } else {
        out.push_str(&format!(
            "<span style=\"{style}\">{}</span>",
            escape_html(&run.text)
        ));
    }
}

/// Compose a run's inline style; each attribute falls back to a platform
/// default by simply being omitted.
fn run_style(style: &RunStyle) -> String {
    let mut parts = Vec::new();
    if let Some(size) = style.font_size {
        parts.push(format!("font-size: {size}px"));
    }
    if let Some(ref family) = style.font_family {
        parts.push(format!("font-family: '{}', sans-serif", escape_html(family)));
    }
    if let Some(ref color) = style.color {
        parts.push(format!("color: {}", escape_html(&css_color(color))));
    }
    if style.bold {
        parts.push("font-weight: bold".to_string());
    }
    parts.join("; ")
}

/// Decode a color literal into its CSS form.
///
/// A 9-character `#AARRGGBB` literal decomposes into `rgba(r,g,b,a)` with
/// alpha = byte/255; any other literal is emitted unchanged, accepting
/// forward-compatible color representations.
pub fn css_color(value: &str) -> String {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            let (a, r, g, b) = (byte(0), byte(2), byte(4), byte(6));
            return format!("rgba({r},{g},{b},{})", format_alpha(a));
        }
    }
    value.to_string()
}

/// Format an alpha byte as a stable decimal: three places, trailing zeros
/// trimmed, so identical input always yields identical output.
fn format_alpha(byte: u8) -> String {
    let alpha = f32::from(byte) / 255.0;
    let mut s = format!("{alpha:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Escape text for HTML element and attribute contexts.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextLine;

    #[test]
    fn test_css_color_decodes_argb() {
        assert_eq!(css_color("#80FF0000"), "rgba(255,0,0,0.502)");
        assert_eq!(css_color("#FF112233"), "rgba(17,34,51,1)");
        assert_eq!(css_color("#00000000"), "rgba(0,0,0,0)");
    }

    #[test]
    fn test_css_color_passes_other_literals_verbatim() {
        // 6-digit hex, named colors, and anything else pass through.
        assert_eq!(css_color("#FF0000"), "#FF0000");
        assert_eq!(css_color("red"), "red");
        assert_eq!(css_color("#GGGGGGGG"), "#GGGGGGGG");
    }

    #[test]
    fn test_empty_run_produces_no_node() {
        let text = RichText {
            vertical: VerticalAlignment::Top,
            lines: vec![TextLine {
                alignment: HorizontalAlignment::Left,
                runs: vec![TextRun::new(""), TextRun::new("visible")],
            }],
        };
        let html = render_rich_text(&text);
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("visible"));
    }

    #[test]
    fn test_vertical_alignment_maps_to_justify() {
        for (vertical, expected) in [
            (VerticalAlignment::Top, "justify-content: flex-start"),
            (VerticalAlignment::Center, "justify-content: center"),
            (VerticalAlignment::Bottom, "justify-content: flex-end"),
        ] {
            let text = RichText {
                vertical,
                lines: Vec::new(),
            };
            assert!(render_rich_text(&text).contains(expected));
        }
    }

    #[test]
    fn test_line_alignment_is_independent() {
        let text = RichText {
            vertical: VerticalAlignment::Top,
            lines: vec![
                TextLine {
                    alignment: HorizontalAlignment::Center,
                    runs: vec![TextRun::new("a")],
                },
                TextLine {
                    alignment: HorizontalAlignment::Right,
                    runs: vec![TextRun::new("b")],
                },
            ],
        };
        let html = render_rich_text(&text);
        assert!(html.contains("text-align: center"));
        assert!(html.contains("text-align: right"));
    }

    #[test]
    fn test_run_styles_do_not_inherit() {
        let styled = TextRun {
            text: "big".into(),
            style: RunStyle {
                font_size: Some(40.0),
                bold: true,
                ..Default::default()
            },
        };
        let plain = TextRun::new("small");
        let text = RichText {
            vertical: VerticalAlignment::Top,
            lines: vec![TextLine {
                alignment: HorizontalAlignment::Left,
                runs: vec![styled, plain],
            }],
        };
        let html = render_rich_text(&text);
        assert!(html.contains("<span style=\"font-size: 40px; font-weight: bold\">big</span>"));
        // The second run gets no style at all, not the previous run's.
        assert!(html.contains("<span>small</span>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let text = RichText {
            vertical: VerticalAlignment::Top,
            lines: vec![TextLine {
                alignment: HorizontalAlignment::Left,
                runs: vec![TextRun::new("<b>&\"quotes\"")],
            }],
        };
        let html = render_rich_text(&text);
        assert!(html.contains("&lt;b&gt;&amp;&quot;quotes&quot;"));
    }
}
