use super::segment::{CommentTemplate, Segment, TemplateLine};
use crate::config::CommentStyle;

/// How placeholders appear in rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `${n:default}` fields and a closing `$0`, for snippet engines
    #[default]
    Snippet,
    /// Defaults written out, the final field left empty
    Plain,
}

/// Wraps template lines in comment markers and indentation.
pub struct CommentRenderer<'a> {
    style: &'a CommentStyle,
}

impl<'a> CommentRenderer<'a> {
    pub fn new(style: &'a CommentStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, template: &CommentTemplate, format: OutputFormat) -> Vec<String> {
        let style = self.style;
        let mut body = template.lines.iter().map(|line| render_line(line, format));
        let mut lines = Vec::with_capacity(template.lines.len() + 2);

        if let Some(first) = body.next() {
            match (style.use_block, style.block_no_newline) {
                (true, true) => lines.push(format!("{}{first}", style.block_start)),
                (true, false) => {
                    lines.push(style.block_start.clone());
                    lines.push(format!("{}{first}", style.comment_middle));
                }
                (false, _) => lines.push(format!("{}{first}", style.comment_middle)),
            }
        }
        lines.extend(body.map(|line| format!("{}{line}", style.comment_middle)));
        if style.use_block {
            lines.push(style.block_end.clone());
        }

        let indent = " ".repeat(template.indent);
        lines
            .into_iter()
            .map(|line| format!("{indent}{line}"))
            .collect()
    }
}

fn render_line(line: &TemplateLine, format: OutputFormat) -> String {
    line.segments()
        .iter()
        .map(|segment| match (segment, format) {
            (Segment::Text(text), OutputFormat::Snippet) => escape_snippet(text, false),
            (Segment::Text(text), OutputFormat::Plain) => text.clone(),
            (Segment::Field { index: 0, .. }, OutputFormat::Snippet) => "$0".to_string(),
            (Segment::Field { index, default }, OutputFormat::Snippet) => {
                format!("${{{index}:{}}}", escape_snippet(default, true))
            }
            (Segment::Field { default, .. }, OutputFormat::Plain) => default.clone(),
        })
        .collect()
}

/// Escape characters a snippet engine would otherwise interpret
fn escape_snippet(text: &str, in_placeholder: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == '$' || (in_placeholder && c == '}') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
