//! Markdown to ratatui rendering, plus the inline-image stripper applied
//! to narrative text before rendering.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::colors;

/// Remove every complete inline image directive (`![alt](src)`) from
/// `text`, leaving the surrounding text untouched.
///
/// Chart images are surfaced individually in the quantitative view;
/// leaving the directives in the narrative would double-render them or
/// produce broken links. Incomplete directives are kept whole rather than
/// partially matched, so no stray brackets are ever left behind.
pub fn strip_image_directives(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'!'
            && bytes.get(i + 1) == Some(&b'[')
            && let Some(end) = image_directive_end(bytes, i)
        {
            i = end;
            continue;
        }

        let ch = text[i..].chars().next().unwrap_or('\u{FFFD}');
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}

/// Byte index just past a complete `![alt](src)` directive starting at
/// `start` (which points at `!`), or `None` if the directive is
/// incomplete.
fn image_directive_end(bytes: &[u8], start: usize) -> Option<usize> {
    // Alt text: scan to the matching unescaped `]`.
    let mut i = start + 2;
    let mut bracket_depth = 1usize;
    while i < bytes.len() {
        match bytes[i] {
            b'[' => bracket_depth += 1,
            b']' => {
                bracket_depth -= 1;
                if bracket_depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        i += 1;
    }
    if bracket_depth != 0 || bytes.get(i + 1) != Some(&b'(') {
        return None;
    }

    // Source: scan to the matching `)`, tolerating nested parens.
    let mut j = i + 2;
    let mut paren_depth = 1usize;
    while j < bytes.len() {
        match bytes[j] {
            b'(' => paren_depth += 1,
            b')' => {
                paren_depth -= 1;
                if paren_depth == 0 {
                    return Some(j + 1);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Render markdown content to ratatui lines.
pub fn render_markdown(content: &str, base_style: Style) -> Vec<Line<'static>> {
    Writer::new(base_style).render(content)
}

struct Writer {
    base_style: Style,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,

    // Counters rather than booleans so nesting (bold inside a heading)
    // unwinds correctly.
    bold: usize,
    italic: usize,

    in_code_block: bool,
    code_lines: Vec<String>,

    // Minimal table support: one plain row per table row.
    in_table: bool,
    table_cells: Vec<String>,

    list_stack: Vec<Option<u64>>,
    pending_link: Option<String>,

    // Depth of image tags being skipped; image alt text is not emitted.
    image_depth: usize,
}

impl Writer {
    fn new(base_style: Style) -> Self {
        Self {
            base_style,
            lines: Vec::new(),
            spans: Vec::new(),
            bold: 0,
            italic: 0,
            in_code_block: false,
            code_lines: Vec::new(),
            in_table: false,
            table_cells: Vec::new(),
            list_stack: Vec::new(),
            pending_link: None,
            image_depth: 0,
        }
    }

    fn render(mut self, content: &str) -> Vec<Line<'static>> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        for event in Parser::new_ext(content, options) {
            self.handle(event);
        }
        self.flush_line();
        self.lines
    }

    fn handle(&mut self, event: Event) {
        if self.image_depth > 0 {
            match event {
                Event::Start(Tag::Image { .. }) => self.image_depth += 1,
                Event::End(TagEnd::Image) => self.image_depth -= 1,
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let style = Style::default().fg(colors::PEACH);
                self.spans.push(Span::styled(format!("`{code}`"), style));
            }
            Event::SoftBreak => {
                if !self.in_code_block && !self.in_table {
                    self.spans.push(Span::raw(" "));
                }
            }
            Event::HardBreak => self.flush_line(),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { .. } => {
                self.flush_line();
                if !self.lines.is_empty() {
                    self.lines.push(Line::from(""));
                }
                self.bold += 1;
            }
            Tag::Strong => self.bold += 1,
            Tag::Emphasis => self.italic += 1,
            Tag::Paragraph => {
                if !self.lines.is_empty() && self.list_stack.is_empty() {
                    self.lines.push(Line::from(""));
                }
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
                self.code_lines.clear();
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(index)) => {
                        let text = format!("{indent}{index}. ");
                        *index += 1;
                        text
                    }
                    _ => format!("{indent}• "),
                };
                self.spans.push(Span::styled(marker, self.base_style));
            }
            Tag::Table(_) => {
                self.flush_line();
                self.in_table = true;
            }
            Tag::TableHead | Tag::TableRow => self.table_cells.clear(),
            Tag::TableCell => self.table_cells.push(String::new()),
            Tag::Link { dest_url, .. } => self.pending_link = Some(dest_url.to_string()),
            Tag::Image { .. } => self.image_depth = 1,
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.spans
                    .push(Span::styled("▍ ", Style::default().fg(colors::TEXT_MUTED)));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.bold = self.bold.saturating_sub(1);
                self.flush_line();
            }
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            TagEnd::Paragraph | TagEnd::Item | TagEnd::BlockQuote(_) => self.flush_line(),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                let style = Style::default().fg(colors::GREEN);
                for line in std::mem::take(&mut self.code_lines) {
                    self.lines
                        .push(Line::from(vec![Span::raw("  "), Span::styled(line, style)]));
                }
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::TableHead => {
                let style = self.base_style.add_modifier(Modifier::BOLD);
                self.push_table_row(style);
            }
            TagEnd::TableRow => self.push_table_row(self.base_style),
            TagEnd::Table => self.in_table = false,
            TagEnd::Link => {
                if let Some(url) = self.pending_link.take() {
                    self.spans.push(Span::styled(
                        format!(" ({url})"),
                        Style::default().fg(colors::TEXT_MUTED),
                    ));
                }
            }
            TagEnd::Image => self.image_depth = self.image_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            self.code_lines.extend(text.lines().map(String::from));
            return;
        }
        if self.in_table {
            if let Some(cell) = self.table_cells.last_mut() {
                cell.push_str(text);
            }
            return;
        }

        let mut style = self.base_style;
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        self.spans.push(Span::styled(text.to_string(), style));
    }

    fn push_table_row(&mut self, style: Style) {
        if self.table_cells.is_empty() {
            return;
        }
        let row = std::mem::take(&mut self.table_cells).join(" │ ");
        self.lines.push(Line::from(Span::styled(row, style)));
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }
}
