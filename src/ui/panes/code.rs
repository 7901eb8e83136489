//! Code pane rendering with syntax highlighting
//!
//! This module renders the listing of the selected operation in the selected
//! language, highlights the line the running step points at, and shows the
//! status message underneath.
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer. Python `#` comments
//! and C-style `//` comments are both recognized.

use crate::operations::listings::Listing;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the code pane
pub struct CodeRenderData<'a> {
    pub listing: Listing,
    pub language: &'a str,
    pub current_line: Option<usize>,
    pub status: &'a str,
    pub is_running: bool,
}

/// Simple syntax highlighting shared by the three languages
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte_pos, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, n)| n);

        // Comments run to the end of the line
        if c == '#' || (c == '/' && next == Some('/')) {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                line[byte_pos..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                line[byte_pos..end_byte].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = get_keyword_style(&current_word, c == '(');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "void" | "None" => Style::default().fg(DEFAULT_THEME.type_name),
        "def" | "return" | "if" | "else" | "for" | "in" | "or" | "raise" | "throw" | "new" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => {
            if is_function {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

/// Render the code pane
pub fn render_code_pane(frame: &mut Frame, area: Rect, data: CodeRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {}() · {} ", data.listing.function_name, data.language))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let lines: Vec<Line> = data
        .listing
        .lines()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = data.current_line == Some(idx);
            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content_line = highlight_source_code(text);
            if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut spans = vec![
                Span::styled(marker, num_style),
                Span::styled(format!("{:3} ", idx + 1), num_style),
            ];
            spans.extend(content_line.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), rows[0]);

    let status_style = if data.is_running {
        Style::default()
            .fg(Color::Black)
            .bg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ● ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(format!(" {} ", data.status), status_style),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        for src in [
            "    for (int i = 0; i < n; i++) {",
            "        raise IndexError(\"index out of range\")",
            "        return -1; // out of bounds",
            "    for i in range(len(arr)):",
        ] {
            assert_eq!(text_of(&highlight_source_code(src)), src);
        }
    }

    #[test]
    fn test_python_comment_is_one_span() {
        let line = highlight_source_code("x = 1  # note");
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "# note");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_keywords_are_bold() {
        let line = highlight_source_code("return i");
        assert_eq!(line.spans[0].content, "return");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
