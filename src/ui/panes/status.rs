//! Status bar rendering with keybindings and state indicators

use crate::operations::OperationOutcome;
use crate::scene::FoundIndex;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub iteration: Option<usize>,
    pub found: FoundIndex,
    pub last_outcome: Option<&'a OperationOutcome>,
    pub is_playing: bool,
}

fn progress_text(data: &StatusRenderData) -> String {
    let mut parts = Vec::new();
    if let Some(iteration) = data.iteration {
        parts.push(format!("i = {}", iteration));
    }
    match data.found {
        FoundIndex::NotSearched => {}
        FoundIndex::Absent => parts.push("found: -1".to_string()),
        FoundIndex::At(index) => parts.push(format!("found: {}", index)),
    }
    if parts.is_empty() {
        if let Some(outcome) = data.last_outcome {
            parts.push(format!("last: {}", outcome));
        }
    }
    parts.join(" · ")
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let (badge, badge_bg) = if data.is_playing {
        (" ▶ PLAYING ", DEFAULT_THEME.secondary)
    } else {
        (" IDLE ", DEFAULT_THEME.success)
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", progress_text(&data)),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: [(&str, &str); 8] = [
        (" ←/→ ", " op "),
        (" ⇥ ", " field "),
        (" ↵ ", " run "),
        (" esc ", " stop "),
        (" ↑/↓ ", " speed "),
        (" [/] ", " size "),
        (" g ", " new array "),
        (" l ", " lang "),
    ];

    let mut right_spans = Vec::new();
    for (key, desc) in bindings {
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
        right_spans.push(Span::styled("│", sep_style));
    }
    right_spans.push(Span::styled(" q ", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_prefers_live_cursor_over_outcome() {
        let outcome = OperationOutcome::Found { target: 7, index: 1 };
        let data = StatusRenderData {
            iteration: Some(3),
            found: FoundIndex::NotSearched,
            last_outcome: Some(&outcome),
            is_playing: true,
        };
        assert_eq!(progress_text(&data), "i = 3");

        let data = StatusRenderData {
            iteration: None,
            found: FoundIndex::NotSearched,
            last_outcome: Some(&outcome),
            is_playing: false,
        };
        assert_eq!(progress_text(&data), "last: Found 7 at index 1");
    }

    #[test]
    fn test_absent_target_reads_as_minus_one() {
        let data = StatusRenderData {
            iteration: Some(4),
            found: FoundIndex::Absent,
            last_outcome: None,
            is_playing: true,
        };
        assert_eq!(progress_text(&data), "i = 4 · found: -1");
    }
}
