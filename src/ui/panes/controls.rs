//! Controls pane: operation picker, parameter fields and settings

use crate::config::Language;
use crate::operations::{Operation, OperationParams, ParamField};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub operation: Operation,
    pub params: &'a OperationParams,
    pub focused_field: Option<ParamField>,
    pub speed: Duration,
    pub size: usize,
    pub language: Language,
    pub capacity: usize,
}

pub(crate) fn controls_lines(data: &ControlsRenderData) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut ops = vec![Span::styled("op    ", label_style)];
    for operation in Operation::ALL {
        let style = if operation == data.operation {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        ops.push(Span::styled(format!(" {} ", operation.label()), style));
        ops.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(ops), Line::from("")];

    for &field in data.operation.fields() {
        let is_focused = data.focused_field == Some(field);
        let input = data.params.get(field);
        let value_style = if is_focused {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        };
        lines.push(Line::from(vec![
            Span::styled(if is_focused { "▶ " } else { "  " }, value_style),
            Span::styled(format!("{:<6}", field.label()), label_style),
            Span::styled(
                format!("{}{}", input, if is_focused { "_" } else { "" }),
                value_style,
            ),
        ]));
    }

    lines.push(Line::from(""));
    let mut settings = vec![
        Span::styled("speed ", label_style),
        Span::styled(
            format!("{}ms", data.speed.as_millis()),
            Style::default().fg(DEFAULT_THEME.number),
        ),
        Span::styled("  size ", label_style),
        Span::styled(data.size.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        Span::styled("  lang ", label_style),
        Span::styled(
            data.language.label(),
            Style::default().fg(DEFAULT_THEME.keyword),
        ),
    ];
    if data.language.is_fixed_capacity() {
        settings.push(Span::styled("  capacity ", label_style));
        settings.push(Span::styled(
            data.capacity.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        ));
    }
    lines.push(Line::from(settings));

    lines
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(controls_lines(&data)).block(block), area);
}
