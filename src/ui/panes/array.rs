//! Array pane rendering
//!
//! Elements are drawn as a row of fixed-width cells. Each cell shows the
//! index, the value on a background coloured by its [`ElementState`], the
//! byte offset from the base address, and a pointer under the active element.

use crate::memory::{format_address, BASE_ADDRESS, INT_SIZE};
use crate::scene::ElementState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

const CELL_WIDTH: usize = 8;

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub values: &'a [i64],
    pub element_states: &'a FxHashMap<usize, ElementState>,
    pub active_element: Option<usize>,
    pub is_working_copy: bool,
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = CELL_WIDTH)
}

/// Build the pane's lines; split out so it can be tested without a terminal
pub(crate) fn array_lines(data: &ArrayRenderData) -> Vec<Line<'static>> {
    if data.values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let mut indices = Vec::new();
    let mut values = Vec::new();
    let mut states = Vec::new();
    let mut offsets = Vec::new();
    let mut pointer = Vec::new();

    for (i, value) in data.values.iter().enumerate() {
        let state = data.element_states.get(&i).copied();
        let is_active = data.active_element == Some(i);

        indices.push(Span::styled(
            centered(&format!("[{}]", i)),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        let mut value_style = Style::default()
            .bg(DEFAULT_THEME.element_color(state))
            .fg(if state.is_some() { Color::Black } else { DEFAULT_THEME.fg });
        if is_active {
            value_style = value_style.add_modifier(Modifier::BOLD);
        }
        values.push(Span::styled(format!(" {:^w$} ", value, w = CELL_WIDTH - 2), value_style));

        states.push(Span::styled(
            centered(state.map_or("", ElementState::label)),
            Style::default().fg(DEFAULT_THEME.element_color(state)),
        ));

        offsets.push(Span::styled(
            centered(&format!("+{}", i as u64 * INT_SIZE)),
            Style::default().fg(DEFAULT_THEME.address),
        ));

        pointer.push(Span::styled(
            centered(if is_active { "▲" } else { "" }),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    vec![
        Line::from(indices),
        Line::from(values),
        Line::from(states),
        Line::from(offsets),
        Line::from(pointer),
    ]
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: ArrayRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = format!(
        " Array · len {} · base {}{} ",
        data.values.len(),
        format_address(BASE_ADDRESS),
        if data.is_working_copy { " · shifting" } else { "" }
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(array_lines(&data)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_one_cell_per_element() {
        let states = FxHashMap::default();
        let data = ArrayRenderData {
            values: &[1, 22, 333],
            element_states: &states,
            active_element: None,
            is_working_copy: false,
        };
        let lines = array_lines(&data);
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.spans.len(), 3);
        }
        assert!(text_of(&lines[1]).contains("333"));
        assert!(text_of(&lines[3]).contains("+8"));
    }

    #[test]
    fn test_active_element_gets_pointer_and_state_label() {
        let mut states = FxHashMap::default();
        states.insert(1, ElementState::Checking);
        let data = ArrayRenderData {
            values: &[5, 6],
            element_states: &states,
            active_element: Some(1),
            is_working_copy: false,
        };
        let lines = array_lines(&data);
        assert!(text_of(&lines[2]).contains("checking"));
        assert!(lines[4].spans[1].content.contains('▲'));
        assert!(!lines[4].spans[0].content.contains('▲'));
        assert_eq!(
            lines[1].spans[1].style.bg,
            Some(DEFAULT_THEME.element_color(Some(ElementState::Checking)))
        );
    }

    #[test]
    fn test_empty_array_placeholder() {
        let states = FxHashMap::default();
        let data = ArrayRenderData {
            values: &[],
            element_states: &states,
            active_element: None,
            is_working_copy: false,
        };
        assert_eq!(text_of(&array_lines(&data)[0]), "(empty array)");
    }
}
