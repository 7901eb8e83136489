//! Memory pane rendering: simulated stack frame and heap block
//!
//! The top half shows the most recent stack frame published by the running
//! operation, locals in declaration order. The bottom half lays the array out
//! as heap cells, one `address | value` row per element, mirroring the
//! element states of the array pane and marking the active memory cell.

use crate::memory::heap::{block_size, heap_cells};
use crate::memory::stack::StackFrameSnapshot;
use crate::memory::{format_address, BASE_ADDRESS};
use crate::scene::ElementState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rustc_hash::FxHashMap;

/// Data needed to render the memory pane
pub struct MemoryRenderData<'a> {
    pub stack_frame: Option<&'a StackFrameSnapshot>,
    pub heap: &'a [i64],
    pub active_memory: Option<usize>,
    pub element_states: &'a FxHashMap<usize, ElementState>,
}

fn section_header(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
}

pub(crate) fn memory_items(data: &MemoryRenderData) -> Vec<ListItem<'static>> {
    let mut items = vec![section_header("Stack")];

    match data.stack_frame {
        None => items.push(
            ListItem::new("  (no active frame)").style(Style::default().fg(DEFAULT_THEME.comment)),
        ),
        Some(stack_frame) => {
            items.push(ListItem::new(Line::from(vec![
                Span::styled("  Frame 0 ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{}()", stack_frame.function_name),
                    Style::default()
                        .fg(DEFAULT_THEME.function)
                        .add_modifier(Modifier::BOLD),
                ),
            ])));

            let name_width = stack_frame
                .locals
                .iter()
                .map(|slot| slot.name.len())
                .max()
                .unwrap_or(0);
            for slot in &stack_frame.locals {
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<width$}", slot.name, width = name_width),
                        Style::default().fg(DEFAULT_THEME.fg),
                    ),
                    Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(slot.value.clone(), Style::default().fg(DEFAULT_THEME.number)),
                ])));
            }
        }
    }

    items.push(ListItem::new(""));
    items.push(section_header(&format!(
        "Heap · {} | {} bytes",
        format_address(BASE_ADDRESS),
        block_size(data.heap.len())
    )));

    if data.heap.is_empty() {
        items.push(
            ListItem::new("  (no allocations)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    for (i, cell) in heap_cells(data.heap).into_iter().enumerate() {
        let state = data.element_states.get(&i).copied();
        let is_active = data.active_memory == Some(i);

        let addr_style = if is_active {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.address)
        };
        let value_style = match state {
            Some(_) => Style::default().fg(DEFAULT_THEME.element_color(state)),
            None => Style::default().fg(DEFAULT_THEME.number),
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(if is_active { "→ " } else { "  " }, addr_style),
            Span::styled(format_address(cell.address), addr_style),
            Span::raw(" | "),
            Span::styled(format!("{:>6}", cell.data), value_style),
            Span::styled(
                format!("  arr[{}]", i),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])));
    }

    items
}

/// Render the memory pane
pub fn render_memory_pane(frame: &mut Frame, area: Rect, data: MemoryRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Memory ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = memory_items(&data).into_iter().take(visible_height).collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_memory_shows_placeholders() {
        let states = FxHashMap::default();
        let items = memory_items(&MemoryRenderData {
            stack_frame: None,
            heap: &[],
            active_memory: None,
            element_states: &states,
        });
        // header, placeholder, spacer, header, placeholder
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_one_row_per_local_and_heap_cell() {
        let states = FxHashMap::default();
        let frame = StackFrameSnapshot::new("access").local("index", 1).local("value", 20);
        let items = memory_items(&MemoryRenderData {
            stack_frame: Some(&frame),
            heap: &[10, 20, 30],
            active_memory: Some(1),
            element_states: &states,
        });
        // header, frame line, 2 locals, spacer, header, 3 cells
        assert_eq!(items.len(), 9);
    }
}
