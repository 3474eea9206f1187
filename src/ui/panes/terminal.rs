//! Output pane rendering

use super::utils::{clamp_scroll, pane_block};
use crate::snapshot::OutputLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the program output pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    output: &OutputLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));
        let all_items: Vec<ListItem> = output
            .lines()
            .iter()
            .map(|line| ListItem::new(*line).style(Style::default().fg(DEFAULT_THEME.fg)))
            .collect();

        // Calculate visible range for scrolling
        let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
        clamp_scroll(scroll_offset, all_items.len(), visible_height);

        // Take only visible items
        let visible_items: Vec<ListItem> = all_items
            .into_iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .collect();

        let list = List::new(visible_items).block(block);
        frame.render_widget(list, area);
    }
}
