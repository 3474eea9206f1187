//! Function table pane rendering

use super::utils::{clamp_scroll, pane_block};
use crate::interpreter::functions::FunctionTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the functions pane
pub fn render_functions_pane(
    frame: &mut Frame,
    area: Rect,
    functions: &FunctionTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Functions ", is_focused);

    if functions.is_empty() {
        let paragraph = Paragraph::new("(no functions)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = functions
        .sorted()
        .into_iter()
        .map(|(name, function)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    name.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.function)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" -> ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(function.source.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
