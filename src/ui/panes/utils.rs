//! Shared utility functions for pane rendering
//!
//! # Utilities
//!
//! - **Borders**: focused/unfocused block styling
//! - **Scrolling**: clamp a scroll offset to the content that exists
//! - **Value Formatting**: convert a car's [`Value`] to a styled, width-limited span

use crate::memory::value::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block with the pane title, highlighted when focused
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page of content stays visible
pub(super) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Format a value for a narrow column, escaping newlines and truncating
pub(super) fn value_span(value: &Value, max_chars: usize) -> Span<'static> {
    let text = match value {
        Value::Text(s) => format!("{:?}", s),
        other => other.to_string(),
    };

    let shown = if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{}..", kept)
    } else {
        text
    };

    let color = match value {
        Value::Text(_) => DEFAULT_THEME.string,
        Value::Int(_) | Value::Float(_) => DEFAULT_THEME.number,
    };
    Span::styled(shown, Style::default().fg(color))
}
