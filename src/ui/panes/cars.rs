//! Cars pane rendering
//!
//! One line per active car in execution order:
//!
//! ```text
//! [1] D | 42          (3, 7)
//! [2] L | "hi"        (3, 7)  paused 4
//! ```

use super::utils::{clamp_scroll, pane_block, value_span};
use crate::interpreter::car::{Car, CarId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Widest value shown before truncation
const VALUE_WIDTH: usize = 12;

/// Render the cars pane
pub fn render_cars_pane(
    frame: &mut Frame,
    area: Rect,
    cars: &[Car],
    awaiting: Option<CarId>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Active Cars ({}) ", cars.len());
    let block = pane_block(&title, is_focused);

    if cars.is_empty() {
        let paragraph = Paragraph::new("(no cars)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = cars
        .iter()
        .enumerate()
        .map(|(index, car)| ListItem::new(car_line(index, car, awaiting == Some(car.id()))))
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

fn car_line(index: usize, car: &Car, is_awaiting: bool) -> Line<'static> {
    let label_style = if is_awaiting {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };

    let value = value_span(car.value(), VALUE_WIDTH);
    let padding = " ".repeat(VALUE_WIDTH.saturating_sub(value.content.chars().count()) + 1);

    let mut spans = vec![
        Span::styled(format!("[{}] ", index + 1), label_style),
        Span::styled(
            format!("{} | ", car.heading()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        value,
        Span::raw(padding),
        Span::styled(
            format!("({}, {})", car.row(), car.col()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];

    if car.is_paused() {
        spans.push(Span::styled(
            format!("  paused {}", car.pause_ticks()),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    if is_awaiting {
        spans.push(Span::styled(
            "  waiting for input",
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }

    Line::from(spans)
}
