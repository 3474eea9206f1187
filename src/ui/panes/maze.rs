//! Maze pane rendering
//!
//! Draws the grid three terminal columns per cell. Walls, spawns, holes and signal
//! cells are drawn as solid colour; other cells show their token on the path
//! colour. Cars are drawn over their cell as their 1-based position in the active
//! list, which is also their execution order.

use super::utils::{clamp_scroll, pane_block};
use crate::interpreter::car::Car;
use crate::interpreter::grid::Grid;
use crate::parser::ast::Instruction;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashMap;

/// Data needed to render the maze pane
pub struct MazeRenderData<'a> {
    pub grid: &'a Grid,
    pub cars: &'a [Car],
    pub signal_active: bool,
}

/// Render the maze pane
pub fn render_maze_pane(
    frame: &mut Frame,
    area: Rect,
    data: MazeRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Maze ", is_focused);

    if data.grid.is_empty() {
        let paragraph = Paragraph::new("(empty grid)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Lowest list index wins when several cars share a cell
    let mut occupants: FxHashMap<(i64, i64), usize> = FxHashMap::default();
    for (index, car) in data.cars.iter().enumerate().rev() {
        occupants.insert(car.position(), index + 1);
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, data.grid.height(), visible_height);

    let lines: Vec<Line> = data
        .grid
        .rows()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, token)| match occupants.get(&(r as i64, c as i64)) {
                    Some(number) => car_span(*number),
                    None => cell_span(token, data.signal_active),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn car_span(number: usize) -> Span<'static> {
    Span::styled(
        format!("{:>2} ", number % 100),
        Style::default()
            .bg(DEFAULT_THEME.car)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn cell_span(token: &str, signal_active: bool) -> Span<'static> {
    let solid = |color: Color| Span::styled("   ", Style::default().bg(color));

    match Instruction::decode(token) {
        Instruction::Wall => solid(DEFAULT_THEME.wall),
        Instruction::Spawn => solid(DEFAULT_THEME.spawn),
        Instruction::Hole => solid(DEFAULT_THEME.hole),
        Instruction::Signal if signal_active => solid(DEFAULT_THEME.signal_lit),
        Instruction::Signal => solid(DEFAULT_THEME.signal_unlit),
        _ => {
            let label: String = if token == ".." {
                String::new()
            } else {
                token.chars().take(2).collect()
            };
            Span::styled(
                format!("{:<2} ", label),
                Style::default()
                    .bg(DEFAULT_THEME.path)
                    .fg(DEFAULT_THEME.symbol),
            )
        }
    }
}
