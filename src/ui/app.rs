//! Main TUI application state and logic

use crate::interpreter::engine::Interpreter;
use crate::snapshot::{History, OutputLog, Snapshot};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Most ticks a single "run ahead" keypress will execute
const RUN_AHEAD_LIMIT: usize = 10_000;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Maze,
    Output,
    Cars,
    Functions,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: maze -> output -> cars -> functions)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Maze => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Cars,
            FocusedPane::Cars => FocusedPane::Functions,
            FocusedPane::Functions => FocusedPane::Maze,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Maze => FocusedPane::Functions,
            FocusedPane::Output => FocusedPane::Maze,
            FocusedPane::Cars => FocusedPane::Output,
            FocusedPane::Functions => FocusedPane::Cars,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance
    pub interpreter: Interpreter,

    /// Everything printed so far
    pub output: OutputLog,

    /// Pre-tick snapshots for stepping backward
    pub history: History,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub maze_scroll: usize,
    pub output_scroll: usize,
    pub cars_scroll: usize,
    pub functions_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Time between ticks in play mode
    pub tick_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Text typed so far; Some while the engine waits for input
    pub input_buffer: Option<String>,
}

impl App {
    /// Create a new app around a loaded interpreter
    pub fn new(interpreter: Interpreter, fps: u32, history_limit: usize) -> Self {
        let fps = fps.max(1);
        App {
            interpreter,
            output: OutputLog::new(),
            history: History::new(history_limit),
            focused_pane: FocusedPane::Maze,
            maze_scroll: 0,
            output_scroll: 0,
            cars_scroll: 0,
            functions_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            tick_interval: Duration::from_secs(1) / fps,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            input_buffer: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.tick_interval {
                if !self.step_once() && !self.interpreter.is_awaiting_input() {
                    self.is_playing = false;
                    self.status_message = "Simulation finished".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the interpreter by one tick, recording history.
    ///
    /// Returns false when no tick could be taken (finished or waiting for input).
    pub fn step_once(&mut self) -> bool {
        if !self.interpreter.is_running() || self.interpreter.is_awaiting_input() {
            return false;
        }

        self.history.push(Snapshot {
            interpreter: self.interpreter.clone(),
            output: self.output.clone(),
        });

        for text in self.interpreter.step() {
            self.output.push(&text);
        }
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;

        if let Some(car) = self.interpreter.awaiting_car() {
            self.input_buffer = Some(String::new());
            self.status_message = format!("Enter value for car {}:", car);
        }

        true
    }

    /// Restore the state from before the last tick
    pub fn step_backward(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Deliver the typed text to the waiting car
    pub fn submit_input(&mut self, text: &str) {
        self.interpreter.resolve_input(text);
        self.input_buffer = None;
        self.status_message = format!("Input accepted: {}", text);
        debug!(input = text, "input submitted from stepper");
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.interpreter = snapshot.interpreter;
        self.output = snapshot.output;
        self.input_buffer = None;
        self.output_scroll = usize::MAX;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Maze (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Cars (top) | Functions (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        super::panes::render_maze_pane(
            frame,
            left_rows[0],
            super::panes::MazeRenderData {
                grid: self.interpreter.grid(),
                cars: self.interpreter.cars(),
                signal_active: self.interpreter.is_signal_active(),
            },
            self.focused_pane == FocusedPane::Maze,
            &mut self.maze_scroll,
        );

        super::panes::render_terminal_pane(
            frame,
            left_rows[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_cars_pane(
            frame,
            right_rows[0],
            self.interpreter.cars(),
            self.interpreter.awaiting_car(),
            self.focused_pane == FocusedPane::Cars,
            &mut self.cars_scroll,
        );

        super::panes::render_functions_pane(
            frame,
            right_rows[1],
            self.interpreter.functions(),
            self.focused_pane == FocusedPane::Functions,
            &mut self.functions_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                tick: self.interpreter.ticks(),
                is_playing: self.is_playing,
                is_finished: !self.interpreter.is_running(),
                input_buffer: self.input_buffer.as_deref(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_buffer.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.step_once() {
                        break;
                    }
                    stepped += 1;
                }
                if self.input_buffer.is_none() {
                    self.status_message = format!("Stepped forward {} tick(s)", stepped);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Cannot step backward: no history".to_string()
                };
            }
            KeyCode::Right | KeyCode::Char('s') => {
                self.is_playing = false;
                if self.step_once() {
                    if self.input_buffer.is_none() {
                        self.status_message = "Stepped forward".to_string();
                    }
                } else {
                    self.status_message = "Cannot step forward: simulation finished".to_string();
                }
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.tick_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Run ahead until the simulation ends or asks for input
                self.is_playing = false;
                let mut stepped = 0;
                while stepped < RUN_AHEAD_LIMIT && self.step_once() {
                    stepped += 1;
                }
                if self.input_buffer.is_none() {
                    self.status_message = format!("Ran ahead {} tick(s)", stepped);
                }
            }
            KeyCode::Backspace => {
                // Jump back to the oldest recorded state
                self.is_playing = false;
                let mut rewound = 0;
                while self.step_backward() {
                    rewound += 1;
                }
                self.status_message = format!("Rewound {} tick(s)", rewound);
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.input_buffer.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let text = std::mem::take(buffer);
                self.submit_input(&text);
            }
            // Cancelling the prompt still has to resume the simulation
            KeyCode::Esc => self.submit_input("0"),
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Maze => &mut self.maze_scroll,
            FocusedPane::Output => &mut self.output_scroll,
            FocusedPane::Cars => &mut self.cars_scroll,
            FocusedPane::Functions => &mut self.functions_scroll,
        }
    }
}
