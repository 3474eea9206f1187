// Tick engine for the maze interpreter

use super::car::{Car, CarId};
use super::constants::SIGNAL;
use super::functions::FunctionTable;
use super::grid::Grid;
use crate::memory::value::Value;
use crate::parser::ast::{Command, Condition, Heading, Instruction};
use crate::parser::loader::Program;
use tracing::{debug, trace};

/// The main interpreter that runs a maze program one tick at a time
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    /// The board; only erase cells write to it after loading
    grid: Grid,

    /// Function definitions (name -> command)
    functions: FunctionTable,

    /// Active cars in spawn order, which is also execution order
    cars: Vec<Car>,

    /// Car that hit an input cell and is waiting for a value
    awaiting_input: Option<CarId>,

    /// Number of completed ticks since the last load
    ticks: u64,

    /// Id handed to the next car created
    next_car_id: u64,
}

impl Interpreter {
    /// Create an interpreter with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter and load `source` into it
    pub fn from_source(source: &str) -> Self {
        let mut interpreter = Self::new();
        interpreter.load(source);
        interpreter
    }

    /// Replace the current program, resetting all state
    pub fn load(&mut self, source: &str) {
        let Program { grid, functions } = Program::parse(source);
        *self = Interpreter {
            grid,
            functions,
            ..Self::default()
        };

        let spawns: Vec<(i64, i64)> = self.grid.spawn_points().collect();
        for (row, col) in spawns {
            let id = self.allocate_id();
            self.cars.push(Car::new(id, row, col));
        }

        debug!(
            rows = self.grid.height(),
            cols = self.grid.width(),
            functions = self.functions.len(),
            cars = self.cars.len(),
            "program loaded"
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Mutable access to an active car, for tools that pre-position cars
    pub fn car_mut(&mut self, index: usize) -> Option<&mut Car> {
        self.cars.get_mut(index)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True while at least one car is active
    pub fn is_running(&self) -> bool {
        !self.cars.is_empty()
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.awaiting_input.is_some()
    }

    /// The car an input value will be delivered to
    pub fn awaiting_car(&self) -> Option<CarId> {
        self.awaiting_input
    }

    /// True while any live car stands on a signal cell
    pub fn is_signal_active(&self) -> bool {
        signal_active(&self.grid, &self.cars)
    }

    /// Deliver a value to the car waiting on input and resume the simulation.
    ///
    /// Does nothing when no car is waiting.
    pub fn resolve_input(&mut self, raw: &str) {
        let Some(id) = self.awaiting_input.take() else {
            return;
        };

        let value = Value::parse_literal(raw);
        match self.cars.iter_mut().find(|car| car.id() == id) {
            Some(car) => {
                debug!(car = %id, value = ?value, "input resolved");
                car.set_value(value);
            }
            None => debug!(car = %id, "input target no longer active"),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Returns the text printed by `>>` cells during the tick, in execution order.
    /// While a car is waiting for input this does nothing and returns no output.
    pub fn step(&mut self) -> Vec<String> {
        if self.awaiting_input.is_some() {
            return Vec::new();
        }

        // Cars spawned during the tick are appended after both passes,
        // so the snapshot is simply the current length
        let moved = self.move_cars();
        let (outputs, spawned) = self.execute_cells(&moved);

        self.cars.extend(spawned);
        let before = self.cars.len();
        self.cars.retain(Car::is_alive);
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            cars = self.cars.len(),
            removed = before - self.cars.len(),
            outputs = outputs.len(),
            "tick complete"
        );

        outputs
    }

    /// First pass: move every car (or count down its pause).
    ///
    /// Returns, per car slot, whether that car changed position.
    fn move_cars(&mut self) -> Vec<bool> {
        let mut moved = vec![false; self.cars.len()];

        for (slot, car) in self.cars.iter_mut().enumerate() {
            if !car.is_alive() {
                continue;
            }

            if !car.is_paused() && !self.grid.is_open_towards(car.row(), car.col(), car.heading())
            {
                resolve_collision(&self.grid, car);
            }

            moved[slot] = car.advance();
        }

        moved
    }

    /// Second pass: run the instruction under every car that is not paused.
    fn execute_cells(&mut self, moved: &[bool]) -> (Vec<String>, Vec<Car>) {
        let mut outputs = Vec::new();
        let mut spawned = Vec::new();

        for slot in 0..moved.len() {
            let car = &self.cars[slot];
            if !car.is_alive() || car.is_paused() {
                continue;
            }

            let (row, col) = car.position();
            let instruction = match self.grid.get(row, col) {
                Some(token) => Instruction::decode(token),
                None => Instruction::Wall,
            };

            match instruction {
                Instruction::Wall | Instruction::Hole => {
                    debug!(car = %car.id(), row, col, "car destroyed");
                    self.cars[slot].destroy();
                }
                Instruction::Print => outputs.push(car.value().to_string()),
                Instruction::Input => {
                    debug!(car = %car.id(), "waiting for input");
                    self.awaiting_input = Some(car.id());
                }
                Instruction::Split => {
                    let id = self.allocate_id();
                    let mut clone = self.cars[slot].split(id);
                    steer(&self.grid, &mut self.cars[slot], Heading::Left);
                    steer(&self.grid, &mut clone, Heading::Right);
                    debug!(car = %self.cars[slot].id(), clone = %id, row, col, "car split");
                    spawned.push(clone);
                }
                Instruction::Erase => self.grid.erase(row, col),
                Instruction::Steer(heading) => steer(&self.grid, &mut self.cars[slot], heading),
                Instruction::Pause(ticks) => {
                    if moved[slot] {
                        self.cars[slot].pause(ticks);
                    }
                }
                Instruction::Call(name) => {
                    if let Some(function) = self.functions.get(&name) {
                        let command = function.command.clone();
                        self.run_command(slot, &command);
                    }
                }
                Instruction::Spawn | Instruction::Signal | Instruction::Path => {}
            }
        }

        (outputs, spawned)
    }

    /// Run a function command against the car in `slot`
    fn run_command(&mut self, slot: usize, command: &Command) {
        match command {
            Command::Assign(value) => self.cars[slot].set_value(value.clone()),
            Command::Update(op, operand) => {
                let car = &mut self.cars[slot];
                let result = car.value().apply(*op, operand);
                match result {
                    Ok(value) => car.set_value(value),
                    Err(e) => debug!(car = %car.id(), error = %e, "command skipped"),
                }
            }
            Command::Steer(heading) => steer(&self.grid, &mut self.cars[slot], *heading),
            Command::Branch {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(slot, condition) {
                    self.run_command(slot, then_branch);
                } else {
                    self.run_command(slot, else_branch);
                }
            }
            Command::Nop => {}
        }
    }

    fn evaluate(&self, slot: usize, condition: &Condition) -> bool {
        match condition {
            Condition::Signal => self.is_signal_active(),
            Condition::Compare(op, operand) => {
                let car = &self.cars[slot];
                car.value().compare(*op, operand).unwrap_or_else(|e| {
                    debug!(car = %car.id(), error = %e, "condition treated as false");
                    false
                })
            }
            Condition::Invalid => false,
        }
    }

    fn allocate_id(&mut self) -> CarId {
        let id = CarId(self.next_car_id);
        self.next_car_id += 1;
        id
    }
}

/// Point `car` at `heading`, falling back to another heading if that way is blocked
fn steer(grid: &Grid, car: &mut Car, heading: Heading) {
    car.set_heading(heading);
    if !grid.is_open_towards(car.row(), car.col(), heading) {
        resolve_collision(grid, car);
    }
}

/// Turn to the first open fallback heading; keep the current one if all are blocked
fn resolve_collision(grid: &Grid, car: &mut Car) {
    let current = car.heading();
    if let Some(heading) = current
        .fallbacks()
        .into_iter()
        .find(|h| grid.is_open_towards(car.row(), car.col(), *h))
    {
        car.set_heading(heading);
    }
}

fn signal_active(grid: &Grid, cars: &[Car]) -> bool {
    cars.iter()
        .filter(|car| car.is_alive())
        .any(|car| grid.get(car.row(), car.col()) == Some(SIGNAL))
}
