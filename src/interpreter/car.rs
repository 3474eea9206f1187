//! Cars: the execution threads of a maze program
//!
//! A [`Car`] has a position, a heading, a single value register, a pause counter
//! and an alive flag. Once destroyed, a car's position and value are frozen: every
//! mutator below is a no-op on a dead car.

use crate::memory::value::Value;
use crate::parser::ast::Heading;
use std::fmt;

/// Stable identity of a car, unique within one loaded program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub u64);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    row: i64,
    col: i64,
    heading: Heading,
    value: Value,
    pause_ticks: u32,
    alive: bool,
}

impl Car {
    /// A fresh car: heading down, holding `Int(0)`
    pub fn new(id: CarId, row: i64, col: i64) -> Self {
        Car {
            id,
            row,
            col,
            heading: Heading::Down,
            value: Value::default(),
            pause_ticks: 0,
            alive: true,
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn col(&self) -> i64 {
        self.col
    }

    pub fn position(&self) -> (i64, i64) {
        (self.row, self.col)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn pause_ticks(&self) -> u32 {
        self.pause_ticks
    }

    pub fn is_paused(&self) -> bool {
        self.pause_ticks > 0
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Spend one tick: a paused car counts down, a running car moves one cell.
    ///
    /// Returns true if the car changed position.
    pub fn advance(&mut self) -> bool {
        if !self.alive {
            return false;
        }

        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            return false;
        }

        let (dr, dc) = self.heading.offset();
        self.row += dr;
        self.col += dc;
        true
    }

    /// Set the heading without checking what lies ahead
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn pause(&mut self, ticks: u32) {
        if self.alive {
            self.pause_ticks = ticks;
        }
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Copy this car's position, heading and value into a new car
    pub fn split(&self, id: CarId) -> Car {
        Car::new(id, self.row, self.col)
            .with_heading(self.heading)
            .with_value(self.value.clone())
    }

    pub fn set_value(&mut self, value: Value) {
        if self.alive {
            self.value = value;
        }
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "car {} at ({}, {}) heading {} holding {:?}",
            self.id, self.row, self.col, self.heading, self.value
        )?;
        if self.pause_ticks > 0 {
            write!(f, ", paused {}", self.pause_ticks)?;
        }
        if !self.alive {
            write!(f, ", dead")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car_at(row: i64, col: i64) -> Car {
        Car::new(CarId(0), row, col)
    }

    #[test]
    fn test_initial_state() {
        let car = car_at(0, 0);
        assert_eq!(car.position(), (0, 0));
        assert_eq!(car.heading(), Heading::Down);
        assert_eq!(car.value(), &Value::Int(0));
        assert!(car.is_alive());
        assert_eq!(car.pause_ticks(), 0);

        let custom = car_at(5, 10)
            .with_heading(Heading::Right)
            .with_value(Value::from("Hello"));
        assert_eq!(custom.heading(), Heading::Right);
        assert_eq!(custom.value(), &Value::from("Hello"));
    }

    #[test]
    fn test_movement() {
        let mut car = car_at(5, 5);

        car.advance();
        assert_eq!(car.position(), (6, 5));

        car.set_heading(Heading::Right);
        car.advance();
        assert_eq!(car.position(), (6, 6));

        car.set_heading(Heading::Up);
        car.advance();
        assert_eq!(car.position(), (5, 6));

        car.set_heading(Heading::Left);
        car.advance();
        assert_eq!(car.position(), (5, 5));
    }

    #[test]
    fn test_pause_holds_position() {
        let mut car = car_at(0, 0);
        car.pause(2);

        assert!(!car.advance());
        assert_eq!(car.row(), 0);
        assert_eq!(car.pause_ticks(), 1);

        assert!(!car.advance());
        assert_eq!(car.row(), 0);
        assert_eq!(car.pause_ticks(), 0);

        assert!(car.advance());
        assert_eq!(car.row(), 1);
    }

    #[test]
    fn test_dead_car_is_frozen() {
        let mut car = car_at(0, 0);
        car.destroy();

        assert!(!car.is_alive());
        assert!(!car.advance());
        car.set_value(Value::Int(9));
        assert_eq!(car.position(), (0, 0));
        assert_eq!(car.value(), &Value::Int(0));
    }

    #[test]
    fn test_split_copies_state() {
        let original = car_at(3, 4)
            .with_heading(Heading::Left)
            .with_value(Value::Int(42));
        let clone = original.split(CarId(7));

        assert_eq!(clone.id(), CarId(7));
        assert_eq!(clone.position(), (3, 4));
        assert_eq!(clone.heading(), Heading::Left);
        assert_eq!(clone.value(), &Value::Int(42));
        assert!(clone.is_alive());
    }
}
