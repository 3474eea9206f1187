// Constants for the maze interpreter

/// Impassable cell; also used to pad short rows and to overwrite erased cells
pub const WALL: &str = "##";

/// Spawn point: one car is created here when a program is loaded
pub const SPAWN: &str = "^^";

/// Destroys any car that lands on it
pub const HOLE: &str = "()";

/// Emits the car's value
pub const PRINT: &str = ">>";

/// Suspends the whole simulation until a value is supplied for the car
pub const INPUT: &str = "<<";

/// Splits the car into a left-bound and a right-bound copy
pub const SPLIT: &str = "<>";

/// Turns into a wall once a car has passed over it
pub const ERASE: &str = "--";

/// Lit while any live car stands on it; queried with `IF **`
pub const SIGNAL: &str = "**";

/// Everything after this marker on a source line is ignored
pub const COMMENT_MARKER: &str = "//";

/// Separates a function name from its command on a definition line
pub const FUNCTION_ARROW: &str = "->";

/// Separates tokens within a grid row
pub const CELL_SEPARATOR: char = ',';

/// Longest text value arithmetic may produce (in bytes)
/// Repetition past this length is rejected
pub const MAX_TEXT_LEN: usize = 1 << 20;
