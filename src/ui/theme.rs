use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub string: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub wall: Color,
    pub path: Color,
    pub spawn: Color,
    pub hole: Color,
    pub car: Color,
    pub symbol: Color,
    pub signal_lit: Color,
    pub signal_unlit: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    string: Color::Rgb(166, 227, 161),         // Green for text values
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for function names
    wall: Color::Rgb(45, 52, 54),
    path: Color::Rgb(223, 230, 233),
    spawn: Color::Rgb(0, 184, 148),
    hole: Color::Rgb(214, 48, 49),
    car: Color::Rgb(9, 132, 227),
    symbol: Color::Rgb(99, 110, 114),
    signal_lit: Color::Rgb(255, 255, 100),
    signal_unlit: Color::Rgb(150, 150, 50),
};
