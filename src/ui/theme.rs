use crate::scene::ElementState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub address: Color,
    pub checking: Color,
    pub checked: Color,
    pub shifting: Color,
    pub deleting: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    address: Color::Rgb(180, 165, 120),        // Muted yellow for addresses
    checking: Color::Rgb(249, 226, 175),       // Yellow while comparing
    checked: Color::Rgb(88, 91, 112),          // Dimmed once passed
    shifting: Color::Rgb(203, 166, 247),       // Mauve while moving
    deleting: Color::Rgb(243, 139, 168),       // Red for removal
};

impl Theme {
    /// Background colour of an element cell carrying `state`
    pub fn element_color(&self, state: Option<ElementState>) -> Color {
        match state {
            None => self.current_line_bg,
            Some(ElementState::Checking) => self.checking,
            Some(ElementState::Found) | Some(ElementState::Inserted) => self.success,
            Some(ElementState::Checked) => self.checked,
            Some(ElementState::Accessed) => self.primary,
            Some(ElementState::Shifting) => self.shifting,
            Some(ElementState::Shifted) => self.type_name,
            Some(ElementState::Deleting) => self.deleting,
        }
    }
}
