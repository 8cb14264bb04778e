use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Grid border color
    pub border: Color,
    /// Box border color (thicker 3x3 separators)
    pub box_border: Color,
    /// Given (puzzle) cell color
    pub given: Color,
    /// User-entered value color
    pub filled: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Mismatched cell color
    pub error: Color,
    /// Correct-solution message color
    pub success: Color,
    /// Status text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_border: Color::Rgb { r: 130, g: 140, b: 170 },
            given: Color::Rgb { r: 255, g: 255, b: 255 },
            filled: Color::Rgb { r: 80, g: 180, b: 255 },
            selected_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }
}
