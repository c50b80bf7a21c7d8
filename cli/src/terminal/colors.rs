use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ANSWER: Color = Color::TrueColor { r: 170, g: 170, b: 170 };

pub const STAGE_NEW: Color = Color::TrueColor { r: 90, g: 160, b: 255 };
pub const STAGE_LEARNING: Color = Color::TrueColor { r: 240, g: 90, b: 90 };
pub const STAGE_REVIEW: Color = Color::TrueColor { r: 100, g: 210, b: 120 };
