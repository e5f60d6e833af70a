use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0, g: 200, b: 140 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 190, b: 60 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 90, g: 170, b: 255 };
pub const URL: Color = Color::TrueColor { r: 150, g: 130, b: 255 };
pub const MATCHED: Color = Color::Green;
pub const NON_MATCHING: Color = Color::BrightBlack;
pub const DISCONNECTED: Color = Color::Red;
