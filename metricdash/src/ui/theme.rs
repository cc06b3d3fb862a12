//! Shared UI theme constants.

use ratatui::style::Color;

// One color per chart category: CPU, memory, disk, RX, TX
pub const BAR_COLORS: [Color; 5] = [
    Color::Rgb(75, 192, 192),
    Color::Rgb(255, 99, 132),
    Color::Rgb(54, 162, 235),
    Color::Rgb(255, 206, 86),
    Color::Rgb(153, 102, 255),
];

pub const BANNER_FG: Color = Color::Red;
pub const LOADING_FG: Color = Color::DarkGray;
pub const STALE_FG: Color = Color::Yellow;
