//! Top header with the target host and quit hint.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, host: &str) {
    let title = format!("Server Metrics Dashboard | host: {host}  (press 'q' to quit)");
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
