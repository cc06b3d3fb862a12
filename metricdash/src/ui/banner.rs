//! Error banner and loading indicator.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DashState;
use crate::ui::theme::{BANNER_FG, LOADING_FG};

pub const LOADING_TEXT: &str = "Fetching metrics...";

const BANNER_H: u16 = 3;

/// Rows needed for whatever status is currently visible.
pub fn status_height(st: &DashState) -> u16 {
    let mut h = 0;
    if st.error().is_some() {
        h += BANNER_H;
    }
    if st.is_loading() {
        h += 1;
    }
    h
}

pub fn draw_status(f: &mut ratatui::Frame<'_>, area: Rect, st: &DashState) {
    if area.height == 0 {
        return;
    }
    let err = st.error();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if err.is_some() { BANNER_H } else { 0 }),
            Constraint::Length(if st.is_loading() { 1 } else { 0 }),
        ])
        .split(area);

    if let Some(e) = err {
        let banner = Paragraph::new(e.to_string())
            .style(Style::default().fg(BANNER_FG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Error")
                    .border_style(Style::default().fg(BANNER_FG).add_modifier(Modifier::BOLD)),
            );
        f.render_widget(banner, rows[0]);
    }
    if st.is_loading() {
        f.render_widget(
            Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(LOADING_FG))
                .centered(),
            rows[1],
        );
    }
}
