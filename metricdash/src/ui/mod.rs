//! UI module root: panel drawing functions and the full-frame layout.

pub mod banner;
pub mod chart;
pub mod header;
pub mod table;
pub mod theme;
pub mod util;

use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::state::DashState;

/// Draws header, status, and (once a snapshot exists) chart plus table.
pub fn draw_dashboard(f: &mut ratatui::Frame<'_>, st: &DashState, host: &str, now: DateTime<Utc>) {
    let area = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                          // header
            Constraint::Length(banner::status_height(st)),  // error banner + loading
            Constraint::Min(0),                             // chart + table
        ])
        .split(area);

    header::draw_header(f, rows[0], host);
    banner::draw_status(f, rows[1], st);

    let Some(s) = st.displayed() else { return; };
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(table::TABLE_HEIGHT)])
        .split(rows[2]);
    chart::draw_chart(f, body[0], s, st.is_stale());
    table::draw_table(f, body[1], s, now, st.is_stale());
}
