//! Parameter/value detail table.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::types::Snapshot;
use crate::ui::theme::STALE_FG;
use crate::ui::util::{fmt_gb, fmt_mb, fmt_pct, fmt_updated, pct};

/// Rows plus header plus borders.
pub const TABLE_HEIGHT: u16 = 13;

/// The ten table rows, derived fresh from the snapshot on every call.
pub fn detail_rows(s: &Snapshot, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
    vec![
        ("CPU Load", format!("{}%", s.cpu_load)),
        ("Memory Used", fmt_gb(s.memory_used)),
        ("Memory Total", fmt_gb(s.memory_total)),
        ("Memory Usage", fmt_pct(pct(s.memory_used, s.memory_total))),
        ("Disk Used", fmt_gb(s.disk_used)),
        ("Disk Total", fmt_gb(s.disk_total)),
        ("Disk Usage", fmt_pct(pct(s.disk_used, s.disk_total))),
        ("Network RX", fmt_mb(s.net_rx)),
        ("Network TX", fmt_mb(s.net_tx)),
        ("Last Updated", fmt_updated(now)),
    ]
}

pub fn draw_table(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    s: &Snapshot,
    now: DateTime<Utc>,
    stale: bool,
) {
    let header = Row::new(["Parameter", "Value"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = detail_rows(s, now)
        .into_iter()
        .map(|(k, v)| Row::new([k.to_string(), v]))
        .collect();

    let block = if stale {
        Block::default()
            .borders(Borders::ALL)
            .title("Details (stale)")
            .border_style(Style::default().fg(STALE_FG))
    } else {
        Block::default().borders(Borders::ALL).title("Details")
    };

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .header(header)
        .block(block)
        .column_spacing(2);
    f.render_widget(table, area);
}
