//! Five-category bar chart. Percentages and raw byte counts share one axis.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::types::Snapshot;
use crate::ui::theme::{BAR_COLORS, STALE_FG};
use crate::ui::util::pct;

pub const LABELS: [&str; 5] = [
    "CPU Load (%)",
    "Memory Usage (%)",
    "Disk Usage (%)",
    "Net RX (bytes)",
    "Net TX (bytes)",
];

pub fn chart_values(s: &Snapshot) -> [f64; 5] {
    [
        s.cpu_load,
        pct(s.memory_used, s.memory_total),
        pct(s.disk_used, s.disk_total),
        s.net_rx as f64,
        s.net_tx as f64,
    ]
}

// Headroom so the widget's height scaling cannot overflow
const BAR_MAX: u64 = u64::MAX >> 16;

// Bars start at zero; non-finite and negative values draw empty, the text keeps the real value.
fn bar_height(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        (v.round() as u64).min(BAR_MAX)
    } else {
        0
    }
}

fn value_text(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

pub fn draw_chart(f: &mut ratatui::Frame<'_>, area: Rect, s: &Snapshot, stale: bool) {
    let title = if stale {
        format!("Metrics for {} (stale)", s.hostname)
    } else {
        format!("Metrics for {}", s.hostname)
    };
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if stale {
        block = block.border_style(Style::default().fg(STALE_FG));
    }

    let bars: Vec<Bar> = chart_values(s)
        .iter()
        .zip(LABELS)
        .zip(BAR_COLORS)
        .map(|((&v, label), color)| {
            Bar::default()
                .value(bar_height(v))
                .text_value(value_text(v))
                .label(Line::from(label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(color).add_modifier(Modifier::REVERSED))
        })
        .collect();

    // Fit five bars with one-cell gaps inside the borders
    let inner_w = area.width.saturating_sub(2);
    let bar_width = (inner_w.saturating_sub(4) / 5).max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, area);
}
