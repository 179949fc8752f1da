//! Reusable UI component helpers shared by the main draw code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Badge line: one bracketed badge per technology label, in source order.
pub fn tech_badges(badges: &[String], badge_color: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(badges.len() * 2);
    for (i, label) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{}]", label),
            Style::default().fg(badge_color),
        ));
    }
    Line::from(spans)
}

/// A horizontal skill bar. `level` is the target percentage; `fraction` is
/// how far the fill animation has progressed toward it.
pub fn progress_bar(level: u16, fraction: f32, width: u16) -> String {
    let width = width.max(1) as usize;
    let target = (width as f32 * (level.min(100) as f32 / 100.0)).round() as usize;
    let filled = (target as f32 * fraction.clamp(0.0, 1.0)).round() as usize;

    let mut out = String::with_capacity(width * 3);
    for i in 0..width {
        out.push(if i < filled { '█' } else { '░' });
    }
    out
}

/// Centered popup rect sized as a percentage of the parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
