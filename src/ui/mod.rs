mod components;

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Overlay};
use crate::content::NO_LINK;
use crate::theme::Theme;
use crate::view::layout::{wrap, Section};
use crate::view::PROJECT_CONTAINER;

// Load theme colors once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn heading() -> Color { theme().heading }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn badge() -> Color { theme().badge }
fn link() -> Color { theme().link }
fn bar() -> Color { theme().bar }
fn bg_selected() -> Color { theme().bg_selected }
fn inactive() -> Color { theme().inactive }

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.header_height()), // Nav header (compact when scrolled)
            Constraint::Min(3),                      // Document viewport
            Constraint::Length(1),                   // Footer / status line
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    // Draw overlays on top
    match app.overlay {
        Overlay::None => {}
        Overlay::Menu => draw_menu(f, app),
        Overlay::Help => draw_help(f),
    }
}

fn nav_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            app.site.profile.name.to_string(),
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(inactive())),
    ];

    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *section == app.active_section {
            Style::default().fg(accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_dim())
        };
        spans.push(Span::styled(section.title(), style));
    }

    spans.push(Span::styled("  │  ", Style::default().fg(inactive())));
    let glyph_style = if app.overlay == Overlay::Menu {
        Style::default().fg(accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(text_dim())
    };
    spans.push(Span::styled(app.menu_glyph(), glyph_style));

    Line::from(spans)
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    if app.header_scrolled {
        // Compact sticky header: a single centered nav line.
        let header = Paragraph::new(nav_line(app)).alignment(Alignment::Center);
        f.render_widget(header, area);
    } else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(inactive()));
        let header = Paragraph::new(nav_line(app))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(header, area);
    }
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([Constraint::Min(0)])
        .split(area)[0];

    let lines = build_document(app, inner.width, Instant::now());

    let start = (app.scroll as usize).min(lines.len());
    let end = (start + inner.height as usize).min(lines.len());
    let visible = lines[start..end].to_vec();

    f.render_widget(Paragraph::new(visible), inner);
}

/// Build the full styled document. Line counts must stay in step with the
/// geometry in [`crate::view::layout`].
fn build_document(app: &App, width: u16, now: Instant) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in Section::ALL {
        match section {
            Section::Home => build_home(app, width, &mut lines),
            Section::About => build_about(app, width, &mut lines),
            Section::Skills => build_skills(app, width, now, &mut lines),
            Section::Projects => build_projects(app, width, now, &mut lines),
            Section::Contact => build_contact(app, &mut lines),
        }
    }

    lines
}

fn heading_line(title: &'static str, revealed: bool) -> Line<'static> {
    let color = if revealed { heading() } else { text_dim() };
    Line::from(vec![
        Span::styled("▍ ", Style::default().fg(color)),
        Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn body_color(revealed: bool) -> Color {
    if revealed { text() } else { text_dim() }
}

fn build_home(app: &App, width: u16, lines: &mut Vec<Line<'static>>) {
    let revealed = app.section_revealed(Section::Home);
    let name_color = if revealed { accent() } else { text_dim() };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        app.site.profile.name.to_string(),
        Style::default().fg(name_color).add_modifier(Modifier::BOLD),
    )));
    for row in wrap(app.site.profile.tagline, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(body_color(revealed)),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↓  Enter to explore",
        Style::default().fg(text_dim()),
    )));
    lines.push(Line::default());
}

fn build_about(app: &App, width: u16, lines: &mut Vec<Line<'static>>) {
    let revealed = app.section_revealed(Section::About);
    lines.push(heading_line("About", revealed));
    lines.push(Line::default());
    for para in app.site.profile.about {
        for row in wrap(para, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(body_color(revealed)),
            )));
        }
        lines.push(Line::default());
    }
}

fn build_skills(app: &App, width: u16, now: Instant, lines: &mut Vec<Line<'static>>) {
    let revealed = app.section_revealed(Section::Skills);
    lines.push(heading_line("Skills", revealed));
    lines.push(Line::default());

    let bar_width = width.saturating_sub(2).min(40).max(4);
    for (i, skill) in app.site.skills.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}  {}%", skill.name, skill.level),
            Style::default().fg(body_color(revealed)),
        )));

        let fraction = app.skill_bar_progress(i, now);
        let fill_color = if fraction > 0.0 { bar() } else { text_dim() };
        lines.push(Line::from(Span::styled(
            components::progress_bar(skill.level, fraction, bar_width),
            Style::default().fg(fill_color),
        )));
        lines.push(Line::default());
    }
}

fn build_projects(app: &App, width: u16, now: Instant, lines: &mut Vec<Line<'static>>) {
    let section_revealed = app.section_revealed(Section::Projects);
    lines.push(heading_line("Projects", section_revealed));
    lines.push(Line::default());

    let cards = app
        .page
        .container(PROJECT_CONTAINER)
        .map(|c| c.cards.as_slice())
        .unwrap_or(&[]);

    for (i, card) in cards.iter().enumerate() {
        let revealed = app.card_revealed(i, now);
        let selected = i == app.selected_card && app.active_section == Section::Projects;

        let marker = if selected { "▸ " } else { "  " };
        let mut title_style = Style::default()
            .fg(body_color(revealed))
            .add_modifier(Modifier::BOLD);
        if selected {
            title_style = title_style.bg(bg_selected());
        }
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(accent())),
            Span::styled(
                card.glyph.to_string(),
                Style::default().fg(if revealed { accent() } else { text_dim() }),
            ),
            Span::styled(format!(" {}", card.title), title_style),
        ]));

        for row in wrap(&card.description, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(body_color(revealed)),
            )));
        }

        lines.push(components::tech_badges(
            &card.badges,
            if revealed { badge() } else { text_dim() },
        ));

        if card.link != NO_LINK {
            lines.push(Line::from(vec![
                Span::styled(
                    "View Project → ".to_string(),
                    Style::default().fg(if revealed { link() } else { text_dim() }),
                ),
                Span::styled(card.link.clone(), Style::default().fg(text_dim())),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                "No destination yet",
                Style::default().fg(text_dim()),
            )));
        }
        lines.push(Line::default());
    }
}

fn build_contact(app: &App, lines: &mut Vec<Line<'static>>) {
    let revealed = app.section_revealed(Section::Contact);
    lines.push(heading_line("Contact", revealed));
    lines.push(Line::default());
    for entry in app.site.profile.contact {
        lines.push(Line::from(Span::styled(
            entry.to_string(),
            Style::default().fg(body_color(revealed)),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "© {} {}. All rights reserved.",
            app.footer_year, app.site.profile.name
        ),
        Style::default().fg(text_dim()),
    )));
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Status feedback takes over the footer while present
    if let Some(ref status) = app.status_message {
        let line = Line::from(Span::styled(
            status.clone(),
            Style::default().fg(accent()),
        ));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints: [(&str, &str); 6] = [
        ("↑↓", "Scroll"),
        ("Tab", "Section"),
        ("←→", "Card"),
        ("Enter", "Open"),
        ("m", "Menu"),
        ("?", "Help"),
    ];

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 50 {
        3
    } else if area.width < 70 {
        4
    } else {
        hints.len()
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_menu(f: &mut Frame, app: &App) {
    let popup_area = components::centered_rect(30, 45, f.area());
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            " ✕ Menu ",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent()));

    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if i == app.menu_selected {
                Style::default().bg(bg_selected()).fg(text())
            } else {
                Style::default().fg(text_dim())
            };
            Line::from(Span::styled(format!("  {}", section.title()), style))
        })
        .collect();

    let menu = Paragraph::new(lines).block(block);
    f.render_widget(menu, popup_area);
}

fn draw_help(f: &mut Frame) {
    let popup_area = components::centered_rect(50, 60, f.area());
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent()));

    let entries: [(&str, &str); 10] = [
        ("j/k ↑↓", "Scroll"),
        ("PgUp/PgDn", "Page"),
        ("g/G", "Top / bottom"),
        ("Tab / 1-5", "Jump to section"),
        ("←/→", "Select project card"),
        ("Enter/o", "Open project link"),
        ("Enter", "(on Home) explore"),
        ("m", "Toggle menu"),
        ("?", "This help"),
        ("q", "Quit"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", key), Style::default().fg(accent())),
                Span::styled(*action, Style::default().fg(text())),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::view::layout::Document;

    #[test]
    fn document_lines_match_layout_geometry() {
        let mut app = App::new(AppConfig::default());
        app.tick(84, 30);

        for width in [20u16, 40, 76, 120] {
            let document = Document::build(&app.site, &app.page, width);
            let lines = build_document(&app, width, Instant::now());
            assert_eq!(
                lines.len() as u16,
                document.total_height,
                "line count drifted from geometry at width {width}"
            );
        }
    }

    #[test]
    fn heading_dims_until_revealed() {
        let pending = heading_line("About", false);
        let revealed = heading_line("About", true);
        assert_ne!(pending.spans[1].style.fg, revealed.spans[1].style.fg);
    }
}
