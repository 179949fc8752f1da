use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::content::Site;
use crate::link;
use crate::view::layout::{Document, Section};
use crate::view::reveal::{ElementId, RevealObserver, RevealState};
use crate::view::{self, Page, PROJECT_CONTAINER};

/// Scroll offset past which the header collapses to its compact form.
pub const HEADER_SCROLL_THRESHOLD: u16 = 4;

/// Rows scrolled per j/k keypress.
const SCROLL_STEP: u16 = 2;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

/// Hold before a revealed skill bar starts filling.
pub const BAR_FILL_DELAY: Duration = Duration::from_millis(100);

/// Time a skill bar takes to grow from empty to its level.
pub const BAR_FILL_DURATION: Duration = Duration::from_millis(600);

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Menu,
    Help,
}

pub struct App {
    pub site: Site,
    pub page: Page,
    pub observer: RevealObserver,
    pub config: AppConfig,

    pub overlay: Overlay,
    pub menu_selected: usize,

    // Scroll state: `scroll` is the current offset, `scroll_target` the
    // smooth-scroll destination being eased toward.
    pub scroll: u16,
    scroll_target: Option<u16>,

    pub document: Document,
    /// Content area (width, height) as of the last tick.
    pub viewport: (u16, u16),

    pub header_scrolled: bool,
    pub active_section: Section,
    pub selected_card: usize,

    // Transient feedback line (auto-clears after a few seconds)
    pub status_message: Option<String>,
    status_message_time: Option<Instant>,

    /// Applied on the first tick, once geometry exists for the real width.
    start_section: Option<Section>,

    pub footer_year: i32,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        use chrono::Datelike;

        let site = Site::bundled();
        let mut page = Page::with_project_container();
        view::render_projects(&mut page, site.projects);

        let mut observer = RevealObserver::new();
        for (i, _) in Section::ALL.iter().enumerate() {
            observer.observe(ElementId::Section(i));
        }
        let card_count = page
            .container(PROJECT_CONTAINER)
            .map(|c| c.cards.len())
            .unwrap_or(0);
        for i in 0..card_count {
            observer.observe(ElementId::Card(i));
        }
        for i in 0..site.skills.len() {
            observer.observe(ElementId::SkillBar(i));
        }
        if config.reduced_motion {
            observer.reveal_all(Instant::now());
        }

        let start_section = config
            .start_section
            .as_deref()
            .and_then(Section::from_name);

        let document = Document::build(&site, &page, 76);

        Self {
            site,
            page,
            observer,
            config,
            overlay: Overlay::None,
            menu_selected: 0,
            scroll: 0,
            scroll_target: None,
            document,
            viewport: (76, 20),
            header_scrolled: false,
            active_section: Section::Home,
            selected_card: 0,
            status_message: None,
            status_message_time: None,
            start_section,
            footer_year: chrono::Local::now().year(),
        }
    }

    pub fn header_height(&self) -> u16 {
        if self.header_scrolled {
            1
        } else {
            3
        }
    }

    /// Glyph shown on the menu toggle; swaps when the menu opens.
    pub fn menu_glyph(&self) -> &'static str {
        if self.overlay == Overlay::Menu {
            "✕"
        } else {
            "≡"
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.overlay != Overlay::None {
            return self.handle_overlay_key(key).await;
        }
        self.handle_normal_key(key).await
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Section navigation
            KeyCode::Tab => {
                let next = (self.active_section.index() + 1) % Section::ALL.len();
                self.scroll_to_section(Section::ALL[next]);
            }
            KeyCode::BackTab => {
                let count = Section::ALL.len();
                let prev = (self.active_section.index() + count - 1) % count;
                self.scroll_to_section(Section::ALL[prev]);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.scroll_to_section(Section::ALL[index]);
            }

            // Free scrolling
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(SCROLL_STEP as i32),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-(SCROLL_STEP as i32)),
            KeyCode::PageDown => self.scroll_by(self.viewport.1 as i32),
            KeyCode::PageUp => self.scroll_by(-(self.viewport.1 as i32)),
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll = 0;
                self.scroll_target = None;
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll = self.document.max_scroll(self.viewport.1);
                self.scroll_target = None;
            }

            // Card selection
            KeyCode::Left => {
                self.selected_card = self.selected_card.saturating_sub(1);
                self.ensure_card_visible(self.selected_card);
            }
            KeyCode::Right => {
                let count = self.card_count();
                if count > 0 && self.selected_card + 1 < count {
                    self.selected_card += 1;
                }
                self.ensure_card_visible(self.selected_card);
            }

            // Enter doubles as the hero scroll indicator on Home and the
            // link action on Projects.
            KeyCode::Enter | KeyCode::Char(' ') => match self.active_section {
                Section::Home => self.scroll_to_section(Section::About),
                Section::Projects => self.open_selected_card().await,
                _ => {}
            },
            KeyCode::Char('o') => self.open_selected_card().await,

            // Menu toggle
            KeyCode::Char('m') => {
                self.overlay = Overlay::Menu;
                self.menu_selected = self.active_section.index();
            }

            // Help (? or h)
            KeyCode::Char('?') | KeyCode::Char('h') => self.overlay = Overlay::Help,

            _ => {}
        }
        Ok(())
    }

    async fn handle_overlay_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.overlay {
            Overlay::Menu => match key.code {
                KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
                    self.overlay = Overlay::None;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.menu_selected = (self.menu_selected + 1) % Section::ALL.len();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.menu_selected = self
                        .menu_selected
                        .checked_sub(1)
                        .unwrap_or(Section::ALL.len() - 1);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.scroll_to_section(Section::ALL[self.menu_selected]);
                }
                _ => {}
            },
            Overlay::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc
                        | KeyCode::Char('?')
                        | KeyCode::Char('h')
                        | KeyCode::Char('q')
                        | KeyCode::Enter
                ) {
                    self.overlay = Overlay::None;
                }
            }
            Overlay::None => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as i32),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as i32)),
            _ => {}
        }
    }

    fn card_count(&self) -> usize {
        self.page
            .container(PROJECT_CONTAINER)
            .map(|c| c.cards.len())
            .unwrap_or(0)
    }

    fn scroll_by(&mut self, rows: i32) {
        // Manual scrolling cancels any smooth-scroll in flight.
        self.scroll_target = None;
        let max = self.document.max_scroll(self.viewport.1);
        let next = self.scroll as i32 + rows;
        self.scroll = next.clamp(0, max as i32) as u16;
    }

    /// Scroll toward a section's top, closing the menu overlay first as the
    /// nav does.
    pub fn scroll_to_section(&mut self, section: Section) {
        if self.overlay == Overlay::Menu {
            self.overlay = Overlay::None;
        }
        let target = self
            .document
            .section_region(section)
            .top
            .min(self.document.max_scroll(self.viewport.1));
        if self.config.reduced_motion {
            self.scroll = target;
            self.scroll_target = None;
        } else {
            self.scroll_target = Some(target);
        }
    }

    fn ensure_card_visible(&mut self, index: usize) {
        let Some(region) = self.document.region(ElementId::Card(index)) else {
            return;
        };
        let (_, height) = self.viewport;
        if region.top < self.scroll || region.bottom() > self.scroll + height {
            let target = region
                .top
                .saturating_sub(1)
                .min(self.document.max_scroll(height));
            if self.config.reduced_motion {
                self.scroll = target;
            } else {
                self.scroll_target = Some(target);
            }
        }
    }

    async fn open_selected_card(&mut self) {
        let Some(card) = self
            .page
            .container(PROJECT_CONTAINER)
            .and_then(|c| c.cards.get(self.selected_card))
        else {
            return;
        };
        let title = card.title.clone();
        let target = card.link.clone();

        match link::open(&target, self.config.browser.as_deref()).await {
            Ok(()) => self.set_status(format!("Opened {}", title)),
            Err(link::OpenError::NoDestination) => {
                self.set_status(format!("{}: no destination yet", title));
            }
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    /// Advance all time-driven state for one frame.
    pub fn tick(&mut self, term_width: u16, term_height: u16) {
        let now = Instant::now();

        let content_width = term_width.saturating_sub(4).max(1);
        let content_height = term_height
            .saturating_sub(self.header_height() + 1)
            .max(1);
        self.document = Document::build(&self.site, &self.page, content_width);
        self.viewport = (content_width, content_height);

        // Apply the configured start section once real geometry exists.
        if let Some(section) = self.start_section.take() {
            self.scroll = self
                .document
                .section_region(section)
                .top
                .min(self.document.max_scroll(content_height));
            self.scroll_target = None;
        }

        // Ease toward the smooth-scroll target.
        if let Some(target) = self.scroll_target {
            let target = target.min(self.document.max_scroll(content_height));
            let distance = target.abs_diff(self.scroll);
            let step = (distance / 4).max(1);
            if target > self.scroll {
                self.scroll += step;
            } else if target < self.scroll {
                self.scroll -= step;
            }
            if self.scroll == target {
                self.scroll_target = None;
            }
        }
        self.scroll = self.scroll.min(self.document.max_scroll(content_height));

        self.header_scrolled = self.scroll > HEADER_SCROLL_THRESHOLD;
        self.active_section = self.document.active_section(self.scroll);

        // Reveal elements that have entered the viewport; each fires once.
        if !self.config.reduced_motion {
            let document = &self.document;
            let scroll = self.scroll;
            self.observer
                .notify_visible(now, |id| document.is_visible(id, scroll, content_height));
        }

        let count = self.card_count();
        if count > 0 && self.selected_card >= count {
            self.selected_card = count - 1;
        }

        // Clear status message after timeout
        if let Some(time) = self.status_message_time {
            if time.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Whether a card's reveal (including its stagger delay) has completed.
    pub fn card_revealed(&self, index: usize, now: Instant) -> bool {
        if self.config.reduced_motion {
            return true;
        }
        let delay = self
            .page
            .container(PROJECT_CONTAINER)
            .and_then(|c| c.cards.get(index))
            .map(|c| c.reveal_delay)
            .unwrap_or_default();
        match self.observer.revealed_at(ElementId::Card(index)) {
            Some(at) => now.duration_since(at) >= delay,
            None => false,
        }
    }

    pub fn section_revealed(&self, section: Section) -> bool {
        self.config.reduced_motion
            || self.observer.state(ElementId::Section(section.index())) == RevealState::Revealed
    }

    /// Fill fraction of a skill bar: zero until revealed plus the hold
    /// delay, then linear growth to full.
    pub fn skill_bar_progress(&self, index: usize, now: Instant) -> f32 {
        if self.config.reduced_motion {
            return 1.0;
        }
        match self.observer.revealed_at(ElementId::SkillBar(index)) {
            None => 0.0,
            Some(at) => {
                let elapsed = now.duration_since(at);
                if elapsed < BAR_FILL_DELAY {
                    0.0
                } else {
                    ((elapsed - BAR_FILL_DELAY).as_secs_f32() / BAR_FILL_DURATION.as_secs_f32())
                        .min(1.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(AppConfig::default());
        app.tick(80, 24);
        app
    }

    fn settle(app: &mut App) {
        for _ in 0..500 {
            app.tick(80, 24);
            if app.scroll_target.is_none() {
                break;
            }
        }
    }

    #[test]
    fn starts_on_home_with_full_header() {
        let app = app();
        assert_eq!(app.active_section, Section::Home);
        assert!(!app.header_scrolled);
        assert_eq!(app.header_height(), 3);
    }

    #[test]
    fn smooth_scroll_converges_on_section_top() {
        let mut app = app();
        app.scroll_to_section(Section::Contact);
        settle(&mut app);

        let expected = app
            .document
            .section_region(Section::Contact)
            .top
            .min(app.document.max_scroll(app.viewport.1));
        assert_eq!(app.scroll, expected);
        assert_eq!(app.active_section, Section::Contact);
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        let mut app = App::new(AppConfig {
            reduced_motion: true,
            ..Default::default()
        });
        app.tick(80, 24);
        app.scroll_to_section(Section::Skills);
        assert_eq!(
            app.scroll,
            app.document.section_region(Section::Skills).top
        );
    }

    #[test]
    fn header_collapses_past_threshold() {
        let mut app = app();
        app.scroll_by(HEADER_SCROLL_THRESHOLD as i32 + 1);
        app.tick(80, 24);
        assert!(app.header_scrolled);
        assert_eq!(app.header_height(), 1);
    }

    #[test]
    fn start_section_config_is_applied_on_first_tick() {
        let mut app = App::new(AppConfig {
            start_section: Some("projects".to_string()),
            ..Default::default()
        });
        app.tick(80, 24);
        let expected = app
            .document
            .section_region(Section::Projects)
            .top
            .min(app.document.max_scroll(app.viewport.1));
        assert_eq!(app.scroll, expected);
    }

    #[tokio::test]
    async fn menu_toggle_swaps_glyph_and_selection_closes_it() {
        let mut app = app();
        assert_eq!(app.menu_glyph(), "≡");

        app.handle_key(KeyEvent::from(KeyCode::Char('m'))).await.unwrap();
        assert_eq!(app.overlay, Overlay::Menu);
        assert_eq!(app.menu_glyph(), "✕");

        app.handle_key(KeyEvent::from(KeyCode::Char('j'))).await.unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.menu_glyph(), "≡");
        assert!(app.scroll_target.is_some());
    }

    #[tokio::test]
    async fn enter_on_home_targets_about() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Enter)).await.unwrap();
        settle(&mut app);
        assert_eq!(app.scroll, app.document.section_region(Section::About).top);
    }

    #[tokio::test]
    async fn tab_advances_to_the_next_section() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Tab)).await.unwrap();
        settle(&mut app);
        assert_eq!(app.active_section, Section::About);
    }

    #[test]
    fn elements_reveal_as_they_scroll_in_and_stay_revealed() {
        let mut app = app();
        let contact = ElementId::Section(Section::Contact.index());
        assert_eq!(app.observer.state(contact), RevealState::Pending);

        app.scroll = app.document.section_region(Section::Contact).top;
        app.tick(80, 24);
        assert_eq!(app.observer.state(contact), RevealState::Revealed);

        // Scrolling back up must not reset the reveal.
        app.scroll = 0;
        app.tick(80, 24);
        assert_eq!(app.observer.state(contact), RevealState::Revealed);
    }

    #[test]
    fn skill_bar_holds_then_fills() {
        let mut app = app();
        assert_eq!(app.skill_bar_progress(0, Instant::now()), 0.0);

        app.scroll = app.document.section_region(Section::Skills).top;
        app.tick(80, 24);
        let revealed_at = app.observer.revealed_at(ElementId::SkillBar(0)).unwrap();

        assert_eq!(app.skill_bar_progress(0, revealed_at), 0.0);
        let done = revealed_at + BAR_FILL_DELAY + BAR_FILL_DURATION;
        assert_eq!(app.skill_bar_progress(0, done), 1.0);
    }

    #[test]
    fn status_message_expires() {
        let mut app = app();
        app.set_status("hello");
        app.status_message_time = Instant::now().checked_sub(Duration::from_secs(4));
        app.tick(80, 24);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn card_selection_stays_in_bounds() {
        let mut app = app();
        app.selected_card = 99;
        app.tick(80, 24);
        assert!(app.selected_card < app.card_count());
    }
}
