//! Document geometry.
//!
//! The page is one vertical virtual document; this module computes where
//! every section, card, and skill bar lands for a given content width so the
//! scroll position, active-nav highlighting, and reveal visibility checks
//! all agree with what gets drawn.

use crate::content::Site;
use crate::view::reveal::ElementId;
use crate::view::{CardNode, Page, PROJECT_CONTAINER};

/// Rows of lead when deciding which section the nav should highlight: the
/// active section is the last one whose top is at or above scroll + lead.
pub const ACTIVE_NAV_LEAD: u16 = 8;

/// Rows shaved off the viewport bottom before an element counts as visible,
/// so reveals fire slightly after an element actually scrolls in.
pub const REVEAL_MARGIN: u16 = 2;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.title().eq_ignore_ascii_case(name))
    }
}

/// A contiguous row span within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: u16,
    pub height: u16,
}

impl Region {
    pub fn bottom(self) -> u16 {
        self.top + self.height
    }
}

/// Computed geometry for the whole document at one content width.
#[derive(Debug, Clone)]
pub struct Document {
    pub width: u16,
    pub total_height: u16,
    sections: Vec<Region>,
    cards: Vec<Region>,
    skill_bars: Vec<Region>,
}

/// Rows a single card occupies: title line, wrapped description, badge line,
/// link line, trailing blank.
pub fn card_height(card: &CardNode, width: u16) -> u16 {
    1 + wrap(&card.description, width).len() as u16 + 1 + 1 + 1
}

impl Document {
    pub fn build(site: &Site, page: &Page, width: u16) -> Self {
        let width = width.max(1);
        let mut sections = Vec::with_capacity(Section::ALL.len());
        let mut cards = Vec::new();
        let mut skill_bars = Vec::new();
        let mut y: u16 = 0;

        for section in Section::ALL {
            let top = y;
            match section {
                Section::Home => {
                    // blank, name, wrapped tagline, blank, scroll indicator, blank
                    y += 1 + 1 + wrap(site.profile.tagline, width).len() as u16 + 1 + 1 + 1;
                }
                Section::About => {
                    y += 2; // heading + blank
                    for para in site.profile.about {
                        y += wrap(para, width).len() as u16 + 1;
                    }
                }
                Section::Skills => {
                    y += 2;
                    for _ in site.skills {
                        y += 1; // name line
                        skill_bars.push(Region { top: y, height: 1 });
                        y += 2; // bar + blank
                    }
                }
                Section::Projects => {
                    y += 2;
                    let rendered = page
                        .container(PROJECT_CONTAINER)
                        .map(|c| c.cards.as_slice())
                        .unwrap_or(&[]);
                    for card in rendered {
                        let height = card_height(card, width);
                        cards.push(Region { top: y, height });
                        y += height;
                    }
                }
                Section::Contact => {
                    y += 2;
                    y += site.profile.contact.len() as u16;
                    y += 2; // blank + copyright line
                }
            }
            sections.push(Region {
                top,
                height: y - top,
            });
        }

        Self {
            width,
            total_height: y,
            sections,
            cards,
            skill_bars,
        }
    }

    pub fn section_region(&self, section: Section) -> Region {
        self.sections[section.index()]
    }

    pub fn region(&self, id: ElementId) -> Option<Region> {
        match id {
            ElementId::Section(i) => self.sections.get(i).copied(),
            ElementId::Card(i) => self.cards.get(i).copied(),
            ElementId::SkillBar(i) => self.skill_bars.get(i).copied(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The furthest the viewport may scroll.
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Whether an element intersects the viewport, less the bottom reveal
    /// margin.
    pub fn is_visible(&self, id: ElementId, scroll: u16, viewport_height: u16) -> bool {
        let Some(region) = self.region(id) else {
            return false;
        };
        let window_bottom = scroll + viewport_height.saturating_sub(REVEAL_MARGIN);
        region.top < window_bottom && region.bottom() > scroll
    }

    /// The section the nav should highlight at a given scroll offset.
    pub fn active_section(&self, scroll: u16) -> Section {
        let mut active = Section::Home;
        for section in Section::ALL {
            if self.section_region(section).top <= scroll + ACTIVE_NAV_LEAD {
                active = section;
            }
        }
        active
    }
}

/// Greedy word wrap. Words longer than the width are split hard; empty or
/// whitespace-only input yields no lines.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            // Hard split an oversized word at the line boundary.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render_projects;

    fn document(width: u16) -> (Site, Document) {
        let site = Site::bundled();
        let mut page = Page::with_project_container();
        render_projects(&mut page, site.projects);
        let doc = Document::build(&site, &page, width);
        (site, doc)
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(line.chars().count() <= 10, "line too long: {line:?}");
        }
    }

    #[test]
    fn wrap_preserves_all_words() {
        let text = "alpha beta gamma delta";
        let lines = wrap(text, 11);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn sections_tile_the_document() {
        let (_, doc) = document(60);
        let mut expected_top = 0;
        for section in Section::ALL {
            let region = doc.section_region(section);
            assert_eq!(region.top, expected_top);
            assert!(region.height > 0);
            expected_top = region.bottom();
        }
        assert_eq!(expected_top, doc.total_height);
    }

    #[test]
    fn every_rendered_card_has_a_region_inside_projects() {
        let (site, doc) = document(60);
        assert_eq!(doc.card_count(), site.projects.len());
        let projects = doc.section_region(Section::Projects);
        for i in 0..doc.card_count() {
            let region = doc.region(ElementId::Card(i)).unwrap();
            assert!(region.top >= projects.top);
            assert!(region.bottom() <= projects.bottom());
        }
    }

    #[test]
    fn active_section_follows_scroll() {
        let (_, doc) = document(60);
        assert_eq!(doc.active_section(0), Section::Home);

        let contact_top = doc.section_region(Section::Contact).top;
        assert_eq!(doc.active_section(contact_top), Section::Contact);

        let about_top = doc.section_region(Section::About).top;
        // Within the lead distance of About's top it already counts as active.
        assert_eq!(
            doc.active_section(about_top.saturating_sub(ACTIVE_NAV_LEAD)),
            Section::About
        );
    }

    #[test]
    fn visibility_tracks_the_viewport() {
        let (_, doc) = document(60);
        let contact = ElementId::Section(Section::Contact.index());
        assert!(!doc.is_visible(contact, 0, 20));

        let contact_top = doc.section_region(Section::Contact).top;
        assert!(doc.is_visible(contact, contact_top, 20));
    }

    #[test]
    fn max_scroll_never_underflows() {
        let (_, doc) = document(60);
        assert_eq!(doc.max_scroll(doc.total_height + 10), 0);
        assert!(doc.max_scroll(10) > 0);
    }
}
