//! Static view rendering: projecting the project list into card nodes.

pub mod layout;
pub mod reveal;

use std::time::Duration;

use crate::content::{self, ProjectEntry};

/// Well-known id of the container that receives project cards.
pub const PROJECT_CONTAINER: &str = "project-container";

/// Delay step between consecutive card reveals.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// A rendered project card. Owned by exactly one container slot; no
/// back-reference to the source entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CardNode {
    pub glyph: &'static str,
    pub title: String,
    pub description: String,
    /// One badge per technology label, in source order.
    pub badges: Vec<String>,
    pub link: String,
    /// Cosmetic stagger before this card's reveal animation starts.
    pub reveal_delay: Duration,
}

/// An ordered list of card nodes with a lookup id.
#[derive(Debug, Clone)]
pub struct Container {
    pub id: String,
    pub cards: Vec<CardNode>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::new(),
        }
    }
}

/// The page: a flat set of named containers.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: Vec<Container>,
}

impl Page {
    /// A page with the standard project container already present.
    pub fn with_project_container() -> Self {
        let mut page = Self::default();
        page.add_container(Container::new(PROJECT_CONTAINER));
        page
    }

    pub fn add_container(&mut self, container: Container) {
        self.containers.push(container);
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }
}

/// Project each entry into one card node appended to the project container,
/// in source order.
///
/// If the container is missing this logs a diagnostic and returns without
/// touching the page. Calling it twice appends a second full set after the
/// first; there is no re-render or diffing path.
pub fn render_projects(page: &mut Page, entries: &[ProjectEntry]) {
    let Some(container) = page.container_mut(PROJECT_CONTAINER) else {
        tracing::error!(id = PROJECT_CONTAINER, "project container not found");
        return;
    };

    for (index, entry) in entries.iter().enumerate() {
        container.cards.push(CardNode {
            glyph: content::glyph(entry.icon),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            badges: entry.technologies.iter().map(|t| t.to_string()).collect(),
            link: entry.link.to_string(),
            reveal_delay: REVEAL_STAGGER * index as u32,
        });
    }
}
