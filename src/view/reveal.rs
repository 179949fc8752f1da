//! Reveal-once animation state.
//!
//! Elements start `Pending`; the first time one is reported visible it
//! becomes `Revealed` and is unobserved, so the transition fires at most
//! once per element and never runs backwards.

use std::collections::HashMap;
use std::time::Instant;

/// Identifies an animatable element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Section(usize),
    Card(usize),
    SkillBar(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Tracks which elements are still waiting to be revealed.
#[derive(Debug, Default)]
pub struct RevealObserver {
    watched: Vec<ElementId>,
    revealed: HashMap<ElementId, Instant>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Re-observing a revealed element is a no-op;
    /// reveals are permanent.
    pub fn observe(&mut self, id: ElementId) {
        if !self.watched.contains(&id) && !self.revealed.contains_key(&id) {
            self.watched.push(id);
        }
    }

    pub fn state(&self, id: ElementId) -> RevealState {
        if self.revealed.contains_key(&id) {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }

    /// When the element transitioned to `Revealed`, if it has.
    pub fn revealed_at(&self, id: ElementId) -> Option<Instant> {
        self.revealed.get(&id).copied()
    }

    pub fn pending_count(&self) -> usize {
        self.watched.len()
    }

    /// Reveal every watched element the predicate reports visible, stamping
    /// each with `now` and removing it from the watch list.
    pub fn notify_visible(&mut self, now: Instant, visible: impl Fn(ElementId) -> bool) {
        let mut i = 0;
        while i < self.watched.len() {
            let id = self.watched[i];
            if visible(id) {
                self.watched.swap_remove(i);
                self.revealed.insert(id, now);
            } else {
                i += 1;
            }
        }
    }

    /// Reveal everything still pending (reduced-motion startup path).
    pub fn reveal_all(&mut self, now: Instant) {
        for id in self.watched.drain(..) {
            self.revealed.insert(id, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_visible() {
        let mut observer = RevealObserver::new();
        observer.observe(ElementId::Card(0));
        assert_eq!(observer.state(ElementId::Card(0)), RevealState::Pending);

        observer.notify_visible(Instant::now(), |_| false);
        assert_eq!(observer.state(ElementId::Card(0)), RevealState::Pending);

        observer.notify_visible(Instant::now(), |_| true);
        assert_eq!(observer.state(ElementId::Card(0)), RevealState::Revealed);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut observer = RevealObserver::new();
        observer.observe(ElementId::Section(1));

        let first = Instant::now();
        observer.notify_visible(first, |_| true);
        assert_eq!(observer.pending_count(), 0);
        assert_eq!(observer.revealed_at(ElementId::Section(1)), Some(first));

        // Leaving the viewport and re-observing must not restart the animation.
        observer.notify_visible(Instant::now(), |_| false);
        observer.observe(ElementId::Section(1));
        assert_eq!(observer.pending_count(), 0);
        assert_eq!(observer.revealed_at(ElementId::Section(1)), Some(first));
    }

    #[test]
    fn only_visible_elements_are_revealed() {
        let mut observer = RevealObserver::new();
        observer.observe(ElementId::Card(0));
        observer.observe(ElementId::Card(1));

        observer.notify_visible(Instant::now(), |id| id == ElementId::Card(0));
        assert_eq!(observer.state(ElementId::Card(0)), RevealState::Revealed);
        assert_eq!(observer.state(ElementId::Card(1)), RevealState::Pending);
        assert_eq!(observer.pending_count(), 1);
    }

    #[test]
    fn reveal_all_drains_the_watch_list() {
        let mut observer = RevealObserver::new();
        for i in 0..3 {
            observer.observe(ElementId::SkillBar(i));
        }
        observer.reveal_all(Instant::now());
        assert_eq!(observer.pending_count(), 0);
        for i in 0..3 {
            assert_eq!(observer.state(ElementId::SkillBar(i)), RevealState::Revealed);
        }
    }

    #[test]
    fn duplicate_observe_is_ignored() {
        let mut observer = RevealObserver::new();
        observer.observe(ElementId::Card(2));
        observer.observe(ElementId::Card(2));
        assert_eq!(observer.pending_count(), 1);
    }
}
