//! Study session state
//!
//! A `Session` is an in-memory cursor over one set's cards. It is either
//! empty or active at some index, with the current card's definition hidden
//! or revealed. Navigation never wraps and always hides the definition, so a
//! definition can never be shown next to the wrong word.

use crate::models::StudyCard;

/// Observable state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No cards loaded
    Empty,
    /// Positioned on `cards[index]`
    Active { index: usize, revealed: bool },
}

/// Cursor over a snapshot of one set's cards
#[derive(Debug, Clone, Default)]
pub struct Session {
    cards: Vec<StudyCard>,
    index: usize,
    revealed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already loaded with `cards`
    pub fn with_cards(cards: Vec<StudyCard>) -> Self {
        let mut session = Self::new();
        session.load(cards);
        session
    }

    /// Replace the cards and start again from the first one, hidden
    pub fn load(&mut self, cards: Vec<StudyCard>) {
        self.cards = cards;
        self.index = 0;
        self.revealed = false;
    }

    /// Drop all cards
    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    pub fn state(&self) -> SessionState {
        if self.cards.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Active {
                index: self.index,
                revealed: self.revealed,
            }
        }
    }

    /// Reveal the current card's definition
    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.revealed = true;
        }
    }

    /// Move to the next card, staying put on the last one
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + 1).min(self.cards.len() - 1);
        self.revealed = false;
    }

    /// Move to the previous card, staying put on the first one
    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = self.index.saturating_sub(1);
        self.revealed = false;
    }

    pub fn current_card(&self) -> Option<&StudyCard> {
        self.cards.get(self.index)
    }

    pub fn is_revealed(&self) -> bool {
        !self.cards.is_empty() && self.revealed
    }

    /// The current definition, only once it has been flipped
    pub fn visible_definition(&self) -> Option<&str> {
        if self.revealed {
            self.current_card().map(|card| card.definition.as_str())
        } else {
            None
        }
    }

    /// 1-based position and total, e.g. `(2, 5)`
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.cards.is_empty() {
            None
        } else {
            Some((self.index + 1, self.cards.len()))
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<StudyCard> {
        vec![
            StudyCard::new("a", "1"),
            StudyCard::new("b", "2"),
            StudyCard::new("c", "3"),
        ]
    }

    fn word(session: &Session) -> &str {
        session.current_card().map(|c| c.word.as_str()).unwrap_or("")
    }

    #[test]
    fn test_empty_session_ignores_everything() {
        let mut session = Session::new();
        session.load(Vec::new());

        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_card().is_none());

        session.flip();
        session.next();
        session.previous();

        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_card().is_none());
        assert!(!session.is_revealed());
        assert_eq!(session.position(), None);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut session = Session::with_cards(abc());
        assert_eq!(session.current_card(), Some(&StudyCard::new("a", "1")));

        session.next();
        assert_eq!(session.current_card(), Some(&StudyCard::new("b", "2")));
        session.next();
        assert_eq!(session.current_card(), Some(&StudyCard::new("c", "3")));
        session.next();
        assert_eq!(session.current_card(), Some(&StudyCard::new("c", "3")));

        session.previous();
        assert_eq!(session.current_card(), Some(&StudyCard::new("b", "2")));
        session.previous();
        session.previous();
        assert_eq!(word(&session), "a");
        assert_eq!(session.position(), Some((1, 3)));
    }

    #[test]
    fn test_flip_is_idempotent() {
        let mut session = Session::with_cards(abc());
        assert_eq!(session.visible_definition(), None);

        session.flip();
        session.flip();

        assert_eq!(
            session.state(),
            SessionState::Active {
                index: 0,
                revealed: true
            }
        );
        assert_eq!(session.visible_definition(), Some("1"));
    }

    #[test]
    fn test_next_on_single_card_still_hides_definition() {
        let mut session = Session::with_cards(vec![StudyCard::new("a", "1")]);

        session.flip();
        assert_eq!(session.visible_definition(), Some("1"));

        session.next();
        assert_eq!(
            session.state(),
            SessionState::Active {
                index: 0,
                revealed: false
            }
        );
        assert_eq!(session.visible_definition(), None);
    }

    #[test]
    fn test_navigation_hides_definition() {
        let mut session = Session::with_cards(abc());
        session.next();
        session.flip();

        session.previous();
        assert!(!session.is_revealed());
        assert_eq!(word(&session), "a");

        session.flip();
        session.previous();
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_load_resets_position() {
        let mut session = Session::with_cards(abc());
        session.next();
        session.next();
        session.flip();

        session.load(vec![StudyCard::new("x", "9"), StudyCard::new("y", "8")]);

        assert_eq!(
            session.state(),
            SessionState::Active {
                index: 0,
                revealed: false
            }
        );
        assert_eq!(word(&session), "x");
        assert_eq!(session.len(), 2);

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.state(), SessionState::Empty);
    }
}
