//! Data models for vocab
//!
//! Defines the core data structures: sets, cards, and the word/definition
//! pairs a study session walks through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a flashcard set, assigned by the database on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(pub i64);

/// Identifier of a flashcard, assigned by the database on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub i64);

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named collection of flashcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub id: SetId,
    pub name: String,
}

/// A stored word/definition pair belonging to one set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: CardId,
    pub set_id: SetId,
    pub word: String,
    pub definition: String,
}

/// The part of a card a study session needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCard {
    pub word: String,
    pub definition: String,
}

impl StudyCard {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

impl From<Flashcard> for StudyCard {
    fn from(card: Flashcard) -> Self {
        Self {
            word: card.word,
            definition: card.definition,
        }
    }
}

impl<W: Into<String>, D: Into<String>> From<(W, D)> for StudyCard {
    fn from((word, definition): (W, D)) -> Self {
        Self::new(word, definition)
    }
}

/// Row counts for status reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub sets: usize,
    pub cards: usize,
}
