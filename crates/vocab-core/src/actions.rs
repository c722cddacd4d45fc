//! User actions and their handlers
//!
//! Front ends translate input (key presses, subcommands) into an [`Action`]
//! and hand it to [`Controller::dispatch`]. The controller owns the study
//! [`Session`] and borrows the [`Store`] per call, so it has no knowledge of
//! any presentation library.

use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::models::{CardId, FlashcardSet, SetId};
use crate::session::Session;
use crate::store::Store;

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a new, empty set
    CreateSet { name: String },
    /// Add a card to the set with this name
    AddCard {
        set_name: String,
        word: String,
        definition: String,
    },
    /// Load a set's cards into the study session
    SelectSet { name: String },
    /// Reveal the current definition
    Flip,
    /// Go to the next card
    Next,
    /// Go to the previous card
    Previous,
}

/// What a successful action did, for the front end to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    SetCreated { id: SetId, name: String },
    CardAdded { id: CardId, set_id: SetId },
    SetSelected { id: SetId, name: String, cards: usize },
    /// Session cursor or flip state may have changed
    SessionUpdated,
}

/// Dispatches actions to the store and the study session
#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    selected: Option<FlashcardSet>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an action to its handler
    pub fn dispatch(&mut self, store: &mut Store, action: Action) -> Result<Outcome> {
        debug!(?action, "Dispatching action");
        match action {
            Action::CreateSet { name } => self.create_set(store, &name),
            Action::AddCard {
                set_name,
                word,
                definition,
            } => self.add_card(store, &set_name, &word, &definition),
            Action::SelectSet { name } => self.select_set(store, &name),
            Action::Flip => Ok(self.flip()),
            Action::Next => Ok(self.next()),
            Action::Previous => Ok(self.previous()),
        }
    }

    /// Create a set.
    ///
    /// Pre: `name` is non-empty and unused. Post: the set is persisted; the
    /// session and selection are untouched.
    pub fn create_set(&mut self, store: &mut Store, name: &str) -> Result<Outcome> {
        let id = store.create_set(name)?;
        Ok(Outcome::SetCreated {
            id,
            name: name.to_string(),
        })
    }

    /// Add a card to a set identified by name.
    ///
    /// Pre: `set_name` names an existing set, `word` and `definition` are
    /// non-empty. Post: the card is persisted. A session already studying
    /// that set keeps its snapshot until the set is selected again.
    pub fn add_card(
        &mut self,
        store: &mut Store,
        set_name: &str,
        word: &str,
        definition: &str,
    ) -> Result<Outcome> {
        if set_name.is_empty() {
            return Err(ValidationError::NoSetSelected.into());
        }
        let set_id = store
            .find_set(set_name)?
            .ok_or_else(|| ValidationError::UnknownSetName(set_name.to_string()))?;

        let id = store.create_card(set_id, word, definition)?;
        Ok(Outcome::CardAdded { id, set_id })
    }

    /// Select a set for study.
    ///
    /// Pre: `name` names an existing set. Post: the session holds that set's
    /// cards, positioned on the first one with its definition hidden. On
    /// failure the previous selection and session are kept.
    pub fn select_set(&mut self, store: &mut Store, name: &str) -> Result<Outcome> {
        if name.is_empty() {
            return Err(ValidationError::NoSetSelected.into());
        }
        let id = store
            .find_set(name)?
            .ok_or_else(|| ValidationError::UnknownSetName(name.to_string()))?;
        let cards = store.list_cards(id)?;
        let count = cards.len();

        self.session.load(cards);
        self.selected = Some(FlashcardSet {
            id,
            name: name.to_string(),
        });

        Ok(Outcome::SetSelected {
            id,
            name: name.to_string(),
            cards: count,
        })
    }

    /// Post: the current definition is revealed, if there is a card.
    pub fn flip(&mut self) -> Outcome {
        self.session.flip();
        Outcome::SessionUpdated
    }

    /// Post: one card further (clamped), definition hidden.
    pub fn next(&mut self) -> Outcome {
        self.session.next();
        Outcome::SessionUpdated
    }

    /// Post: one card back (clamped), definition hidden.
    pub fn previous(&mut self) -> Outcome {
        self.session.previous();
        Outcome::SessionUpdated
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The set currently loaded into the session
    pub fn selected_set(&self) -> Option<&FlashcardSet> {
        self.selected.as_ref()
    }
}
