//! Card command handlers

use anyhow::{Context, Result};

use vocab_core::{SetId, Store, ValidationError};

use crate::output::Output;

/// Add a card to a set
pub fn add(
    store: &mut Store,
    set: String,
    word: String,
    definition: String,
    output: &Output,
) -> Result<()> {
    let (set_id, set_name) = resolve_set(store, &set)?;

    let id = store
        .create_card(set_id, &word, &definition)
        .context("Failed to add card")?;

    output.created(&format!("Added '{}' to {}", word, set_name), id.0);
    Ok(())
}

/// List the cards of a set in the order they were added
pub fn list(store: &Store, set: String, output: &Output) -> Result<()> {
    let (set_id, set_name) = resolve_set(store, &set)?;
    let cards = store.cards(set_id)?;

    output.print_cards(&set_name, &cards);
    Ok(())
}

/// Resolve a set by exact name, falling back to a numeric id
pub(crate) fn resolve_set(store: &Store, set: &str) -> Result<(SetId, String)> {
    if let Some(id) = store.find_set(set)? {
        return Ok((id, set.to_string()));
    }

    if let Ok(raw) = set.parse::<i64>() {
        if let Some(found) = store.sets()?.into_iter().find(|s| s.id == SetId(raw)) {
            return Ok((found.id, found.name));
        }
    }

    Err(ValidationError::UnknownSetName(set.to_string()).into())
}
