//! Set command handlers

use anyhow::{Context, Result};

use vocab_core::Store;

use crate::output::Output;

/// Create a new set
pub fn create(store: &mut Store, name: String, output: &Output) -> Result<()> {
    let id = store.create_set(&name).context("Failed to create set")?;

    output.created(
        &format!("Set '{}' has been created successfully!", name),
        id.0,
    );
    Ok(())
}

/// List all sets with their card counts
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let sets = store
        .sets()?
        .into_iter()
        .map(|set| {
            let count = store.card_count(set.id)?;
            Ok((set, count))
        })
        .collect::<Result<Vec<_>>>()?;

    output.print_sets(&sets);
    Ok(())
}
