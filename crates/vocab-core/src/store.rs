//! Persistent catalog of flashcard sets and cards
//!
//! The `Store` owns a single SQLite connection for its whole lifetime and is
//! the only gateway to persistent state. Every write is one statement, so
//! each create either persists its row or persists nothing.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open(&config)?;
//!
//! let spanish = store.create_set("Spanish")?;
//! store.create_card(spanish, "hola", "hello")?;
//!
//! let cards = store.list_cards(spanish)?;
//! store.close()?;
//! ```

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::models::{CardId, Flashcard, FlashcardSet, SetId, StoreStats, StudyCard};
use crate::storage::{get_schema_version, init_schema, StorageError};

/// SQLite-backed store for sets and cards
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database in the configured data directory
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_at(&config.database_path())
    }

    /// Open (or create) the database at a specific path
    ///
    /// Creates missing parent directories and ensures the schema exists.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
            }
        }

        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_connection(conn)?;
        info!("Opened flashcard database at {:?}", path);
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Ensure both tables exist. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        init_schema(&self.conn)?;
        Ok(())
    }

    /// Release the connection, reporting any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| StorageError::Database(e))?;
        debug!("Closed flashcard database");
        Ok(())
    }

    // ==================== Set Operations ====================

    /// Create a new set
    ///
    /// Fails with a validation error if the name is empty or an existing set
    /// already has exactly this name (case-sensitive).
    pub fn create_set(&mut self, name: &str) -> Result<SetId> {
        if name.is_empty() {
            warn!("Rejected empty set name");
            return Err(ValidationError::EmptySetName.into());
        }
        if self.find_set(name)?.is_some() {
            warn!(name, "Rejected duplicate set name");
            return Err(ValidationError::DuplicateSetName(name.to_string()).into());
        }

        self.conn.execute(
            "INSERT INTO flashcard_sets (name) VALUES (?1)",
            params![name],
        )?;
        let id = SetId(self.conn.last_insert_rowid());

        info!(set_id = id.0, name, "Created set");
        Ok(id)
    }

    /// All sets keyed by name. Iteration order is unspecified.
    pub fn list_sets(&self) -> Result<HashMap<String, SetId>> {
        Ok(self
            .sets()?
            .into_iter()
            .map(|set| (set.name, set.id))
            .collect())
    }

    /// All sets in creation order
    pub fn sets(&self) -> Result<Vec<FlashcardSet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM flashcard_sets ORDER BY id")?;

        let sets = stmt
            .query_map([], |row| {
                Ok(FlashcardSet {
                    id: SetId(row.get(0)?),
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(count = sets.len(), "Listed sets");
        Ok(sets)
    }

    /// Look up a set by exact name
    pub fn find_set(&self, name: &str) -> Result<Option<SetId>> {
        let id: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM flashcard_sets WHERE name = ?1 ORDER BY id LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        Ok(id.map(SetId))
    }

    /// Check whether a set with this id exists
    pub fn set_exists(&self, id: SetId) -> Result<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM flashcard_sets WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // ==================== Card Operations ====================

    /// Add a card to an existing set
    pub fn create_card(&mut self, set_id: SetId, word: &str, definition: &str) -> Result<CardId> {
        if word.is_empty() {
            return Err(ValidationError::EmptyWord.into());
        }
        if definition.is_empty() {
            return Err(ValidationError::EmptyDefinition.into());
        }
        if !self.set_exists(set_id)? {
            warn!(set_id = set_id.0, "Rejected card for unknown set");
            return Err(ValidationError::UnknownSet(set_id).into());
        }

        self.conn.execute(
            "INSERT INTO flashcards (set_id, word, definition) VALUES (?1, ?2, ?3)",
            params![set_id.0, word, definition],
        )?;
        let id = CardId(self.conn.last_insert_rowid());

        info!(card_id = id.0, set_id = set_id.0, word, "Created card");
        Ok(id)
    }

    /// Word/definition pairs of a set in creation order
    ///
    /// An unknown set yields an empty list, same as a set with no cards.
    pub fn list_cards(&self, set_id: SetId) -> Result<Vec<StudyCard>> {
        let mut stmt = self.conn.prepare(
            "SELECT word, definition FROM flashcards WHERE set_id = ?1 ORDER BY id",
        )?;

        let cards = stmt
            .query_map(params![set_id.0], |row| {
                Ok(StudyCard {
                    word: row.get(0)?,
                    definition: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(set_id = set_id.0, count = cards.len(), "Listed cards");
        Ok(cards)
    }

    /// Full card rows of a set in creation order
    pub fn cards(&self, set_id: SetId) -> Result<Vec<Flashcard>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, set_id, word, definition FROM flashcards WHERE set_id = ?1 ORDER BY id",
        )?;

        let cards = stmt
            .query_map(params![set_id.0], |row| {
                Ok(Flashcard {
                    id: CardId(row.get(0)?),
                    set_id: SetId(row.get(1)?),
                    word: row.get(2)?,
                    definition: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(cards)
    }

    /// Number of cards in a set
    pub fn card_count(&self, set_id: SetId) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM flashcards WHERE set_id = ?1",
            params![set_id.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    // ==================== Status ====================

    /// Total number of sets and cards
    pub fn stats(&self) -> Result<StoreStats> {
        let (sets, cards): (i64, i64) = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM flashcard_sets), (SELECT COUNT(*) FROM flashcards)",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(StoreStats {
            sets: sets as usize,
            cards: cards as usize,
        })
    }

    /// Schema version recorded in the database
    pub fn schema_version(&self) -> Result<Option<i32>> {
        Ok(get_schema_version(&self.conn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn total_cards(store: &Store) -> i64 {
        store
            .conn
            .query_row("SELECT COUNT(*) FROM flashcards", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_create_set_is_listed() {
        let mut store = Store::open_in_memory().unwrap();

        let id = store.create_set("Spanish").unwrap();

        let sets = store.list_sets().unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets.get("Spanish"), Some(&id));
    }

    #[test]
    fn test_set_ids_increase() {
        let mut store = Store::open_in_memory().unwrap();

        let first = store.create_set("one").unwrap();
        let second = store.create_set("two").unwrap();
        assert!(second > first);

        let names: Vec<_> = store.sets().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_duplicate_set_name_rejected() {
        let mut store = Store::open_in_memory().unwrap();
        store.create_set("French").unwrap();

        let err = store.create_set("French").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DuplicateSetName(ref n)) if n == "French"
        ));
        assert_eq!(store.list_sets().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut store = Store::open_in_memory().unwrap();
        store.create_set("French").unwrap();

        store.create_set("french").unwrap();
        store.create_set("French ").unwrap();
        assert_eq!(store.list_sets().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_set_name_rejected() {
        let mut store = Store::open_in_memory().unwrap();

        let err = store.create_set("").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptySetName)
        ));
        assert!(store.list_sets().unwrap().is_empty());
    }

    #[test]
    fn test_cards_keep_creation_order() {
        let mut store = Store::open_in_memory().unwrap();
        let set = store.create_set("Spanish").unwrap();

        store.create_card(set, "hola", "hello").unwrap();
        store.create_card(set, "gato", "cat").unwrap();
        store.create_card(set, "perro", "dog").unwrap();

        let cards = store.list_cards(set).unwrap();
        assert_eq!(
            cards,
            vec![
                StudyCard::new("hola", "hello"),
                StudyCard::new("gato", "cat"),
                StudyCard::new("perro", "dog"),
            ]
        );
        assert_eq!(cards.last(), Some(&StudyCard::new("perro", "dog")));
    }

    #[test]
    fn test_cards_are_scoped_to_their_set() {
        let mut store = Store::open_in_memory().unwrap();
        let spanish = store.create_set("Spanish").unwrap();
        let german = store.create_set("German").unwrap();

        store.create_card(spanish, "hola", "hello").unwrap();
        store.create_card(german, "Hund", "dog").unwrap();

        assert_eq!(store.list_cards(german).unwrap(), vec![StudyCard::new("Hund", "dog")]);
        assert_eq!(store.card_count(spanish).unwrap(), 1);

        let rows = store.cards(german).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].set_id, german);
    }

    #[test]
    fn test_card_for_unknown_set_rejected_without_write() {
        let mut store = Store::open_in_memory().unwrap();
        let set = store.create_set("Spanish").unwrap();
        store.create_card(set, "hola", "hello").unwrap();
        let before = total_cards(&store);

        let err = store.create_card(SetId(999), "gato", "cat").unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownSet(SetId(999)))
        ));
        assert_eq!(total_cards(&store), before);
    }

    #[test]
    fn test_empty_word_or_definition_rejected() {
        let mut store = Store::open_in_memory().unwrap();
        let set = store.create_set("Spanish").unwrap();

        let err = store.create_card(set, "", "hello").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyWord)));

        let err = store.create_card(set, "hola", "").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyDefinition)
        ));

        assert_eq!(total_cards(&store), 0);
    }

    #[test]
    fn test_list_cards_for_unknown_set_is_empty() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.list_cards(SetId(42)).unwrap().is_empty());
    }

    #[test]
    fn test_find_set() {
        let mut store = Store::open_in_memory().unwrap();
        let id = store.create_set("Latin").unwrap();

        assert_eq!(store.find_set("Latin").unwrap(), Some(id));
        assert_eq!(store.find_set("latin").unwrap(), None);
        assert!(store.set_exists(id).unwrap());
        assert!(!store.set_exists(SetId(id.0 + 1)).unwrap());
    }

    #[test]
    fn test_stats() {
        let mut store = Store::open_in_memory().unwrap();
        assert_eq!(store.stats().unwrap(), StoreStats::default());

        let set = store.create_set("Spanish").unwrap();
        store.create_card(set, "hola", "hello").unwrap();
        store.create_card(set, "gato", "cat").unwrap();

        assert_eq!(store.stats().unwrap(), StoreStats { sets: 1, cards: 2 });
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut store = Store::open_in_memory().unwrap();
        let set = store.create_set("Spanish").unwrap();

        store.initialize().unwrap();
        store.initialize().unwrap();

        assert_eq!(store.find_set("Spanish").unwrap(), Some(set));
        assert_eq!(store.schema_version().unwrap(), Some(crate::storage::SCHEMA_VERSION));
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("flashcards.db");

        let mut store = Store::open_at(&path).unwrap();
        let set = store.create_set("Spanish").unwrap();
        store.create_card(set, "hola", "hello").unwrap();
        store.close().unwrap();

        let store = Store::open_at(&path).unwrap();
        assert_eq!(store.find_set("Spanish").unwrap(), Some(set));
        assert_eq!(store.list_cards(set).unwrap(), vec![StudyCard::new("hola", "hello")]);
    }

    #[test]
    fn test_open_with_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().join("data"),
            log_file: None,
        };

        let mut store = Store::open(&config).unwrap();
        store.create_set("Spanish").unwrap();
        store.close().unwrap();

        assert!(config.database_path().exists());
    }

    #[test]
    fn test_unusable_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = Store::open_at(&blocker.join("sub").join("flashcards.db"));

        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
