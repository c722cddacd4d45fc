//! Vocab Core Library
//!
//! This crate provides the core functionality for vocab, a local
//! flashcard tool: named sets of word/definition cards stored in SQLite,
//! and a flip-card study session over one set at a time.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open(&Config::load()?)?;
//! let mut controller = Controller::new();
//!
//! controller.dispatch(&mut store, Action::CreateSet { name: "Spanish".into() })?;
//! controller.dispatch(&mut store, Action::SelectSet { name: "Spanish".into() })?;
//! controller.dispatch(&mut store, Action::Flip)?;
//! ```
//!
//! # Modules
//!
//! - `store`: SQLite-backed catalog of sets and cards (main entry point)
//! - `session`: Study cursor with flip state
//! - `actions`: Action enum and the controller that dispatches it
//! - `models`: Data structures for sets and cards
//! - `storage`: Schema and storage errors
//! - `config`: Application configuration

pub mod actions;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;

pub use actions::{Action, Controller, Outcome};
pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use models::{CardId, Flashcard, FlashcardSet, SetId, StoreStats, StudyCard};
pub use session::{Session, SessionState};
pub use storage::StorageError;
pub use store::Store;
