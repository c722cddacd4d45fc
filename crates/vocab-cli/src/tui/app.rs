//! Application state and key handling

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};
use vocab_core::{Action, Controller, Error, Outcome, Store};

use crate::commands::card::resolve_set;

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// The three task views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    CreateSet,
    AddCards,
    Study,
}

impl View {
    pub const ALL: [View; 3] = [View::CreateSet, View::AddCards, View::Study];

    pub fn title(self) -> &'static str {
        match self {
            View::CreateSet => "Create Set",
            View::AddCards => "Add Cards",
            View::Study => "Study",
        }
    }

    pub fn index(self) -> usize {
        match self {
            View::CreateSet => 0,
            View::AddCards => 1,
            View::Study => 2,
        }
    }

    /// Move to the next view (wrapping)
    pub fn next(self) -> Self {
        match self {
            View::CreateSet => View::AddCards,
            View::AddCards => View::Study,
            View::Study => View::CreateSet,
        }
    }

    /// Move to the previous view (wrapping)
    pub fn prev(self) -> Self {
        match self {
            View::CreateSet => View::Study,
            View::AddCards => View::CreateSet,
            View::Study => View::AddCards,
        }
    }
}

/// Focused field in the Add Cards view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Set,
    Word,
    Definition,
}

impl AddField {
    fn down(self) -> Self {
        match self {
            AddField::Set => AddField::Word,
            AddField::Word => AddField::Definition,
            AddField::Definition => AddField::Definition,
        }
    }

    fn up(self) -> Self {
        match self {
            AddField::Set => AddField::Set,
            AddField::Word => AddField::Set,
            AddField::Definition => AddField::Word,
        }
    }
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Active view
    pub view: View,
    /// Store-facing action handlers and the study session
    pub controller: Controller,
    /// Set names in creation order, for the selector
    pub set_names: Vec<String>,
    /// Index into `set_names` shown by the selector
    pub set_index: usize,
    /// Create Set text input
    pub set_name_input: String,
    /// Add Cards word input
    pub word_input: String,
    /// Add Cards definition input
    pub definition_input: String,
    /// Focused field in Add Cards
    pub add_field: AddField,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Storage failure shown in a modal until a key is pressed
    pub error_message: Option<String>,
    /// Whether help overlay is visible
    pub show_help: bool,
}

impl App {
    /// Create a new app with the sets currently in the store
    pub fn new(store: &Store) -> anyhow::Result<Self> {
        let mut app = Self {
            should_quit: false,
            view: View::CreateSet,
            controller: Controller::new(),
            set_names: Vec::new(),
            set_index: 0,
            set_name_input: String::new(),
            word_input: String::new(),
            definition_input: String::new(),
            add_field: AddField::Set,
            status_message: None,
            status_message_time: None,
            error_message: None,
            show_help: false,
        };
        app.refresh_sets(store)?;
        Ok(app)
    }

    /// Reload set names, keeping the selector on the same name when possible
    pub fn refresh_sets(&mut self, store: &Store) -> anyhow::Result<()> {
        let current = self.selector_set().map(str::to_string);
        self.set_names = store.sets()?.into_iter().map(|s| s.name).collect();

        self.set_index = current
            .and_then(|name| self.set_names.iter().position(|n| *n == name))
            .unwrap_or(0);
        Ok(())
    }

    /// Name shown in the set selector
    pub fn selector_set(&self) -> Option<&str> {
        self.set_names.get(self.set_index).map(String::as_str)
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Select a set (by name or numeric id) for study and switch to the Study view
    pub fn start_study(&mut self, store: &mut Store, set: &str) -> anyhow::Result<()> {
        let (_, name) = resolve_set(store, set)?;
        self.controller.select_set(store, &name)?;
        if let Some(pos) = self.set_names.iter().position(|n| *n == name) {
            self.set_index = pos;
        }
        self.view = View::Study;
        Ok(())
    }

    /// Run an action, routing failures to the status bar or the error modal
    fn dispatch(&mut self, store: &mut Store, action: Action) -> Option<Outcome> {
        match self.controller.dispatch(store, action) {
            Ok(outcome) => Some(outcome),
            Err(e) if e.is_validation() => {
                self.set_status(format!("⚠ {}", e));
                None
            }
            Err(e) => {
                self.set_error(describe_failure(&e));
                None
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
        // Any key dismisses the error modal
        if self.has_error() {
            self.error_message = None;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
                return;
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
                return;
            }
            KeyCode::F(1) => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match self.view {
            View::CreateSet => self.handle_create_set(store, code, modifiers),
            View::AddCards => self.handle_add_cards(store, code, modifiers),
            View::Study => self.handle_study(store, code),
        }
    }

    fn handle_create_set(&mut self, store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Enter => {
                let name = self.set_name_input.clone();
                if let Some(Outcome::SetCreated { name, .. }) =
                    self.dispatch(store, Action::CreateSet { name })
                {
                    self.set_name_input.clear();
                    if let Err(e) = self.refresh_sets(store) {
                        self.set_error(format!("Failed to reload sets: {}", e));
                        return;
                    }
                    self.set_status(format!("Set '{}' has been created successfully!", name));
                }
            }
            KeyCode::Backspace => {
                self.set_name_input.pop();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_name_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_add_cards(&mut self, store: &mut Store, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Up => self.add_field = self.add_field.up(),
            KeyCode::Down => self.add_field = self.add_field.down(),
            KeyCode::Left if self.add_field == AddField::Set => {
                if !self.set_names.is_empty() {
                    self.set_index = self
                        .set_index
                        .checked_sub(1)
                        .unwrap_or(self.set_names.len() - 1);
                }
            }
            KeyCode::Right if self.add_field == AddField::Set => {
                if !self.set_names.is_empty() {
                    self.set_index = (self.set_index + 1) % self.set_names.len();
                }
            }
            KeyCode::Enter if self.add_field == AddField::Set => {
                let name = self.selector_set().unwrap_or_default().to_string();
                if let Some(Outcome::SetSelected { name, cards, .. }) =
                    self.dispatch(store, Action::SelectSet { name })
                {
                    self.set_status(format!("Selected set: {} ({} cards)", name, cards));
                }
            }
            KeyCode::Enter => self.add_card(store),
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn add_card(&mut self, store: &mut Store) {
        let action = Action::AddCard {
            set_name: self.selector_set().unwrap_or_default().to_string(),
            word: self.word_input.clone(),
            definition: self.definition_input.clone(),
        };

        if let Some(Outcome::CardAdded { .. }) = self.dispatch(store, action) {
            let message = format!(
                "Added '{}' to {}",
                self.word_input,
                self.selector_set().unwrap_or_default()
            );
            self.word_input.clear();
            self.definition_input.clear();
            self.add_field = AddField::Word;
            self.set_status(message);
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.add_field {
            AddField::Set => None,
            AddField::Word => Some(&mut self.word_input),
            AddField::Definition => Some(&mut self.definition_input),
        }
    }

    fn handle_study(&mut self, store: &mut Store, code: KeyCode) {
        let action = match code {
            KeyCode::Char(' ') | KeyCode::Char('f') => Action::Flip,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Action::Next,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Action::Previous,
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            _ => return,
        };
        self.dispatch(store, action);
    }
}

/// Error text for the modal, with the recovery hint when there is one
fn describe_failure(err: &Error) -> String {
    match err.recovery_suggestion() {
        Some(hint) => format!("{}\n{}", err, hint),
        None => err.to_string(),
    }
}
