//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use vocab_core::{Flashcard, FlashcardSet};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print sets with their card counts
    pub fn print_sets(&self, sets: &[(FlashcardSet, usize)]) {
        match self.format {
            OutputFormat::Human => {
                if sets.is_empty() {
                    println!("No sets found.");
                    return;
                }
                for (set, cards) in sets {
                    println!("{:>4} | {} ({})", set.id, truncate(&set.name, 40), cards);
                }
                println!("\n{} set(s)", sets.len());
            }
            OutputFormat::Json => {
                let json_sets: Vec<_> = sets
                    .iter()
                    .map(|(set, cards)| {
                        serde_json::json!({"id": set.id, "name": set.name, "cards": cards})
                    })
                    .collect();
                print_json(&json_sets);
            }
            OutputFormat::Quiet => {
                for (set, _) in sets {
                    println!("{}", set.name);
                }
            }
        }
    }

    /// Print the cards of one set
    pub fn print_cards(&self, set_name: &str, cards: &[Flashcard]) {
        match self.format {
            OutputFormat::Human => {
                println!("Cards in: {}", set_name);
                println!();

                if cards.is_empty() {
                    println!("No cards in this set.");
                    return;
                }

                for card in cards {
                    println!(
                        "{:>4} | {} | {}",
                        card.id,
                        truncate(&card.word, 25),
                        truncate_line(&card.definition, 45)
                    );
                }
                println!("\n{} card(s)", cards.len());
            }
            OutputFormat::Json => print_json(&cards),
            OutputFormat::Quiet => {
                for card in cards {
                    println!("{}\t{}", card.word, card.definition);
                }
            }
        }
    }

    /// Report a newly created row: message for humans, bare id for scripts
    pub fn created(&self, message: &str, id: i64) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "id": id, "message": message})
                );
            }
            OutputFormat::Quiet => println!("{}", id),
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("mañana mañana", 9), "mañana...");
        assert_eq!(truncate("über", 4), "über");
    }

    #[test]
    fn test_truncate_line() {
        assert_eq!(truncate_line("single line", 20), "single line");
        assert_eq!(truncate_line("line one\nline two", 20), "line one");
        assert_eq!(truncate_line("very long single line here", 10), "very lo...");
    }
}
