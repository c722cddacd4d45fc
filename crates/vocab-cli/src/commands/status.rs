//! Status command handler

use anyhow::Result;

use vocab_core::{Config, Store};

use crate::output::{Output, OutputFormat};

/// Show database location and contents
pub fn show(store: &Store, config: &Config, output: &Output) -> Result<()> {
    let stats = store.stats()?;
    let schema_version = store.schema_version()?;
    let database = config.database_path();
    let database_size = std::fs::metadata(&database).map(|m| m.len()).unwrap_or(0);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "database": database,
                    "database_size": database_size,
                    "schema_version": schema_version,
                    "counts": stats
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{} {}", stats.sets, stats.cards);
        }
        OutputFormat::Human => {
            println!("Vocab Status");
            println!("============");
            println!();
            println!("Storage:");
            println!("  Location: {}", database.display());
            println!("  Size:     {}", human_size(database_size));
            println!(
                "  Schema:   {}",
                schema_version
                    .map(|v| format!("v{}", v))
                    .unwrap_or_else(|| "(unknown)".to_string())
            );
            println!();
            println!("Contents:");
            println!("  Sets:  {}", stats.sets);
            println!("  Cards: {}", stats.cards);
        }
    }

    Ok(())
}

fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
