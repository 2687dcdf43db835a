use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::{OutputFormat, load_dataset};

pub fn tags_command(data_path: &Path, include_retired: bool, format: OutputFormat) -> Result<()> {
    let dataset = load_dataset(data_path)?;
    let tags = dataset.store.all_location_tags(include_retired);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
        OutputFormat::Text => {
            println!("Location tags:");
            if tags.is_empty() {
                println!("  (none)");
            }
            for tag in tags {
                let mut line = format!("  {:>4}  {}", tag.id.0, tag.name.bright_cyan());
                if tag.retired {
                    line.push_str(&format!(" {}", "(retired)".dimmed()));
                }
                println!("{line}");
            }
        }
    }

    Ok(())
}
