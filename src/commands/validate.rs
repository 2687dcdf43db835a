use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use carebase::validation::DatasetValidator;

use super::{OutputFormat, load_dataset};

pub fn validate_command(data_path: &Path, format: OutputFormat) -> Result<()> {
    let dataset = load_dataset(data_path)?;
    let report = DatasetValidator::new().validate(&dataset);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Validating dataset: {}", data_path.display());
            for errors in &report.invalid {
                println!("\n{} {}", "✗".red(), errors.object_name().bold());
                for violation in errors.violations() {
                    println!("  - {violation} [{}]", violation.kind.code());
                }
            }
        }
    }

    if !report.is_valid() {
        anyhow::bail!(
            "{} of {} record(s) failed validation with {} violation(s)",
            report.invalid.len(),
            report.checked,
            report.violation_count()
        );
    }

    if format == OutputFormat::Text {
        println!("\n✅ All {} records passed validation!", report.checked);
    }
    Ok(())
}
