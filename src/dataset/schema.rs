use serde_json::Value;

use super::error::DatasetError;

// Embed schema at compile time
const DATASET_SCHEMA: &str = include_str!("../../schemas/dataset-schema.json");

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

pub fn get_dataset_schema() -> Result<Value, DatasetError> {
    serde_json::from_str(DATASET_SCHEMA).map_err(|e| DatasetError::BrokenSchema(e.to_string()))
}

/// Every schema problem in `value`, as `<instance path>: <message>` lines.
pub fn schema_problems(value: &Value) -> Result<Vec<String>, DatasetError> {
    let schema = get_dataset_schema()?;
    let validator = schema_draft::options()
        .build(&schema)
        .map_err(|e| DatasetError::BrokenSchema(e.to_string()))?;

    Ok(validator
        .iter_errors(value)
        .map(|error| {
            let path = error.instance_path.to_string();
            if path.is_empty() {
                error.to_string()
            } else {
                format!("{path}: {error}")
            }
        })
        .collect())
}
