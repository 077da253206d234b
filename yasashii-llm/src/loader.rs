use crate::data::FewShotExample;
use crate::error::{LlmError, LlmResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load few-shot examples from a JSON file
///
/// Two layouts are accepted:
/// ```json
/// [ { "original": "...", "yasashii": "..." } ]
/// ```
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "examples": [ { "original": "...", "yasashii": "..." } ]
/// }
/// ```
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or no example list in it
/// - No usable example in the list
pub fn load_examples_from_file(path: &Path) -> LlmResult<Vec<FewShotExample>> {
    let content = fs::read_to_string(path).map_err(|e| {
        LlmError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    load_examples_from_str(&content).map_err(|e| match e {
        LlmError::Config(msg) => LlmError::Config(format!("{} ({})", msg, path.display())),
        other => other,
    })
}

pub fn load_examples_from_str(content: &str) -> LlmResult<Vec<FewShotExample>> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| LlmError::Config(format!("Failed to parse examples JSON: {}", e)))?;

    let entries = match &json {
        Value::Array(entries) => entries,
        Value::Object(obj) => obj
            .get("examples")
            .and_then(Value::as_array)
            .ok_or_else(|| LlmError::Config("missing 'examples' array".to_string()))?,
        _ => {
            return Err(LlmError::Config(
                "root must be an array or an object".to_string(),
            ));
        }
    };

    let mut examples = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<FewShotExample>(entry.clone()) {
            Ok(example)
                if !example.original.trim().is_empty() && !example.yasashii.trim().is_empty() =>
            {
                examples.push(example)
            }
            Ok(_) => warn!(index = i, "example has an empty field, skipping"),
            Err(e) => warn!(index = i, error = %e, "malformed example, skipping"),
        }
    }

    if examples.is_empty() {
        return Err(LlmError::Config("no usable examples found".to_string()));
    }

    Ok(examples)
}
