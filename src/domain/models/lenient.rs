use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

/// Reads an optional numeric id. Numbers and numeric strings are accepted,
/// anything else becomes `None` instead of failing the whole record.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(num) => return Ok(num.as_u64()),
        Value::String(text) => return Ok(text.trim().parse::<u64>().ok()),
        _ => return Ok(None),
    }
}

/// Reads an optional free-form text field. Numbers are kept as their string
/// form, other shapes become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => return Ok(Some(text)),
        Value::Number(num) => return Ok(Some(num.to_string())),
        _ => return Ok(None),
    }
}
