#[cfg(test)]
#[path = "alert_test.rs"]
mod tests;

use serde::de::Error;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::lenient;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    #[serde(default)]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub plant_id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl AlertMessage {
    pub fn new(message: &str) -> AlertMessage {
        return AlertMessage {
            message: message.to_string(),
            ..AlertMessage::default()
        };
    }

    /// Interprets a `/getalert` body. The server answers `""` when nothing is
    /// pending, so empty strings, `null`, and objects without a message all
    /// mean "no alert".
    pub fn from_value(value: Value) -> Result<Option<AlertMessage>, serde_json::Error> {
        match value {
            Value::Null => return Ok(None),
            Value::String(text) => {
                if text.trim().is_empty() {
                    return Ok(None);
                }

                return Ok(Some(AlertMessage::new(&text)));
            }
            Value::Object(_) => {
                let alert: AlertMessage = serde_json::from_value(value)?;
                if alert.message.trim().is_empty() {
                    return Ok(None);
                }

                return Ok(Some(alert));
            }
            other => {
                return Err(serde_json::Error::custom(format!(
                    "expected an alert object or an empty string, got {other}"
                )));
            }
        }
    }

    pub fn title(&self) -> String {
        if let Some(plant_id) = self.plant_id {
            return format!("Alerta · Planta #{plant_id}");
        }

        return "Alerta".to_string();
    }
}
