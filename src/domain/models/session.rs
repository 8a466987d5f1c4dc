#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

/// Identifies the user whose plants and alerts are requested. Passed
/// explicitly to every request rather than read from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: String,
}

impl SessionContext {
    pub fn new(user_id: &str) -> Result<SessionContext> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            bail!("A user id is required. Pass --user-id, set PLANTWATCH_USER_ID, or add user-id to your config file.");
        }

        if user_id.chars().any(|c| return c.is_control()) {
            bail!(format!("User id '{user_id}' contains invalid characters"));
        }

        return Ok(SessionContext {
            user_id: user_id.to_string(),
        });
    }

    pub fn user_id(&self) -> &str {
        return &self.user_id;
    }
}
