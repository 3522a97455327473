use iso8601_timestamp::Timestamp;

use crate::{Error, Result};

/// Trim a required field, failing if nothing is left
pub fn require_field(value: &str, with: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(Error::IncorrectData { with })
    } else {
        Ok(value.to_string())
    }
}

/// Make sure an email can be used as a mailbox address
pub fn validate_email(email: &str) -> Result<()> {
    email
        .parse::<lettre::Address>()
        .map(|_| ())
        .map_err(|_| Error::IncorrectData { with: "email" })
}

/// Generate a new verification token
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Milliseconds since the unix epoch
pub fn unix_millis(timestamp: Timestamp) -> i64 {
    timestamp
        .duration_since(Timestamp::UNIX_EPOCH)
        .whole_milliseconds() as i64
}
