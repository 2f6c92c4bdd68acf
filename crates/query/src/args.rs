//! Required-argument and identifier validation.

use serde_json::Value;
use uuid::Uuid;

use crate::error::QueryError;

/// Asserts that every key in `required` is present and non-null on `record`.
///
/// Keys are checked in the order given and only the first failure is
/// reported. Has no side effects.
///
/// # Errors
///
/// Fails with [`QueryError::MissingArgument`] naming the first key that is
/// absent or null.
pub fn assert_args(record: &Value, required: &[&str]) -> Result<(), QueryError> {
    for &name in required {
        match record.get(name) {
            None | Some(Value::Null) => {
                return Err(QueryError::MissingArgument {
                    name: name.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Validates that `id` parses as a UUID.
///
/// # Errors
///
/// Fails with [`QueryError::InvalidIdentifier`] if the value is not a UUID.
pub fn validate_uuid(id: &str) -> Result<(), QueryError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| QueryError::InvalidIdentifier)
}
