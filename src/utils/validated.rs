use validator::Validate;

use super::error::RequestError;

/// Runs `validate` on a freshly built value and hands it back only if it passes.
pub fn validated<T: Validate>(value: T) -> Result<T, RequestError> {
    value.validate()?;
    Ok(value)
}
