//! Field rules shared by the entities

use validator::{ValidationError, ValidationErrors};

/// Rejects text that is empty once surrounding whitespace is trimmed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Pick the failure of the earliest field in `field_order`.
///
/// `validator` reports every failing field at once and keyed by name, so the
/// fixed checking order is restored here.
pub fn first_violation(errors: &ValidationErrors, field_order: &[&str]) -> Option<String> {
    let fields = errors.field_errors();
    field_order.iter().find_map(|field| {
        let error = fields.get(*field)?.first()?;
        Some(
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field)),
        )
    })
}
