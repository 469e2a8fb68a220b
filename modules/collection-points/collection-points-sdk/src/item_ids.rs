//! Comma-separated item id lists, as sent by the registration form and the
//! listing query (`items=1,3`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemIdsError {
    #[error("at least one item id is required")]
    Empty,
    #[error("'{0}' is not a valid item id")]
    Invalid(String),
}

/// Parse `"1, 3,3"` into `[1, 3]`.
///
/// Entries are trimmed and must be positive integers. Duplicates collapse to
/// their first occurrence so the result behaves as a set with stable order.
///
/// # Errors
/// [`ItemIdsError::Empty`] for a blank list, [`ItemIdsError::Invalid`] for the
/// first entry that is not a positive integer (including empty entries).
pub fn parse_item_ids(raw: &str) -> Result<Vec<i32>, ItemIdsError> {
    if raw.trim().is_empty() {
        return Err(ItemIdsError::Empty);
    }

    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        let id = match part.parse::<i32>() {
            Ok(id) if id > 0 => id,
            _ => return Err(ItemIdsError::Invalid(part.to_owned())),
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Inverse of [`parse_item_ids`]: `[1, 3]` becomes `"1,3"`.
#[must_use]
pub fn format_item_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
