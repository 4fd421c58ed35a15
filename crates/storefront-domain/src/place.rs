//! Address autocomplete types.

use serde::{Deserialize, Serialize};

/// Inputs with this many characters or fewer never trigger a lookup.
pub const MIN_AUTOCOMPLETE_CHARS: usize = 2;

/// A candidate address returned by the map provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

/// Whether `input` is long enough to be sent to the autocomplete provider.
pub fn is_autocomplete_query(input: &str) -> bool {
    input.chars().count() > MIN_AUTOCOMPLETE_CHARS
}
