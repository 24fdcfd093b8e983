//! Search form validation
//!
//! Checks field presence before any upstream call is made. The two color
//! selects arrive with their placeholder text when the user never picked
//! an option, so a placeholder value counts as unset.

use serde::Deserialize;
use std::fmt;

use super::types::PlateQuery;

/// Unselected value of the background color select
pub const BACKGROUND_PLACEHOLDER: &str = "Color de fondo";
/// Unselected value of the letter color select
pub const LETTER_PLACEHOLDER: &str = "Color de letra";
/// Alert shown when any field is missing
pub const INCOMPLETE_MESSAGE: &str = "Por favor completa todos los campos.";

/// Raw form fields as posted by the page script.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub placa: String,
    #[serde(default)]
    pub color_fondo: String,
    #[serde(default)]
    pub color_letra: String,
}

/// Validation failure: at least one field is empty or still a placeholder.
#[derive(Debug, PartialEq, Eq)]
pub struct IncompleteForm;

impl fmt::Display for IncompleteForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(INCOMPLETE_MESSAGE)
    }
}

impl std::error::Error for IncompleteForm {}

impl SearchForm {
    /// Validate the three fields and build the upstream query.
    ///
    /// The plate identifier is trimmed of surrounding whitespace; color
    /// selections are passed through unchanged.
    pub fn validate(&self) -> Result<PlateQuery, IncompleteForm> {
        let placa = self.placa.trim();
        if placa.is_empty()
            || self.color_fondo == BACKGROUND_PLACEHOLDER
            || self.color_letra == LETTER_PLACEHOLDER
        {
            return Err(IncompleteForm);
        }
        Ok(PlateQuery {
            placa: placa.to_string(),
            color_fondo: self.color_fondo.clone(),
            color_letra: self.color_letra.clone(),
        })
    }
}
