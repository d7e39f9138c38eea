//! Macro name template.

use super::ServerMacroConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced by the server reference.
pub const NAME_PLACEHOLDER: char = '%';

/// Template used to name server address macros.
pub const DEFAULT_MACRO_NAME_TEMPLATE: &str = "${server.port.%}";

/// Validated macro name template with a single `%` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacroNameTemplate(String);

impl MacroNameTemplate {
    /// Creates a validated template.
    ///
    /// # Errors
    ///
    /// Returns [`ServerMacroConfigError::InvalidNameTemplate`] unless the
    /// template contains exactly one `%`.
    pub fn new(template: impl Into<String>) -> Result<Self, ServerMacroConfigError> {
        let raw = template.into();
        if raw.matches(NAME_PLACEHOLDER).count() != 1 {
            return Err(ServerMacroConfigError::InvalidNameTemplate(raw));
        }
        Ok(Self(raw))
    }

    /// Substitutes `reference` for the placeholder.
    #[must_use]
    pub fn render(&self, reference: &str) -> String {
        self.0.replacen(NAME_PLACEHOLDER, reference, 1)
    }

    /// Returns the raw template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MacroNameTemplate {
    fn default() -> Self {
        Self(DEFAULT_MACRO_NAME_TEMPLATE.to_owned())
    }
}

impl TryFrom<String> for MacroNameTemplate {
    type Error = ServerMacroConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MacroNameTemplate> for String {
    fn from(template: MacroNameTemplate) -> Self {
        template.0
    }
}

impl fmt::Display for MacroNameTemplate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
