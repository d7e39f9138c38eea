//! Registrar configuration.

use crate::server_macros::domain::{MacroNameTemplate, ServerMacroConfigError};
use serde::{Deserialize, Serialize};

/// Suffix stripped from server references to derive a bare port alias.
pub const DEFAULT_TCP_SUFFIX: &str = "/tcp";

/// Naming rules for server address macros.
///
/// Deserialises from JSON such as
/// `{"name_template": "${server.port.%}", "tcp_suffix": "/tcp"}`; omitted
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRegistrarConfig")]
pub struct RegistrarConfig {
    name_template: MacroNameTemplate,
    tcp_suffix: String,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawRegistrarConfig {
    name_template: MacroNameTemplate,
    tcp_suffix: String,
}

impl Default for RawRegistrarConfig {
    fn default() -> Self {
        Self {
            name_template: MacroNameTemplate::default(),
            tcp_suffix: DEFAULT_TCP_SUFFIX.to_owned(),
        }
    }
}

impl TryFrom<RawRegistrarConfig> for RegistrarConfig {
    type Error = ServerMacroConfigError;

    fn try_from(raw: RawRegistrarConfig) -> Result<Self, Self::Error> {
        Self::new(raw.name_template, raw.tcp_suffix)
    }
}

impl RegistrarConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerMacroConfigError::EmptyTcpSuffix`] when `tcp_suffix`
    /// is empty.
    pub fn new(
        name_template: MacroNameTemplate,
        tcp_suffix: impl Into<String>,
    ) -> Result<Self, ServerMacroConfigError> {
        let suffix = tcp_suffix.into();
        if suffix.is_empty() {
            return Err(ServerMacroConfigError::EmptyTcpSuffix);
        }
        Ok(Self {
            name_template,
            tcp_suffix: suffix,
        })
    }

    /// Decodes a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ServerMacroConfigError::InvalidDocument`] when the JSON is
    /// malformed or any value fails validation.
    pub fn from_json(json: &str) -> Result<Self, ServerMacroConfigError> {
        serde_json::from_str(json)
            .map_err(|err| ServerMacroConfigError::InvalidDocument(err.to_string()))
    }

    /// Returns the macro name template.
    #[must_use]
    pub const fn name_template(&self) -> &MacroNameTemplate {
        &self.name_template
    }

    /// Returns the suffix stripped to derive port aliases.
    #[must_use]
    pub fn tcp_suffix(&self) -> &str {
        &self.tcp_suffix
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            name_template: MacroNameTemplate::default(),
            tcp_suffix: DEFAULT_TCP_SUFFIX.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server_macros::domain::DEFAULT_MACRO_NAME_TEMPLATE;
    use rstest::rstest;

    #[rstest]
    fn empty_document_uses_defaults() {
        let config = RegistrarConfig::from_json("{}").expect("valid config");

        assert_eq!(config, RegistrarConfig::default());
        assert_eq!(config.name_template().as_str(), DEFAULT_MACRO_NAME_TEMPLATE);
        assert_eq!(config.tcp_suffix(), "/tcp");
    }

    #[rstest]
    fn overrides_are_applied() {
        let config = RegistrarConfig::from_json(
            r#"{"name_template": "${port.%}", "tcp_suffix": "-tcp"}"#,
        )
        .expect("valid config");

        assert_eq!(config.name_template().render("80"), "${port.80}");
        assert_eq!(config.tcp_suffix(), "-tcp");
    }

    #[rstest]
    #[case(r#"{"name_template": "${port}"}"#)]
    #[case(r#"{"tcp_suffix": ""}"#)]
    #[case(r#"{"unknown": true}"#)]
    fn invalid_documents_are_rejected(#[case] json: &str) {
        assert!(matches!(
            RegistrarConfig::from_json(json),
            Err(ServerMacroConfigError::InvalidDocument(_))
        ));
    }

    #[rstest]
    fn empty_suffix_is_rejected() {
        assert_eq!(
            RegistrarConfig::new(MacroNameTemplate::default(), ""),
            Err(ServerMacroConfigError::EmptyTcpSuffix)
        );
    }
}
