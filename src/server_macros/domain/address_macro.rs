//! Macro resolving to a server's external address.

use super::MacroNameTemplate;
use crate::macro_registry::domain::Macro;

/// Immutable macro naming one exposed server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddressMacro {
    name: String,
    value: String,
    description: String,
}

impl ServerAddressMacro {
    /// Creates a macro named with the default template.
    #[must_use]
    pub fn new(reference: &str, url: &str) -> Self {
        server_address_macro(reference, url, &MacroNameTemplate::default())
    }
}

impl Macro for ServerAddressMacro {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builds the macro for the server at `reference` reachable at `url`.
#[must_use]
pub fn server_address_macro(
    reference: &str,
    url: &str,
    template: &MacroNameTemplate,
) -> ServerAddressMacro {
    ServerAddressMacro {
        name: template.render(reference),
        value: url.to_owned(),
        description: format!("Returns external address of the server running on port {reference}"),
    }
}
