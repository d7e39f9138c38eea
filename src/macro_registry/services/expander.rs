//! Expansion of `${...}` placeholders against a registry.

use crate::macro_registry::ports::{MacroRegistry, MacroRegistryResult};
use std::sync::Arc;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Replaces registered macro names in text with their values.
///
/// Expansion is a single pass: substituted values are never expanded again.
/// Placeholders without a registered macro, and unterminated `${`, are left
/// verbatim.
#[derive(Debug, Clone)]
pub struct MacroExpander<R>
where
    R: MacroRegistry + ?Sized,
{
    registry: Arc<R>,
}

impl<R> MacroExpander<R>
where
    R: MacroRegistry + ?Sized,
{
    /// Creates an expander reading from `registry`.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Expands every registered placeholder in `text`.
    ///
    /// # Errors
    ///
    /// Returns registry errors raised during lookup.
    pub fn expand(&self, text: &str) -> MacroRegistryResult<String> {
        let mut expanded = String::with_capacity(text.len());
        let mut rest = text;

        while let Some((before, after_open)) = rest.split_once(OPEN) {
            expanded.push_str(before);
            let Some((body, after_close)) = after_open.split_once(CLOSE) else {
                expanded.push_str(OPEN);
                rest = after_open;
                break;
            };

            if body.contains(OPEN) {
                // An inner placeholder starts before this one closes.
                expanded.push_str(OPEN);
                rest = after_open;
                continue;
            }

            let name = format!("{OPEN}{body}{CLOSE}");
            match self.registry.get(&name)? {
                Some(found) => expanded.push_str(found.value()),
                None => expanded.push_str(&name),
            }
            rest = after_close;
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macro_registry::{
        adapters::InMemoryMacroRegistry,
        domain::{Macro, SharedMacro},
    };
    use rstest::{fixture, rstest};

    #[derive(Debug)]
    struct FixedMacro(&'static str, &'static str);

    impl Macro for FixedMacro {
        fn name(&self) -> &str {
            self.0
        }

        fn value(&self) -> &str {
            self.1
        }

        fn description(&self) -> &str {
            ""
        }
    }

    #[fixture]
    fn expander() -> MacroExpander<InMemoryMacroRegistry> {
        let registry = InMemoryMacroRegistry::new();
        let macros: Vec<SharedMacro> = vec![
            Arc::new(FixedMacro("${server.port.8080}", "http://host:32768")),
            Arc::new(FixedMacro("${loop}", "${server.port.8080}")),
        ];
        registry.register(&macros).expect("register");
        MacroExpander::new(Arc::new(registry))
    }

    #[rstest]
    #[case("curl ${server.port.8080}/api", "curl http://host:32768/api")]
    #[case(
        "${server.port.8080} ${server.port.8080}",
        "http://host:32768 http://host:32768"
    )]
    #[case("echo ${unknown}", "echo ${unknown}")]
    #[case("no placeholders", "no placeholders")]
    #[case("tail ${server.port.8080", "tail ${server.port.8080")]
    #[case("${x ${server.port.8080}", "${x http://host:32768")]
    #[case("${loop}", "${server.port.8080}")]
    #[case("", "")]
    fn expands_registered_placeholders(
        expander: MacroExpander<InMemoryMacroRegistry>,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(expander.expand(input).expect("expand"), expected);
    }
}
