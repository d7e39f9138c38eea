//! Macros published for one workspace run.

use super::{MacroNameTemplate, server_address_macro};
use crate::macro_registry::domain::{Macro, SharedMacro};
use crate::workspace::domain::Machine;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// The set of macros registered for a single workspace run.
///
/// Each run owns a fresh generation. A server's own reference always takes
/// precedence over a port alias derived by stripping the TCP suffix from
/// another reference, so names within a generation are unique.
#[derive(Debug, Clone)]
pub struct MacroGeneration {
    workspace_id: String,
    macros: Vec<SharedMacro>,
}

impl MacroGeneration {
    /// Builds the macros for every server exposed by `machine`.
    #[must_use]
    pub fn build(
        workspace_id: impl Into<String>,
        machine: &Machine,
        template: &MacroNameTemplate,
        tcp_suffix: &str,
    ) -> Self {
        let mut names = HashSet::new();
        let mut macros: Vec<SharedMacro> = Vec::with_capacity(machine.servers().len());

        for (reference, server) in machine.servers() {
            let built = server_address_macro(reference, server.url(), template);
            names.insert(built.name().to_owned());
            macros.push(Arc::new(built));
        }

        for (reference, server) in machine.servers() {
            let Some(port) = reference.strip_suffix(tcp_suffix) else {
                continue;
            };
            let alias = server_address_macro(port, server.url(), template);
            if !names.insert(alias.name().to_owned()) {
                warn!(
                    server = reference.as_str(),
                    name = alias.name(),
                    "port alias collides with an exposed server, skipping"
                );
                continue;
            }
            macros.push(Arc::new(alias));
        }

        Self {
            workspace_id: workspace_id.into(),
            macros,
        }
    }

    /// Returns the workspace the generation was built for.
    #[must_use]
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Returns the macros in the generation.
    #[must_use]
    pub fn macros(&self) -> &[SharedMacro] {
        &self.macros
    }

    /// Returns the number of macros.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Returns whether the generation holds no macros.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Consumes the generation and returns its macros.
    #[must_use]
    pub fn into_macros(self) -> Vec<SharedMacro> {
        self.macros
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::domain::ServerDescriptor;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn machine(servers: &[(&str, &str)]) -> Machine {
        servers
            .iter()
            .try_fold(Machine::new("dev-machine"), |machine, (reference, url)| {
                machine.with_server(*reference, ServerDescriptor::new(*url)?)
            })
            .expect("valid machine")
    }

    fn name_values(generation: &MacroGeneration) -> BTreeMap<String, String> {
        generation
            .macros()
            .iter()
            .map(|entry| (entry.name().to_owned(), entry.value().to_owned()))
            .collect()
    }

    fn build(servers: &[(&str, &str)]) -> MacroGeneration {
        MacroGeneration::build(
            "workspace42",
            &machine(servers),
            &MacroNameTemplate::default(),
            "/tcp",
        )
    }

    #[rstest]
    #[case("wsagent/http")]
    #[case("8000/udp")]
    #[case("tcp")]
    #[case("8080/tcp/extra")]
    fn non_tcp_reference_yields_one_macro(#[case] reference: &str) {
        let generation = build(&[(reference, "http://host:1")]);

        assert_eq!(generation.len(), 1);
        assert_eq!(
            name_values(&generation),
            BTreeMap::from([(
                format!("${{server.port.{reference}}}"),
                "http://host:1".to_owned()
            )])
        );
    }

    #[rstest]
    #[case("8080")]
    #[case("4403")]
    #[case("agent")]
    fn tcp_reference_yields_full_and_stripped_macros(#[case] prefix: &str) {
        let reference = format!("{prefix}/tcp");
        let generation = build(&[(reference.as_str(), "http://host:2")]);

        assert_eq!(
            name_values(&generation),
            BTreeMap::from([
                (
                    format!("${{server.port.{prefix}/tcp}}"),
                    "http://host:2".to_owned()
                ),
                (
                    format!("${{server.port.{prefix}}}"),
                    "http://host:2".to_owned()
                ),
            ])
        );
    }

    #[rstest]
    fn mixed_servers_yield_three_macros() {
        let generation = build(&[
            ("8080/tcp", "http://host:32768"),
            ("wsagent/http", "http://host:9000"),
        ]);

        assert_eq!(generation.workspace_id(), "workspace42");
        assert_eq!(
            name_values(&generation),
            BTreeMap::from([
                (
                    "${server.port.8080/tcp}".to_owned(),
                    "http://host:32768".to_owned()
                ),
                (
                    "${server.port.8080}".to_owned(),
                    "http://host:32768".to_owned()
                ),
                (
                    "${server.port.wsagent/http}".to_owned(),
                    "http://host:9000".to_owned()
                ),
            ])
        );
    }

    #[rstest]
    fn exposed_server_wins_over_port_alias() {
        let generation = build(&[
            ("8080", "http://direct:1"),
            ("8080/tcp", "http://aliased:2"),
        ]);

        assert_eq!(
            name_values(&generation),
            BTreeMap::from([
                ("${server.port.8080}".to_owned(), "http://direct:1".to_owned()),
                (
                    "${server.port.8080/tcp}".to_owned(),
                    "http://aliased:2".to_owned()
                ),
            ])
        );
    }

    #[rstest]
    fn machine_without_servers_yields_empty_generation() {
        assert!(build(&[]).is_empty());
    }

    #[rstest]
    fn custom_template_and_suffix_are_honoured() {
        let generation = MacroGeneration::build(
            "workspace42",
            &machine(&[("9000-tcp", "http://host:9000")]),
            &MacroNameTemplate::new("{{port:%}}").expect("valid template"),
            "-tcp",
        );

        assert_eq!(
            name_values(&generation),
            BTreeMap::from([
                ("{{port:9000-tcp}}".to_owned(), "http://host:9000".to_owned()),
                ("{{port:9000}}".to_owned(), "http://host:9000".to_owned()),
            ])
        );
    }
}
