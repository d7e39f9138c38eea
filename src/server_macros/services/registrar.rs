//! Event-driven registration of server address macros.

use crate::events::{EventBus, EventBusError, HandlerRegistration, IdeEvent};
use crate::macro_registry::{
    domain::SharedMacro,
    ports::{MacroRegistry, MacroRegistryError, MacroRegistryResult},
};
use crate::server_macros::{config::RegistrarConfig, domain::MacroGeneration};
use crate::workspace::{
    domain::WorkspaceSnapshot,
    ports::{AppContext, AppContextError},
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, warn};

/// Deferred accessor for the macro registry.
pub type RegistrySupplier<R> = Arc<dyn Fn() -> Arc<R> + Send + Sync>;

/// Errors returned by registrar operations.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Registry operation failed.
    #[error(transparent)]
    Registry(#[from] MacroRegistryError),
    /// Workspace state could not be read.
    #[error(transparent)]
    AppContext(#[from] AppContextError),
    /// Subscribing to the event bus failed.
    #[error(transparent)]
    EventBus(#[from] EventBusError),
    /// The registered-macro state lock was poisoned.
    #[error("registrar state is poisoned: {0}")]
    StatePoisoned(String),
}

/// Result type for registrar operations.
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Publishes server address macros while the workspace runs.
///
/// The registrar reacts to three lifecycle events:
///
/// - [`IdeEvent::BasicIdeInitialized`] registers macros only if the workspace
///   is already running, which covers a runtime that started before the IDE
///   finished bootstrapping;
/// - [`IdeEvent::WorkspaceRunning`] registers macros;
/// - [`IdeEvent::WorkspaceStopped`] unregisters every macro from the current
///   run.
///
/// At most one generation of macros is registered at a time. Registering
/// again while a generation is live withdraws the old one first.
pub struct ServerAddressMacroRegistrar<R, C>
where
    R: MacroRegistry + ?Sized,
    C: AppContext,
{
    registry: RegistrySupplier<R>,
    app_context: Arc<C>,
    config: RegistrarConfig,
    generation: Mutex<Option<MacroGeneration>>,
}

impl<R, C> ServerAddressMacroRegistrar<R, C>
where
    R: MacroRegistry + ?Sized + 'static,
    C: AppContext + 'static,
{
    /// Creates a registrar bound directly to `registry`.
    #[must_use]
    pub fn new(registry: Arc<R>, app_context: Arc<C>, config: RegistrarConfig) -> Self {
        Self::with_registry_supplier(move || Arc::clone(&registry), app_context, config)
    }

    /// Creates a registrar that resolves the registry on each use.
    ///
    /// Use this when the registry is constructed after the registrar.
    #[must_use]
    pub fn with_registry_supplier<F>(
        supplier: F,
        app_context: Arc<C>,
        config: RegistrarConfig,
    ) -> Self
    where
        F: Fn() -> Arc<R> + Send + Sync + 'static,
    {
        Self {
            registry: Arc::new(supplier),
            app_context,
            config,
            generation: Mutex::new(None),
        }
    }

    /// Subscribes the registrar's handlers on `bus`.
    ///
    /// Handler failures are logged; the bus never observes them.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::EventBus`] when a subscription fails.
    pub fn attach(self: &Arc<Self>, bus: &EventBus) -> RegistrarResult<Vec<HandlerRegistration>> {
        let mut registrations = Vec::with_capacity(3);
        for event in [
            IdeEvent::BasicIdeInitialized,
            IdeEvent::WorkspaceRunning,
            IdeEvent::WorkspaceStopped,
        ] {
            let registrar = Arc::clone(self);
            let registration = bus.subscribe(event, move |fired| {
                if let Err(err) = registrar.handle(*fired) {
                    warn!(event = %fired, error = %err, "server address macro handler failed");
                }
            })?;
            registrations.push(registration);
        }
        Ok(registrations)
    }

    /// Routes `event` to its handler.
    ///
    /// # Errors
    ///
    /// Returns the handler's error.
    pub fn handle(&self, event: IdeEvent) -> RegistrarResult<()> {
        match event {
            IdeEvent::BasicIdeInitialized => self.on_ide_initialized(),
            IdeEvent::WorkspaceRunning => self.on_workspace_running(),
            IdeEvent::WorkspaceStopped => self.on_workspace_stopped(),
        }
    }

    /// Registers macros if the workspace is already running.
    ///
    /// # Errors
    ///
    /// Returns app context, registry, or state errors.
    pub fn on_ide_initialized(&self) -> RegistrarResult<()> {
        let workspace = self.app_context.workspace()?;
        if !workspace.status().is_running() {
            debug!(
                workspace = workspace.id(),
                status = %workspace.status(),
                "workspace not running at IDE start, deferring server address macros"
            );
            return Ok(());
        }
        self.register_for(&workspace)
    }

    /// Registers macros for the running workspace.
    ///
    /// A live generation is withdrawn first. The new generation is registered
    /// and tracked even when that withdrawal fails; the withdrawal error is
    /// reported afterwards.
    ///
    /// # Errors
    ///
    /// Returns app context, registry, or state errors.
    pub fn on_workspace_running(&self) -> RegistrarResult<()> {
        let workspace = self.app_context.workspace()?;
        self.register_for(&workspace)
    }

    /// Unregisters every macro registered for the current run.
    ///
    /// # Errors
    ///
    /// Returns the first registry error after attempting every macro, or a
    /// state error.
    pub fn on_workspace_stopped(&self) -> RegistrarResult<()> {
        let Some(generation) = self.lock_generation()?.take() else {
            debug!("no server address macros to unregister");
            return Ok(());
        };

        let workspace_id = generation.workspace_id().to_owned();
        let count = generation.len();
        unregister_all(&*(self.registry)(), generation)?;
        debug!(
            workspace = workspace_id.as_str(),
            macros = count,
            "unregistered server address macros"
        );
        Ok(())
    }

    /// Returns the macros registered for the current run.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn registered_macros(&self) -> RegistrarResult<Vec<SharedMacro>> {
        Ok(self
            .lock_generation()?
            .as_ref()
            .map(|generation| generation.macros().to_vec())
            .unwrap_or_default())
    }

    /// Returns the registrar configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    fn lock_generation(&self) -> RegistrarResult<MutexGuard<'_, Option<MacroGeneration>>> {
        self.generation
            .lock()
            .map_err(|err| RegistrarError::StatePoisoned(err.to_string()))
    }

    fn register_for(&self, workspace: &WorkspaceSnapshot) -> RegistrarResult<()> {
        let Some(machine) = workspace.dev_machine() else {
            debug!(
                workspace = workspace.id(),
                "workspace has no development machine, skipping server address macros"
            );
            return Ok(());
        };

        let generation = MacroGeneration::build(
            workspace.id(),
            machine,
            self.config.name_template(),
            self.config.tcp_suffix(),
        );
        let registry = (self.registry)();
        let previous = self.lock_generation()?.take();
        let withdrawn = previous.map_or(Ok(()), |stale| {
            debug!(
                workspace = stale.workspace_id(),
                macros = stale.len(),
                "withdrawing previous server address macros"
            );
            unregister_all(&*registry, stale)
        });

        registry.register(generation.macros())?;
        debug!(
            workspace = generation.workspace_id(),
            machine = machine.name(),
            macros = generation.len(),
            "registered server address macros"
        );
        *self.lock_generation()? = Some(generation);
        withdrawn.map_err(RegistrarError::from)
    }
}

impl<R, C> fmt::Debug for ServerAddressMacroRegistrar<R, C>
where
    R: MacroRegistry + ?Sized,
    C: AppContext,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ServerAddressMacroRegistrar")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

fn unregister_all<R>(registry: &R, generation: MacroGeneration) -> MacroRegistryResult<()>
where
    R: MacroRegistry + ?Sized,
{
    let mut first_error = None;
    for entry in generation.into_macros() {
        if let Err(err) = registry.unregister(&entry) {
            warn!(name = entry.name(), error = %err, "failed to unregister server address macro");
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
