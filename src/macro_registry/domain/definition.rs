//! The macro capability.

use std::fmt;
use std::sync::Arc;

/// A named placeholder that resolves to a value.
pub trait Macro: fmt::Debug + Send + Sync {
    /// Returns the placeholder name, for example `${server.port.8080}`.
    fn name(&self) -> &str;

    /// Returns the resolved value.
    fn value(&self) -> &str;

    /// Returns a human-readable description.
    fn description(&self) -> &str;
}

/// Shared handle to a macro. Ownership passes to the registry on registration.
pub type SharedMacro = Arc<dyn Macro>;

/// Returns whether two handles point at the same macro instance.
#[must_use]
pub fn is_same_macro(left: &SharedMacro, right: &SharedMacro) -> bool {
    Arc::ptr_eq(left, right)
}
