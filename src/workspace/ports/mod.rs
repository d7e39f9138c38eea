//! Port contracts for reading workspace state.

mod app_context;

pub use app_context::{AppContext, AppContextError, AppContextResult};
