//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the fetcher and probe ports plus the
/// scratch directory.
pub type AppState = Arc<AxumContext>;
