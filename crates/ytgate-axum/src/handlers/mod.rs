//! HTTP request handlers for the web adapter.
//!
//! Each submodule covers one API area. Handlers are thin wrappers that
//! validate input and delegate to the `MediaFetcher`/`ToolProbe` ports.

pub mod download;
pub mod health;
pub mod info;
