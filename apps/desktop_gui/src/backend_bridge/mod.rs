//! Bridge between the UI thread and the tokio worker owning the HTTP client.

pub mod commands;
pub mod runtime;
