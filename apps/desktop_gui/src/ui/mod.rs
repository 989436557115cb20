//! UI layer for the desktop GUI: app shell and task list rendering.

pub mod app;

pub use app::TaskListApp;
