//! The project file and the per-project window layout persisted with it.

mod layout;
#[allow(clippy::module_inception)]
mod project;

pub use layout::{WindowSnapshot, WorkspaceLayout};
pub use project::{Project, PROJECT_EXTENSION};
