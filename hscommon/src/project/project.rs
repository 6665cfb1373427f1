use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CommonError;
use crate::project::layout::WorkspaceLayout;

pub const PROJECT_EXTENSION: &str = "hsp";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Archives the game mounts alongside the project tree. Opaque to the
    /// toolset; listed so the launcher can pass them through.
    #[serde(default)]
    pub auxiliary_mpq_paths: Vec<PathBuf>,
    #[serde(default)]
    pub layout: WorkspaceLayout,
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            author: String::new(),
            auxiliary_mpq_paths: Vec::new(),
            layout: WorkspaceLayout::default(),
            file_path: None,
        }
    }

    pub fn load(json: &str) -> Result<Self, CommonError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self) -> Result<String, CommonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, CommonError> {
        let json = fs::read_to_string(path)?;
        let mut project = Self::load(&json)?;
        project.file_path = Some(path.to_path_buf());
        Ok(project)
    }

    pub fn save_file(&mut self, path: &Path) -> Result<(), CommonError> {
        fs::write(path, self.save()?)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// The directory the project explorer browses.
    pub fn root_dir(&self) -> Option<&Path> {
        self.file_path.as_deref().and_then(Path::parent)
    }
}
