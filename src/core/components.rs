//! Component discovery
//!
//! Enumerates buildable component source files in the library source
//! directory. Each `*.vue` file directly under the directory is one
//! buildable unit; its file stem is the component name.

use crate::config::Config;
use crate::error::{PackagerError, Result};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Discovers buildable components in a source directory
pub struct ComponentDiscovery {
    source_dir: PathBuf,
    extension: String,
}

impl ComponentDiscovery {
    /// Create a discovery for the given directory and component extension
    pub fn new(source_dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            source_dir,
            extension: extension.into(),
        }
    }

    /// Create a discovery from the pipeline configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.source_dir(),
            config.library.component_extension.clone(),
        )
    }

    /// Enumerate component names, sorted for deterministic runs.
    ///
    /// An empty result is an error: every downstream step would produce a
    /// useless empty tree, so a library without components is treated as a
    /// broken source directory rather than an empty run.
    #[instrument(skip(self))]
    pub fn discover(&self) -> Result<Vec<String>> {
        let pattern = self
            .source_dir
            .join(format!("*.{}", self.extension))
            .to_string_lossy()
            .into_owned();

        debug!("Discovering components with pattern: {}", pattern);

        let paths = glob::glob(&pattern).map_err(|e| PackagerError::Discovery {
            message: format!("Invalid discovery pattern: {pattern}"),
            path: self.source_dir.clone(),
            source: Some(Box::new(e)),
        })?;

        let mut names = Vec::new();
        for path_result in paths {
            match path_result {
                Ok(path) => {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        debug!("Found component source: {}", path.display());
                        names.push(stem.to_string());
                    }
                }
                Err(e) => warn!("Error reading component source path: {}", e),
            }
        }

        names.sort();

        if names.is_empty() {
            return Err(PackagerError::discovery(
                format!(
                    "No *.{} component sources found in {}",
                    self.extension,
                    self.source_dir.display()
                ),
                &self.source_dir,
            ));
        }

        debug!("Discovered {} component(s): {:?}", names.len(), names);
        Ok(names)
    }
}
