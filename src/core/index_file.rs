//! Aggregation entry file generation
//!
//! Regenerates the library's `src/index.js` so it re-exports every
//! discovered component and registers them all through a plugin-style
//! default export. Runs before the library-wide build so the main bundle
//! always reflects the current component set.

use crate::config::Config;
use crate::error::{PackagerError, Result};
use crate::utils::fs::FileSystemUtils;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Generates the aggregation entry file
pub struct IndexFileGenerator {
    path: PathBuf,
    extension: String,
}

impl IndexFileGenerator {
    /// Create a generator writing to the given path
    pub fn new(path: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            path,
            extension: extension.into(),
        }
    }

    /// Create a generator from the pipeline configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.index_file_path(),
            config.library.component_extension.clone(),
        )
    }

    /// Render the aggregation file contents for the given components
    pub fn render(&self, components: &[String]) -> String {
        let mut out = String::new();

        out.push_str("// This file is regenerated before every build. Do not edit by hand.\n");
        for name in components {
            let _ = writeln!(out, "import {name} from \"./{name}.{}\";", self.extension);
        }

        let _ = writeln!(out, "\nexport {{ {} }};", components.join(", "));

        out.push_str("\nexport default {\n  install(app) {\n");
        for name in components {
            let _ = writeln!(out, "    app.component(\"{name}\", {name});");
        }
        out.push_str("  },\n};\n");

        out
    }

    /// Write the aggregation file, replacing any previous contents
    #[instrument(skip(self, components))]
    pub fn generate(&self, components: &[String]) -> Result<()> {
        info!("Updating aggregation file: {}", self.path.display());

        let contents = self.render(components);
        FileSystemUtils::new()
            .write_file(&self.path, contents)
            .map_err(|e| PackagerError::file_system("write", self.path.clone(), e))
    }
}
