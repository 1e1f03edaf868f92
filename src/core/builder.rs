//! Bundler invocation
//!
//! Shells out to the external bundler CLI once for the whole library and
//! once per component. Each invocation blocks until the bundler exits; a
//! non-zero exit aborts the run. A half-built package tree is worse than an
//! aborted one, so there is no partial-failure recovery.

use crate::{
    config::Config,
    error::{PackagerError, Result},
    utils::process::ProcessRunner,
};
use tracing::{debug, info, instrument};

/// Invokes the bundler CLI for library and component builds
pub struct BundleBuilder {
    config: Config,
    process_runner: ProcessRunner,
}

impl BundleBuilder {
    /// Create a new bundle builder with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Build the whole library from the aggregation entry file
    #[instrument(skip(self))]
    pub fn build_library(&self) -> Result<()> {
        info!("Building main library");
        self.build_entry(None)
    }

    /// Build a single component from its source file
    #[instrument(skip(self))]
    pub fn build_component(&self, name: &str) -> Result<()> {
        info!("Building {}", name);
        self.build_entry(Some(name))
    }

    fn build_entry(&self, component: Option<&str>) -> Result<()> {
        let command = self.config.bundler_command();
        self.check_bundler_available(&command)?;

        let command_str = command.to_string_lossy().into_owned();
        let entry = self.config.bundler_entry(component);
        let entry_str = entry.to_string_lossy().into_owned();
        let dest = self.config.bundler_dest(component);
        let dest_str = dest.to_string_lossy().into_owned();

        let args = [
            "build",
            entry_str.as_str(),
            "--target",
            self.config.bundler.target.as_str(),
            "--name",
            self.config.bundler.bundle_name.as_str(),
            "--dest",
            dest_str.as_str(),
        ];

        debug!(
            "Invoking bundler for entry {} -> {}",
            entry.display(),
            dest.display()
        );

        self.process_runner
            .run_command_in(&self.config.root_dir, &command_str, &args)
            .map_err(|e| match e {
                err @ PackagerError::Process { .. } => err,
                other => PackagerError::build(format!("Bundler invocation failed: {other}")),
            })
    }

    /// Fail up front when the bundler executable cannot be found, instead of
    /// surfacing a confusing spawn error mid-pipeline
    fn check_bundler_available(&self, command: &std::path::Path) -> Result<()> {
        // Paths are checked on disk; bare names go through PATH lookup
        let available = if command.components().count() > 1 {
            command.exists()
        } else {
            self.process_runner
                .command_exists(&command.to_string_lossy())
        };

        if available {
            Ok(())
        } else {
            Err(PackagerError::build(format!(
                "Bundler not found: {}",
                command.display()
            )))
        }
    }
}
