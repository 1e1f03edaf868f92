//! The packaging pipeline
//!
//! A single linear pass: regenerate the aggregation file, wipe the output
//! root, then build, relocate, and scaffold the main package followed by
//! every component in discovery order, with an optional fixture sync at the
//! end. Every step is fatal on failure; the recovery model is re-running
//! from the wiped output root, not resuming.

use crate::{
    config::Config,
    core::{
        builder::BundleBuilder, components::ComponentDiscovery, fixtures::FixtureSynchronizer,
        index_file::IndexFileGenerator, relocate::RelocationPlan, scaffold::PackageScaffolder,
    },
    error::{PackagerError, Result},
    utils::fs::FileSystemUtils,
};
use tracing::{info, instrument};

/// Runs the whole packaging pipeline
pub struct Pipeline {
    config: Config,
    builder: BundleBuilder,
    scaffolder: PackageScaffolder,
    fs_utils: FileSystemUtils,
}

/// Counters describing one finished pipeline run
#[derive(Debug, Default)]
pub struct PipelineSummary {
    /// Number of packages written (components plus the main package)
    pub packages: usize,
    /// Number of bundles relocated across all packages
    pub bundles: usize,
    /// Component names in the order they were processed
    pub components: Vec<String>,
    /// Whether the fixture sync step ran
    pub fixtures_synced: bool,
}

impl std::fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Packaged {} package(s), {} bundle(s), components: {}{}",
            self.packages,
            self.bundles,
            self.components.join(", "),
            if self.fixtures_synced {
                " (fixtures synced)"
            } else {
                ""
            }
        )
    }
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let scaffolder = PackageScaffolder::new(&config)?;
        let builder = BundleBuilder::new(config.clone());

        Ok(Self {
            builder,
            scaffolder,
            fs_utils: FileSystemUtils::new(),
            config,
        })
    }

    /// Run the pipeline to completion
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<PipelineSummary> {
        let components = ComponentDiscovery::from_config(&self.config).discover()?;
        info!(
            "Discovered {} component(s): {:?}",
            components.len(),
            components
        );

        if self.config.library.regenerate_index {
            IndexFileGenerator::from_config(&self.config).generate(&components)?;
        }

        let packages_dir = self.config.packages_dir();
        self.fs_utils
            .empty_dir(&packages_dir)
            .map_err(|e| PackagerError::file_system("empty", packages_dir.clone(), e))?;

        let mut bundles = 0;

        self.builder.build_library()?;
        bundles += RelocationPlan::for_package(&self.config, None).execute(&self.fs_utils)?;
        self.scaffolder.scaffold(None)?;

        for name in &components {
            self.builder.build_component(name)?;
            bundles +=
                RelocationPlan::for_package(&self.config, Some(name)).execute(&self.fs_utils)?;
            self.scaffolder.scaffold(Some(name))?;
        }

        let fixtures_synced = if self.config.fixtures.enabled {
            FixtureSynchronizer::new(&self.config).sync()?;
            true
        } else {
            false
        };

        Ok(PipelineSummary {
            packages: components.len() + 1,
            bundles,
            components,
            fixtures_synced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = PipelineSummary {
            packages: 3,
            bundles: 9,
            components: vec!["ExampleCard".to_string(), "HomeIcon".to_string()],
            fixtures_synced: false,
        };

        let rendered = summary.to_string();
        assert!(rendered.contains("3 package(s)"));
        assert!(rendered.contains("9 bundle(s)"));
        assert!(rendered.contains("ExampleCard, HomeIcon"));
        assert!(!rendered.contains("fixtures"));
    }

    #[test]
    fn test_summary_display_with_fixtures() {
        let summary = PipelineSummary {
            packages: 2,
            bundles: 6,
            components: vec!["HomeIcon".to_string()],
            fixtures_synced: true,
        };

        assert!(summary.to_string().contains("(fixtures synced)"));
    }
}
