//! Configuration management for the component packager
//!
//! Centralizes configuration options and provides validation. The end-to-end
//! fixture flag is read from the environment exactly once, here, and carried
//! as plain configuration from then on.

use crate::{cli::Args, error::PackagerError, utils::env::EnvUtils, utils::naming};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that enables the end-to-end fixture sync step
pub const E2E_ENV_VAR: &str = "VUE_APP_E2E";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Root directory of the library project
    pub root_dir: PathBuf,
    /// Library configuration
    pub library: LibraryConfig,
    /// Bundler invocation configuration
    pub bundler: BundlerConfig,
    /// Package output configuration
    pub packages: PackageConfig,
    /// End-to-end fixture configuration
    pub fixtures: FixtureConfig,
}

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library name, taken from the project manifest
    pub name: String,
    /// Component source directory, relative to the root
    pub source_dir: PathBuf,
    /// File extension of buildable components
    pub component_extension: String,
    /// Name of the aggregation entry file inside the source directory
    pub index_file: String,
    /// Regenerate the aggregation file before building
    pub regenerate_index: bool,
}

/// Bundler invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Bundler executable, relative to the root unless absolute or a bare name
    pub command: PathBuf,
    /// Build target passed to the bundler
    pub target: String,
    /// Bundle name passed to the bundler; emitted files are `<name>.<kind>.js`
    pub bundle_name: String,
    /// Temporary output directory, relative to the root
    pub dist_dir: PathBuf,
}

/// Package output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Output root for generated packages, relative to the root
    pub output_dir: PathBuf,
    /// Pattern matching unit-test files excluded from source snapshots
    pub unit_test_pattern: String,
    /// Pattern matching entries excluded from nested nickname copies
    pub nested_exclude_pattern: String,
}

/// End-to-end fixture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Whether the fixture sync step runs at all
    pub enabled: bool,
    /// Fixture directory consumed by browser tests, relative to the root
    pub fixture_dir: PathBuf,
    /// Local dependency cache directory, relative to the root
    pub modules_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            root_dir: PathBuf::from("."),
            library: LibraryConfig::default(),
            bundler: BundlerConfig::default(),
            packages: PackageConfig::default(),
            fixtures: FixtureConfig::default(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            source_dir: PathBuf::from("src"),
            component_extension: "vue".to_string(),
            index_file: "index.js".to_string(),
            regenerate_index: true,
        }
    }
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from("node_modules/.bin/vue-cli-service"),
            target: "lib".to_string(),
            bundle_name: "index".to_string(),
            dist_dir: PathBuf::from("dist"),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("packages"),
            unit_test_pattern: r"\.unit\.js$".to_string(),
            nested_exclude_pattern: r"^(LICENSE|README\.md|src)$".to_string(),
        }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            fixture_dir: PathBuf::from("tests/e2e/fixtures/public/packages"),
            modules_dir: PathBuf::from("node_modules"),
        }
    }
}

/// The subset of the project manifest (`package.json`) the packager needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryManifest {
    /// Library name; package directories derive from it
    pub name: String,
}

impl LibraryManifest {
    /// Load the manifest from a `package.json` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PackagerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PackagerError::config(format!(
                "Project manifest not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PackagerError::file_system("read", path.to_path_buf(), e))?;

        serde_json::from_str(&content).map_err(|e| PackagerError::Config {
            message: format!("Invalid project manifest: {}", path.display()),
            source: Some(Box::new(e)),
        })
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, PackagerError> {
        let mut config = Self {
            debug: args.debug,
            root_dir: args.root.clone(),
            ..Self::default()
        };

        // Override with command-specific options
        if let crate::cli::Command::Build { e2e, skip_index } = &args.command {
            config.fixtures.enabled = *e2e || EnvUtils::flag_enabled(E2E_ENV_VAR);
            config.library.regenerate_index = !*skip_index;
        }

        let manifest = LibraryManifest::load(config.root_dir.join("package.json"))?;
        config.library.name = manifest.name;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), PackagerError> {
        if !self.root_dir.exists() {
            return Err(PackagerError::validation(format!(
                "Project root not found: {}",
                self.root_dir.display()
            )));
        }

        if !self.source_dir().exists() {
            return Err(PackagerError::validation(format!(
                "Component source directory not found: {}",
                self.source_dir().display()
            )));
        }

        if self.library.name.is_empty() {
            return Err(PackagerError::validation(
                "Library name is empty in the project manifest",
            ));
        }

        Ok(())
    }

    /// Component source directory
    pub fn source_dir(&self) -> PathBuf {
        self.root_dir.join(&self.library.source_dir)
    }

    /// Aggregation entry file inside the source directory
    pub fn index_file_path(&self) -> PathBuf {
        self.source_dir().join(&self.library.index_file)
    }

    /// Bundler output directory for the library or a single component
    pub fn dist_dir(&self, component: Option<&str>) -> PathBuf {
        let dist = self.root_dir.join(&self.bundler.dist_dir);
        match component {
            Some(name) => dist.join(name),
            None => dist,
        }
    }

    /// Output root holding every generated package
    pub fn packages_dir(&self) -> PathBuf {
        self.root_dir.join(&self.packages.output_dir)
    }

    /// Directory of one generated package
    pub fn package_dir(&self, component: Option<&str>) -> PathBuf {
        self.packages_dir()
            .join(naming::package_dir_name(&self.library.name, component))
    }

    /// Source file name of a component
    pub fn component_file_name(&self, name: &str) -> String {
        format!("{name}.{}", self.library.component_extension)
    }

    /// Bundler entry point argument, relative to the root (the bundler runs
    /// with the project root as working directory)
    pub fn bundler_entry(&self, component: Option<&str>) -> PathBuf {
        match component {
            Some(name) => self
                .library
                .source_dir
                .join(self.component_file_name(name)),
            None => self.library.source_dir.join(&self.library.index_file),
        }
    }

    /// Bundler destination argument, relative to the root
    pub fn bundler_dest(&self, component: Option<&str>) -> PathBuf {
        match component {
            Some(name) => self.bundler.dist_dir.join(name),
            None => self.bundler.dist_dir.clone(),
        }
    }

    /// Resolved bundler executable: project-relative paths are anchored at
    /// the root, bare names are left for PATH lookup
    pub fn bundler_command(&self) -> PathBuf {
        let command = &self.bundler.command;
        if command.is_relative() && command.components().count() > 1 {
            self.root_dir.join(command)
        } else {
            command.clone()
        }
    }
}
