//! End-to-end fixture synchronization
//!
//! Copies the generated package tree into the browser-test fixture
//! directory, then installs each package into the local dependency cache so
//! integration tests can import the packages by name without a publish step.
//! Only runs when the fixture step is enabled in the configuration.

use crate::{
    config::Config,
    error::{PackagerError, Result},
    utils::fs::FileSystemUtils,
};
use std::fs;
use tracing::{debug, info, instrument};

/// Synchronizes generated packages into test fixtures
pub struct FixtureSynchronizer {
    config: Config,
    fs_utils: FileSystemUtils,
}

impl FixtureSynchronizer {
    /// Create a new fixture synchronizer
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Copy the package tree into the fixture directory and install every
    /// package into the dependency cache. Returns the number of packages
    /// installed.
    #[instrument(skip(self))]
    pub fn sync(&self) -> Result<usize> {
        let packages_dir = self.config.packages_dir();
        let fixture_dir = self.config.root_dir.join(&self.config.fixtures.fixture_dir);
        let modules_dir = self.config.root_dir.join(&self.config.fixtures.modules_dir);

        info!(
            "Syncing packages into fixtures: {}",
            fixture_dir.display()
        );
        self.fs_utils
            .copy_dir(&packages_dir, &fixture_dir)
            .map_err(|e| {
                PackagerError::fixture(
                    format!("Failed to copy packages into fixtures: {e}"),
                    fixture_dir.clone(),
                )
            })?;

        let mut installed = 0;
        let entries = fs::read_dir(&packages_dir)
            .map_err(|e| PackagerError::file_system("read", packages_dir.clone(), e))?;
        for entry in entries {
            let entry =
                entry.map_err(|e| PackagerError::file_system("read", packages_dir.clone(), e))?;
            let target = modules_dir.join(entry.file_name());

            debug!(
                "Installing {} -> {}",
                entry.path().display(),
                target.display()
            );
            self.fs_utils
                .copy_dir(&entry.path(), &target)
                .map_err(|e| {
                    PackagerError::fixture(
                        format!("Failed to install package into dependency cache: {e}"),
                        target.clone(),
                    )
                })?;
            installed += 1;
        }

        info!("Installed {} package(s) into the dependency cache", installed);
        Ok(installed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_config(root: &Path) -> Config {
        Config {
            root_dir: root.to_path_buf(),
            library: LibraryConfig {
                name: "vuetify-lib-test-lib".to_string(),
                ..LibraryConfig::default()
            },
            ..Config::default()
        }
    }

    fn write_fake_packages(config: &Config) {
        for pkg in ["vuetify-lib-test-lib", "vuetify-lib-test-lib.home-icon"] {
            let dir = config.packages_dir().join(pkg).join("cjs");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("index.js"), "module.exports = {};").unwrap();
        }
    }

    #[test]
    fn test_sync_copies_fixtures_and_installs_packages() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());
        write_fake_packages(&config);

        let synced = FixtureSynchronizer::new(&config).sync().unwrap();
        assert_eq!(synced, 2);

        let fixture_dir = temp_dir.path().join("tests/e2e/fixtures/public/packages");
        assert!(
            fixture_dir
                .join("vuetify-lib-test-lib.home-icon")
                .join("cjs")
                .join("index.js")
                .exists()
        );

        let modules_dir = temp_dir.path().join("node_modules");
        assert!(
            modules_dir
                .join("vuetify-lib-test-lib")
                .join("cjs")
                .join("index.js")
                .exists()
        );
        assert!(
            modules_dir
                .join("vuetify-lib-test-lib.home-icon")
                .join("cjs")
                .join("index.js")
                .exists()
        );
    }

    #[test]
    fn test_sync_fails_without_packages_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());

        let result = FixtureSynchronizer::new(&config).sync();
        assert!(result.is_err());
    }
}
