//! Package scaffolding
//!
//! Fills each package directory with everything beyond the relocated
//! bundles: a source snapshot (unit tests excluded), a re-export stub as the
//! package entry point, and for component packages a nested nickname
//! directory under the main package. The nickname directory re-exports from
//! the main package's source copy, so the component is importable both as
//! `<library>.<kebab-name>` and `<library>/<ComponentName>` without
//! duplicating source.

use crate::{
    config::Config,
    error::{PackagerError, Result},
    utils::fs::FileSystemUtils,
};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Scaffolds generated package directories
pub struct PackageScaffolder {
    config: Config,
    fs_utils: FileSystemUtils,
    /// Matches unit-test files excluded from source snapshots
    unit_test_re: Regex,
    /// Matches entry names excluded from nested nickname copies
    nested_exclude_re: Regex,
}

impl PackageScaffolder {
    /// Create a scaffolder, compiling the exclusion patterns from the
    /// configuration
    pub fn new(config: &Config) -> Result<Self> {
        let unit_test_re = Regex::new(&config.packages.unit_test_pattern)
            .map_err(|e| PackagerError::config(format!("Invalid unit-test pattern: {e}")))?;
        let nested_exclude_re = Regex::new(&config.packages.nested_exclude_pattern)
            .map_err(|e| PackagerError::config(format!("Invalid nested-exclude pattern: {e}")))?;

        Ok(Self {
            config: config.clone(),
            fs_utils: FileSystemUtils::new(),
            unit_test_re,
            nested_exclude_re,
        })
    }

    /// Scaffold the main package (`component` is `None`) or a component
    /// package. Runs after relocation, so nested copies pick up the
    /// relocated bundle folders.
    #[instrument(skip(self))]
    pub fn scaffold(&self, component: Option<&str>) -> Result<()> {
        let package_dir = self.config.package_dir(component);

        self.fs_utils
            .create_dir_all(&package_dir)
            .map_err(|e| PackagerError::file_system("create", package_dir.clone(), e))?;

        let source_dir = self.config.source_dir();
        let src_copy = package_dir.join("src");
        let copied = self
            .fs_utils
            .copy_dir_filtered(&source_dir, &src_copy, &|path| !self.is_unit_test(path))
            .map_err(|e| PackagerError::file_system("copy", source_dir.clone(), e))?;
        debug!(
            "Copied {} source file(s) into {}",
            copied,
            src_copy.display()
        );

        let stub_path = package_dir.join("index.js");
        self.fs_utils
            .write_file(&stub_path, self.stub_contents(component))
            .map_err(|e| PackagerError::file_system("write", stub_path, e))?;

        if let Some(name) = component {
            self.scaffold_nested(name)?;
        }

        Ok(())
    }

    /// Create the nickname directory under the main package: a copy of the
    /// component package minus license, readme, and source snapshot, with a
    /// stub pointing at the main package's sibling source copy
    fn scaffold_nested(&self, name: &str) -> Result<()> {
        let component_pkg = self.config.package_dir(Some(name));
        let nested_dir = self.nested_dir(name);

        debug!(
            "Scaffolding nickname directory {} from {}",
            nested_dir.display(),
            component_pkg.display()
        );

        self.fs_utils
            .copy_dir_filtered(&component_pkg, &nested_dir, &|path| {
                !self.is_nested_excluded(path)
            })
            .map_err(|e| PackagerError::scaffold(
                format!("Failed to copy package into nickname directory: {e}"),
                nested_dir.clone(),
            ))?;

        let stub_path = nested_dir.join("index.js");
        self.fs_utils
            .write_file(&stub_path, self.nested_stub_contents(name))
            .map_err(|e| PackagerError::file_system("write", stub_path, e))?;

        Ok(())
    }

    /// Nickname directory of a component inside the main package
    pub fn nested_dir(&self, name: &str) -> PathBuf {
        self.config
            .packages_dir()
            .join(&self.config.library.name)
            .join(name)
    }

    /// Entry-point stub: re-exports the copied source tree, or the single
    /// component's source file for component packages
    pub fn stub_contents(&self, component: Option<&str>) -> String {
        match component {
            Some(name) => format!(
                "export * from './src/{}'\n",
                self.config.component_file_name(name)
            ),
            None => "export * from './src'\n".to_string(),
        }
    }

    /// Nickname stub: re-exports the sibling source copy of the main
    /// package, so both import paths resolve to the same file
    pub fn nested_stub_contents(&self, name: &str) -> String {
        format!(
            "export * from '../src/{}'\n",
            self.config.component_file_name(name)
        )
    }

    /// Human-readable scaffold steps for the plan output
    pub fn describe(&self, component: Option<&str>) -> Vec<String> {
        let package_dir = self.config.package_dir(component);
        let mut lines = vec![
            format!(
                "copy {} -> {} (excluding unit tests)",
                self.config.source_dir().display(),
                package_dir.join("src").display()
            ),
            format!("write {}", package_dir.join("index.js").display()),
        ];

        if let Some(name) = component {
            let nested_dir = self.nested_dir(name);
            lines.push(format!(
                "copy {} -> {}",
                package_dir.display(),
                nested_dir.display()
            ));
            lines.push(format!("write {}", nested_dir.join("index.js").display()));
        }

        lines
    }

    fn is_unit_test(&self, path: &Path) -> bool {
        self.unit_test_re.is_match(&path.to_string_lossy())
    }

    fn is_nested_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.nested_exclude_re.is_match(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use std::fs;
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

    fn write_source_tree(config: &Config) {
        let src = config.source_dir();
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("HomeIcon.vue"), "<template/>").unwrap();
        fs::write(src.join("HomeIcon.unit.js"), "test").unwrap();
        fs::write(src.join("index.js"), "export {}").unwrap();
    }

    #[test]
    fn test_scaffold_main_package() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());
        write_source_tree(&config);

        let scaffolder = PackageScaffolder::new(&config).unwrap();
        scaffolder.scaffold(None).unwrap();

        let pkg = config.package_dir(None);
        assert!(pkg.join("src").join("HomeIcon.vue").exists());
        assert!(pkg.join("src").join("index.js").exists());
        assert!(!pkg.join("src").join("HomeIcon.unit.js").exists());
        assert_eq!(
            fs::read_to_string(pkg.join("index.js")).unwrap(),
            "export * from './src'\n"
        );
    }

    #[test]
    fn test_scaffold_component_package_with_nickname() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());
        write_source_tree(&config);

        // Pretend relocation already filled the package with bundle folders,
        // and give it a license and readme the nickname copy must skip
        let pkg = config.package_dir(Some("HomeIcon"));
        fs::create_dir_all(pkg.join("cjs")).unwrap();
        fs::write(pkg.join("cjs").join("index.js"), "bundle").unwrap();
        fs::write(pkg.join("LICENSE"), "MIT").unwrap();
        fs::write(pkg.join("README.md"), "readme").unwrap();

        let scaffolder = PackageScaffolder::new(&config).unwrap();
        scaffolder.scaffold(Some("HomeIcon")).unwrap();

        assert_eq!(
            fs::read_to_string(pkg.join("index.js")).unwrap(),
            "export * from './src/HomeIcon.vue'\n"
        );

        let nested = scaffolder.nested_dir("HomeIcon");
        assert_eq!(
            nested,
            config
                .packages_dir()
                .join("vuetify-lib-test-lib")
                .join("HomeIcon")
        );
        assert!(nested.join("cjs").join("index.js").exists());
        assert!(!nested.join("LICENSE").exists());
        assert!(!nested.join("README.md").exists());
        assert!(!nested.join("src").exists());
        assert_eq!(
            fs::read_to_string(nested.join("index.js")).unwrap(),
            "export * from '../src/HomeIcon.vue'\n"
        );
    }

    #[test]
    fn test_stub_targets_share_the_source_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());
        let scaffolder = PackageScaffolder::new(&config).unwrap();

        // Standalone stub lives in <pkg>/, nickname stub in
        // <main>/<Name>/; resolved against their locations both must name
        // a src copy of the same file
        let standalone = scaffolder.stub_contents(Some("HomeIcon"));
        let nested = scaffolder.nested_stub_contents("HomeIcon");

        assert!(standalone.contains("src/HomeIcon.vue"));
        assert!(nested.contains("src/HomeIcon.vue"));
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = create_test_config(temp_dir.path());
        config.packages.unit_test_pattern = "([unclosed".to_string();

        let result = PackageScaffolder::new(&config);
        assert!(matches!(result, Err(PackagerError::Config { .. })));
    }

    #[test]
    fn test_describe_lists_nested_steps_for_components() {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config(temp_dir.path());
        let scaffolder = PackageScaffolder::new(&config).unwrap();

        assert_eq!(scaffolder.describe(None).len(), 2);
        let lines = scaffolder.describe(Some("HomeIcon"));
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("vuetify-lib-test-lib/HomeIcon"));
    }
}
